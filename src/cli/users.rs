use std::io::Write;

use clap::{Args, Subcommand};
use serde_json::json;

use crate::application::AuthService;
use crate::domain::role::Role;
use crate::domain::user::NewUser;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::infrastructure::DieselUserRepository;
use crate::view::Capability;

use super::Context;

#[derive(Debug, Args)]
pub(crate) struct UsersCommand {
    #[command(subcommand)]
    command: UsersSubcommand,
}

#[derive(Debug, Subcommand)]
enum UsersSubcommand {
    /// Register an account; the password is stored hashed
    Add(AddUserArgs),
}

#[derive(Debug, Args)]
struct AddUserArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    surname: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    password: String,

    #[arg(long, default_value = "client")]
    role: Role,
}

pub(crate) fn run(
    ctx: &Context,
    pool: &DbPool,
    command: UsersCommand,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command.command {
        UsersSubcommand::Add(args) => {
            ctx.require(Capability::ManageUsers)?;

            let auth = AuthService::new(DieselUserRepository::new(pool.clone()));
            let email = args.email.clone();
            let id = auth.register(NewUser {
                name: args.name,
                surname: args.surname,
                email: args.email,
                password: args.password,
                role: args.role,
            })?;

            if ctx.json {
                return ctx.write_json(out, &json!({ "id": id, "email": email }));
            }
            writeln!(out, "User {email} registered (id {id})")?;
        }
    }
    Ok(())
}

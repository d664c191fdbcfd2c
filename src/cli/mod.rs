//! Command-line front end: signs in, runs one command and renders the result.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::application::AuthService;
use crate::db::create_pool;
use crate::domain::errors::DomainError;
use crate::domain::product::{find_reference, Reference};
use crate::domain::role::Role;
use crate::domain::user::Session;
use crate::errors::AppError;
use crate::images::{ImageStore, DEFAULT_IMAGE_DIR};
use crate::infrastructure::DieselUserRepository;
use crate::view::criteria::selection;
use crate::view::Capability;

mod db;
mod lookups;
mod orders;
mod products;
mod render;
mod users;

#[derive(Debug, Parser)]
#[command(name = "shop", about = "Shoe shop inventory and orders", long_about = None)]
pub struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Directory product images are copied into
    #[arg(long, env = "PRODUCT_IMAGE_DIR", default_value = DEFAULT_IMAGE_DIR)]
    image_dir: PathBuf,

    /// Role to sign in as; guests need no credentials
    #[arg(long, env = "SHOP_ROLE", default_value = "guest")]
    role: Role,

    #[arg(long, env = "SHOP_EMAIL")]
    email: Option<String>,

    #[arg(long, env = "SHOP_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Products(products::ProductsCommand),
    Orders(orders::OrdersCommand),
    Lookups(lookups::LookupsArgs),
    Users(users::UsersCommand),
    Db(db::DbCommand),
    /// Show who the current credentials sign in as
    Whoami,
}

/// Everything a command needs once the session is established.
pub(crate) struct Context {
    pub(crate) session: Session,
    pub(crate) images: ImageStore,
    pub(crate) json: bool,
}

impl Context {
    pub(crate) fn require(&self, capability: Capability) -> Result<(), AppError> {
        require(&self.session, capability)
    }

    pub(crate) fn write_json<T: Serialize + ?Sized>(
        &self,
        out: &mut dyn Write,
        value: &T,
    ) -> Result<(), AppError> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
        Ok(())
    }
}

impl Cli {
    pub fn run(self, out: &mut dyn Write) -> Result<(), AppError> {
        let pool = create_pool(&self.database_url).map_err(DomainError::from)?;

        if let Commands::Db(command) = self.command {
            return db::run(&pool, command, out);
        }

        let auth = AuthService::new(DieselUserRepository::new(pool.clone()));
        let session = match self.role {
            Role::Guest => auth.guest(),
            role => auth.login(
                role,
                self.email.as_deref().unwrap_or_default(),
                self.password.as_deref().unwrap_or_default(),
            )?,
        };
        log::debug!("session: {} ({})", session.display_name, session.role);

        let ctx = Context {
            session,
            images: ImageStore::new(self.image_dir),
            json: self.json,
        };

        match self.command {
            Commands::Products(command) => products::run(&ctx, &pool, command, out),
            Commands::Orders(command) => orders::run(&ctx, &pool, command, out),
            Commands::Lookups(args) => lookups::run(&ctx, &pool, args, out),
            Commands::Users(command) => users::run(&ctx, &pool, command, out),
            Commands::Whoami => {
                if ctx.json {
                    ctx.write_json(out, &ctx.session)
                } else {
                    render::write_session(out, &ctx.session)?;
                    Ok(())
                }
            }
            Commands::Db(_) => Ok(()),
        }
    }
}

fn require(session: &Session, capability: Capability) -> Result<(), AppError> {
    if session.role.view_schema().allows(capability) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "the {} role does not allow {capability:?}",
            session.role
        )))
    }
}

/// Resolves a reference typed by name. Blank, `all` and unknown names are no selection.
pub(crate) fn resolve(references: &[Reference], name: &str) -> Option<i32> {
    let name = selection(name)?;
    match find_reference(references, &name) {
        Some(reference) => Some(reference.id),
        None => {
            log::warn!("no reference named '{name}'");
            None
        }
    }
}

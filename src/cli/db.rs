use std::io::Write;

use clap::{Args, Subcommand};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::run_migrations;

#[derive(Debug, Args)]
pub(crate) struct DbCommand {
    #[command(subcommand)]
    command: DbSubcommand,
}

#[derive(Debug, Subcommand)]
enum DbSubcommand {
    /// Apply pending schema migrations
    Migrate,
}

pub(crate) fn run(pool: &DbPool, command: DbCommand, out: &mut dyn Write) -> Result<(), AppError> {
    match command.command {
        DbSubcommand::Migrate => {
            let applied = run_migrations(pool)?;
            log::info!("applied {applied} migration(s)");
            writeln!(out, "Applied {applied} migration(s)")?;
        }
    }
    Ok(())
}

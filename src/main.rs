use std::io;
use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use shop_inventory::cli::Cli;
use shop_inventory::errors::AppError;

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let mut stdout = io::stdout().lock();

    match cli.run(&mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match &err {
                AppError::Internal(detail) => {
                    log::error!("{detail}");
                    eprintln!("The operation failed, see the log for details");
                }
                other => eprintln!("{other}"),
            }
            err.exit_code()
        }
    }
}

use std::process::ExitCode;

use clap::Parser;
use log::error;

use fractal_field::{CliArgs, RunExportCommand};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let command = RunExportCommand::new(CliArgs::parse());

    match command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;

use echobot_changelog::{branches::GitCli, cli::Args, generate::generate};

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = echobot_core::logging::init_stderr("echobot-changelog") {
        eprintln!("{e}");
    }

    match generate(&args, &GitCli::default(), Local::now().date_naive()) {
        Ok(version) => {
            println!("Changelog updated with {version} entry.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

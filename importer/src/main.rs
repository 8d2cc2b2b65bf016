use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use scrapbook_import::{import, Args};

fn main() -> ExitCode {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    if !args.input.is_file() {
        error!("Input file not found: {}", args.input.display());
        return ExitCode::from(2);
    }

    match import(&args.input, &args.outdir) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(1)
        }
    }
}

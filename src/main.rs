mod args;
mod lists;

use clap::Parser;
use log::{error, warn};
use snafu::ErrorCompat;

use crate::args::Args;
use crate::lists::log_level::{init_logging, LOG_LEVEL_VAR};
use crate::lists::{run_conversion, RunOptions};

fn main() {
    let args = Args::parse();

    let env_level = std::env::var(LOG_LEVEL_VAR).ok();
    if let Some(unknown) = init_logging(env_level.as_deref(), args.verbose) {
        warn!("Unknown log level {:?} in {}, using info", unknown, LOG_LEVEL_VAR);
    }

    let options = RunOptions {
        sort: args.sort,
        pretty: args.pretty,
        reference: args.reference.clone(),
        ..RunOptions::default()
    };

    if let Err(e) = run_conversion(&args.input_folder, &args.output_filename, &options) {
        error!("Error occurred {:?}", e);
        eprintln!("An error occurred {}", e);
        if let Some(bt) = ErrorCompat::backtrace(&e) {
            eprintln!("trace: {}", bt);
        }
        std::process::exit(1);
    }
}

mod cli;
mod config;
mod logging;

use std::ffi::OsString;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = config::load();
    logging::initialize(config.log_destination, config.log_level);

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let stdout = io::stdout();
    let exit = cli::run(&args, config.count_settings(), &mut stdout.lock());
    ExitCode::from(exit.code())
}

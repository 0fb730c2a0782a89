//! Shape Bounce entry point

use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    shape_bounce::cli::run(std::env::args().skip(1).collect())
}

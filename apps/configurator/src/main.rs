//! Boxcraft configurator binary.

use std::process::ExitCode;

fn main() -> ExitCode {
    match boxcraft_configurator::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("boxcraft-configurator: {}", err);
            ExitCode::FAILURE
        }
    }
}

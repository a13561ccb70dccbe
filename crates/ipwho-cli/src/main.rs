//! ipwho - geolocate your exit IP or any IP address
//!
//! Errors are printed to standard output and the process exits with status 1.

use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match ipwho_cli::run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

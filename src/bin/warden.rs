use std::process::ExitCode;

use clap::Parser;
use warden::cli::Warden;

#[tokio::main]
async fn main() -> ExitCode {
    let app = Warden::parse();
    match app.run().await {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::FAILURE
        }
    }
}

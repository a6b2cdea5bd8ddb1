use std::io;
use std::process::ExitCode;

use micro_cafe::Cafe;
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).with_writer(io::stderr).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cafe = match Cafe::builder().build() {
        Ok(cafe) => cafe,
        Err(e) => {
            error!(cause = %e, "invalid cafe config");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    match cafe.serve(stdin.lock(), stdout.lock()) {
        Ok(receipt) => {
            info!(cost = receipt.cost(), "order paid");
            ExitCode::SUCCESS
        }
        Err(e) if e.is_abandoned() => {
            warn!(cause = %e, "order abandoned");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(cause = %e, "cafe has error");
            ExitCode::FAILURE
        }
    }
}

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .compact()
        .init();
}

fn main() -> ExitCode {
    init_logging();
    slicebot_cli::run()
}

use std::error::Error;

use tracing_subscriber::EnvFilter;

use vitrine::cli::run_cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Diagnostics go to stderr so they never interleave with chat output.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    run_cli().await
}

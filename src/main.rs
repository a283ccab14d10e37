//! Bizlens HTTP server
//!
//! Starts an Axum web server that turns business-analysis requests into
//! hosted-model completions and validated JSON responses.

use std::net::SocketAddr;
use std::sync::Arc;

use bizlens::{
    cli::{Cli, Command, generate_config_template},
    config::Config,
    handlers::{self, AppState},
    telemetry,
};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if let Some(Command::Config { output }) = cli.command {
        let template = generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(&path, template)?;
                println!("Wrote configuration template to {path}");
            }
            None => println!("{template}"),
        }
        return Ok(());
    }

    // Load configuration
    let config = Arc::new(Config::from_file(&cli.config)?);

    // Initialize telemetry
    telemetry::init(&config.observability.log_level);

    tracing::info!(
        "Starting Bizlens server on {}:{}",
        config.server.host,
        config.server.port
    );

    // Build application state and router
    let state = AppState::new(config.clone())?;
    let app = handlers::router(state);

    // Create socket address
    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .unwrap_or_else(|_| std::net::IpAddr::from([0, 0, 0, 0])),
        config.server.port,
    ));

    tracing::info!("Listening on {}", addr);
    tracing::info!("Endpoint listing available at http://{}/", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

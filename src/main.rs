mod config;
mod error;
mod routes;

use std::process::ExitCode;

use leptos::prelude::get_configuration;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    ExitCode::from(exit_status(run().await))
}

/// Log a startup failure once and turn it into the process exit status.
fn exit_status(result: Result<(), ServerError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!(error = %e, "clubhouse stopped");
            1
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;

    let app = routes::app(conf.leptos_options);
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "clubhouse listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}

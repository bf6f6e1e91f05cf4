//! fontpeek server binary

use std::process::ExitCode;

use fontpeek::server::start_server;
use fontpeek::types::ServerConfig;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fontpeek=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let config = ServerConfig::from_env();
    info!(
        host = %config.host,
        port = config.port,
        fonts_dir = %config.fonts_dir.display(),
        static_dir = %config.static_dir.display(),
        "starting fontpeek server"
    );

    match start_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "server failed");
            ExitCode::FAILURE
        }
    }
}

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use tickrank_core::{BatchFetcher, FinnhubAdapter, ReqwestHttpClient};
use tickrank_web::{app, AppConfig, AppState};

#[derive(Parser, Debug)]
#[command(name = "tickrank-web", version, about = "Valuation ranking service")]
struct Cli {
    /// Listen address for the HTTP server.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tickrank_web=info,tickrank_core=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            eprintln!("error: {error}");
            return ExitCode::FAILURE;
        }
    };

    let http = Arc::new(ReqwestHttpClient::new());
    let adapter = Arc::new(FinnhubAdapter::new(http, config.finnhub_token));
    let state = AppState {
        fetcher: Arc::new(BatchFetcher::new(adapter)),
    };

    let listener = match tokio::net::TcpListener::bind(cli.bind).await {
        Ok(listener) => listener,
        Err(error) => {
            eprintln!("error: failed to bind {}: {error}", cli.bind);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(bind = %cli.bind, "tickrank listening");

    if let Err(error) = axum::serve(listener, app(state)).await {
        eprintln!("error: server terminated: {error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

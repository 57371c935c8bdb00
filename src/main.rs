use std::{process::ExitCode, sync::Arc};

use log::{error, info};
use portfolio_contact::{ContactRelay, SendMailError, mail::ArcMailPort};
use portfolio_email_lettre::LettreMailAdapter;
use portfolio_http_api::RouterError;
use thiserror::Error;

use crate::config::ServerConfig;

mod config;
mod logs;

#[derive(Debug, Error)]
enum StartupError {
    #[error("invalid mail configuration: {0}")]
    Mail(#[from] SendMailError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

fn build_relay(config: &ServerConfig) -> Result<ContactRelay, StartupError> {
    let mailer = match &config.smtp {
        Some(settings) => {
            let adapter: ArcMailPort = Arc::new(LettreMailAdapter::new(settings)?);
            Some(adapter)
        }
        None => None,
    };
    Ok(ContactRelay::new(mailer))
}

async fn run(config: ServerConfig) -> Result<(), StartupError> {
    let relay = Arc::new(build_relay(&config)?);
    let mail_configured = relay.mail_configured();
    let router = portfolio_http_api::router(relay, &config.frontend_url)?;

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    info!("Portfolio backend running on http://localhost:{}", config.port);
    info!(
        "SMTP configured: {}",
        if mail_configured {
            "Yes"
        } else {
            "No (development mode)"
        }
    );
    info!("Accepting cross-origin requests from {}", config.frontend_url);

    portfolio_http_api::serve(listener, router, shutdown_signal()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logs::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {}", e);
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Portfolio backend failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hotel_ivr::app;
use hotel_ivr::config::{AppConfig, DeploymentMode};
use hotel_ivr::services::catalog::CsvRoomCatalog;
use hotel_ivr::services::telephony::twilio::TwilioVoiceProvider;
use hotel_ivr::services::telephony::TelephonyProvider;
use hotel_ivr::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    if config.has_twilio_credentials() {
        let provider = TwilioVoiceProvider::new(
            config.twilio_account_sid.clone(),
            config.twilio_auth_token.clone(),
        );
        match provider.verify_credentials().await {
            Ok(()) => tracing::info!("Twilio credentials verified"),
            Err(e) => tracing::warn!(error = %format!("{e:#}"), "could not verify Twilio credentials"),
        }
    } else {
        tracing::warn!("TWILIO_ACCOUNT_SID/TWILIO_AUTH_TOKEN not set, skipping credential check");
    }

    let router = match config.mode {
        DeploymentMode::Hotel => {
            let catalog = CsvRoomCatalog::new(&config.rooms_csv_path);
            tracing::info!(path = %catalog.path().display(), "serving hotel IVR");
            let state = Arc::new(AppState {
                config: config.clone(),
                catalog: Box::new(catalog),
            });
            app::hotel_router(state)
        }
        DeploymentMode::Greeter => {
            tracing::info!("serving greeter line");
            app::greeter_router()
        }
    };

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

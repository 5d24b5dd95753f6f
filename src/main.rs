use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use salonbook::config::AppConfig;
use salonbook::db;
use salonbook::handlers;
use salonbook::services::catalog::Catalog;
use salonbook::services::notification::mail_api::MailApiMailer;
use salonbook::services::notification::Notifier;
use salonbook::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    let mailer = MailApiMailer::new(config.mail_api_url.clone(), config.mail_api_key.clone())?;
    let notifier = Notifier::new(Box::new(mailer), &config);

    // Bookings are still accepted without mail; they just won't notify anyone.
    match notifier.verify().await {
        Ok(()) => tracing::info!(recipient = %config.admin_email, "mail transport ready"),
        Err(e) => tracing::warn!(error = %e, "mail transport not configured, notifications will fail"),
    }

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        catalog: Catalog::builtin(),
        notifier,
    });

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!(
        default_status = config.default_booking_status.as_str(),
        "starting server on {addr}"
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

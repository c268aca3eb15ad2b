//! Requestor - Main Entry Point
//!
//! Loads settings, restores the saved session and runs the JSON-lines loop
//! over stdin/stdout. Logs go to stderr.

use tokio::io::BufReader;

use requestor::{run, start_session};
use requestor_application::{EphemeralSessionLifecycle, PersistentSessionLifecycle, SessionLifecycle};
use requestor_domain::RequestorSettings;
use requestor_infrastructure::{
    FileSessionStore, SettingsRepository, SystemClock, apply_process_env, init_tracing,
};

fn lifecycle_for(settings: &RequestorSettings) -> Box<dyn SessionLifecycle> {
    if !settings.persist_session {
        return Box::new(EphemeralSessionLifecycle);
    }

    let store = settings
        .session_file
        .clone()
        .map(FileSessionStore::new)
        .or_else(FileSessionStore::default_location);

    match store {
        Some(store) => {
            tracing::debug!(path = %store.path().display(), "session persistence enabled");
            Box::new(PersistentSessionLifecycle::new(store, SystemClock::new()))
        }
        None => {
            tracing::warn!("no config directory, session will not be saved");
            Box::new(EphemeralSessionLifecycle)
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = apply_process_env(SettingsRepository::new().load().await?);
    init_tracing(&settings.log_filter)?;
    settings.validate()?;

    tracing::info!("Starting Requestor v{}", env!("CARGO_PKG_VERSION"));

    let lifecycle = lifecycle_for(&settings);
    let session = start_session(&settings, lifecycle.as_ref()).await;

    let summary = run(
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        session,
        lifecycle.as_ref(),
    )
    .await?;

    tracing::info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        hard_navigated = summary.hard_navigated,
        "session ended"
    );
    Ok(())
}

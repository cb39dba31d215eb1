use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use timetable::build_state;
use timetable::config::AppConfig;
use timetable::provider::{ScheduleProvider, StaticScheduleProvider};
use timetable::routes::router;
use timetable::services::{Clock, FixedClock, SystemClock};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "timetable=debug".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::new_from_env()?;

    let provider: Arc<dyn ScheduleProvider> = match &config.slots_file {
        Some(path) => Arc::new(StaticScheduleProvider::from_path(path)?),
        None => Arc::new(StaticScheduleProvider::sample()?),
    };

    let clock: Arc<dyn Clock> = match config.fixed_now {
        Some(now) => {
            info!("clock pinned to {}", now);
            Arc::new(FixedClock(now))
        }
        None => Arc::new(SystemClock),
    };

    let state = build_state(&config, provider, clock);
    let app = router(state);

    info!("listening on http://{}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

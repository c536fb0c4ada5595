//! Wiring & DI. Entry point: bootstrap adapters, inject into services, run UI.
//! No business logic here; the bedtime is derived by BedtimeCalculator.

use better_rest::adapters::model::LinearSleepModel;
use better_rest::adapters::ui::tui::TuiInputPort;
use better_rest::ports::{InputPort, ModelSource};
use better_rest::shared::config::AppConfig;
use better_rest::usecases::{BedtimeCalculator, BedtimeForm, LiveBedtime};
use dotenv::dotenv;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    better_rest::adapters::ui::init_ui();

    let cfg = AppConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "config not loaded, using defaults");
        AppConfig::default()
    });

    // --- Model: coefficients from config, validated on every load ---
    let model = LinearSleepModel::new(cfg.model_coefficients_or_default());
    if let Err(e) = model.load() {
        warn!(error = %e, "prediction model will not load; bedtimes will be unavailable");
    }
    let source: Arc<dyn ModelSource> = Arc::new(model);

    // --- Calculator + off-thread worker ---
    let clock = cfg.clock_or_default();
    let seconds_per_wake_unit = cfg.seconds_per_wake_unit_or_default();
    info!(?clock, seconds_per_wake_unit, "bedtime calculator configured");
    let calculator = Arc::new(BedtimeCalculator::new(source, seconds_per_wake_unit, clock));
    let live = LiveBedtime::spawn(calculator);

    // --- Form ---
    let form = BedtimeForm::new(
        cfg.default_wake_time_or_default(),
        cfg.sleep_range_or_default(),
        cfg.coffee_range_or_default(),
    );
    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(form, live));

    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}

use std::time::{Duration, Instant};

use anyhow::Result;
use skycast_ui::{bridge, render, services, FavoritesModel, WeatherModel};

const FETCH_TIMEOUT: Duration = Duration::from_secs(15);
const POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    // Initialize core
    skycast_core::init()?;

    let (config, _validation) = skycast_core::Config::load_validated()?;

    if !bridge::initialize_weather_services(&config) {
        anyhow::bail!("Failed to initialize weather services");
    }
    bridge::init_weather_service_channel();

    tracing::info!("Skycast started");

    // First CLI argument overrides the configured city
    let city = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.weather.default_city.clone());

    let favorites = FavoritesModel::load(bridge::favorites_path(&config));
    let mut weather = WeatherModel::new(&city, bridge::unit_from_config(config.weather.unit));

    if let Some(request) = weather.refresh() {
        if !services::weather_service::dispatch(request) {
            anyhow::bail!("Weather service not wired");
        }
    }

    // Poll for the completion, then render once
    let deadline = Instant::now() + FETCH_TIMEOUT;
    while weather.loading() && Instant::now() < deadline {
        match bridge::try_recv_weather_message() {
            Some(message) => weather.apply(message),
            None => std::thread::sleep(POLL_INTERVAL),
        }
    }
    if weather.loading() {
        tracing::warn!("Timed out waiting for weather fetch");
    }

    for line in render::render_screen(&weather, &favorites) {
        println!("{line}");
    }

    Ok(())
}

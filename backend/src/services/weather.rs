//! Weather service: turns OpenWeatherMap responses into simulation inputs

use shared::models::{DailyValue, WeatherObservation};
use shared::simulation::formulas::calculate_solar_radiation;
use shared::validation::validate_temperature_range;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::weather::WeatherClient;

/// Rainy conditions contribute a fixed daily precipitation figure; the
/// current-weather endpoint reports no rainfall amount.
const RAINY_PRECIPITATION_MM: f64 = 5.0;

/// Weather service for fetching observations used by the simulator
#[derive(Clone)]
pub struct WeatherService {
    client: Option<WeatherClient>,
}

impl WeatherService {
    /// Build the service from application config. Without an API key the
    /// service stays constructed but reports the weather source unavailable.
    pub fn from_config(config: &Config) -> Self {
        let client = if config.weather.api_key.is_empty() {
            None
        } else {
            Some(WeatherClient::new(
                config.weather.api_key.clone(),
                config.weather.api_endpoint.clone(),
            ))
        };
        Self { client }
    }

    /// Fetch current conditions and derive the simulation inputs:
    /// precipitation from the textual description and solar radiation via
    /// the Hargreaves-Samani estimate.
    pub async fn current_observation(&self, lat: f64, lon: f64) -> AppResult<WeatherObservation> {
        let client = self
            .client
            .as_ref()
            .ok_or(AppError::WeatherServiceUnavailable)?;

        let data = client.get_current_weather(lat, lon).await?;

        validate_temperature_range(data.main.temp_min, data.main.temp_max)
            .map_err(|msg| AppError::ExternalService(msg.to_string()))?;

        let description = data
            .weather
            .first()
            .map(|w| w.description.clone())
            .unwrap_or_default();

        let precipitation = if description.contains("rain") {
            RAINY_PRECIPITATION_MM
        } else {
            0.0
        };

        let radiation = calculate_solar_radiation(
            data.main.temp_min,
            data.main.temp_max,
            data.sys.sunrise,
            data.sys.sunset,
        );

        tracing::debug!(
            lat,
            lon,
            temperature = data.main.temp,
            radiation,
            "fetched weather observation"
        );

        Ok(WeatherObservation {
            temperature: Some(DailyValue::Scalar(data.main.temp)),
            humidity: Some(DailyValue::Scalar(data.main.humidity)),
            precipitation: Some(DailyValue::Scalar(precipitation)),
            radiation: Some(DailyValue::Scalar(radiation)),
            description,
            country: data.sys.country,
        })
    }
}

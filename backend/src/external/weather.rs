//! Weather API client for fetching current conditions
//!
//! Integrates with the OpenWeatherMap current-weather endpoint. The raw
//! response keeps only the fields the simulation engine consumes.

use reqwest::Client;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// OpenWeatherMap API response for current weather
#[derive(Debug, Deserialize)]
pub struct OwmCurrentResponse {
    pub weather: Vec<OwmWeather>,
    pub main: OwmMain,
    pub sys: OwmSys,
}

#[derive(Debug, Deserialize)]
pub struct OwmWeather {
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct OwmMain {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
    pub humidity: f64,
}

#[derive(Debug, Deserialize)]
pub struct OwmSys {
    pub sunrise: i64,
    pub sunset: i64,
    pub country: Option<String>,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch current weather conditions by GPS coordinates
    pub async fn get_current_weather(&self, lat: f64, lon: f64) -> AppResult<OwmCurrentResponse> {
        let url = format!(
            "{}/weather?lat={}&lon={}&appid={}&units=metric",
            self.base_url, lat, lon, self.api_key
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "Weather API returned {}: {}",
                status, body
            )));
        }

        let data = response.json::<OwmCurrentResponse>().await?;
        Ok(data)
    }
}

//! HTTP adapter for a readings service.
//!
//! Expects two JSON endpoints:
//! - `GET {base_url}/locations` returning an array of location names;
//! - `GET {base_url}/readings/{month}/{location}` returning an array of
//!   `{ "day": u32, "value": f64 }` objects.

use std::env;

use reqwest::Url;

use crate::error::ProviderError;
use crate::model::{DailyReading, Month};
use crate::traits::{LocationDirectory, ReadingsProvider};

#[derive(Debug, Clone)]
pub struct HttpReadingsConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for HttpReadingsConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
        }
    }
}

impl HttpReadingsConfig {
    /// Reads `METEO_BASE_URL` and `METEO_TIMEOUT_SECS`, keeping the defaults
    /// for unset or unparsable values.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: lookup("METEO_BASE_URL").unwrap_or(defaults.base_url),
            timeout_secs: lookup("METEO_TIMEOUT_SECS")
                .and_then(|value| value.parse().ok())
                .unwrap_or(defaults.timeout_secs),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpReadingsClient {
    base_url: Url,
    client: reqwest::blocking::Client,
}

impl HttpReadingsClient {
    pub fn new(config: HttpReadingsConfig) -> Result<Self, ProviderError> {
        let base_url = Url::parse(&config.base_url).map_err(|err| {
            ProviderError::Unavailable(format!("invalid base url '{}': {}", config.base_url, err))
        })?;
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { base_url, client })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ProviderError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ProviderError::Unavailable(format!("base url '{}' cannot hold a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: Url) -> Result<T, ProviderError> {
        let body = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<T>())?;
        Ok(body)
    }
}

impl LocationDirectory for HttpReadingsClient {
    fn list_locations(&self) -> Result<Vec<String>, ProviderError> {
        let url = self.endpoint(&["locations"])?;
        self.get_json(url)
    }
}

impl ReadingsProvider for HttpReadingsClient {
    fn daily_readings(&self, location: &str, month: Month) -> Result<Vec<DailyReading>, ProviderError> {
        let month = month.number().to_string();
        let url = self.endpoint(&["readings", &month, location])?;
        self.get_json(url)
    }
}

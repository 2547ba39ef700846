//! In-memory readings source.
//!
//! Useful for tests and for datasets exported as JSON:
//!
//! ```json
//! [
//!   { "location": "Genova", "month": 2, "readings": [{ "day": 1, "value": 81.0 }] }
//! ]
//! ```

use std::collections::HashMap;
use std::io::Read;

use serde::Deserialize;

use crate::error::ProviderError;
use crate::model::{DailyReading, Month};
use crate::traits::{LocationDirectory, ReadingsProvider};

#[derive(Debug, Clone, Default)]
pub struct InMemoryReadings {
    /// Location names in insertion order.
    locations: Vec<String>,
    series: HashMap<(String, Month), Vec<DailyReading>>,
}

#[derive(Debug, Deserialize)]
struct SeriesRecord {
    location: String,
    month: Month,
    readings: Vec<DailyReading>,
}

impl InMemoryReadings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a location without any readings.
    pub fn with_location(mut self, name: &str) -> Self {
        self.add_location(name);
        self
    }

    /// Stores the readings of `name` for `month`, registering the location if needed.
    /// An earlier series for the same month is replaced.
    pub fn with_readings(mut self, name: &str, month: Month, readings: Vec<DailyReading>) -> Self {
        self.insert(name, month, readings);
        self
    }

    /// Stores consecutive values as days 1, 2, ... of `month`.
    pub fn with_values(self, name: &str, month: Month, values: &[f64]) -> Self {
        let readings = values
            .iter()
            .enumerate()
            .map(|(i, value)| DailyReading::new(i as u32 + 1, *value))
            .collect();
        self.with_readings(name, month, readings)
    }

    /// Sets the series of `name` for `month`, replacing any earlier one.
    pub fn insert(&mut self, name: &str, month: Month, mut readings: Vec<DailyReading>) {
        self.add_location(name);
        readings.sort_by_key(|reading| reading.day);
        self.series.insert((name.to_string(), month), readings);
    }

    pub fn from_json_str(json: &str) -> Result<Self, ProviderError> {
        let records: Vec<SeriesRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ProviderError> {
        let records: Vec<SeriesRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    fn from_records(records: Vec<SeriesRecord>) -> Self {
        let mut store = Self::new();
        for record in records {
            store.insert(&record.location, record.month, record.readings);
        }
        store
    }

    fn add_location(&mut self, name: &str) {
        if !self.locations.iter().any(|known| known == name) {
            self.locations.push(name.to_string());
        }
    }
}

impl LocationDirectory for InMemoryReadings {
    fn list_locations(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.locations.clone())
    }
}

impl ReadingsProvider for InMemoryReadings {
    fn daily_readings(&self, location: &str, month: Month) -> Result<Vec<DailyReading>, ProviderError> {
        if !self.locations.iter().any(|known| known == location) {
            return Err(ProviderError::UnknownLocation(location.to_string()));
        }
        Ok(self
            .series
            .get(&(location.to_string(), month))
            .cloned()
            .unwrap_or_default())
    }
}

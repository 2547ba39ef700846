//! Interfaces of the data collaborators the planner depends on.
//!
//! The planner never talks to a database or a web service directly; it asks
//! these traits for the candidate locations and their readings, and loads
//! everything it needs before a search starts.

use crate::error::ProviderError;
use crate::model::{DailyReading, Month};

/// Enumerates the candidate locations.
pub trait LocationDirectory {
    /// Location names in a stable order. The order is the enumeration order
    /// of the search and therefore decides ties between equal-cost plans.
    fn list_locations(&self) -> Result<Vec<String>, ProviderError>;
}

/// Supplies daily readings for a location and month.
pub trait ReadingsProvider {
    /// One reading per calendar day of `month`, ascending by day.
    fn daily_readings(&self, location: &str, month: Month) -> Result<Vec<DailyReading>, ProviderError>;

    /// Mean reading of `location` over `month`, or `None` when the month has no data.
    fn average_reading(&self, location: &str, month: Month) -> Result<Option<f64>, ProviderError> {
        let readings = self.daily_readings(location, month)?;
        if readings.is_empty() {
            return Ok(None);
        }
        let total: f64 = readings.iter().map(|r| r.value).sum();
        Ok(Some(total / readings.len() as f64))
    }
}

impl<T: LocationDirectory + ?Sized> LocationDirectory for &T {
    fn list_locations(&self) -> Result<Vec<String>, ProviderError> {
        (**self).list_locations()
    }
}

impl<T: ReadingsProvider + ?Sized> ReadingsProvider for &T {
    fn daily_readings(&self, location: &str, month: Month) -> Result<Vec<DailyReading>, ProviderError> {
        (**self).daily_readings(location, month)
    }

    fn average_reading(&self, location: &str, month: Month) -> Result<Option<f64>, ProviderError> {
        (**self).average_reading(location, month)
    }
}

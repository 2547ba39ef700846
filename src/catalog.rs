//! The ordered set of candidate locations and their readings for one month.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::PlannerError;
use crate::model::{Location, LocationId, Month};
use crate::traits::{LocationDirectory, ReadingsProvider};

/// Candidate locations in enumeration order, with fully materialized readings.
///
/// The catalog is read-only once built; the search only borrows it.
#[derive(Debug, Clone, Default)]
pub struct LocationCatalog {
    locations: Vec<Location>,
}

impl LocationCatalog {
    pub fn new(locations: Vec<Location>) -> Result<Self, PlannerError> {
        let mut seen = HashSet::new();
        for location in &locations {
            if !seen.insert(location.name.as_str()) {
                return Err(PlannerError::DuplicateLocation(location.name.clone()));
            }
        }
        Ok(Self { locations })
    }

    /// Lists the locations and fetches every series for `month` up front.
    ///
    /// Collaborator failures are returned as-is; nothing is retried here.
    pub fn load<D, P>(directory: &D, provider: &P, month: Month) -> Result<Self, PlannerError>
    where
        D: LocationDirectory + ?Sized,
        P: ReadingsProvider + ?Sized,
    {
        let names = directory.list_locations()?;
        Self::load_named(&names, provider, month)
    }

    /// Like [`load`](Self::load) for an already known list of names.
    pub fn load_named<P>(names: &[String], provider: &P, month: Month) -> Result<Self, PlannerError>
    where
        P: ReadingsProvider + ?Sized,
    {
        let mut locations = Vec::with_capacity(names.len());
        for name in names {
            let readings = provider.daily_readings(name, month)?;
            locations.push(Location::new(name.clone(), readings));
        }
        debug!(month = month.number(), locations = locations.len(), "catalog loaded");
        Self::new(locations)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Handles of all locations, in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        (0..self.locations.len()).map(LocationId)
    }

    pub fn location(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }

    pub fn name(&self, id: LocationId) -> &str {
        &self.locations[id.0].name
    }

    /// Looks a location up by name.
    pub fn get(&self, name: &str) -> Option<LocationId> {
        self.locations
            .iter()
            .position(|location| location.name == name)
            .map(LocationId)
    }

    /// Reading of `id` on a 1-based `day`.
    pub fn reading(&self, id: LocationId, day: u32) -> Result<f64, PlannerError> {
        let location = self.location(id);
        let index = day.checked_sub(1).map(|i| i as usize);
        match index.and_then(|i| location.readings.get(i)) {
            Some(reading) => Ok(reading.value),
            None => Err(PlannerError::MissingReading {
                location: location.name.clone(),
                day,
            }),
        }
    }

    /// Checks that every location has an aligned reading for days `1..=days`.
    pub fn ensure_covers(&self, days: usize) -> Result<(), PlannerError> {
        for location in &self.locations {
            if location.readings.len() < days {
                warn!(
                    location = %location.name,
                    readings = location.readings.len(),
                    required = days,
                    "reading series too short"
                );
                return Err(PlannerError::MissingReading {
                    location: location.name.clone(),
                    day: location.readings.len() as u32 + 1,
                });
            }
            for (i, reading) in location.readings.iter().take(days).enumerate() {
                let expected_day = i as u32 + 1;
                if reading.day != expected_day {
                    warn!(
                        location = %location.name,
                        expected_day,
                        found_day = reading.day,
                        "reading series out of alignment"
                    );
                    return Err(PlannerError::MisalignedReading {
                        location: location.name.clone(),
                        expected_day,
                        found_day: reading.day,
                    });
                }
            }
        }
        Ok(())
    }
}

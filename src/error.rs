//! Error types for the planner and its data collaborators.

use std::fmt;

/// Failure reported by a data collaborator (directory or readings source).
#[derive(Debug)]
pub enum ProviderError {
    Http(reqwest::Error),
    Json(serde_json::Error),
    UnknownLocation(String),
    Unavailable(String),
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderError::Http(err) => write!(f, "http request failed: {}", err),
            ProviderError::Json(err) => write!(f, "malformed readings document: {}", err),
            ProviderError::UnknownLocation(name) => write!(f, "unknown location '{}'", name),
            ProviderError::Unavailable(reason) => write!(f, "readings unavailable: {}", reason),
        }
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProviderError::Http(err) => Some(err),
            ProviderError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Http(err)
    }
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Json(err)
    }
}

/// Errors returned by catalog loading, cost evaluation and search.
///
/// An infeasible month is not an error: the search reports it as `Ok(None)`.
#[derive(Debug)]
pub enum PlannerError {
    Provider(ProviderError),
    InvalidMonth(u32),
    InvalidOptions(String),
    DuplicateLocation(String),
    /// The series of `location` has no reading for `day` (1-based).
    MissingReading { location: String, day: u32 },
    /// The reading stored for `expected_day` is labelled with another day.
    MisalignedReading {
        location: String,
        expected_day: u32,
        found_day: u32,
    },
    ItineraryLength { expected: usize, found: usize },
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::Provider(err) => write!(f, "data provider error: {}", err),
            PlannerError::InvalidMonth(month) => write!(f, "invalid month {} (expected 1-12)", month),
            PlannerError::InvalidOptions(reason) => write!(f, "invalid search options: {}", reason),
            PlannerError::DuplicateLocation(name) => {
                write!(f, "location '{}' appears more than once in the catalog", name)
            }
            PlannerError::MissingReading { location, day } => {
                write!(f, "no reading for '{}' on day {}", location, day)
            }
            PlannerError::MisalignedReading {
                location,
                expected_day,
                found_day,
            } => write!(
                f,
                "reading {} of '{}' is labelled day {}",
                expected_day, location, found_day
            ),
            PlannerError::ItineraryLength { expected, found } => {
                write!(f, "itinerary has {} days, expected {}", found, expected)
            }
        }
    }
}

impl std::error::Error for PlannerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlannerError::Provider(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ProviderError> for PlannerError {
    fn from(err: ProviderError) -> Self {
        PlannerError::Provider(err)
    }
}

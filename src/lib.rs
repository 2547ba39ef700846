//! meteo-planner core
//!
//! Plans a fixed-length itinerary over candidate locations, one location per
//! day, minimizing daily readings plus a penalty for every change of
//! location, under minimum-stay and maximum-total-stay constraints.

pub mod traits;
pub mod error;
pub mod model;
pub mod catalog;
pub mod constraints;
pub mod cost;
pub mod search;
pub mod planner;
pub mod memory;
pub mod http;

pub use error::{PlannerError, ProviderError};
pub use model::{DailyReading, Location, LocationId, Month, Plan};
pub use planner::Planner;
pub use search::SearchOptions;

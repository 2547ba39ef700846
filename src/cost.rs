//! Cost of a complete itinerary.

use crate::catalog::LocationCatalog;
use crate::error::PlannerError;
use crate::model::LocationId;
use crate::search::SearchOptions;

/// Scores a complete itinerary: the sum of the daily readings at the chosen
/// locations, plus a fixed penalty for every change of location.
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator {
    total_days: usize,
    change_cost: f64,
}

impl CostEvaluator {
    pub fn new(total_days: usize, change_cost: f64) -> Self {
        Self {
            total_days,
            change_cost,
        }
    }

    pub fn from_options(options: &SearchOptions) -> Self {
        Self::new(options.total_days, options.change_cost)
    }

    pub fn cost(&self, catalog: &LocationCatalog, itinerary: &[LocationId]) -> Result<f64, PlannerError> {
        if itinerary.len() != self.total_days {
            return Err(PlannerError::ItineraryLength {
                expected: self.total_days,
                found: itinerary.len(),
            });
        }

        let mut cost = 0.0;
        for (i, &id) in itinerary.iter().enumerate() {
            cost += catalog.reading(id, i as u32 + 1)?;
        }

        let changes = itinerary.windows(2).filter(|pair| pair[0] != pair[1]).count();
        cost += changes as f64 * self.change_cost;

        Ok(cost)
    }
}

impl Default for CostEvaluator {
    fn default() -> Self {
        Self::from_options(&SearchOptions::default())
    }
}

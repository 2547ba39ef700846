//! Feasibility rules for extending a partial itinerary.

use std::collections::HashMap;

use crate::model::LocationId;
use crate::search::SearchOptions;

/// Decides whether a location may be appended to a partial itinerary.
///
/// Two rules interact: a location may be used at most `max_stay` days in
/// total, and every stay must last at least `min_run` consecutive days.
#[derive(Debug, Clone, Copy)]
pub struct ConstraintChecker {
    min_run: usize,
    max_stay: usize,
}

impl ConstraintChecker {
    pub fn new(min_run: usize, max_stay: usize) -> Self {
        Self { min_run, max_stay }
    }

    pub fn from_options(options: &SearchOptions) -> Self {
        Self::new(options.min_run, options.max_stay)
    }

    pub fn can_extend(&self, partial: &[LocationId], candidate: LocationId) -> bool {
        let visits = partial.iter().filter(|&&id| id == candidate).count();
        if visits >= self.max_stay {
            return false;
        }

        let Some(&last) = partial.last() else {
            return true;
        };

        // The opening stay has no earlier stay to hand over from.
        if partial.len() < self.min_run {
            return last == candidate;
        }

        if last == candidate {
            return true;
        }

        partial[partial.len() - self.min_run..]
            .iter()
            .all(|&id| id == last)
    }

    /// Checks a finished itinerary of `days` entries against both rules.
    pub fn is_feasible(&self, itinerary: &[LocationId], days: usize) -> bool {
        if itinerary.len() != days {
            return false;
        }

        let mut counts = HashMap::new();
        for id in itinerary {
            let count = counts.entry(*id).or_insert(0usize);
            *count += 1;
            if *count > self.max_stay {
                return false;
            }
        }

        let mut run = 0;
        for (i, id) in itinerary.iter().enumerate() {
            run += 1;
            let run_ends = itinerary.get(i + 1).is_none_or(|next| next != id);
            if run_ends {
                if run < self.min_run {
                    return false;
                }
                run = 0;
            }
        }

        true
    }
}

impl Default for ConstraintChecker {
    fn default() -> Self {
        Self::from_options(&SearchOptions::default())
    }
}

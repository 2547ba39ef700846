//! Exhaustive backtracking search for the cheapest feasible itinerary.
//!
//! The search enumerates day-by-day assignments depth first, trying the
//! locations in catalog order at every day. A candidate location is only
//! appended when [`ConstraintChecker`] allows it. That check cannot see the
//! closing stay, so complete leaves are checked once more before they are
//! scored with [`CostEvaluator`]. The cheapest leaf is kept; on equal cost
//! the first leaf found wins.

use tracing::{debug, trace};

use crate::catalog::LocationCatalog;
use crate::constraints::ConstraintChecker;
use crate::cost::CostEvaluator;
use crate::error::PlannerError;
use crate::model::{LocationId, Month, Plan};

/// Length of an itinerary in days.
pub const TOTAL_DAYS: usize = 15;
/// Shortest allowed stay at one location.
pub const MIN_RUN: usize = 3;
/// Most days any one location may be used in total.
pub const MAX_STAY: usize = 6;
/// Penalty for each day-to-day change of location.
pub const CHANGE_COST: f64 = 100.0;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Number of days to plan.
    pub total_days: usize,
    /// Minimum consecutive days at a location before moving on.
    pub min_run: usize,
    /// Maximum total days at one location, consecutive or not.
    pub max_stay: usize,
    /// Cost added for every change of location.
    pub change_cost: f64,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            total_days: TOTAL_DAYS,
            min_run: MIN_RUN,
            max_stay: MAX_STAY,
            change_cost: CHANGE_COST,
        }
    }
}

impl SearchOptions {
    pub fn validate(&self) -> Result<(), PlannerError> {
        if self.total_days == 0 {
            return Err(PlannerError::InvalidOptions("total_days must be at least 1".to_string()));
        }
        if self.min_run == 0 {
            return Err(PlannerError::InvalidOptions("min_run must be at least 1".to_string()));
        }
        if !self.change_cost.is_finite() {
            return Err(PlannerError::InvalidOptions("change_cost must be finite".to_string()));
        }
        Ok(())
    }
}

/// A complete itinerary and its cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub itinerary: Vec<LocationId>,
    pub cost: f64,
}

/// Best itinerary seen so far.
///
/// Only a strictly cheaper itinerary replaces the held one, so among equal
/// costs the first one offered is kept.
#[derive(Debug, Clone, Default)]
pub struct BestPlan {
    current: Option<Candidate>,
}

impl BestPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a complete itinerary. Returns `true` if it was installed.
    pub fn offer(&mut self, itinerary: &[LocationId], cost: f64) -> bool {
        let improves = match &self.current {
            None => true,
            Some(best) => cost < best.cost,
        };
        if improves {
            self.current = Some(Candidate {
                itinerary: itinerary.to_vec(),
                cost,
            });
        }
        improves
    }

    pub fn get(&self) -> Option<&Candidate> {
        self.current.as_ref()
    }

    pub fn cost(&self) -> Option<f64> {
        self.current.as_ref().map(|best| best.cost)
    }

    pub fn into_candidate(self) -> Option<Candidate> {
        self.current
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Internal nodes (partial itineraries) expanded.
    pub nodes: u64,
    /// Feasible complete itineraries scored.
    pub leaves: u64,
    /// Times the best plan was replaced.
    pub improvements: u64,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub best: Option<Candidate>,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Resolves location handles to names.
    pub fn into_plan(self, catalog: &LocationCatalog, month: Month) -> Option<Plan> {
        self.best.map(|best| Plan {
            month,
            days: best
                .itinerary
                .iter()
                .map(|&id| catalog.name(id).to_string())
                .collect(),
            cost: best.cost,
        })
    }
}

/// Mutable state of one search run; never shared between runs.
struct SearchState {
    partial: Vec<LocationId>,
    best: BestPlan,
    stats: SearchStats,
}

/// Depth-first enumeration of every feasible itinerary over a catalog.
#[derive(Debug, Clone)]
pub struct SequenceSearch<'a> {
    catalog: &'a LocationCatalog,
    options: SearchOptions,
    checker: ConstraintChecker,
    evaluator: CostEvaluator,
}

impl<'a> SequenceSearch<'a> {
    pub fn new(catalog: &'a LocationCatalog, options: &SearchOptions) -> Self {
        Self {
            catalog,
            options: options.clone(),
            checker: ConstraintChecker::from_options(options),
            evaluator: CostEvaluator::from_options(options),
        }
    }

    /// Runs the search to completion.
    ///
    /// Fails before enumerating anything if the options are invalid or a
    /// location lacks a reading for one of the planned days. An empty
    /// catalog, or one too small to satisfy the constraints, yields an
    /// outcome without a plan.
    pub fn run(&self) -> Result<SearchOutcome, PlannerError> {
        self.options.validate()?;
        let mut state = SearchState {
            partial: Vec::with_capacity(self.options.total_days),
            best: BestPlan::new(),
            stats: SearchStats::default(),
        };

        if !self.catalog.is_empty() {
            self.catalog.ensure_covers(self.options.total_days)?;
            self.extend(&mut state)?;
        }

        debug!(
            locations = self.catalog.len(),
            nodes = state.stats.nodes,
            leaves = state.stats.leaves,
            improvements = state.stats.improvements,
            best_cost = ?state.best.cost(),
            "search finished"
        );

        Ok(SearchOutcome {
            best: state.best.into_candidate(),
            stats: state.stats,
        })
    }

    fn extend(&self, state: &mut SearchState) -> Result<(), PlannerError> {
        if state.partial.len() == self.options.total_days {
            // A switch on one of the last days leaves a closing stay that is too short.
            if !self.checker.is_feasible(&state.partial, self.options.total_days) {
                return Ok(());
            }
            let cost = self.evaluator.cost(self.catalog, &state.partial)?;
            state.stats.leaves += 1;
            if state.best.offer(&state.partial, cost) {
                state.stats.improvements += 1;
                trace!(cost, leaf = state.stats.leaves, "new best itinerary");
            }
            return Ok(());
        }

        state.stats.nodes += 1;
        for id in self.catalog.ids() {
            if self.checker.can_extend(&state.partial, id) {
                state.partial.push(id);
                self.extend(state)?;
                state.partial.pop();
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Location;

    fn catalog(values: &[(&str, f64)]) -> LocationCatalog {
        LocationCatalog::new(
            values
                .iter()
                .map(|(name, value)| Location::from_values(*name, &[*value; TOTAL_DAYS]))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_best_plan_keeps_first_on_tie() {
        let mut best = BestPlan::new();
        assert!(best.offer(&[LocationId(0)], 10.0));
        assert!(!best.offer(&[LocationId(1)], 10.0));
        assert!(!best.offer(&[LocationId(1)], 11.0));
        assert_eq!(best.get().unwrap().itinerary, vec![LocationId(0)]);
        assert!(best.offer(&[LocationId(2)], 9.5));
        assert_eq!(best.cost(), Some(9.5));
    }

    #[test]
    fn test_empty_catalog_has_no_plan() {
        let catalog = LocationCatalog::default();
        let outcome = SequenceSearch::new(&catalog, &SearchOptions::default()).run().unwrap();
        assert!(outcome.best.is_none());
        assert_eq!(outcome.stats, SearchStats::default());
    }

    #[test]
    fn test_two_locations_are_infeasible() {
        // Two locations cover at most 12 of the 15 days.
        let catalog = catalog(&[("A", 1.0), ("B", 1.0)]);
        let outcome = SequenceSearch::new(&catalog, &SearchOptions::default()).run().unwrap();
        assert!(outcome.best.is_none());
        assert!(outcome.stats.nodes > 0);
        assert_eq!(outcome.stats.leaves, 0);
    }

    #[test]
    fn test_first_leaf_wins_tie() {
        let catalog = catalog(&[("A", 10.0), ("B", 10.0), ("C", 10.0)]);
        let outcome = SequenceSearch::new(&catalog, &SearchOptions::default()).run().unwrap();
        let best = outcome.best.unwrap();

        let [a, b, c] = [LocationId(0), LocationId(1), LocationId(2)];
        let mut expected = vec![a; 6];
        expected.extend([b; 6]);
        expected.extend([c; 3]);
        assert_eq!(best.itinerary, expected);
        assert_eq!(best.cost, 350.0);
        assert_eq!(outcome.stats.improvements, 1);
    }

    #[test]
    fn test_short_series_fails_before_search() {
        let catalog = LocationCatalog::new(vec![
            Location::from_values("A", &[1.0; TOTAL_DAYS]),
            Location::from_values("B", &[1.0; 12]),
        ])
        .unwrap();
        let result = SequenceSearch::new(&catalog, &SearchOptions::default()).run();
        assert!(matches!(result, Err(PlannerError::MissingReading { day: 13, .. })));
    }

    #[test]
    fn test_options_validation() {
        let options = SearchOptions {
            min_run: 0,
            ..SearchOptions::default()
        };
        assert!(options.validate().is_err());
        assert!(SearchOptions::default().validate().is_ok());
    }
}

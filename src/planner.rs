//! Entry points used by the surrounding application.

use rayon::prelude::*;
use tracing::info;

use crate::catalog::LocationCatalog;
use crate::error::PlannerError;
use crate::model::{Month, Plan};
use crate::search::{SearchOptions, SequenceSearch};
use crate::traits::{LocationDirectory, ReadingsProvider};

/// Plans itineraries over the locations known to a directory, using the
/// readings supplied by a provider.
///
/// The location list is fetched once, when the planner is built. Readings
/// are fetched per request, before each search starts.
#[derive(Debug, Clone)]
pub struct Planner<P> {
    locations: Vec<String>,
    provider: P,
    options: SearchOptions,
}

impl<P: ReadingsProvider> Planner<P> {
    pub fn new<D>(directory: &D, provider: P, options: SearchOptions) -> Result<Self, PlannerError>
    where
        D: LocationDirectory + ?Sized,
    {
        options.validate()?;
        let locations = directory.list_locations()?;
        Ok(Self {
            locations,
            provider,
            options,
        })
    }

    /// Candidate location names, in search order.
    pub fn locations(&self) -> &[String] {
        &self.locations
    }

    /// Cheapest feasible itinerary for `month`, or `None` if no itinerary
    /// satisfies the stay constraints.
    pub fn find_optimal_itinerary(&self, month: Month) -> Result<Option<Plan>, PlannerError> {
        let catalog = LocationCatalog::load_named(&self.locations, &self.provider, month)?;
        let outcome = SequenceSearch::new(&catalog, &self.options).run()?;
        let plan = outcome.into_plan(&catalog, month);

        match &plan {
            Some(plan) => info!(month = month.number(), cost = plan.cost, "optimal itinerary found"),
            None => info!(month = month.number(), "no feasible itinerary"),
        }

        Ok(plan)
    }

    /// Mean reading of one location over `month`, as computed by the provider.
    pub fn average_reading(&self, location: &str, month: Month) -> Result<Option<f64>, PlannerError> {
        Ok(self.provider.average_reading(location, month)?)
    }

    /// Mean reading of every candidate location over `month`, in search order.
    pub fn average_readings(&self, month: Month) -> Result<Vec<(String, Option<f64>)>, PlannerError> {
        self.locations
            .iter()
            .map(|name| Ok((name.clone(), self.average_reading(name, month)?)))
            .collect()
    }
}

impl<P: ReadingsProvider + Sync> Planner<P> {
    /// Runs one independent search per month on the rayon thread pool.
    ///
    /// Each search loads its own catalog and keeps its own state, so the
    /// results are the same as calling
    /// [`find_optimal_itinerary`](Self::find_optimal_itinerary) in a loop.
    pub fn find_optimal_itineraries(&self, months: &[Month]) -> Vec<(Month, Result<Option<Plan>, PlannerError>)> {
        months
            .par_iter()
            .map(|&month| (month, self.find_optimal_itinerary(month)))
            .collect()
    }
}

//! Test fixtures for meteo-planner.
//!
//! Provides:
//! - February humidity series for three cities (28 days each)
//! - Helpers to build catalogs and check plans against the stay rules

#![allow(dead_code)]

pub mod february;

use std::collections::HashMap;

use meteo_planner::catalog::LocationCatalog;
use meteo_planner::model::{Location, LocationId, Month, Plan};
use meteo_planner::search::{MAX_STAY, MIN_RUN, TOTAL_DAYS};

pub use february::*;

pub fn month(number: u32) -> Month {
    Month::new(number).expect("valid month")
}

/// Catalog where every location reads `value` on every day.
pub fn flat_catalog(names: &[&str], value: f64) -> LocationCatalog {
    let locations = names
        .iter()
        .map(|name| Location::from_values(*name, &[value; TOTAL_DAYS]))
        .collect();
    LocationCatalog::new(locations).expect("unique names")
}

pub fn catalog_from(series: &[(&str, &[f64])]) -> LocationCatalog {
    let locations = series
        .iter()
        .map(|(name, values)| Location::from_values(*name, values))
        .collect();
    LocationCatalog::new(locations).expect("unique names")
}

/// Five locations with staggered saw-tooth readings between 40 and 79.
pub fn sawtooth_catalog() -> LocationCatalog {
    let names = ["Aosta", "Bologna", "Como", "Dervio", "Empoli"];
    let locations = names
        .iter()
        .enumerate()
        .map(|(k, name)| {
            let values: Vec<f64> = (0..TOTAL_DAYS)
                .map(|day| ((day * 7 + k * 13) % 40 + 40) as f64)
                .collect();
            Location::from_values(*name, &values)
        })
        .collect();
    LocationCatalog::new(locations).expect("unique names")
}

/// Resolves names to handles, panicking on unknown names.
pub fn ids(catalog: &LocationCatalog, names: &[&str]) -> Vec<LocationId> {
    names
        .iter()
        .map(|name| catalog.get(name).unwrap_or_else(|| panic!("unknown location {}", name)))
        .collect()
}

/// Expands `[("A", 3), ("B", 4)]` into `["A", "A", "A", "B", "B", "B", "B"]`.
pub fn stays(stays: &[(&'static str, usize)]) -> Vec<&'static str> {
    stays
        .iter()
        .flat_map(|(name, days)| std::iter::repeat_n(*name, *days))
        .collect()
}

/// Asserts the plan has the right length, no stay shorter than the minimum
/// and no location used more than the maximum.
pub fn assert_respects_stay_rules(plan: &Plan) {
    assert_eq!(plan.days.len(), TOTAL_DAYS, "plan should cover every day");

    for (name, length) in plan.stays() {
        assert!(
            length >= MIN_RUN,
            "stay at {} lasts {} days, minimum is {}",
            name,
            length,
            MIN_RUN
        );
    }

    let mut totals: HashMap<&str, usize> = HashMap::new();
    for name in &plan.days {
        *totals.entry(name.as_str()).or_default() += 1;
    }
    for (name, total) in totals {
        assert!(
            total <= MAX_STAY,
            "{} used for {} days, maximum is {}",
            name,
            total,
            MAX_STAY
        );
    }
}

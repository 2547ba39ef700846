//! Plain data types shared by the catalog, the search and the collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::PlannerError;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(u32);

impl Month {
    pub fn new(number: u32) -> Result<Self, PlannerError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(PlannerError::InvalidMonth(number))
        }
    }

    pub fn number(self) -> u32 {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[(self.0 - 1) as usize]
    }

    /// All twelve months in calendar order.
    pub fn all() -> impl Iterator<Item = Month> {
        (1..=12).map(Month)
    }
}

impl TryFrom<u32> for Month {
    type Error = PlannerError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Month::new(number)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One measurement for a location on a given day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyReading {
    /// Day of month, starting at 1.
    pub day: u32,
    pub value: f64,
}

impl DailyReading {
    pub fn new(day: u32, value: f64) -> Self {
        Self { day, value }
    }
}

/// Handle of a location inside a [`LocationCatalog`](crate::catalog::LocationCatalog).
///
/// Handles are plain indices, so comparing two of them never touches the
/// reading series carried by the location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub(crate) usize);

/// A candidate location together with its readings for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub name: String,
    pub readings: Vec<DailyReading>,
}

impl Location {
    pub fn new(name: impl Into<String>, readings: Vec<DailyReading>) -> Self {
        Self {
            name: name.into(),
            readings,
        }
    }

    /// Builds a location from consecutive values, labelling them day 1, 2, ...
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let readings = values
            .iter()
            .enumerate()
            .map(|(i, value)| DailyReading::new(i as u32 + 1, *value))
            .collect();
        Self::new(name, readings)
    }
}

/// The optimal itinerary for a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub month: Month,
    /// Location name for each day; index 0 is day 1.
    pub days: Vec<String>,
    pub cost: f64,
}

impl Plan {
    /// Location chosen for a 1-based day.
    pub fn location_on(&self, day: usize) -> Option<&str> {
        day.checked_sub(1)
            .and_then(|i| self.days.get(i))
            .map(String::as_str)
    }

    /// Consecutive stays as `(location, number of days)`, in itinerary order.
    pub fn stays(&self) -> Vec<(&str, usize)> {
        let mut stays: Vec<(&str, usize)> = Vec::new();
        for name in &self.days {
            match stays.last_mut() {
                Some((current, length)) if *current == name.as_str() => *length += 1,
                _ => stays.push((name.as_str(), 1)),
            }
        }
        stays
    }

    /// Number of day-to-day location changes.
    pub fn changes(&self) -> usize {
        self.days.windows(2).filter(|pair| pair[0] != pair[1]).count()
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Optimal sequence for {}:", self.month)?;
        for (i, name) in self.days.iter().enumerate() {
            writeln!(f, "Day {}: {}", i + 1, name)?;
        }
        write!(f, "Total cost: {:.2}", self.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(days: &[&str]) -> Plan {
        Plan {
            month: Month::new(2).unwrap(),
            days: days.iter().map(|d| d.to_string()).collect(),
            cost: 0.0,
        }
    }

    #[test]
    fn test_month_bounds() {
        assert!(Month::new(0).is_err());
        assert!(Month::new(13).is_err());
        assert_eq!(Month::new(3).unwrap().name(), "March");
        assert_eq!(Month::all().count(), 12);
    }

    #[test]
    fn test_month_deserialize_rejects_out_of_range() {
        let month: Month = serde_json::from_str("7").unwrap();
        assert_eq!(month.number(), 7);
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn test_from_values_labels_days() {
        let location = Location::from_values("Torino", &[40.0, 50.0]);
        assert_eq!(location.readings[0], DailyReading::new(1, 40.0));
        assert_eq!(location.readings[1], DailyReading::new(2, 50.0));
    }

    #[test]
    fn test_plan_stays_and_changes() {
        let plan = plan(&["A", "A", "A", "B", "B", "B", "A", "A", "A"]);
        assert_eq!(plan.stays(), vec![("A", 3), ("B", 3), ("A", 3)]);
        assert_eq!(plan.changes(), 2);
        assert_eq!(plan.location_on(4), Some("B"));
        assert_eq!(plan.location_on(0), None);
    }

    #[test]
    fn test_plan_display() {
        let rendered = plan(&["Genova", "Genova"]).to_string();
        assert!(rendered.starts_with("Optimal sequence for February:"));
        assert!(rendered.contains("Day 2: Genova"));
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::record::LaunchRecord;

/// Calendar grouping for the failure-rate views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    Year,
    Month,
    Weekday,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Year, Period::Month, Period::Weekday];

    pub fn key(&self, record: &LaunchRecord) -> i32 {
        match self {
            Period::Year => record.year,
            Period::Month => record.month as i32,
            Period::Weekday => record.weekday as i32,
        }
    }

    /// Every value the period can take for these records. Years span the
    /// earliest to the latest launch; an empty slice has no years.
    pub fn domain(&self, records: &[LaunchRecord]) -> Vec<i32> {
        match self {
            Period::Year => {
                let years = records.iter().map(|record| record.year);
                match (years.clone().min(), years.max()) {
                    (Some(first), Some(last)) => (first..=last).collect(),
                    _ => Vec::new(),
                }
            }
            Period::Month => (1..=12).collect(),
            Period::Weekday => (0..=6).collect(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Period::Year => "Year",
            Period::Month => "Month",
            Period::Weekday => "Weekday",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fills a sparse period map out to `domain`, missing values as `0.0`.
/// Keys outside the domain are dropped.
pub fn reindex(map: &BTreeMap<i32, f64>, domain: &[i32]) -> BTreeMap<i32, f64> {
    domain
        .iter()
        .map(|key| (*key, map.get(key).copied().unwrap_or(0.0)))
        .collect()
}

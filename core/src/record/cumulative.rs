use serde::{Deserialize, Serialize};

/// Row of the cumulative launch table consumed by the animated bar chart.
/// Column names keep the dataset's own spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CumulativeLaunches {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Cummulative_Launches")]
    pub cumulative_launches: u64,
}

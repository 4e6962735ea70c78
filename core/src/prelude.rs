use serde::{Deserialize, Serialize};

use crate::record::LaunchDraft;
use crate::telemetry::Telemetry;

/// Inclusive cost range (millions of USD) used by the per-company cost view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostWindow {
    pub min: f64,
    pub max: f64,
}

impl CostWindow {
    pub fn contains(&self, cost: f64) -> bool {
        cost >= self.min && cost <= self.max
    }
}

impl Default for CostWindow {
    fn default() -> Self {
        Self {
            min: 1.0,
            max: 4999.0,
        }
    }
}

/// Shared configuration for the aggregation views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub cost_window: CostWindow,
}

/// Fatal ingestion errors. Row numbers count data rows from 1.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum DerivationError {
    #[error("row {row}: unparseable launch time {value:?}")]
    InvalidTimestamp { row: usize, value: String },
    #[error("row {row}: unknown mission status {value:?}")]
    UnknownMissionStatus { row: usize, value: String },
    #[error("row {row}: {field} was never derived")]
    Incomplete { row: usize, field: &'static str },
}

pub type DerivationResult<T> = Result<T, DerivationError>;

/// One step of the enrichment chain. Each stage fills in the fields it owns
/// on the draft and leaves the rest untouched.
pub trait DerivationStage {
    fn name(&self) -> &'static str;
    fn apply(&self, draft: &mut LaunchDraft, telemetry: &Telemetry) -> DerivationResult<()>;
}

//! Derivation and aggregation core for the space launch explorer.
//!
//! Raw launch rows are loaded from CSV, enriched by a fixed chain of
//! derivation stages (country, calendar, vehicle families, cost) and frozen
//! into a [`LaunchDataset`] whose aggregate views feed the rendering layer.

pub mod analysis;
pub mod ingest;
pub mod prelude;
pub mod processing;
pub mod record;
pub mod telemetry;

pub use analysis::{LaunchDataset, Period};
pub use prelude::{AnalysisConfig, CostWindow, DerivationError, DerivationStage};
pub use processing::Enricher;
pub use record::{LaunchRecord, MissionStatus, RawLaunch};

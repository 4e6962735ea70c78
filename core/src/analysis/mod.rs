pub mod dataset;
pub mod period;
pub mod stats;

pub use dataset::{CostPoint, HierarchyCount, LaunchDataset};
pub use period::{reindex, Period};
pub use stats::{mean_of, StatsHelper};

pub mod cost;
pub mod country;
pub mod enricher;
pub mod temporal;
pub mod vehicle;

pub use cost::{parse_cost, CostStage};
pub use country::{normalize_country, CountryStage};
pub use enricher::Enricher;
pub use temporal::{decompose, parse_launch_time, LaunchCalendar, TemporalStage};
pub use vehicle::{classify, VehicleFamily, VehicleStage};

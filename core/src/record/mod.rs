pub mod cumulative;
pub mod launch;

pub use cumulative::CumulativeLaunches;
pub use launch::{LaunchDraft, LaunchRecord, MissionStatus, RawLaunch, RocketStatus};

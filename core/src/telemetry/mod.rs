pub mod log;
pub mod metrics;

pub use self::log::LogManager;
pub use metrics::{MetricsRecorder, MetricsSnapshot};

/// Logger and counters handed to every derivation stage.
#[derive(Default)]
pub struct Telemetry {
    pub log: LogManager,
    pub metrics: MetricsRecorder,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::default()
    }
}

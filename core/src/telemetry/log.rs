use log::{debug, info};

/// Thin wrapper over the `log` facade so every stage reports under one target.
pub struct LogManager {
    target: &'static str,
}

impl LogManager {
    pub fn new() -> Self {
        Self::with_target("launchcore")
    }

    pub fn with_target(target: &'static str) -> Self {
        Self { target }
    }

    pub fn record(&self, message: &str) {
        info!(target: self.target, "{}", message);
    }

    /// Logs a value that was replaced by its documented default.
    pub fn fallback(&self, stage: &str, row: usize, value: &str) {
        debug!(
            target: self.target,
            "{} fallback at row {} for {:?}", stage, row, value
        );
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

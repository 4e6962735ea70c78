use serde::Serialize;
use std::cell::Cell;

/// Counters for the enrichment pass. Silent fallbacks are preserved but
/// counted here so they stay visible in the report.
#[derive(Default)]
pub struct MetricsRecorder {
    processed: Cell<usize>,
    country_aliases: Cell<usize>,
    country_fallbacks: Cell<usize>,
    vehicle_fallbacks: Cell<usize>,
    costs_missing: Cell<usize>,
    costs_defaulted: Cell<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub processed: usize,
    pub country_aliases: usize,
    pub country_fallbacks: usize,
    pub vehicle_fallbacks: usize,
    pub costs_missing: usize,
    pub costs_defaulted: usize,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_processed(&self) {
        bump(&self.processed);
    }

    pub fn record_country_alias(&self) {
        bump(&self.country_aliases);
    }

    /// A location with no usable segment fell back to the placeholder.
    pub fn record_country_fallback(&self) {
        bump(&self.country_fallbacks);
    }

    pub fn record_vehicle_fallback(&self) {
        bump(&self.vehicle_fallbacks);
    }

    pub fn record_cost_missing(&self) {
        bump(&self.costs_missing);
    }

    /// A cost cell held text but the derived cost ended up as `0.0`.
    pub fn record_cost_defaulted(&self) {
        bump(&self.costs_defaulted);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            processed: self.processed.get(),
            country_aliases: self.country_aliases.get(),
            country_fallbacks: self.country_fallbacks.get(),
            vehicle_fallbacks: self.vehicle_fallbacks.get(),
            costs_missing: self.costs_missing.get(),
            costs_defaulted: self.costs_defaulted.get(),
        }
    }
}

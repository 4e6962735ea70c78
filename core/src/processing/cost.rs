use crate::prelude::{DerivationResult, DerivationStage};
use crate::record::LaunchDraft;
use crate::telemetry::Telemetry;

/// Parses a cost cell after dropping thousands separators. Returns `None`
/// for text that is not a finite, non-negative number.
pub fn parse_cost_strict(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Total over all inputs: missing or unusable values become `0.0`.
pub fn parse_cost(raw: Option<&str>) -> f64 {
    match raw.and_then(parse_cost_strict) {
        Some(value) if value > 0.0 => value,
        _ => 0.0,
    }
}

/// Derives the numeric `cost` from the `Rocket` column.
pub struct CostStage;

impl DerivationStage for CostStage {
    fn name(&self) -> &'static str {
        "cost"
    }

    fn apply(&self, draft: &mut LaunchDraft, telemetry: &Telemetry) -> DerivationResult<()> {
        let raw = draft.raw.rocket.as_deref().filter(|text| !text.trim().is_empty());
        let cost = parse_cost(raw);
        match raw {
            None => telemetry.metrics.record_cost_missing(),
            Some(text) if cost == 0.0 => {
                telemetry.metrics.record_cost_defaulted();
                telemetry.log.fallback(self.name(), draft.row, text);
            }
            Some(_) => {}
        }
        draft.cost = Some(cost);
        Ok(())
    }
}

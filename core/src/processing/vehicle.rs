use serde::{Deserialize, Serialize};
use std::fmt;

use crate::prelude::{DerivationResult, DerivationStage};
use crate::record::LaunchDraft;
use crate::telemetry::Telemetry;

/// Closed set of vehicle families used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleFamily {
    Atlas,
    Ariane,
    Cosmos,
    Delta,
    Falcon,
    #[serde(rename = "GSLV")]
    Gslv,
    #[serde(rename = "Long March")]
    LongMarch,
    Molniya,
    #[serde(rename = "PSLV")]
    Pslv,
    Soyuz,
    Thor,
    Titan,
    Tsyklon,
    Vostok,
    Zenit,
    Other,
}

/// Substring patterns tested in order against each `Detail` segment; the
/// first hit wins. The order is the whole tie-break policy.
pub const FAMILY_PATTERNS: [(&str, VehicleFamily); 15] = [
    ("Atlas", VehicleFamily::Atlas),
    ("Ariane", VehicleFamily::Ariane),
    ("Cosmos", VehicleFamily::Cosmos),
    ("Delta", VehicleFamily::Delta),
    ("Falcon", VehicleFamily::Falcon),
    ("GSLV", VehicleFamily::Gslv),
    ("Long March", VehicleFamily::LongMarch),
    ("Molniya", VehicleFamily::Molniya),
    ("PSLV", VehicleFamily::Pslv),
    ("Soyuz", VehicleFamily::Soyuz),
    ("Thor", VehicleFamily::Thor),
    ("Titan", VehicleFamily::Titan),
    ("Tsyklon", VehicleFamily::Tsyklon),
    ("Vostok", VehicleFamily::Vostok),
    ("Zenit", VehicleFamily::Zenit),
];

impl VehicleFamily {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Gslv => "GSLV",
            Self::LongMarch => "Long March",
            Self::Pslv => "PSLV",
            Self::Other => "Other",
            named => FAMILY_PATTERNS
                .iter()
                .find(|(_, family)| family == named)
                .map(|(pattern, _)| *pattern)
                .unwrap_or("Other"),
        }
    }

    /// Classifies a single, already trimmed segment.
    pub fn match_segment(segment: &str) -> Self {
        FAMILY_PATTERNS
            .iter()
            .find(|(pattern, _)| segment.contains(pattern))
            .map(|(_, family)| *family)
            .unwrap_or(Self::Other)
    }
}

impl fmt::Display for VehicleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One family per `|`-delimited segment, in order of appearance.
pub fn classify(detail: &str) -> Vec<VehicleFamily> {
    detail
        .split('|')
        .map(|segment| VehicleFamily::match_segment(segment.trim()))
        .collect()
}

/// Derives `vehicle_families` from `Detail`.
pub struct VehicleStage;

impl DerivationStage for VehicleStage {
    fn name(&self) -> &'static str {
        "vehicle"
    }

    fn apply(&self, draft: &mut LaunchDraft, telemetry: &Telemetry) -> DerivationResult<()> {
        let families = classify(&draft.raw.detail);
        for (segment, family) in draft.raw.detail.split('|').zip(&families) {
            if *family == VehicleFamily::Other {
                telemetry.metrics.record_vehicle_fallback();
                telemetry.log.fallback(self.name(), draft.row, segment.trim());
            }
        }
        draft.vehicle_families = families;
        Ok(())
    }
}

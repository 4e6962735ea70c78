use crate::prelude::{DerivationResult, DerivationStage};
use crate::record::LaunchDraft;
use crate::telemetry::Telemetry;

/// Location suffixes that name a site or a sea rather than the country that
/// ran the launch.
pub const COUNTRY_ALIASES: [(&str, &str); 7] = [
    ("Russia", "Russian Federation"),
    ("New Mexico", "USA"),
    ("Barents Sea", "Russian Federation"),
    ("Pacific Missile Range Facility", "USA"),
    ("Gran Canaria", "USA"),
    ("Yellow Sea", "China"),
    ("Shahrud Missile Test Site", "Iran"),
];

/// Placeholder country for a location with no text in any segment.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Last non-blank comma-separated segment of a location, trimmed. Empty only
/// when every segment is blank.
pub fn location_suffix(location: &str) -> &str {
    location
        .rsplit(',')
        .map(str::trim)
        .find(|segment| !segment.is_empty())
        .unwrap_or("")
}

pub fn country_alias(candidate: &str) -> Option<&'static str> {
    COUNTRY_ALIASES
        .iter()
        .find(|(from, _)| *from == candidate)
        .map(|(_, to)| *to)
}

pub fn normalize_country(location: &str) -> String {
    let candidate = location_suffix(location);
    if candidate.is_empty() {
        return UNKNOWN_COUNTRY.to_string();
    }
    country_alias(candidate).unwrap_or(candidate).to_string()
}

/// Derives `country` from the launch location.
pub struct CountryStage;

impl DerivationStage for CountryStage {
    fn name(&self) -> &'static str {
        "country"
    }

    fn apply(&self, draft: &mut LaunchDraft, telemetry: &Telemetry) -> DerivationResult<()> {
        let candidate = location_suffix(&draft.raw.location);
        let country = match country_alias(candidate) {
            Some(alias) => {
                telemetry.metrics.record_country_alias();
                alias
            }
            None if candidate.is_empty() => {
                telemetry.metrics.record_country_fallback();
                telemetry.log.fallback(self.name(), draft.row, &draft.raw.location);
                UNKNOWN_COUNTRY
            }
            None => candidate,
        };
        draft.country = Some(country.to_string());
        Ok(())
    }
}

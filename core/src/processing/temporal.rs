use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::prelude::{DerivationError, DerivationResult, DerivationStage};
use crate::record::LaunchDraft;
use crate::telemetry::Telemetry;

const DATETIME_FORMATS: [&str; 5] = [
    "%b %d, %Y %H:%M UTC",
    "%b %d, %Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%b %d, %Y", "%Y-%m-%d"];

/// Calendar fields derived from a launch time. `weekday` counts from
/// Monday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchCalendar {
    pub year: i32,
    pub month: u32,
    pub weekday: u32,
}

/// The dataset prefixes dates with a weekday name (`Fri Aug 07, 2020`).
/// It is redundant with the date, so it is dropped before parsing.
fn strip_weekday(text: &str) -> &str {
    match text.split_once(' ') {
        Some((head, rest)) if head.len() == 3 && head.chars().all(|c| c.is_ascii_alphabetic()) => {
            rest
        }
        _ => text,
    }
}

/// Parses `Fri Aug 07, 2020 05:12 UTC`, the date-only `Sat Dec 19, 1964`
/// (midnight) and ISO timestamps. Returns `None` when nothing matches.
pub fn parse_launch_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    [trimmed, strip_weekday(trimmed)]
        .into_iter()
        .find_map(|text| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
                .or_else(|| {
                    DATE_FORMATS
                        .iter()
                        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                        .and_then(|date| date.and_hms_opt(0, 0, 0))
                })
        })
}

pub fn decompose(launched_at: &NaiveDateTime) -> LaunchCalendar {
    LaunchCalendar {
        year: launched_at.year(),
        month: launched_at.month(),
        weekday: launched_at.weekday().num_days_from_monday(),
    }
}

/// Parses `Datum` and derives the calendar fields. An unparseable date is
/// fatal for the run.
pub struct TemporalStage;

impl DerivationStage for TemporalStage {
    fn name(&self) -> &'static str {
        "temporal"
    }

    fn apply(&self, draft: &mut LaunchDraft, _telemetry: &Telemetry) -> DerivationResult<()> {
        let launched_at =
            parse_launch_time(&draft.raw.datum).ok_or_else(|| DerivationError::InvalidTimestamp {
                row: draft.row,
                value: draft.raw.datum.clone(),
            })?;
        draft.calendar = Some(decompose(&launched_at));
        draft.launched_at = Some(launched_at);
        Ok(())
    }
}

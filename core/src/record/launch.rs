use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::prelude::{DerivationError, DerivationResult};
use crate::processing::temporal::LaunchCalendar;
use crate::processing::vehicle::VehicleFamily;

/// One launch row exactly as it appears in the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawLaunch {
    #[serde(rename = "Company Name")]
    pub company_name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Datum")]
    pub datum: String,
    #[serde(rename = "Detail")]
    pub detail: String,
    #[serde(rename = "Status Rocket")]
    pub status_rocket: String,
    /// Free-text cost in millions of USD; empty cells are `None`.
    #[serde(rename = "Rocket", default)]
    pub rocket: Option<String>,
    #[serde(rename = "Status Mission")]
    pub status_mission: String,
}

/// Outcome of a launch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    Success,
    Failure,
    #[serde(rename = "Partial Failure")]
    PartialFailure,
    #[serde(rename = "Prelaunch Failure")]
    PrelaunchFailure,
}

impl MissionStatus {
    pub const ALL: [MissionStatus; 4] = [
        MissionStatus::Success,
        MissionStatus::Failure,
        MissionStatus::PartialFailure,
        MissionStatus::PrelaunchFailure,
    ];

    /// Accepts the dataset spelling (`Partial Failure`) as well as compact
    /// or lowercase variants.
    pub fn parse(raw: &str) -> Option<Self> {
        let key: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "success" => Some(Self::Success),
            "failure" => Some(Self::Failure),
            "partialfailure" => Some(Self::PartialFailure),
            "prelaunchfailure" => Some(Self::PrelaunchFailure),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failure",
            Self::PartialFailure => "Partial Failure",
            Self::PrelaunchFailure => "Prelaunch Failure",
        }
    }
}

impl fmt::Display for MissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Current service status of the rocket used for the launch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RocketStatus {
    Active,
    Retired,
    Unknown(String),
}

impl RocketStatus {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.strip_prefix("Status").unwrap_or(trimmed) {
            "Active" => Self::Active,
            "Retired" => Self::Retired,
            _ => Self::Unknown(trimmed.to_string()),
        }
    }
}

/// Enriched launch record. Built once by the enricher and read-only after.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRecord {
    pub company_name: String,
    pub location: String,
    pub launched_at: NaiveDateTime,
    pub detail: String,
    pub rocket_status: RocketStatus,
    pub rocket_cost: Option<String>,
    pub mission_status: MissionStatus,
    pub country: String,
    pub year: i32,
    pub month: u32,
    pub weekday: u32,
    pub vehicle_families: Vec<VehicleFamily>,
    pub cost: f64,
}

/// Work-in-progress record passed through the derivation stages.
#[derive(Debug, Clone)]
pub struct LaunchDraft {
    pub row: usize,
    pub raw: RawLaunch,
    pub country: Option<String>,
    pub launched_at: Option<NaiveDateTime>,
    pub calendar: Option<LaunchCalendar>,
    pub vehicle_families: Vec<VehicleFamily>,
    pub cost: Option<f64>,
}

impl LaunchDraft {
    pub fn new(row: usize, raw: RawLaunch) -> Self {
        Self {
            row,
            raw,
            country: None,
            launched_at: None,
            calendar: None,
            vehicle_families: Vec::new(),
            cost: None,
        }
    }

    /// Freezes the draft once every stage has run.
    pub fn finish(self) -> DerivationResult<LaunchRecord> {
        let row = self.row;
        let missing = |field| DerivationError::Incomplete { row, field };

        let mission_status = MissionStatus::parse(&self.raw.status_mission).ok_or_else(|| {
            DerivationError::UnknownMissionStatus {
                row,
                value: self.raw.status_mission.clone(),
            }
        })?;
        let country = self.country.ok_or_else(|| missing("country"))?;
        let launched_at = self.launched_at.ok_or_else(|| missing("launch time"))?;
        let calendar = self.calendar.ok_or_else(|| missing("calendar"))?;
        let cost = self.cost.ok_or_else(|| missing("cost"))?;
        if self.vehicle_families.is_empty() {
            return Err(missing("vehicle families"));
        }

        Ok(LaunchRecord {
            company_name: self.raw.company_name,
            location: self.raw.location,
            launched_at,
            detail: self.raw.detail,
            rocket_status: RocketStatus::parse(&self.raw.status_rocket),
            rocket_cost: self.raw.rocket,
            mission_status,
            country,
            year: calendar.year,
            month: calendar.month,
            weekday: calendar.weekday,
            vehicle_families: self.vehicle_families,
            cost,
        })
    }
}

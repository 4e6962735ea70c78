use crate::analysis::LaunchDataset;
use crate::prelude::{DerivationResult, DerivationStage};
use crate::processing::{CostStage, CountryStage, TemporalStage, VehicleStage};
use crate::record::{LaunchDraft, LaunchRecord, RawLaunch};
use crate::telemetry::{MetricsSnapshot, Telemetry};

/// Runs the derivation stages over raw rows in the fixed order
/// country, temporal, vehicle, cost.
pub struct Enricher {
    stages: Vec<Box<dyn DerivationStage>>,
    telemetry: Telemetry,
}

impl Enricher {
    pub fn new() -> Self {
        Self {
            stages: vec![
                Box::new(CountryStage),
                Box::new(TemporalStage),
                Box::new(VehicleStage),
                Box::new(CostStage),
            ],
            telemetry: Telemetry::new(),
        }
    }

    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Enriches a single row. `row` counts data rows from 1.
    pub fn enrich(&self, row: usize, raw: RawLaunch) -> DerivationResult<LaunchRecord> {
        let mut draft = LaunchDraft::new(row, raw);
        for stage in &self.stages {
            stage.apply(&mut draft, &self.telemetry)?;
        }
        let record = draft.finish()?;
        self.telemetry.metrics.record_processed();
        Ok(record)
    }

    /// Enriches every row and freezes the result. The first failing row
    /// aborts the whole pass.
    pub fn enrich_all(&self, rows: Vec<RawLaunch>) -> DerivationResult<LaunchDataset> {
        self.telemetry.log.record(&format!(
            "enriching {} rows through stages {}",
            rows.len(),
            self.stage_names().join(" -> ")
        ));
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| self.enrich(index + 1, raw))
            .collect::<DerivationResult<Vec<_>>>()?;

        self.telemetry.log.record(&completion_line(&self.metrics()));

        Ok(LaunchDataset::new(records))
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.telemetry.metrics.snapshot()
    }
}

fn completion_line(snapshot: &MetricsSnapshot) -> String {
    format!(
        "enrichment complete: {} records, {} placeholder countries, {} vehicle fallbacks, {} defaulted costs",
        snapshot.processed,
        snapshot.country_fallbacks,
        snapshot.vehicle_fallbacks,
        snapshot.costs_defaulted
    )
}

impl Default for Enricher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::DerivationError;
    use crate::processing::VehicleFamily;
    use crate::record::MissionStatus;

    fn raw(location: &str, datum: &str, detail: &str, rocket: Option<&str>) -> RawLaunch {
        RawLaunch {
            company_name: "RVSN USSR".into(),
            location: location.into(),
            datum: datum.into(),
            detail: detail.into(),
            status_rocket: "StatusRetired".into(),
            rocket: rocket.map(str::to_string),
            status_mission: "Success".into(),
        }
    }

    #[test]
    fn stages_run_in_fixed_order() {
        assert_eq!(
            Enricher::new().stage_names(),
            vec!["country", "temporal", "vehicle", "cost"]
        );
    }

    #[test]
    fn enrich_populates_every_derived_field() {
        let enricher = Enricher::new();
        let record = enricher
            .enrich(
                1,
                raw(
                    "Site 43/4, Plesetsk Cosmodrome, Russia",
                    "Tue May 15, 1990 09:00 UTC",
                    "Cosmos 3M | Soyuz-U",
                    Some("1,160.0 "),
                ),
            )
            .unwrap();

        assert_eq!(record.country, "Russian Federation");
        assert_eq!((record.year, record.month, record.weekday), (1990, 5, 1));
        assert_eq!(
            record.vehicle_families,
            vec![VehicleFamily::Cosmos, VehicleFamily::Soyuz]
        );
        assert_eq!(record.cost, 1160.0);
        assert_eq!(record.mission_status, MissionStatus::Success);

        let metrics = enricher.metrics();
        assert_eq!(metrics.processed, 1);
        assert_eq!(metrics.country_aliases, 1);
        assert_eq!(metrics.vehicle_fallbacks, 0);
    }

    #[test]
    fn bad_datum_aborts_the_pass() {
        let rows = vec![
            raw("Baikonur, Kazakhstan", "Fri Oct 04, 1957 19:28 UTC", "Sputnik 8K71PS", None),
            raw("Baikonur, Kazakhstan", "late 1957", "Sputnik 8K71PS", None),
        ];
        let err = Enricher::new().enrich_all(rows).unwrap_err();
        assert_eq!(
            err,
            DerivationError::InvalidTimestamp {
                row: 2,
                value: "late 1957".into()
            }
        );
    }

    #[test]
    fn unknown_mission_status_is_fatal() {
        let mut row = raw("Baikonur, Kazakhstan", "Fri Oct 04, 1957 19:28 UTC", "R-7", None);
        row.status_mission = "Scrubbed".into();
        let err = Enricher::new().enrich(4, row).unwrap_err();
        assert!(matches!(
            err,
            DerivationError::UnknownMissionStatus { row: 4, .. }
        ));
    }

    #[test]
    fn fallbacks_are_counted() {
        let enricher = Enricher::new();
        let rows = vec![
            raw(
                "Baikonur, Kazakhstan",
                "Fri Oct 04, 1957 19:28 UTC",
                "Sputnik 8K71PS | Sputnik-1",
                None,
            ),
            raw("Baikonur, Kazakhstan", "Fri Oct 04, 1957 19:28 UTC", "Vostok-K", Some("n/a")),
        ];
        let dataset = enricher.enrich_all(rows).unwrap();
        assert_eq!(dataset.len(), 2);

        let metrics = enricher.metrics();
        assert_eq!(metrics.vehicle_fallbacks, 2);
        assert_eq!(metrics.costs_missing, 1);
        assert_eq!(metrics.costs_defaulted, 1);
        assert!(dataset.records().iter().all(|r| r.cost == 0.0));
    }

    #[test]
    fn completion_line_reports_pass_counters() {
        let enricher = Enricher::new();
        let rows = vec![
            raw(
                "Baikonur, Kazakhstan",
                "Fri Oct 04, 1957 19:28 UTC",
                "Sputnik 8K71PS",
                Some("n/a"),
            ),
            raw(" , ", "Fri Oct 04, 1957 19:28 UTC", "Soyuz-U", None),
        ];
        enricher.enrich_all(rows).unwrap();
        assert_eq!(
            completion_line(&enricher.metrics()),
            "enrichment complete: 2 records, 1 placeholder countries, 1 vehicle fallbacks, 1 defaulted costs"
        );
    }
}

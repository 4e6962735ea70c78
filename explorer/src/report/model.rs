use crate::workflow::runner::WorkflowResult;
use launchcore::analysis::{mean_of, reindex, CostPoint, HierarchyCount, Period};
use launchcore::prelude::AnalysisConfig;
use launchcore::processing::VehicleFamily;
use launchcore::record::{CumulativeLaunches, MissionStatus};
use launchcore::telemetry::MetricsSnapshot;
use serde::Serialize;
use std::collections::BTreeMap;

/// Failure share over one calendar period, reindexed to the full domain.
/// `mean` is taken over the periods that saw a failure.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSeries {
    pub period: Period,
    pub rates: BTreeMap<i32, f64>,
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilyCount {
    pub family: VehicleFamily,
    pub launches: usize,
}

/// Everything the rendering layer needs, in one serializable document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LaunchReport {
    pub records: usize,
    pub telemetry: MetricsSnapshot,
    pub status_distribution: BTreeMap<MissionStatus, f64>,
    pub status_share_by_country: BTreeMap<String, BTreeMap<MissionStatus, f64>>,
    pub success_rate_by_country: BTreeMap<String, f64>,
    pub success_rate_by_company: BTreeMap<String, f64>,
    pub failure_rate_by_company: BTreeMap<String, f64>,
    pub failure_rate_by_period: Vec<PeriodSeries>,
    pub mean_cost_by_year: BTreeMap<i32, f64>,
    pub vehicle_families: Vec<FamilyCount>,
    pub status_hierarchy: Vec<HierarchyCount>,
    pub cost_points: Vec<CostPoint>,
    pub cumulative_launches: Vec<CumulativeLaunches>,
}

impl LaunchReport {
    pub fn build(result: &WorkflowResult, config: &AnalysisConfig) -> Self {
        let dataset = &result.dataset;
        let failure_rate_by_period = Period::ALL
            .iter()
            .map(|period| {
                let sparse = dataset.failure_rate_by_period(*period);
                PeriodSeries {
                    period: *period,
                    rates: reindex(&sparse, &period.domain(dataset.records())),
                    mean: mean_of(&sparse),
                }
            })
            .collect();

        Self {
            records: dataset.len(),
            telemetry: result.metrics,
            status_distribution: dataset.status_distribution(),
            status_share_by_country: dataset.status_share_by_country(),
            success_rate_by_country: dataset.success_rate_by_country(),
            success_rate_by_company: dataset.success_rate_by_company(),
            failure_rate_by_company: dataset.failure_rate_by_company(),
            failure_rate_by_period,
            mean_cost_by_year: dataset.mean_cost_by_year(),
            vehicle_families: dataset
                .vehicle_family_counts()
                .into_iter()
                .map(|(family, launches)| FamilyCount { family, launches })
                .collect(),
            status_hierarchy: dataset.status_hierarchy(),
            cost_points: dataset.cost_points(&config.cost_window),
            cumulative_launches: result.cumulative.clone(),
        }
    }

    /// One-line overview for the console.
    pub fn summary(&self) -> String {
        let success = self
            .status_distribution
            .get(&MissionStatus::Success)
            .copied()
            .unwrap_or(0.0);
        let top_families: Vec<String> = self
            .vehicle_families
            .iter()
            .take(3)
            .map(|entry| format!("{} {}", entry.family, entry.launches))
            .collect();
        format!(
            "launches {}, countries {}, companies {}, success {:.2}%, top families [{}], vehicle fallbacks {}",
            self.records,
            self.success_rate_by_country.len(),
            self.status_hierarchy
                .iter()
                .map(|entry| entry.company.as_str())
                .collect::<std::collections::BTreeSet<_>>()
                .len(),
            success,
            top_families.join(", "),
            self.telemetry.vehicle_fallbacks
        )
    }
}

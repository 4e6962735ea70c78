use crate::generator::dataset::{generate_launches, GeneratorConfig};
use crate::workflow::config::WorkflowConfig;
use anyhow::Context;
use launchcore::analysis::LaunchDataset;
use launchcore::ingest::{load_cumulative, load_launches};
use launchcore::processing::Enricher;
use launchcore::record::{CumulativeLaunches, RawLaunch};
use launchcore::telemetry::MetricsSnapshot;

#[derive(Debug)]
pub struct WorkflowResult {
    pub dataset: LaunchDataset,
    pub cumulative: Vec<CumulativeLaunches>,
    pub metrics: MetricsSnapshot,
}

#[derive(Clone)]
pub struct Runner {
    config: WorkflowConfig,
}

impl Runner {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<WorkflowResult> {
        let rows = match &self.config.synthetic {
            Some(source) => {
                log::info!(
                    "generating {} synthetic launches (seed {})",
                    source.count,
                    source.seed
                );
                generate_launches(&GeneratorConfig {
                    count: source.count,
                    seed: source.seed,
                    ..Default::default()
                })
                .context("generating synthetic launches")?
            }
            None => load_launches(&self.config.dataset).with_context(|| {
                format!("loading launches from {}", self.config.dataset.display())
            })?,
        };
        self.execute_rows(rows)
    }

    /// Enriches already-loaded rows. The cumulative table comes from the
    /// configured file when there is one, otherwise it is derived.
    pub fn execute_rows(&self, rows: Vec<RawLaunch>) -> anyhow::Result<WorkflowResult> {
        let enricher = Enricher::new();
        let dataset = enricher
            .enrich_all(rows)
            .context("enriching launch records")?;

        let cumulative = match &self.config.totals {
            Some(path) => load_cumulative(path)
                .with_context(|| format!("loading cumulative launches from {}", path.display()))?,
            None => dataset.cumulative_launches(),
        };

        Ok(WorkflowResult {
            dataset,
            cumulative,
            metrics: enricher.metrics(),
        })
    }
}

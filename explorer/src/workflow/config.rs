use anyhow::Context;
use launchcore::prelude::{AnalysisConfig, CostWindow};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_report_path() -> PathBuf {
    PathBuf::from("reports/launch_summary.json")
}

/// Replace the CSV with generated rows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SyntheticSource {
    pub count: usize,
    #[serde(default)]
    pub seed: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkflowConfig {
    pub dataset: PathBuf,
    #[serde(default)]
    pub totals: Option<PathBuf>,
    #[serde(default = "default_report_path")]
    pub report: PathBuf,
    #[serde(default)]
    pub cost_window: CostWindow,
    #[serde(default)]
    pub synthetic: Option<SyntheticSource>,
}

impl WorkflowConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading workflow config {}", path_ref.display()))?;
        let config: WorkflowConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing workflow config {}", path_ref.display()))?;
        if config.cost_window.min > config.cost_window.max {
            anyhow::bail!(
                "cost window in {} is empty ({} > {})",
                path_ref.display(),
                config.cost_window.min,
                config.cost_window.max
            );
        }
        Ok(config)
    }

    pub fn from_args(
        dataset: PathBuf,
        totals: Option<PathBuf>,
        report: PathBuf,
        cost_window: CostWindow,
    ) -> Self {
        Self {
            dataset,
            totals,
            report,
            cost_window,
            synthetic: None,
        }
    }

    pub fn with_synthetic(mut self, synthetic: Option<SyntheticSource>) -> Self {
        self.synthetic = synthetic;
        self
    }

    pub fn to_analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            cost_window: self.cost_window,
        }
    }
}

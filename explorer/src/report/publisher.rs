use crate::report::model::LaunchReport;
use anyhow::Context;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Hands the report to the rendering layer as a JSON document on disk.
pub struct ReportPublisher {
    path: PathBuf,
}

impl ReportPublisher {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn publish(&self, report: &LaunchReport) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report directory {}", parent.display()))?;
        }
        let file = File::create(&self.path)
            .with_context(|| format!("creating report {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, report)
            .with_context(|| format!("serializing report {}", self.path.display()))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        log::info!(
            "report with {} launches written to {}",
            report.records,
            self.path.display()
        );
        Ok(())
    }

    pub fn publish_status(&self, message: &str) {
        log::info!("[report] {}", message);
    }
}

use clap::Parser;
use launchcore::prelude::CostWindow;
use report::model::LaunchReport;
use report::publisher::ReportPublisher;
use std::path::PathBuf;
use workflow::config::{SyntheticSource, WorkflowConfig};
use workflow::runner::Runner;

mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Space launch dataset explorer")]
struct Args {
    /// Load a workflow config from YAML
    #[arg(long)]
    workflow: Option<PathBuf>,
    /// Launch records CSV
    #[arg(long, default_value = "Space_Corrected.csv")]
    dataset: PathBuf,
    /// Precomputed cumulative launch table; derived from the dataset when absent
    #[arg(long)]
    totals: Option<PathBuf>,
    #[arg(long, default_value = "reports/launch_summary.json")]
    report: PathBuf,
    /// Generate this many synthetic launches instead of reading the dataset
    #[arg(long)]
    synthetic: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 1.0)]
    cost_min: f64,
    #[arg(long, default_value_t = 4999.0)]
    cost_max: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let workflow_config = if let Some(path) = args.workflow {
        WorkflowConfig::load(path)?
    } else {
        if args.cost_min > args.cost_max {
            anyhow::bail!(
                "--cost-min {} exceeds --cost-max {}",
                args.cost_min,
                args.cost_max
            );
        }
        WorkflowConfig::from_args(
            args.dataset,
            args.totals,
            args.report,
            CostWindow {
                min: args.cost_min,
                max: args.cost_max,
            },
        )
        .with_synthetic(args.synthetic.map(|count| SyntheticSource {
            count,
            seed: args.seed,
        }))
    };

    let runner = Runner::new(workflow_config.clone());
    let result = runner.execute()?;
    let report = LaunchReport::build(&result, &workflow_config.to_analysis_config());

    println!("{}", report.summary());

    let publisher = ReportPublisher::new(&workflow_config.report);
    publisher.publish(&report)?;
    publisher.publish_status(&format!(
        "aggregates ready for rendering at {}",
        publisher.path().display()
    ));

    Ok(())
}

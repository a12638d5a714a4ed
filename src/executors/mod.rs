//! Command executors that handle the actual logic for each command

pub mod inspect;
pub mod spectacle;
pub mod spotlight;

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::analyzer::{GraphAnalysis, GraphAnalyzer};
use crate::cli::OutputFormat;
use crate::progress::ProgressReporter;
use crate::reports::{
    GitHubReportGenerator, HumanReportGenerator, JsonReportGenerator, JunitReportGenerator,
    ReportGenerator,
};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Discover and analyze every edge-list file under `paths`
fn analyze_inputs(
    paths: &[PathBuf],
    pattern: &str,
    skip_invalid_edges: bool,
) -> Result<GraphAnalyzer> {
    let mut progress = ProgressReporter::for_terminal();

    let mut analyzer = GraphAnalyzer::new(skip_invalid_edges);
    analyzer
        .analyze_paths(paths, pattern, progress.as_mut())
        .wrap_err("Failed to discover and analyze edge lists")?;

    tracing::info!(
        graphs = analyzer.analyses().len(),
        failures = analyzer.failures().len(),
        cycles = analyzer.total_cycles(),
        "analysis finished"
    );

    Ok(analyzer)
}

/// Render the analyses in the requested report format
fn generate_report(
    format: OutputFormat,
    max_cycles: Option<usize>,
    show_graph: bool,
    analyses: &[GraphAnalysis],
) -> Result<String> {
    let report_result = match format {
        OutputFormat::Human => {
            HumanReportGenerator::new(max_cycles, show_graph).generate_report(analyses)
        }
        OutputFormat::Json => JsonReportGenerator::new().generate_report(analyses),
        OutputFormat::Junit => JunitReportGenerator::new().generate_report(analyses),
        OutputFormat::GitHub => GitHubReportGenerator::new().generate_report(analyses),
    };

    report_result
        .into_diagnostic()
        .wrap_err("Failed to generate report")
}

fn report_nothing_found(analyzer: &GraphAnalyzer) -> bool {
    if analyzer.analyses().is_empty() && analyzer.failures().is_empty() {
        eprintln!("{} No edge-list files found to analyze", style("ℹ").blue());
        return true;
    }
    false
}

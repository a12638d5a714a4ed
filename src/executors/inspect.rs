//! Inspect command executor

use console::style;
use miette::Result;

use super::{analyze_inputs, generate_report, report_nothing_found};
use crate::config::InspectConfig;
use crate::executors::CommandExecutor;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting graphs for polygons...\n",
            style("🎡").cyan()
        );
        eprintln!(
            "  {} Skip invalid edges: {}",
            style("→").dim(),
            if config.skip_invalid_edges {
                style("yes").yellow()
            } else {
                style("no").green()
            }
        );

        let analyzer = analyze_inputs(&config.paths, &config.pattern, config.skip_invalid_edges)?;
        if report_nothing_found(&analyzer) {
            return Ok(());
        }

        let report = generate_report(
            config.format,
            config.max_cycles,
            config.show_graph,
            analyzer.analyses(),
        )?;
        print!("{report}");

        // Exit with error code if cycles found and requested
        if config.error_on_cycles && analyzer.any_cycle() {
            std::process::exit(1);
        }

        Ok(())
    }
}

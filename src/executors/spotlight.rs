//! Spotlight command executor

use console::style;
use miette::Result;

use super::{analyze_inputs, generate_report, report_nothing_found};
use crate::config::SpotlightConfig;
use crate::executors::CommandExecutor;

pub struct SpotlightExecutor;

impl CommandExecutor for SpotlightExecutor {
    type Config = SpotlightConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Putting the spotlight on vertex {}...\n",
            style("🔦").cyan(),
            style(config.vertex).bold()
        );

        let mut analyzer =
            analyze_inputs(&config.paths, &config.pattern, config.skip_invalid_edges)?;
        if report_nothing_found(&analyzer) {
            return Ok(());
        }

        for analysis in analyzer.analyses_mut() {
            analysis.focus_on(config.vertex);
            tracing::debug!(
                graph = analysis.name(),
                vertex = %config.vertex,
                cycles = analysis.cycles().len(),
                "kept cycles through vertex"
            );
        }

        let report = generate_report(
            config.format,
            config.max_cycles,
            config.show_graph,
            analyzer.analyses(),
        )?;
        print!("{report}");

        Ok(())
    }
}

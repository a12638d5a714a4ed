//! Spectacle command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{analyze_inputs, report_nothing_found};
use crate::cli::GraphFormat;
use crate::config::SpectacleOptions;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;

pub struct SpectacleExecutor;

/// Comment line naming the graph, in the syntax of the output format
fn graph_header(format: GraphFormat, name: &str) -> String {
    match format {
        GraphFormat::Ascii => format!("# {name}"),
        GraphFormat::Mermaid => format!("%% {name}"),
        GraphFormat::Dot => format!("// {name}"),
    }
}

impl CommandExecutor for SpectacleExecutor {
    type Config = SpectacleOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let analyzer = analyze_inputs(&config.paths, &config.pattern, config.skip_invalid_edges)?;
        if report_nothing_found(&analyzer) {
            return Ok(());
        }

        let renderer = GraphRenderer::new(config.highlight_cycles);

        // Determine output destination
        let mut output_writer: Box<dyn io::Write> =
            if let Some(output_path) = config.output.as_ref() {
                Box::new(BufWriter::new(
                    File::create(output_path)
                        .into_diagnostic()
                        .wrap_err_with(|| {
                            format!("Failed to create output file '{}'", output_path.display())
                        })?,
                ))
            } else {
                Box::new(io::stdout())
            };

        for analysis in analyzer.analyses() {
            writeln!(output_writer, "{}", graph_header(config.format, analysis.name()))
                .into_diagnostic()?;

            let graph = analysis.graph();
            let cycles = analysis.cycles().as_slice();
            match config.format {
                GraphFormat::Ascii => renderer
                    .render_ascii(graph, cycles, output_writer.as_mut())
                    .wrap_err("Failed to render ASCII graph")?,
                GraphFormat::Mermaid => renderer
                    .render_mermaid(graph, cycles, output_writer.as_mut())
                    .wrap_err("Failed to render Mermaid graph")?,
                GraphFormat::Dot => renderer
                    .render_dot(graph, cycles, output_writer.as_mut())
                    .wrap_err("Failed to render DOT graph")?,
            }
            writeln!(output_writer).into_diagnostic()?;
        }
        output_writer.flush().into_diagnostic()?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

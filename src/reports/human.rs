//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::analyzer::GraphAnalysis;
use crate::error::PolygonWheelError;
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_cycles: Option<usize>,
    show_graph: bool,
}

impl HumanReportGenerator {
    pub fn new(max_cycles: Option<usize>, show_graph: bool) -> Self {
        Self {
            max_cycles,
            show_graph,
        }
    }

    fn write_graph(
        &self,
        output: &mut String,
        analysis: &GraphAnalysis,
    ) -> Result<(), PolygonWheelError> {
        let graph = analysis.graph();
        writeln!(output, "  {} Adjacency lists:", style("📊").blue())?;
        for vertex in graph.active_vertices() {
            let neighbors: Vec<String> = graph
                .neighbors(vertex)
                .iter()
                .map(|record| format!("{} (weight: {})", record.neighbor, record.weight))
                .collect();
            writeln!(
                output,
                "    {} {} → {}",
                style("•").dim(),
                style(vertex).bold(),
                neighbors.join(", ")
            )?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn write_analysis(
        &self,
        output: &mut String,
        analysis: &GraphAnalysis,
    ) -> Result<(), PolygonWheelError> {
        writeln!(output, "\n{} {}", style("📄").cyan(), style(analysis.name()).bold())?;

        if self.show_graph {
            self.write_graph(output, analysis)?;
        }

        for edge in analysis.rejected_edges() {
            writeln!(
                output,
                "  {} Skipped invalid edge: {}",
                style("⚠").yellow(),
                style(edge).dim()
            )?;
        }

        let cycles = analysis.cycles();
        if cycles.is_empty() {
            writeln!(
                output,
                "  {} No cycles in this graph",
                style("✅").green().bold()
            )?;
            return Ok(());
        }

        let census = analysis.census();
        writeln!(output, "  {} Polygon census:", style("🔺").yellow())?;
        for (label, count) in [
            ("Triangles", census.triangles),
            ("Quadrilaterals", census.quadrilaterals),
            ("Pentagons", census.pentagons),
            ("More than 5 edges", census.larger),
        ] {
            writeln!(
                output,
                "    {} {}: {}",
                style("•").dim(),
                label,
                style(count).bold()
            )?;
        }

        writeln!(
            output,
            "\n  {} Cycles (by edge count):",
            style("🔄").yellow()
        )?;

        let limit = self.max_cycles.unwrap_or(usize::MAX);
        for (i, cycle) in cycles.iter().take(limit).enumerate() {
            writeln!(
                output,
                "    Cycle {}: {} edges, length: {}, {}",
                i + 1,
                cycle.edge_count(),
                style(cycle.length()).cyan(),
                style(cycle.signature()).bold()
            )?;
        }

        if limit < cycles.len() {
            writeln!(
                output,
                "    {} Showing {} of {} cycles. Use --max-cycles to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(cycles.len()).yellow()
            )?;
        }

        writeln!(
            output,
            "\n  Shapes found: {}",
            style(census.total()).bold()
        )?;

        let stats = analysis.stats();
        if stats.circuit_rank > 0 {
            writeln!(
                output,
                "  {} {} independent {} across {} {}",
                style("ℹ").blue(),
                stats.circuit_rank,
                pluralize("cycle", stats.circuit_rank),
                stats.components,
                pluralize("component", stats.components)
            )?;
        }

        Ok(())
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, PolygonWheelError> {
        let mut output = String::new();

        if analyses.is_empty() {
            writeln!(
                output,
                "\n{} No graphs were analyzed.",
                style("ℹ").blue()
            )?;
            return Ok(output);
        }

        for analysis in analyses {
            self.write_analysis(&mut output, analysis)?;
            writeln!(output, "{}", style("--------------").dim())?;
        }

        let with_cycles = analyses.iter().filter(|a| !a.cycles().is_empty()).count();
        writeln!(
            output,
            "\n{} {} of {} {} contain polygons.",
            style("🎡").cyan(),
            style(with_cycles).bold(),
            analyses.len(),
            pluralize("graph", analyses.len())
        )?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::fixtures::sample_analyses;

    fn plain(report: &str) -> String {
        console::strip_ansi_codes(report).to_string()
    }

    #[test]
    fn test_human_report_lists_sorted_cycles() {
        let generator = HumanReportGenerator::new(None, false);
        let report = plain(&generator.generate_report(&sample_analyses()).unwrap());

        assert!(report.contains("📄 Sample.txt"));
        assert!(report.contains("Triangles: 1"));
        assert!(report.contains("Pentagons: 1"));
        assert!(report.contains("More than 5 edges: 0"));
        assert!(report.contains("Cycle 1: 3 edges, length: 6, ABC"));
        assert!(report.contains("Cycle 2: 5 edges, length: 5, CDEFG"));
        assert!(report.contains("Shapes found: 2"));
        assert!(report.contains("1 of 2 graphs contain polygons."));
    }

    #[test]
    fn test_human_report_no_cycles() {
        let generator = HumanReportGenerator::new(None, false);
        let analyses = sample_analyses();
        let report = plain(&generator.generate_report(&analyses[1..]).unwrap());

        assert!(report.contains("No cycles in this graph"));
        assert!(!report.contains("Polygon census"));
    }

    #[test]
    fn test_human_report_max_cycles() {
        let generator = HumanReportGenerator::new(Some(1), false);
        let report = plain(&generator.generate_report(&sample_analyses()).unwrap());

        assert!(report.contains("Cycle 1:"));
        assert!(!report.contains("Cycle 2:"));
        assert!(report.contains("Showing 1 of 2 cycles"));
    }

    #[test]
    fn test_human_report_show_graph() {
        let generator = HumanReportGenerator::new(None, true);
        let analyses = sample_analyses();
        let report = plain(&generator.generate_report(&analyses[1..]).unwrap());

        assert!(report.contains("Adjacency lists:"));
        assert!(report.contains("B → D (weight: 1), C (weight: 1), A (weight: 1)"));
    }

    #[test]
    fn test_human_report_empty() {
        let generator = HumanReportGenerator::new(None, false);
        let report = plain(&generator.generate_report(&[]).unwrap());
        assert!(report.contains("No graphs were analyzed."));
    }
}

//! GitHub Actions format report generation

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::GraphAnalysis;
use crate::error::PolygonWheelError;
use crate::utils::string::pluralize;

pub struct GitHubReportGenerator;

impl Default for GitHubReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for GitHubReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, PolygonWheelError> {
        let mut output = String::new();

        for analysis in analyses {
            let cycles = analysis.cycles();
            if cycles.is_empty() {
                writeln!(
                    output,
                    "::notice file={},title=Polygon Census::No cycles found ✅",
                    analysis.name()
                )?;
                continue;
            }

            let census = analysis.census();
            writeln!(
                output,
                "::warning file={},title=Polygon Census::Found {} {}: {} triangles, {} \
                 quadrilaterals, {} pentagons, {} larger",
                analysis.name(),
                census.total(),
                pluralize("polygon", census.total()),
                census.triangles,
                census.quadrilaterals,
                census.pentagons,
                census.larger
            )?;

            for cycle in cycles {
                writeln!(
                    output,
                    "::notice file={}::  {} ({} edges, length {})",
                    analysis.name(),
                    cycle.signature(),
                    cycle.edge_count(),
                    cycle.length()
                )?;
            }
        }

        Ok(output)
    }
}

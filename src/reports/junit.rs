//! JUnit XML format report generation
//!
//! Each analyzed graph becomes a test case that fails when it contains
//! cycles, so CI systems can flag graphs expected to be acyclic.

use std::fmt::Write;

use super::ReportGenerator;
use crate::analyzer::GraphAnalysis;
use crate::error::PolygonWheelError;

pub struct JunitReportGenerator;

impl Default for JunitReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JunitReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

impl ReportGenerator for JunitReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, PolygonWheelError> {
        let mut output = String::new();
        let failures = analyses.iter().filter(|a| !a.cycles().is_empty()).count();

        writeln!(output, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            output,
            r#"<testsuites name="polygon-wheel" tests="{}" failures="{}">"#,
            analyses.len(),
            failures
        )?;
        writeln!(
            output,
            r#"  <testsuite name="graph-polygons" tests="{}" failures="{}">"#,
            analyses.len(),
            failures
        )?;

        for analysis in analyses {
            let name = escape_xml(analysis.name());
            if analysis.cycles().is_empty() {
                writeln!(
                    output,
                    r#"    <testcase name="{name}" classname="polygon-wheel" />"#
                )?;
                continue;
            }

            let census = analysis.census();
            writeln!(
                output,
                r#"    <testcase name="{name}" classname="polygon-wheel">"#
            )?;
            writeln!(
                output,
                r#"      <failure message="{} polygons found">"#,
                census.total()
            )?;
            writeln!(
                output,
                "Triangles: {}, quadrilaterals: {}, pentagons: {}, more than 5 edges: {}",
                census.triangles, census.quadrilaterals, census.pentagons, census.larger
            )?;
            for (i, cycle) in analysis.cycles().iter().enumerate() {
                writeln!(
                    output,
                    "Cycle {}: {} edges, length: {}, {}",
                    i + 1,
                    cycle.edge_count(),
                    cycle.length(),
                    cycle.signature()
                )?;
            }
            writeln!(output, r#"      </failure>"#)?;
            writeln!(output, r#"    </testcase>"#)?;
        }

        writeln!(output, r#"  </testsuite>"#)?;
        writeln!(output, r#"</testsuites>"#)?;

        Ok(output)
    }
}

//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::analyzer::GraphAnalysis;
use crate::error::PolygonWheelError;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, analyses: &[GraphAnalysis]) -> Result<String, PolygonWheelError> {
        let graphs: Vec<_> = analyses
            .iter()
            .map(|analysis| {
                let cycles: Vec<_> = analysis
                    .cycles()
                    .iter()
                    .map(|cycle| {
                        json!({
                            "signature": cycle.signature(),
                            "edge_count": cycle.edge_count(),
                            "length": cycle.length(),
                            "kind": cycle.kind(),
                            "route": cycle.route(),
                        })
                    })
                    .collect();

                let rejected: Vec<String> = analysis
                    .rejected_edges()
                    .iter()
                    .map(ToString::to_string)
                    .collect();

                json!({
                    "name": analysis.name(),
                    "has_cycle": analysis.has_cycle(),
                    "cycle_count": analysis.cycles().len(),
                    "census": analysis.census(),
                    "stats": analysis.stats(),
                    "rejected_edges": rejected,
                    "cycles": cycles,
                })
            })
            .collect();

        let report = json!({
            "has_cycles": analyses.iter().any(|a| !a.cycles().is_empty()),
            "graph_count": analyses.len(),
            "graphs": graphs,
        });

        serde_json::to_string_pretty(&report).map_err(PolygonWheelError::Json)
    }
}

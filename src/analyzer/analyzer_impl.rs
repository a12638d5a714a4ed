use std::path::{Path, PathBuf};

use console::style;
use miette::{NamedSource, Result, WrapErr};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::core::{EdgeTriple, VertexId};
use crate::detector::{CycleCollection, CycleFinder, PolygonCensus};
use crate::edge_list_parser::EdgeListParser;
use crate::error::{EdgeListParseError, PolygonWheelError};
use crate::graph::{GraphStats, WeightedGraph};
use crate::input_discovery::InputDiscovery;
use crate::progress::ProgressReporter;

/// Everything learned about one graph
#[derive(Debug, Clone)]
pub struct GraphAnalysis {
    name: String,
    graph: WeightedGraph,
    has_cycle: bool,
    cycles: CycleCollection,
    census: PolygonCensus,
    stats: GraphStats,
    rejected_edges: Vec<EdgeTriple>,
}

impl GraphAnalysis {
    /// Build a graph from parsed edges, find its cycles, sort and classify
    /// them
    ///
    /// With `skip_invalid_edges`, edges the graph rejects are skipped and
    /// kept in [`rejected_edges`](Self::rejected_edges); otherwise the first
    /// rejection is returned as the error.
    pub fn from_edges(
        name: impl Into<String>,
        edges: &[EdgeTriple],
        skip_invalid_edges: bool,
    ) -> Result<Self, PolygonWheelError> {
        Self::build(name.into(), edges, skip_invalid_edges, None)
    }

    /// Same as [`from_edges`](Self::from_edges); with `source`, a rejected
    /// edge is reported at its location in the text
    fn build(
        name: String,
        edges: &[EdgeTriple],
        skip_invalid_edges: bool,
        source: Option<&str>,
    ) -> Result<Self, PolygonWheelError> {
        let mut graph = WeightedGraph::new();
        let mut rejected_edges = Vec::new();

        for edge in edges {
            if let Err(e) = graph.add_triple(edge) {
                if !skip_invalid_edges {
                    return Err(match source {
                        Some(content) => located_rejection(&name, content, edge, &e),
                        None => e,
                    });
                }
                warn!(file = %name, edge = %edge, error = %e, "skipping rejected edge");
                rejected_edges.push(*edge);
            }
        }

        let mut finder = CycleFinder::new();
        finder.find_cycles(&mut graph)?;
        finder.sort_by_edge_count();

        let census = finder.census();
        let has_cycle = finder.has_cycle();
        let stats = graph.stats();
        info!(
            file = %name,
            edges = stats.edges,
            cycles = census.total(),
            "graph analyzed"
        );

        Ok(Self {
            name,
            graph,
            has_cycle,
            cycles: finder.into_cycles(),
            census,
            stats,
            rejected_edges,
        })
    }

    /// Keep only the cycles passing through `vertex`, recounting the census
    pub fn focus_on(&mut self, vertex: VertexId) {
        self.cycles.retain_containing(vertex);
        self.census = PolygonCensus::from_cycles(&self.cycles);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Whether the search saw any back edge in the graph
    pub fn has_cycle(&self) -> bool {
        self.has_cycle
    }

    /// Found cycles, sorted by ascending edge count
    pub fn cycles(&self) -> &CycleCollection {
        &self.cycles
    }

    pub fn census(&self) -> PolygonCensus {
        self.census
    }

    pub fn stats(&self) -> GraphStats {
        self.stats
    }

    pub fn rejected_edges(&self) -> &[EdgeTriple] {
        &self.rejected_edges
    }
}

fn located_rejection(
    name: &str,
    content: &str,
    edge: &EdgeTriple,
    error: &PolygonWheelError,
) -> PolygonWheelError {
    PolygonWheelError::EdgeListParseError(Box::new(EdgeListParseError {
        file: name.to_string(),
        reason: error.to_string(),
        source_code: NamedSource::new(name, content.to_string()),
        span: edge.span,
    }))
}

/// Analyzes edge-list files in parallel
pub struct GraphAnalyzer {
    skip_invalid_edges: bool,
    analyses: Vec<GraphAnalysis>,
    failures: Vec<(PathBuf, miette::Error)>,
}

impl Default for GraphAnalyzer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GraphAnalyzer {
    pub fn new(skip_invalid_edges: bool) -> Self {
        Self {
            skip_invalid_edges,
            analyses: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Parse and analyze text holding an edge list
    ///
    /// Edges rejected by the graph are reported with their location in
    /// `content`.
    pub fn analyze_source(
        &self,
        name: &str,
        content: &str,
    ) -> Result<GraphAnalysis, PolygonWheelError> {
        let edges = EdgeListParser::new(name, content).parse()?;
        GraphAnalysis::build(name.to_string(), &edges, self.skip_invalid_edges, Some(content))
    }

    fn analyze_file(&self, path: &Path) -> Result<GraphAnalysis> {
        let content =
            std::fs::read_to_string(path).map_err(|e| PolygonWheelError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(self.analyze_source(&path.display().to_string(), &content)?)
    }

    /// Discover edge-list files under `paths` and analyze each of them
    ///
    /// Files that fail are recorded in [`failures`](Self::failures) and
    /// reported as warnings; the remaining files are still analyzed.
    pub fn analyze_paths(
        &mut self,
        paths: &[PathBuf],
        pattern: &str,
        mut progress: Option<&mut ProgressReporter>,
    ) -> Result<()> {
        if let Some(p) = progress.as_deref_mut() {
            p.start_discovery();
        }

        let mut discovery =
            InputDiscovery::new(pattern).wrap_err("Failed to prepare input discovery")?;
        let files = discovery.discover_all(paths, progress.as_deref());

        if let Some(p) = progress.as_deref_mut() {
            p.finish_discovery(files.len());
        }
        discovery.report_warnings();

        if let Some(p) = progress.as_deref_mut() {
            p.start_analysis(files.len());
        }

        let reporter = progress.as_deref();
        let (successes, errors): (Vec<_>, Vec<_>) = files
            .into_par_iter()
            .map(|path| {
                let result = self
                    .analyze_file(&path)
                    .wrap_err_with(|| format!("Failed to analyze '{}'", path.display()));
                if let Some(p) = reporter {
                    p.update_analysis_progress(&path.display().to_string());
                }
                result.map_err(|e| (path, e))
            })
            .partition_map(|result| match result {
                Ok(v) => rayon::iter::Either::Left(v),
                Err(e) => rayon::iter::Either::Right(e),
            });

        self.report_processing_errors(&errors);

        self.analyses.extend(successes);
        self.analyses.sort_by(|a, b| a.name.cmp(&b.name));
        self.failures.extend(errors);

        if let Some(p) = progress.as_deref_mut() {
            p.finish_analysis(self.total_cycles());
        }

        Ok(())
    }

    fn report_processing_errors(&self, errors: &[(PathBuf, miette::Error)]) {
        for (path, error) in errors {
            eprintln!(
                "{} Failed to analyze '{}': {:?}",
                style("⚠").yellow(),
                path.display(),
                error
            );
        }
    }

    pub fn analyses(&self) -> &[GraphAnalysis] {
        &self.analyses
    }

    pub fn analyses_mut(&mut self) -> &mut [GraphAnalysis] {
        &mut self.analyses
    }

    pub fn failures(&self) -> &[(PathBuf, miette::Error)] {
        &self.failures
    }

    pub fn total_cycles(&self) -> usize {
        self.analyses.iter().map(|a| a.cycles().len()).sum()
    }

    pub fn any_cycle(&self) -> bool {
        self.analyses.iter().any(|a| !a.cycles().is_empty())
    }
}

//! Integration tests for polygon-wheel using the library interface

use std::fs;
use std::path::{Path, PathBuf};

use polygon_wheel::analyzer::{GraphAnalysis, GraphAnalyzer};
use polygon_wheel::core::VertexId;
use polygon_wheel::error::PolygonWheelError;
use polygon_wheel::reports::{JsonReportGenerator, ReportGenerator};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

fn analyze(content: &str) -> GraphAnalysis {
    GraphAnalyzer::new(false)
        .analyze_source("graph.txt", content)
        .unwrap()
}

fn signatures(analysis: &GraphAnalysis) -> Vec<String> {
    analysis
        .cycles()
        .iter()
        .map(|cycle| cycle.signature().to_string())
        .collect()
}

fn file_name(analysis: &GraphAnalysis) -> String {
    Path::new(analysis.name())
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

#[test]
fn test_acyclic_graph_has_no_cycles() {
    let analysis = analyze("A B 1\nB C 2\nC D 3\nB E 4\n");

    assert!(!analysis.has_cycle());
    assert!(analysis.cycles().is_empty());
    assert_eq!(analysis.census().total(), 0);
    assert_eq!(analysis.stats().circuit_rank, 0);
}

#[test]
fn test_triangle() {
    let analysis = analyze("A B 1\nB C 2\nC A 3\n");

    assert!(analysis.has_cycle());
    assert_eq!(signatures(&analysis), vec!["ABC"]);

    let cycle = &analysis.cycles().as_slice()[0];
    assert_eq!(cycle.edge_count(), 3);
    assert_eq!(cycle.length(), 6);
    assert_eq!(analysis.census().triangles, 1);
}

#[test]
fn test_square() {
    let analysis = analyze("A B 1\nB C 1\nC D 1\nD A 1\n");

    assert_eq!(signatures(&analysis), vec!["ABCD"]);
    let cycle = &analysis.cycles().as_slice()[0];
    assert_eq!(cycle.edge_count(), 4);
    assert_eq!(cycle.length(), 4);
    assert_eq!(analysis.census().quadrilaterals, 1);
}

#[test]
fn test_disjoint_triangles_are_both_found() {
    // The second triangle only holds late letters so it is reached from its
    // own outer root.
    let analysis = analyze("X Y 1\nY Z 1\nZ X 1\nA B 2\nB C 2\nC A 2\n");

    assert_eq!(signatures(&analysis), vec!["ABC", "XYZ"]);
    assert_eq!(analysis.census().triangles, 2);
    assert_eq!(analysis.stats().components, 2);
}

#[test]
fn test_parallel_edges_do_not_double_count() {
    let analysis = analyze("A B 1\nA B 1\nB C 2\nC A 3\n");

    assert_eq!(signatures(&analysis), vec!["ABC"]);
    assert_eq!(analysis.census().total(), 1);
}

#[test]
fn test_census_matches_cycles_and_order_is_ascending() {
    let graphs = [
        "A B 1\nB C 1\nC D 1\nD A 1\nA C 1\n",
        "A B 1\nB C 1\nC D 1\nD E 1\nE F 1\nF A 1\nA D 1\n",
        "A B 1\nA C 1\nA D 1\nB C 1\nB D 1\nC D 1\n",
        "A B 1\nB C 1\nC D 1\nD E 1\nE A 1\nC F 1\nF G 1\nG C 1\n",
    ];

    for content in graphs {
        let analysis = analyze(content);
        let census = analysis.census();
        assert_eq!(
            census.triangles + census.quadrilaterals + census.pentagons + census.larger,
            analysis.cycles().len()
        );

        let counts: Vec<usize> = analysis.cycles().iter().map(|c| c.edge_count()).collect();
        assert!(counts.windows(2).all(|pair| pair[0] <= pair[1]), "{counts:?}");
    }
}

#[test]
fn test_comments_and_free_layout() {
    let analysis = analyze("# pentagon\nA B 1 B C 1\n\n  C D 1\nD E 1 E A 1\n");

    assert_eq!(signatures(&analysis), vec!["ABCDE"]);
    assert_eq!(analysis.census().pentagons, 1);
}

#[test]
fn test_strict_mode_reports_location_of_self_loop() {
    let content = "A B 1\nC C 7\n";
    let result = GraphAnalyzer::new(false).analyze_source("loops.txt", content);

    match result {
        Err(PolygonWheelError::EdgeListParseError(error)) => {
            assert_eq!(error.file, "loops.txt");
            assert!(error.reason.contains("Self-loop on vertex 'C'"));
            let span = error.span.unwrap();
            assert_eq!(&content[span.offset()..span.offset() + span.len()], "C C 7");
        }
        other => panic!("Expected EdgeListParseError, got {other:?}"),
    }
}

#[test]
fn test_skip_mode_keeps_rejected_edges() {
    let analysis = GraphAnalyzer::new(true)
        .analyze_source("loops.txt", "A B 1\nB B 2\nB C 1\nC A 1\n")
        .unwrap();

    assert_eq!(analysis.rejected_edges().len(), 1);
    assert_eq!(analysis.rejected_edges()[0].to_string(), "B B 2");
    assert_eq!(signatures(&analysis), vec!["ABC"]);
}

#[test]
fn test_malformed_weight_is_an_error() {
    let result = GraphAnalyzer::new(true).analyze_source("bad.txt", "A B x\n");
    assert!(matches!(result, Err(PolygonWheelError::EdgeListParseError(_))));
}

#[test]
fn test_focus_on_vertex() {
    let mut analysis = analyze("A B 1\nB C 1\nC A 1\nC D 1\nD E 1\nE C 1\n");
    assert_eq!(analysis.census().triangles, 2);

    analysis.focus_on(VertexId::from_label('E').unwrap());

    assert_eq!(signatures(&analysis), vec!["CDE"]);
    assert_eq!(analysis.census().total(), 1);
}

#[test]
fn test_analyze_directory() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_graph(root, "triangle.txt", "A B 1\nB C 2\nC A 3\n");
    write_graph(root, "nested/square.txt", "A B 1\nB C 1\nC D 1\nD A 1\n");
    write_graph(root, "notes.md", "A B 1\nB C 1\nC A 1\n");
    write_graph(root, ".hidden/ignored.txt", "A B 1\nB C 1\nC A 1\n");
    write_graph(root, "target/ignored.txt", "A B 1\nB C 1\nC A 1\n");

    let mut analyzer = GraphAnalyzer::new(false);
    analyzer
        .analyze_paths(&[root.to_path_buf()], "*.txt", None)
        .unwrap();

    let names: Vec<String> = analyzer.analyses().iter().map(file_name).collect();
    assert_eq!(names, vec!["square.txt", "triangle.txt"]);
    assert!(analyzer.failures().is_empty());
    assert_eq!(analyzer.total_cycles(), 2);
    assert!(analyzer.any_cycle());
}

#[test]
fn test_failing_file_does_not_stop_the_others() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    write_graph(root, "good.txt", "A B 1\nB C 2\nC A 3\n");
    let bad = write_graph(root, "bad.txt", "A B 1\nB c 2\n");

    let mut analyzer = GraphAnalyzer::new(false);
    analyzer
        .analyze_paths(&[root.to_path_buf()], "*.txt", None)
        .unwrap();

    assert_eq!(analyzer.analyses().len(), 1);
    assert_eq!(file_name(&analyzer.analyses()[0]), "good.txt");
    assert_eq!(analyzer.failures().len(), 1);
    assert_eq!(analyzer.failures()[0].0, bad);
}

#[test]
fn test_explicit_file_ignores_pattern() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_graph(temp_dir.path(), "graph.edges", "A B 1\nB C 2\nC A 3\n");

    let mut analyzer = GraphAnalyzer::new(false);
    analyzer.analyze_paths(&[path], "*.txt", None).unwrap();

    assert_eq!(analyzer.analyses().len(), 1);
}

#[test]
fn test_json_report_for_directory() {
    let temp_dir = TempDir::new().unwrap();
    write_graph(
        temp_dir.path(),
        "diagonal.txt",
        "A B 1\nB C 2\nC D 3\nD A 4\nA C 5\n",
    );

    let mut analyzer = GraphAnalyzer::new(false);
    analyzer
        .analyze_paths(&[temp_dir.path().to_path_buf()], "*.txt", None)
        .unwrap();

    let report = JsonReportGenerator::new()
        .generate_report(analyzer.analyses())
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["has_cycles"], true);
    let graph = &json["graphs"][0];
    assert_eq!(graph["cycle_count"], 3);
    assert_eq!(graph["census"]["triangles"], 2);
    assert_eq!(graph["census"]["quadrilaterals"], 1);
    assert_eq!(graph["cycles"][2]["signature"], "ABCD");
    assert_eq!(graph["cycles"][2]["length"], 10);
}

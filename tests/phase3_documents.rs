//! Phase 3 tests: Graph documents + CLI commands.

use std::io::{Cursor, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use graph_reach::cli::commands;
use graph_reach::engine::QueryEngine;
use graph_reach::format::{DocumentReader, DocumentWriter, GraphDocument};
use graph_reach::graph::{MapGraph, VertexGraphBuilder};
use graph_reach::grid::{Board, Position};
use graph_reach::types::error::GraphError;
use graph_reach::types::{Professional, VertexId};

// ==================== Helpers ====================

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_temp(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const VERTEX_DOC: &str = r#"{
    "kind": "vertex",
    "vertices": [5, 4, 8, 7, 9, 1],
    "edges": [[0, 1], [0, 2], [1, 3], [2, 3], [2, 4], [5, 3]]
}"#;

const MAP_DOC: &str = r#"{
    "kind": "map",
    "adjacency": {"1": [2], "2": [-1, 3], "3": []}
}"#;

const NETWORK_DOC: &str = r#"{
    "kind": "network",
    "people": [
        {"name": "Ann", "company": "Acme"},
        {"name": "Bob", "company": "Globex"}
    ],
    "connections": [[0, 1]]
}"#;

const BOARD_DOC: &str = r#"{"kind": "board", "rows": ["  X", "X  ", "   "]}"#;

// ==================== Reader Tests ====================

#[test]
fn test_read_vertex_document() {
    let graph = DocumentReader::read_from_str(VERTEX_DOC)
        .unwrap()
        .into_vertex_graph()
        .unwrap();

    assert_eq!(graph.vertex_count(), 6);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(
        QueryEngine::new().odd_vertices(&graph, Some(VertexId::new(0))),
        3
    );
}

#[test]
fn test_vertex_document_edges_default_to_empty() {
    let graph = DocumentReader::read_from_str(r#"{"kind": "vertex", "vertices": [1, 2]}"#)
        .unwrap()
        .into_vertex_graph()
        .unwrap();

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_read_map_document_with_negative_neighbor() {
    let graph = DocumentReader::read_from_str(MAP_DOC)
        .unwrap()
        .into_map_graph()
        .unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert!(!graph.contains(-1));
    assert!(QueryEngine::new().positive_path_exists(&graph, 1, 3));
}

#[test]
fn test_read_map_document_negative_key() {
    let graph = DocumentReader::read_from_str(r#"{"kind": "map", "adjacency": {"-4": [1]}}"#)
        .unwrap()
        .into_map_graph()
        .unwrap();

    assert!(graph.contains(-4));
}

#[test]
fn test_map_document_bad_key_rejected() {
    let result = DocumentReader::read_from_str(r#"{"kind": "map", "adjacency": {"one": [2]}}"#)
        .unwrap()
        .into_map_graph();

    match result {
        Err(GraphError::InvalidArgument(msg)) => assert!(msg.contains("one")),
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_read_network_document() {
    let network = DocumentReader::read_from_str(NETWORK_DOC)
        .unwrap()
        .into_network()
        .unwrap();

    assert_eq!(network.vertex_count(), 2);
    assert!(QueryEngine::new().has_extended_connection_at_company(
        &network,
        Some(VertexId::new(0)),
        "Globex"
    ));
}

#[test]
fn test_dangling_edge_rejected() {
    let result = DocumentReader::read_from_str(
        r#"{"kind": "vertex", "vertices": [1], "edges": [[0, 3]]}"#,
    )
    .unwrap()
    .into_vertex_graph();

    match result {
        Err(GraphError::VertexNotFound(3)) => {}
        other => panic!("Expected VertexNotFound(3), got {:?}", other.is_ok()),
    }
}

#[test]
fn test_wrong_kind_rejected() {
    let document = DocumentReader::read_from_str(MAP_DOC).unwrap();
    match document.into_vertex_graph() {
        Err(GraphError::WrongDocumentKind { expected, found }) => {
            assert_eq!(expected, "vertex");
            assert_eq!(found, "map");
        }
        other => panic!("Expected WrongDocumentKind, got {:?}", other.is_ok()),
    }
}

#[test]
fn test_malformed_json_rejected() {
    match DocumentReader::read_from_str(r#"{"kind": "vertex", "vertices": [1,"#) {
        Err(GraphError::Json(_)) => {}
        other => panic!("Expected Json error, got {:?}", other),
    }
    match DocumentReader::read_from_str(r#"{"kind": "hypergraph"}"#) {
        Err(GraphError::Json(_)) => {}
        other => panic!("Expected Json error, got {:?}", other),
    }
}

#[test]
fn test_read_from_reader() {
    let mut cursor = Cursor::new(BOARD_DOC.as_bytes());
    let board = DocumentReader::read_from(&mut cursor)
        .unwrap()
        .into_board()
        .unwrap();

    assert_eq!(board.height(), 3);
    assert_eq!(board.width(), 3);
}

#[test]
fn test_missing_file_is_io_error() {
    match DocumentReader::read_from_file(Path::new("/nonexistent/graph.json")) {
        Err(GraphError::Io(_)) => {}
        other => panic!("Expected Io error, got {:?}", other),
    }
}

// ==================== Writer Tests ====================

#[test]
fn test_vertex_graph_file_roundtrip() {
    init_logger();
    let mut b = VertexGraphBuilder::new();
    let x = b.vertex(3);
    let y = b.vertex(-6);
    b.link(x, y).link(y, x).link(y, y);
    let graph = b.build().unwrap();

    let file = NamedTempFile::new().unwrap();
    let document = GraphDocument::from_vertex_graph(&graph);
    DocumentWriter::pretty()
        .write_to_file(&document, file.path())
        .unwrap();

    let read_back = DocumentReader::read_from_file(file.path()).unwrap();
    assert_eq!(read_back, document);
    let rebuilt = read_back.into_vertex_graph().unwrap();
    assert_eq!(rebuilt.neighbors(y), graph.neighbors(y));
}

#[test]
fn test_map_graph_written_sorted() {
    let graph: MapGraph = vec![(2, vec![9, -1, 4])].into_iter().collect();
    let text = DocumentWriter::new()
        .to_string(&GraphDocument::from_map_graph(&graph))
        .unwrap();

    assert!(text.contains(r#""kind":"map""#));
    assert!(text.contains(r#""2":[-1,4,9]"#));
}

#[test]
fn test_network_document_roundtrip() {
    let mut b = VertexGraphBuilder::new();
    let ann = b.vertex(Professional::new("Ann", "Acme"));
    let bob = b.vertex(Professional::new("Bob", "Globex"));
    b.link(bob, ann);
    let network = b.build().unwrap();

    let mut buf = Vec::new();
    DocumentWriter::new()
        .write_to(&GraphDocument::from_network(&network), &mut buf)
        .unwrap();
    let rebuilt = DocumentReader::read_from(&mut Cursor::new(buf))
        .unwrap()
        .into_network()
        .unwrap();

    assert_eq!(rebuilt.data(ann), network.data(ann));
    assert_eq!(rebuilt.neighbors(bob), &[ann]);
}

#[test]
fn test_board_document_roundtrip() {
    let board = Board::from_rows(&[" X", "é "]).unwrap();

    let document = GraphDocument::from_board(&board);
    assert_eq!(document.kind(), "board");

    let json = DocumentWriter::new().to_string(&document).unwrap();
    let rebuilt = DocumentReader::read_from_str(&json)
        .unwrap()
        .into_board()
        .unwrap();

    assert_eq!(rebuilt, board);
    assert_eq!(rebuilt.width(), 2);
    assert_eq!(rebuilt.cell(Position::new(1, 0)), Some('é'));
    assert!(!rebuilt.is_open(Position::new(0, 1)));
}

// ==================== Command Tests ====================

#[test]
fn test_cmd_info_vertex() {
    let file = write_temp(VERTEX_DOC);
    let report = commands::cmd_info(file.path()).unwrap();

    assert_eq!(report.json["kind"], "vertex");
    assert_eq!(report.json["vertices"], 6);
    assert_eq!(report.json["edges"], 6);
    assert!(report.text.contains("Vertices: 6"));
}

#[test]
fn test_report_render_text_and_json() {
    let file = write_temp(VERTEX_DOC);
    let report = commands::cmd_info(file.path()).unwrap();

    assert_eq!(report.render(false).unwrap(), report.text);

    let rendered = report.render(true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, report.json);
    assert!(rendered.contains('\n'));
}

#[test]
fn test_cmd_info_board() {
    let file = write_temp(BOARD_DOC);
    let report = commands::cmd_info(file.path()).unwrap();

    assert_eq!(report.json["rows"], 3);
    assert_eq!(report.json["columns"], 3);
}

#[test]
fn test_cmd_vertex_queries() {
    let file = write_temp(VERTEX_DOC);
    let path = file.path();

    assert_eq!(commands::cmd_odd(path, Some(0)).unwrap().json["odd_vertices"], 3);
    assert_eq!(commands::cmd_sum_even(path, Some(0)).unwrap().json["sum_even"], 12);
    assert_eq!(commands::cmd_count_above(path, Some(0), 6).unwrap().json["count"], 3);
    assert_eq!(commands::cmd_contains(path, Some(0), 9).unwrap().json["found"], true);
    assert_eq!(commands::cmd_contains(path, Some(0), 1).unwrap().json["found"], false);

    let sorted = commands::cmd_collect(path, Some(0), true).unwrap();
    assert_eq!(sorted.json["values"], serde_json::json!([4, 5, 7, 8, 9]));
    assert_eq!(sorted.text, "Reachable values: [4, 5, 7, 8, 9]");
}

#[test]
fn test_cmd_absent_start() {
    let file = write_temp(VERTEX_DOC);

    let report = commands::cmd_odd(file.path(), None).unwrap();
    assert_eq!(report.json["odd_vertices"], 0);
    assert!(report.json["start"].is_null());

    let report = commands::cmd_collect(file.path(), None, false).unwrap();
    assert_eq!(report.json["values"], serde_json::json!([]));
}

#[test]
fn test_cmd_two_way() {
    let file = write_temp(
        r#"{"kind": "vertex", "vertices": [0, 0, 0], "edges": [[0, 1], [1, 0], [1, 2]]}"#,
    );

    assert_eq!(commands::cmd_two_way(file.path(), 0, 1).unwrap().json["two_way"], true);
    assert_eq!(commands::cmd_two_way(file.path(), 1, 2).unwrap().json["two_way"], false);
}

#[test]
fn test_cmd_map_queries() {
    let file = write_temp(MAP_DOC);

    let reachable = commands::cmd_reachable(file.path(), 1).unwrap();
    assert_eq!(reachable.json["ids"], serde_json::json!([1, 2, 3]));

    let path = commands::cmd_positive_path(file.path(), 1, 3).unwrap();
    assert_eq!(path.json["exists"], true);
    assert_eq!(path.text, "Positive path 1 -> 3: exists");
}

#[test]
fn test_cmd_works_at() {
    let file = write_temp(NETWORK_DOC);

    let report = commands::cmd_works_at(file.path(), Some(0), "Globex").unwrap();
    assert_eq!(report.json["found"], true);
    assert_eq!(report.json["person"], "Ann");

    let report = commands::cmd_works_at(file.path(), None, "Acme").unwrap();
    assert_eq!(report.json["found"], false);
}

#[test]
fn test_cmd_moves() {
    let file = write_temp(BOARD_DOC);

    let report = commands::cmd_moves(file.path(), 1, 2, "0,1; -1,0; 1,0; 1,-1").unwrap();
    assert_eq!(
        report.json["moves"],
        serde_json::json!([{"row": 2, "col": 2}, {"row": 2, "col": 1}])
    );
    assert_eq!(report.text, "Next moves: [(2, 2), (2, 1)]");
}

#[test]
fn test_cmd_wrong_kind() {
    let file = write_temp(BOARD_DOC);
    match commands::cmd_reachable(file.path(), 1) {
        Err(GraphError::WrongDocumentKind { expected, found }) => {
            assert_eq!(expected, "map");
            assert_eq!(found, "board");
        }
        other => panic!("Expected WrongDocumentKind, got {:?}", other),
    }
}

#[test]
fn test_parse_directions_rejects_garbage() {
    assert_eq!(commands::parse_directions("0,1;;1,0").unwrap().len(), 2);
    match commands::parse_directions("0;1") {
        Err(GraphError::InvalidArgument(_)) => {}
        other => panic!("Expected InvalidArgument, got {:?}", other),
    }
}

//! CLI command implementations.
//!
//! Each command loads a graph document, runs one query and returns a
//! [`Report`] that the binary prints as text or JSON.

use std::path::Path;

use log::debug;
use serde_json::json;

use crate::engine::QueryEngine;
use crate::format::{DocumentReader, GraphDocument};
use crate::grid::{next_moves, Direction, Position};
use crate::types::{GraphResult, VertexId};

/// The outcome of one command, renderable as text or JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Human-readable rendering.
    pub text: String,
    /// Machine-readable rendering.
    pub json: serde_json::Value,
}

impl Report {
    fn new(text: String, json: serde_json::Value) -> Self {
        Self { text, json }
    }

    /// Render the report as text, or as pretty-printed JSON when `json` is set.
    pub fn render(&self, json: bool) -> GraphResult<String> {
        if json {
            Ok(serde_json::to_string_pretty(&self.json)?)
        } else {
            Ok(self.text.clone())
        }
    }

    /// Print the report to stdout.
    pub fn print(&self, json: bool) -> GraphResult<()> {
        println!("{}", self.render(json)?);
        Ok(())
    }
}

fn start_handle(start: Option<usize>) -> Option<VertexId> {
    start.map(VertexId::new)
}

/// Display information about a graph document.
pub fn cmd_info(path: &Path) -> GraphResult<Report> {
    let document = DocumentReader::read_from_file(path)?;
    let kind = document.kind();
    let (vertices, edges) = match document {
        GraphDocument::Vertex { .. } => {
            let graph = document.into_vertex_graph()?;
            (graph.vertex_count(), graph.edge_count())
        }
        GraphDocument::Map { .. } => {
            let graph = document.into_map_graph()?;
            (graph.vertex_count(), graph.edge_count())
        }
        GraphDocument::Network { .. } => {
            let network = document.into_network()?;
            (network.vertex_count(), network.edge_count())
        }
        GraphDocument::Board { .. } => {
            let board = document.into_board()?;
            let text = format!(
                "File: {}\nKind: board\nRows: {}\nColumns: {}",
                path.display(),
                board.height(),
                board.width()
            );
            let info = json!({
                "file": path.display().to_string(),
                "kind": "board",
                "rows": board.height(),
                "columns": board.width(),
            });
            return Ok(Report::new(text, info));
        }
    };

    let text = format!(
        "File: {}\nKind: {}\nVertices: {}\nEdges: {}",
        path.display(),
        kind,
        vertices,
        edges
    );
    let info = json!({
        "file": path.display().to_string(),
        "kind": kind,
        "vertices": vertices,
        "edges": edges,
    });
    Ok(Report::new(text, info))
}

/// Count odd-valued vertices reachable from `start`.
pub fn cmd_odd(path: &Path, start: Option<usize>) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_vertex_graph()?;
    let count = QueryEngine::new().odd_vertices(&graph, start_handle(start));
    Ok(Report::new(
        format!("Odd vertices reachable: {}", count),
        json!({"start": start, "odd_vertices": count}),
    ))
}

/// Sum even-valued vertices reachable from `start`.
pub fn cmd_sum_even(path: &Path, start: Option<usize>) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_vertex_graph()?;
    let sum = QueryEngine::new().sum_even_vertices(&graph, start_handle(start));
    Ok(Report::new(
        format!("Sum of even vertices reachable: {}", sum),
        json!({"start": start, "sum_even": sum}),
    ))
}

/// Count vertices above `threshold` reachable from `start`.
pub fn cmd_count_above(path: &Path, start: Option<usize>, threshold: i32) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_vertex_graph()?;
    let count = QueryEngine::new().count_above(&graph, start_handle(start), threshold);
    Ok(Report::new(
        format!("Vertices above {} reachable: {}", threshold, count),
        json!({"start": start, "threshold": threshold, "count": count}),
    ))
}

/// Test whether `target` is reachable from `start`.
pub fn cmd_contains(path: &Path, start: Option<usize>, target: i32) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_vertex_graph()?;
    let found = QueryEngine::new().contains_value(&graph, start_handle(start), &target);
    Ok(Report::new(
        format!(
            "Value {} {} reachable",
            target,
            if found { "is" } else { "is not" }
        ),
        json!({"start": start, "target": target, "found": found}),
    ))
}

/// List values reachable from `start`, in visit order or sorted.
pub fn cmd_collect(path: &Path, start: Option<usize>, sorted: bool) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_vertex_graph()?;
    let engine = QueryEngine::new();
    let values = if sorted {
        engine.sorted_reachable(&graph, start_handle(start))
    } else {
        engine.collect_values(&graph, start_handle(start))
    };
    Ok(Report::new(
        format!("Reachable values: {}", format_values(&values)),
        json!({"start": start, "sorted": sorted, "values": values}),
    ))
}

/// Test whether two vertices reach each other.
pub fn cmd_two_way(path: &Path, a: usize, b: usize) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_vertex_graph()?;
    let connected =
        QueryEngine::new().two_way(&graph, Some(VertexId::new(a)), Some(VertexId::new(b)));
    Ok(Report::new(
        format!(
            "Vertices {} and {} {} mutually reachable",
            a,
            b,
            if connected { "are" } else { "are not" }
        ),
        json!({"a": a, "b": b, "two_way": connected}),
    ))
}

/// List ids reachable from `start` in a map graph.
pub fn cmd_reachable(path: &Path, start: i32) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_map_graph()?;
    let ids = QueryEngine::new().sorted_reachable_ids(&graph, start);
    Ok(Report::new(
        format!("Reachable ids: {}", format_values(&ids)),
        json!({"start": start, "ids": ids}),
    ))
}

/// Test for a path of non-negative ids from `start` to `end`.
pub fn cmd_positive_path(path: &Path, start: i32, end: i32) -> GraphResult<Report> {
    let graph = DocumentReader::read_from_file(path)?.into_map_graph()?;
    let exists = QueryEngine::new().positive_path_exists(&graph, start, end);
    Ok(Report::new(
        format!(
            "Positive path {} -> {}: {}",
            start,
            end,
            if exists { "exists" } else { "none" }
        ),
        json!({"start": start, "end": end, "exists": exists}),
    ))
}

/// Test whether anyone in `person`'s extended network works at `company`.
pub fn cmd_works_at(path: &Path, person: Option<usize>, company: &str) -> GraphResult<Report> {
    let network = DocumentReader::read_from_file(path)?.into_network()?;
    let person = start_handle(person);
    let name = person
        .and_then(|id| network.data(id))
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "<nobody>".to_string());
    let found = QueryEngine::new().has_extended_connection_at_company(&network, person, company);
    Ok(Report::new(
        format!(
            "{} {} a connection at {}",
            name,
            if found { "has" } else { "has no" },
            company
        ),
        json!({"person": name, "company": company, "found": found}),
    ))
}

/// List legal single-step moves from `(row, col)`.
///
/// `directions` is a `;`-separated list of `row,col` offsets.
pub fn cmd_moves(path: &Path, row: usize, col: usize, directions: &str) -> GraphResult<Report> {
    let board = DocumentReader::read_from_file(path)?.into_board()?;
    let directions = parse_directions(directions)?;
    debug!("checking {} directions from ({}, {})", directions.len(), row, col);
    let moves = next_moves(&board, Position::new(row, col), &directions);
    let rendered: Vec<String> = moves
        .iter()
        .map(|p| format!("({}, {})", p.row, p.col))
        .collect();
    Ok(Report::new(
        format!("Next moves: [{}]", rendered.join(", ")),
        json!({"row": row, "col": col, "moves": moves}),
    ))
}

/// Parse `"0,1;-1,0"` into directions. Empty segments are ignored.
pub fn parse_directions(text: &str) -> GraphResult<Vec<Direction>> {
    text.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Direction::parse)
        .collect()
}

fn format_values(values: &[i32]) -> String {
    let parts: Vec<String> = values.iter().map(i32::to_string).collect();
    format!("[{}]", parts.join(", "))
}

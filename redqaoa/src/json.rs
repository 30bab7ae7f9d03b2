// Red-QAOA - degree-preserving graph reduction for QAOA
// Copyright (C) The Red-QAOA contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Json encoding of graph sets.
//!
//! A graph set is a json array of edge lists, one per graph:
//!
//! ```json
//! [[[0, 1], [1, 2]], [[0, 1], [0, 2], [1, 2]]]
//! ```
//!
//! Vertices are the endpoints of the listed edges, so isolated vertices do
//! not survive a round trip.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::ops::RangeInclusive;
use std::path::Path;

use crate::graph::GraphLike;
use crate::hash_graph;

type EdgeList = Vec<(usize, usize)>;

/// Error reading or writing a graph set.
#[derive(Debug, derive_more::Display, derive_more::From)]
pub enum GraphSetError {
    /// Error reading or writing files.
    #[display("IO error: {_0}")]
    IO(std::io::Error),
    /// Malformed json.
    #[display("Error parsing graph set: {_0}")]
    Json(serde_json::Error),
}

impl std::error::Error for GraphSetError {}

fn to_graphs(raw: Vec<EdgeList>, nodes: Option<RangeInclusive<usize>>) -> Vec<hash_graph::Graph> {
    raw.into_iter()
        .map(hash_graph::Graph::from_edges)
        .filter(|g| nodes.as_ref().map_or(true, |r| r.contains(&g.num_vertices())))
        .collect()
}

fn to_edge_list(graph: &impl GraphLike<Node = usize>) -> EdgeList {
    let mut edges: EdgeList = graph
        .edges()
        .into_iter()
        .map(|(s, t)| (s.min(t), s.max(t)))
        .collect();
    edges.sort_unstable();
    edges
}

/// Reads a graph set from its json-encoded representation.
pub fn decode_graph_set(s: &str) -> Result<Vec<hash_graph::Graph>, GraphSetError> {
    let raw: Vec<EdgeList> = serde_json::from_str(s)?;
    Ok(to_graphs(raw, None))
}

/// Reads a graph set from a json-encoded file.
///
/// If `nodes` is given, only graphs whose vertex count lies in that range are
/// kept.
pub fn read_graph_set(
    filename: &Path,
    nodes: Option<RangeInclusive<usize>>,
) -> Result<Vec<hash_graph::Graph>, GraphSetError> {
    let reader = BufReader::new(File::open(filename)?);
    let raw: Vec<EdgeList> = serde_json::from_reader(reader)?;
    let graphs = to_graphs(raw, nodes);
    log::debug!("read {} graphs from {}", graphs.len(), filename.display());
    Ok(graphs)
}

/// Returns the json-encoded representation of a graph set.
///
/// Edges are written as `[min, max]` pairs in sorted order.
pub fn encode_graph_set<G>(graphs: &[G]) -> Result<String, GraphSetError>
where
    G: GraphLike<Node = usize>,
{
    let raw: Vec<EdgeList> = graphs.iter().map(to_edge_list).collect();
    Ok(serde_json::to_string(&raw)?)
}

/// Writes the json-encoded representation of a graph set to a file.
pub fn write_graph_set<G>(graphs: &[G], filename: &Path) -> Result<(), GraphSetError>
where
    G: GraphLike<Node = usize>,
{
    let raw: Vec<EdgeList> = graphs.iter().map(to_edge_list).collect();
    let writer = BufWriter::new(File::create(filename)?);
    serde_json::to_writer(writer, &raw)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::vec_graph;

    #[test]
    fn decode_edge_lists() {
        let gs = decode_graph_set("[[[0, 1], [1, 2]], [[5, 7], [7, 9], [9, 5], [5, 7]]]").unwrap();
        assert_eq!(gs.len(), 2);
        assert_eq!(gs[0].num_vertices(), 3);
        assert_eq!(gs[0].num_edges(), 2);
        assert_eq!(gs[1].num_vertices(), 3);
        assert_eq!(gs[1].num_edges(), 3);
        assert!(gs[1].connected(&9, &7));
    }

    #[test]
    fn encode_is_sorted() {
        let mut g = vec_graph::Graph::with_vertices(3);
        g.add_edge(2, 0);
        g.add_edge(1, 0);
        assert_eq!(encode_graph_set(&[g]).unwrap(), "[[[0,1],[0,2]]]");
    }

    #[test]
    fn malformed_input() {
        let err = decode_graph_set("[[[0, 1, 2]]]").unwrap_err();
        assert!(matches!(err, GraphSetError::Json(_)));
        assert!(err.to_string().starts_with("Error parsing graph set"));
    }

    #[test]
    fn missing_file() {
        let err = read_graph_set(Path::new("/nonexistent/graphs.json"), None).unwrap_err();
        assert!(matches!(err, GraphSetError::IO(_)));
    }
}

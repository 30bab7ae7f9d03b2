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

//! Graphs over arbitrary hashable node identifiers.
//!
//! This is the representation used for input graphs with opaque labels and
//! for the working subgraphs held by an annealing run.

pub use crate::graph::*;
use rustc_hash::{FxHashMap, FxHashSet};

pub type VTab<N, T> = FxHashMap<N, T>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<N: NodeId = usize> {
    edata: VTab<N, FxHashSet<N>>,
    nume: usize,
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeId> Graph<N> {
    /// Initialise a new empty graph
    pub fn new() -> Self {
        Graph {
            edata: FxHashMap::default(),
            nume: 0,
        }
    }

    /// Builds a graph from a list of edges, adding endpoints as needed.
    ///
    /// Self-loops and repeated edges are dropped.
    pub fn from_edges(edges: impl IntoIterator<Item = (N, N)>) -> Self {
        let mut g = Self::new();
        for (s, t) in edges {
            g.add_edge(s, t);
        }
        g
    }

    /// Builds the subgraph of `graph` induced by `nodes`.
    ///
    /// Nodes that are not in `graph` are ignored.
    pub fn induced<G>(graph: &G, nodes: impl IntoIterator<Item = N>) -> Self
    where
        G: GraphLike<Node = N>,
    {
        let mut g = Self::new();
        for v in nodes {
            if graph.contains(&v) {
                g.add_vertex(v);
            }
        }
        let vs: Vec<N> = g.edata.keys().cloned().collect();
        for v in vs {
            for n in graph.neighbors(&v) {
                if g.contains(&n) {
                    g.add_edge(v.clone(), n);
                }
            }
        }
        g
    }

    /// Adds a vertex. Returns false if it was already present.
    pub fn add_vertex(&mut self, v: N) -> bool {
        if self.edata.contains_key(&v) {
            false
        } else {
            self.edata.insert(v, FxHashSet::default());
            true
        }
    }

    /// Adds an edge, inserting missing endpoints.
    ///
    /// Returns false for self-loops and for edges that already exist.
    pub fn add_edge(&mut self, s: N, t: N) -> bool {
        if s == t {
            self.add_vertex(s);
            return false;
        }
        let fresh = self.edata.entry(s.clone()).or_default().insert(t.clone());
        self.edata.entry(t).or_default().insert(s);
        if fresh {
            self.nume += 1;
        }
        fresh
    }

    /// Removes a vertex and its incident edges. Returns false if it was absent.
    pub fn remove_vertex(&mut self, v: &N) -> bool {
        let Some(nhd) = self.edata.remove(v) else {
            return false;
        };
        for n in nhd {
            self.nume -= 1;
            self.remove_half_edge(&n, v);
        }
        true
    }

    /// Removes an edge. Returns false if it was absent.
    pub fn remove_edge(&mut self, s: &N, t: &N) -> bool {
        if self.remove_half_edge(s, t) {
            self.remove_half_edge(t, s);
            self.nume -= 1;
            true
        } else {
            false
        }
    }

    /// Removes `t` from the adjacency set of `s`.
    fn remove_half_edge(&mut self, s: &N, t: &N) -> bool {
        self.edata.get_mut(s).is_some_and(|nhd| nhd.remove(t))
    }
}

impl<N: NodeId> GraphLike for Graph<N> {
    type Node = N;

    fn num_vertices(&self) -> usize {
        self.edata.len()
    }

    fn num_edges(&self) -> usize {
        self.nume
    }

    fn vertices(&self) -> impl Iterator<Item = N> + '_ {
        self.edata.keys().cloned()
    }

    fn neighbors(&self, v: &N) -> impl Iterator<Item = N> + '_ {
        self.edata
            .get(v)
            .into_iter()
            .flat_map(|nhd| nhd.iter().cloned())
    }

    fn contains(&self, v: &N) -> bool {
        self.edata.contains_key(v)
    }

    fn connected(&self, s: &N, t: &N) -> bool {
        self.edata.get(s).is_some_and(|nhd| nhd.contains(t))
    }

    fn degree(&self, v: &N) -> usize {
        self.edata.get(v).map_or(0, |nhd| nhd.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut g: Graph<&str> = Graph::new();
        assert!(g.add_edge("a", "b"));
        assert!(g.add_edge("b", "c"));
        assert!(!g.add_edge("c", "b"));
        assert!(!g.add_edge("c", "c"));
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.num_edges(), 2);
        assert!(g.connected(&"a", &"b"));
        assert!(g.connected(&"b", &"a"));

        assert!(g.remove_vertex(&"b"));
        assert!(!g.remove_vertex(&"b"));
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.num_edges(), 0);
        assert_eq!(g.degree(&"a"), 0);
    }

    #[test]
    fn remove_edge_keeps_vertices() {
        let mut g = Graph::from_edges([(0, 1), (1, 2), (2, 0)]);
        assert!(g.remove_edge(&2, &0));
        assert!(!g.remove_edge(&0, &2));
        assert_eq!(g.num_edges(), 2);
        assert_eq!(g.num_vertices(), 3);
        assert_eq!(g.degree_sum(), 4);
    }

    #[test]
    fn edges_are_reported_once() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let mut edges: Vec<(usize, usize)> = g
            .edges()
            .into_iter()
            .map(|(s, t)| (s.min(t), s.max(t)))
            .collect();
        edges.sort();
        assert_eq!(edges, vec![(0, 1), (0, 2), (0, 3), (1, 2), (2, 3)]);
    }

    #[test]
    fn induced_keeps_internal_edges() {
        let g = Graph::from_edges([(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
        let h = Graph::induced(&g, [0, 1, 2, 9]);
        assert_eq!(h.num_vertices(), 3);
        assert_eq!(h.num_edges(), 3);
        assert!(!h.contains(&3));
        assert!(!h.contains(&9));
    }

    #[test]
    fn connectivity() {
        let mut g = Graph::from_edges([(0, 1), (1, 2)]);
        assert!(g.is_connected());
        g.add_vertex(7);
        assert!(!g.is_connected());
        assert!(!Graph::<usize>::new().is_connected());
    }
}

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

//! Graphs whose vertices are exactly `0..n`.
//!
//! Vertices can be added but never removed, so the labels stay contiguous.
//! Reduced graphs are always returned in this form.

pub use crate::graph::*;
use crate::hash_graph;
use rustc_hash::FxHashMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Graph {
    edata: Vec<Vec<usize>>,
    nume: usize,
}

impl Graph {
    /// Initialise a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// A graph with `n` isolated vertices.
    pub fn with_vertices(n: usize) -> Self {
        Graph {
            edata: vec![Vec::new(); n],
            nume: 0,
        }
    }

    /// The complete graph on `n` vertices.
    pub fn complete(n: usize) -> Self {
        let mut g = Self::with_vertices(n);
        for s in 0..n {
            for t in (s + 1)..n {
                g.add_edge(s, t);
            }
        }
        g
    }

    /// Adds a fresh vertex and returns its index.
    pub fn add_vertex(&mut self) -> usize {
        self.edata.push(Vec::new());
        self.edata.len() - 1
    }

    /// Adds an edge between two existing vertices.
    ///
    /// Returns false for self-loops, repeated edges and unknown vertices.
    pub fn add_edge(&mut self, s: usize, t: usize) -> bool {
        if s == t || s >= self.edata.len() || t >= self.edata.len() || self.connected(&s, &t) {
            return false;
        }
        self.edata[s].push(t);
        self.edata[t].push(s);
        self.nume += 1;
        true
    }

    /// Relabels any graph to contiguous vertices.
    ///
    /// Vertex `i` of the result corresponds to `labels[i]` of the input,
    /// numbered in the order [`GraphLike::vertices`] visits them.
    pub fn relabel<G: GraphLike>(g: &G) -> (Graph, Vec<G::Node>) {
        let labels: Vec<G::Node> = g.vertices().collect();
        let index: FxHashMap<&G::Node, usize> =
            labels.iter().enumerate().map(|(i, v)| (v, i)).collect();
        let mut rg = Graph::with_vertices(labels.len());
        for (s, v) in labels.iter().enumerate() {
            for n in g.neighbors(v) {
                if let Some(&t) = index.get(&n) {
                    if s < t {
                        rg.add_edge(s, t);
                    }
                }
            }
        }
        (rg, labels)
    }
}

impl GraphLike for Graph {
    type Node = usize;

    fn num_vertices(&self) -> usize {
        self.edata.len()
    }

    fn num_edges(&self) -> usize {
        self.nume
    }

    fn vertices(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.edata.len()
    }

    fn neighbors(&self, v: &usize) -> impl Iterator<Item = usize> + '_ {
        self.edata
            .get(*v)
            .into_iter()
            .flat_map(|nhd| nhd.iter().copied())
    }

    fn contains(&self, v: &usize) -> bool {
        *v < self.edata.len()
    }

    fn connected(&self, s: &usize, t: &usize) -> bool {
        self.edata.get(*s).is_some_and(|nhd| nhd.contains(t))
    }

    fn degree(&self, v: &usize) -> usize {
        self.edata.get(*v).map_or(0, |nhd| nhd.len())
    }
}

impl From<&Graph> for hash_graph::Graph<usize> {
    fn from(g: &Graph) -> Self {
        let mut h = hash_graph::Graph::new();
        for v in g.vertices() {
            h.add_vertex(v);
        }
        for (s, t) in g.edges() {
            h.add_edge(s, t);
        }
        h
    }
}

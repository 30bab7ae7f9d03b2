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

use rustc_hash::FxHashSet;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// A node identifier.
///
/// The reduction engine never looks inside a node: it only clones, compares
/// and hashes it.
pub trait NodeId: Clone + Eq + Hash + Debug + Send + Sync {}

impl<T> NodeId for T where T: Clone + Eq + Hash + Debug + Send + Sync {}

/// Read-only view of an undirected simple graph.
pub trait GraphLike: Clone + Sized + Send + Sync + Debug {
    /// The node identifier type
    type Node: NodeId;

    /// Number of vertices
    fn num_vertices(&self) -> usize;

    /// Number of edges
    fn num_edges(&self) -> usize;

    /// Get iterator over all vertices
    fn vertices(&self) -> impl Iterator<Item = Self::Node>;

    /// Get iterator over the neighbors of a vertex
    ///
    /// A vertex that is not in the graph has no neighbors.
    fn neighbors(&self, v: &Self::Node) -> impl Iterator<Item = Self::Node>;

    /// Returns true if the vertex is in the graph
    fn contains(&self, v: &Self::Node) -> bool;

    /// Returns true if there is an edge between `s` and `t`
    fn connected(&self, s: &Self::Node, t: &Self::Node) -> bool;

    /// Number of edges incident to a vertex
    fn degree(&self, v: &Self::Node) -> usize;

    /// Sum of the degrees of all vertices.
    fn degree_sum(&self) -> usize {
        self.vertices().map(|v| self.degree(&v)).sum()
    }

    /// List of edges, each reported once.
    ///
    /// The orientation of an edge `(s, t)` follows the order in which
    /// [`GraphLike::vertices`] visits its endpoints.
    fn edges(&self) -> Vec<(Self::Node, Self::Node)> {
        let mut done = FxHashSet::default();
        let mut edges = Vec::with_capacity(self.num_edges());
        for s in self.vertices() {
            for t in self.neighbors(&s) {
                if !done.contains(&t) {
                    edges.push((s.clone(), t));
                }
            }
            done.insert(s);
        }
        edges
    }

    /// Returns true if every vertex can reach every other vertex.
    ///
    /// The empty graph is not considered connected.
    fn is_connected(&self) -> bool {
        let Some(start) = self.vertices().next() else {
            return false;
        };
        let mut seen = FxHashSet::default();
        let mut queue = VecDeque::new();
        seen.insert(start.clone());
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for n in self.neighbors(&v) {
                if seen.insert(n.clone()) {
                    queue.push_back(n);
                }
            }
        }
        seen.len() == self.num_vertices()
    }
}

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

use crate::vec_graph::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builds Erdős–Rényi graphs `G(n, p)`: each of the `n(n-1)/2` possible
/// edges is present independently with probability `p`.
pub struct ErdosRenyiBuilder {
    pub rng: StdRng,
    pub nodes: usize,
    pub p: f64,
}

impl Default for ErdosRenyiBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ErdosRenyiBuilder {
    pub fn new() -> ErdosRenyiBuilder {
        ErdosRenyiBuilder {
            rng: StdRng::from_os_rng(),
            nodes: 10,
            p: 0.5,
        }
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn nodes(&mut self, nodes: usize) -> &mut Self {
        self.nodes = nodes;
        self
    }

    /// Edge probability. Values outside `[0, 1]` are clamped, NaN counts as 0.
    pub fn p(&mut self, p: f64) -> &mut Self {
        self.p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self
    }

    pub fn build(&mut self) -> Graph {
        let mut g = Graph::with_vertices(self.nodes);
        for s in 0..self.nodes {
            for t in (s + 1)..self.nodes {
                if self.rng.random_bool(self.p) {
                    g.add_edge(s, t);
                }
            }
        }
        g
    }
}

impl Graph {
    /// Starts building a random graph.
    ///
    /// ```
    /// use redqaoa::graph::GraphLike;
    /// use redqaoa::vec_graph::Graph;
    ///
    /// let g = Graph::erdos_renyi().seed(3).nodes(20).p(1.0).build();
    /// assert_eq!(g.num_edges(), 190);
    /// ```
    pub fn erdos_renyi() -> ErdosRenyiBuilder {
        ErdosRenyiBuilder::new()
    }
}

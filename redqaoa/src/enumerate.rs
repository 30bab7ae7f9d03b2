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

//! Brute-force and uniform-random subgraph enumeration.
//!
//! These are baselines for small graphs. The number of subsets grows
//! combinatorially, so nothing here should be used at scale.

use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::annealer::Annealed;
use crate::degree::{average_degree, objective};
use crate::error::{ReduceError, Result};
use crate::graph::GraphLike;
use crate::hash_graph;
use crate::vec_graph;

fn check_size(graph: &impl GraphLike, size: usize) -> Result<()> {
    let total = graph.num_vertices();
    if size == 0 || size > total {
        Err(ReduceError::InvalidSubgraph { size, total })
    } else {
        Ok(())
    }
}

/// Every connected induced subgraph with `size` vertices.
pub fn connected_subgraphs<G: GraphLike>(
    graph: &G,
    size: usize,
) -> Result<Vec<hash_graph::Graph<G::Node>>> {
    check_size(graph, size)?;
    Ok(graph
        .vertices()
        .combinations(size)
        .map(|nodes| hash_graph::Graph::induced(graph, nodes))
        .filter(|sub| sub.is_connected())
        .collect())
}

/// `count` induced subgraphs on uniformly random `size`-subsets.
///
/// Samples are independent of each other, so the same subset may appear
/// more than once. Connectivity is not checked.
pub fn random_subgraphs<G, R>(
    graph: &G,
    size: usize,
    count: usize,
    rng: &mut R,
) -> Result<Vec<hash_graph::Graph<G::Node>>>
where
    G: GraphLike,
    R: Rng + ?Sized,
{
    check_size(graph, size)?;
    let nodes: Vec<G::Node> = graph.vertices().collect();
    Ok((0..count)
        .map(|_| {
            let sample = nodes.choose_multiple(rng, size).cloned();
            hash_graph::Graph::induced(graph, sample)
        })
        .collect())
}

/// The connected subgraph of a given size whose average degree is closest
/// to that of `graph`, found by trying them all.
///
/// Returns `None` if no subset of that size induces a connected subgraph.
pub fn best_exhaustive<G: GraphLike>(graph: &G, size: usize) -> Result<Option<Annealed<G::Node>>> {
    let target = average_degree(graph)?;
    let mut best: Option<(hash_graph::Graph<G::Node>, f64)> = None;
    let mut scored = 0;
    for sub in connected_subgraphs(graph, size)? {
        let obj = objective(&sub, target)?;
        scored += 1;
        if best.as_ref().map_or(true, |(_, b)| obj < *b) {
            best = Some((sub, obj));
        }
    }
    log::debug!("scored {} connected subgraphs of size {}", scored, size);

    best.map(|(sub, obj)| {
        let (g, labels) = vec_graph::Graph::relabel(&sub);
        Ok(Annealed {
            average_degree: average_degree(&g)?,
            graph: g,
            labels,
            objective: obj,
            iterations: scored,
        })
    })
    .transpose()
}

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

//! The public entry point: reduce a graph to the smallest subgraph that
//! keeps its average degree.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::annealer::AnnealParams;
use crate::error::Result;
use crate::graph::GraphLike;
use crate::search::{check_graph, check_ratio, ProbeRecord, SearchOptions, SizeSearch};
use crate::vec_graph;

/// A reduced graph together with what it was reduced from.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction<N> {
    /// The reduced graph. Its vertices are exactly `0..k`.
    pub graph: vec_graph::Graph,
    /// `labels[i]` is the vertex of the original graph behind vertex `i`.
    pub labels: Vec<N>,
    /// Average degree of the reduced graph over that of the original.
    pub degree_ratio: f64,
    pub original_vertices: usize,
    pub original_edges: usize,
    /// The sizes probed by the search.
    pub history: Vec<ProbeRecord>,
}

impl<N> Reduction<N> {
    /// Fraction of vertices removed.
    pub fn node_reduction(&self) -> f64 {
        1.0 - self.graph.num_vertices() as f64 / self.original_vertices as f64
    }

    /// Fraction of edges removed.
    pub fn edge_reduction(&self) -> f64 {
        1.0 - self.graph.num_edges() as f64 / self.original_edges as f64
    }

    pub fn into_graph(self) -> vec_graph::Graph {
        self.graph
    }
}

/// Reduces `graph` with the default annealing parameters.
///
/// `ratio_threshold` must be in `(0, 1]`; the usual value is `0.75`.
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use redqaoa::graph::GraphLike;
/// use redqaoa::vec_graph::Graph;
///
/// let g = Graph::complete(10);
/// let mut rng = StdRng::seed_from_u64(42);
/// let red = redqaoa::reduce(&g, 0.75, &mut rng).unwrap();
/// assert_eq!(red.graph.num_vertices(), 8);
/// ```
pub fn reduce<G, R>(graph: &G, ratio_threshold: f64, rng: &mut R) -> Result<Reduction<G::Node>>
where
    G: GraphLike,
    R: Rng + ?Sized,
{
    Reducer::new()
        .ratio_threshold(ratio_threshold)
        .reduce_with_rng(graph, rng)
}

/// Builder for graph reductions.
///
/// ```
/// use redqaoa::graph::GraphLike;
/// use redqaoa::vec_graph::Graph;
/// use redqaoa::Reducer;
///
/// let g = Graph::erdos_renyi().seed(1).nodes(12).p(0.5).build();
/// let red = Reducer::new().ratio_threshold(0.8).seed(7).reduce(&g).unwrap();
/// assert!(red.graph.num_vertices() < g.num_vertices());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Reducer {
    pub search: SearchOptions,
    pub params: AnnealParams,
    /// Seed for the random source. Drawn from the operating system if unset.
    pub seed: Option<u64>,
}

impl Reducer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ratio_threshold(&mut self, ratio_threshold: f64) -> &mut Self {
        self.search.ratio_threshold = ratio_threshold;
        self
    }

    pub fn resamples(&mut self, resamples: usize) -> &mut Self {
        self.search.resamples = resamples;
        self
    }

    pub fn params(&mut self, params: AnnealParams) -> &mut Self {
        self.params = params;
        self
    }

    pub fn seed(&mut self, seed: u64) -> &mut Self {
        self.seed = Some(seed);
        self
    }

    /// Reduces a graph with a random source built from the configured seed.
    pub fn reduce<G: GraphLike>(&self, graph: &G) -> Result<Reduction<G::Node>> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        self.reduce_with_rng(graph, &mut rng)
    }

    /// Reduces a graph drawing randomness from `rng`.
    ///
    /// All input checks happen before the search starts.
    pub fn reduce_with_rng<G, R>(&self, graph: &G, rng: &mut R) -> Result<Reduction<G::Node>>
    where
        G: GraphLike,
        R: Rng + ?Sized,
    {
        check_graph(graph)?;
        check_ratio(self.search.ratio_threshold)?;
        self.params.validate()?;

        let mut search = SizeSearch::new(graph, rng)?;
        search.set_options(self.search).set_params(self.params);
        let outcome = search.run()?;

        let best = outcome.best;
        let red = Reduction {
            graph: best.annealed.graph,
            labels: best.annealed.labels,
            degree_ratio: best.ratio,
            original_vertices: graph.num_vertices(),
            original_edges: graph.num_edges(),
            history: outcome.history,
        };
        log::info!(
            "reduced {} vertices / {} edges to {} / {} (degree ratio {:.4}, {} probes)",
            red.original_vertices,
            red.original_edges,
            red.graph.num_vertices(),
            red.graph.num_edges(),
            red.degree_ratio,
            red.history.len()
        );
        Ok(red)
    }

    /// Reduces independent graphs in parallel.
    ///
    /// Graph `i` gets its own random source seeded from the master seed and
    /// `i`, so the results do not depend on how the work is scheduled.
    pub fn reduce_batch<G: GraphLike>(&self, graphs: &[G]) -> Vec<Result<Reduction<G::Node>>> {
        let master = self.seed.unwrap_or_else(|| rand::rng().random());
        graphs
            .par_iter()
            .enumerate()
            .map(|(i, g)| {
                let mut rng = StdRng::seed_from_u64(master.wrapping_add(i as u64));
                self.reduce_with_rng(g, &mut rng)
            })
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::ReduceError;
    use crate::hash_graph;
    use crate::vec_graph::Graph;
    use rstest::rstest;

    #[test]
    fn reduces_complete_graph() {
        let g = Graph::complete(10);
        let red = Reducer::new().seed(5).reduce(&g).unwrap();
        assert_eq!(red.graph.num_vertices(), 8);
        assert_eq!(red.graph.num_edges(), 28);
        assert_eq!(red.original_vertices, 10);
        assert_eq!(red.original_edges, 45);
        assert!((red.node_reduction() - 0.2).abs() < 1e-12);
        assert!((red.edge_reduction() - (1.0 - 28.0 / 45.0)).abs() < 1e-12);
    }

    #[test]
    fn keeps_original_labels() {
        let g = hash_graph::Graph::from_edges([
            ("a", "b"),
            ("b", "c"),
            ("c", "a"),
            ("c", "d"),
            ("d", "e"),
        ]);
        let red = Reducer::new().seed(2).reduce(&g).unwrap();
        assert_eq!(red.labels.len(), red.graph.num_vertices());
        for (s, t) in red.graph.edges() {
            assert!(g.connected(&red.labels[s], &red.labels[t]));
        }
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.01)]
    #[case(f64::NAN)]
    fn invalid_ratio(#[case] ratio: f64) {
        let g = Graph::complete(5);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            reduce(&g, ratio, &mut rng),
            Err(ReduceError::InvalidRatio(_))
        ));
    }

    #[test]
    fn degenerate_before_ratio() {
        // the graph is checked first, even when the ratio is bad too
        let g = Graph::with_vertices(1);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            reduce(&g, 2.0, &mut rng),
            Err(ReduceError::DegenerateGraph { nodes: 1 })
        );
    }

    #[test]
    fn edgeless_graph_is_undefined() {
        let g = Graph::with_vertices(6);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(reduce(&g, 0.01, &mut rng), Err(ReduceError::UndefinedRatio));
    }

    #[test]
    fn batch_matches_sequential() {
        let graphs: Vec<Graph> = (0..4)
            .map(|i| Graph::erdos_renyi().seed(i).nodes(9).p(0.6).build())
            .collect();
        let mut reducer = Reducer::new();
        reducer.seed(100);
        let batch = reducer.reduce_batch(&graphs);
        assert_eq!(batch.len(), graphs.len());
        for (i, (g, red)) in graphs.iter().zip(batch).enumerate() {
            let mut rng = StdRng::seed_from_u64(100 + i as u64);
            let expected = reducer.reduce_with_rng(g, &mut rng);
            assert_eq!(red, expected);
        }
    }

    #[test]
    fn reducer_from_json() {
        let reducer: Reducer = serde_json::from_str(
            r#"{"search": {"ratio_threshold": 0.9}, "params": {"max_rejections": 20}, "seed": 3}"#,
        )
        .unwrap();
        assert_eq!(reducer.search.ratio_threshold, 0.9);
        assert_eq!(reducer.search.resamples, 1);
        assert_eq!(reducer.params.max_rejections, 20);
        assert_eq!(reducer.seed, Some(3));
    }
}

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

//! Binary search for the smallest subgraph that keeps the average degree.
//!
//! The oracle for each probed size is an adaptive annealing run, which is a
//! noisy estimate of the best degree ratio that size can reach. The search
//! assumes that ratio grows with the size, which only holds approximately,
//! so the result is a heuristic approximation of the true minimum. Setting
//! [`SearchOptions::resamples`] above one takes the best of several runs per
//! probe to reduce that noise.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::annealer::{AnnealParams, Annealed, SubgraphAnnealer};
use crate::degree::degree_ratio;
use crate::error::{ReduceError, Result};
use crate::graph::GraphLike;

/// Configuration options for the size search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// A size is feasible when the degree ratio of its best subgraph is
    /// strictly above this threshold. Must be in `(0, 1]`.
    ///
    /// Defaults to `0.75`.
    pub ratio_threshold: f64,
    /// Number of annealing runs per probed size. The run with the highest
    /// degree ratio is kept.
    ///
    /// Defaults to `1`.
    pub resamples: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            ratio_threshold: 0.75,
            resamples: 1,
        }
    }
}

/// Annealing result for one probed size.
#[derive(Debug, Clone, PartialEq)]
pub struct Probe<N> {
    pub size: usize,
    /// Average degree of the subgraph over the average degree of the graph.
    pub ratio: f64,
    pub annealed: Annealed<N>,
}

/// Summary of one probe, kept in [`SearchOutcome::history`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeRecord {
    pub size: usize,
    pub ratio: f64,
    pub feasible: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<N> {
    /// The smallest feasible probe, or the probe at the largest size if none
    /// was feasible.
    pub best: Probe<N>,
    /// Every probe in the order it was made, starting with the largest size.
    pub history: Vec<ProbeRecord>,
}

/// Binary search over subgraph sizes `1..n`.
pub struct SizeSearch<'a, G: GraphLike, R: Rng> {
    annealer: SubgraphAnnealer<'a, G, R>,
    options: SearchOptions,
}

impl<'a, G: GraphLike, R: Rng> SizeSearch<'a, G, R> {
    /// Fails if the graph has fewer than two vertices or no edges.
    pub fn new(graph: &'a G, rng: R) -> Result<Self> {
        check_graph(graph)?;
        let annealer = SubgraphAnnealer::new(graph, rng)?;
        if annealer.target() == 0.0 {
            return Err(ReduceError::UndefinedRatio);
        }
        Ok(Self {
            annealer,
            options: SearchOptions::default(),
        })
    }

    pub fn set_options(&mut self, options: SearchOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn set_ratio_threshold(&mut self, ratio_threshold: f64) -> &mut Self {
        self.options.ratio_threshold = ratio_threshold;
        self
    }

    pub fn set_params(&mut self, params: AnnealParams) -> &mut Self {
        self.annealer.set_params(params);
        self
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Runs the search.
    ///
    /// The largest size `n - 1` is annealed first and serves as the fallback
    /// when no probed size is feasible.
    pub fn run(&mut self) -> Result<SearchOutcome<G::Node>> {
        check_ratio(self.options.ratio_threshold)?;
        if self.options.resamples == 0 {
            return Err(ReduceError::InvalidParams(
                "resamples must be at least 1".to_string(),
            ));
        }
        self.annealer.params().validate()?;

        let mut history = Vec::new();
        let mut lower = 1;
        let mut upper = self.annealer.graph().num_vertices() - 1;
        let mut best = self.probe(upper, &mut history)?;

        while lower <= upper {
            let mid = (lower + upper) / 2;
            let probe = self.probe(mid, &mut history)?;
            if probe.ratio > self.options.ratio_threshold {
                best = probe;
                upper = mid - 1;
            } else {
                lower = mid + 1;
            }
        }

        Ok(SearchOutcome { best, history })
    }

    fn probe(&mut self, size: usize, history: &mut Vec<ProbeRecord>) -> Result<Probe<G::Node>> {
        let mut best: Option<Probe<G::Node>> = None;
        for _ in 0..self.options.resamples {
            let annealed = self.annealer.run_adaptive(size)?;
            let ratio = degree_ratio(&annealed.graph, self.annealer.target())?;
            if best.as_ref().map_or(true, |b| ratio > b.ratio) {
                best = Some(Probe {
                    size,
                    ratio,
                    annealed,
                });
            }
        }
        let probe = best.ok_or_else(|| {
            ReduceError::InvalidParams("resamples must be at least 1".to_string())
        })?;
        let feasible = probe.ratio > self.options.ratio_threshold;
        log::debug!(
            "probed size {}: degree ratio {:.4} ({})",
            size,
            probe.ratio,
            if feasible { "feasible" } else { "infeasible" }
        );
        history.push(ProbeRecord {
            size,
            ratio: probe.ratio,
            feasible,
        });
        Ok(probe)
    }
}

/// A reduction needs at least two vertices, so that `1..n` is non-empty.
pub(crate) fn check_graph(graph: &impl GraphLike) -> Result<()> {
    let nodes = graph.num_vertices();
    if nodes < 2 {
        return Err(ReduceError::DegenerateGraph { nodes });
    }
    Ok(())
}

pub(crate) fn check_ratio(ratio_threshold: f64) -> Result<()> {
    if ratio_threshold > 0.0 && ratio_threshold <= 1.0 {
        Ok(())
    } else {
        Err(ReduceError::InvalidRatio(ratio_threshold))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hash_graph;
    use crate::vec_graph::Graph;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn sizes(outcome: &SearchOutcome<usize>) -> Vec<usize> {
        outcome.history.iter().map(|p| p.size).collect()
    }

    #[test]
    fn complete_graph_probe_sequence() {
        // on K10 a subgraph of size k has ratio (k - 1) / 9 whatever the
        // annealer does, so the search is deterministic
        let g = Graph::complete(10);
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = SizeSearch::new(&g, &mut rng).unwrap();
        let outcome = search.run().unwrap();
        assert_eq!(sizes(&outcome), vec![9, 5, 7, 8]);
        assert_eq!(outcome.best.size, 8);
        assert_eq!(outcome.best.annealed.graph.num_vertices(), 8);
        assert!(outcome.best.ratio > 0.75);
    }

    #[test]
    fn falls_back_to_largest_size() {
        let g = Graph::complete(6);
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = SizeSearch::new(&g, &mut rng).unwrap();
        search.set_ratio_threshold(1.0);
        let outcome = search.run().unwrap();
        assert_eq!(outcome.best.size, 5);
        assert!(outcome.history.iter().all(|p| !p.feasible));
    }

    #[test]
    fn low_threshold_reaches_two_vertices() {
        let g = Graph::complete(7);
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = SizeSearch::new(&g, &mut rng).unwrap();
        search.set_ratio_threshold(0.01);
        let outcome = search.run().unwrap();
        // a single vertex has ratio 0, which never beats a positive threshold
        assert_eq!(outcome.best.size, 2);
        let single = outcome.history.iter().find(|p| p.size == 1).unwrap();
        assert_eq!(single.ratio, 0.0);
        assert!(!single.feasible);
    }

    #[test]
    fn resamples_run_more_annealers() {
        let g = Graph::complete(10);
        let mut rng = StdRng::seed_from_u64(3);
        let mut search = SizeSearch::new(&g, &mut rng).unwrap();
        search.set_options(SearchOptions {
            ratio_threshold: 0.75,
            resamples: 3,
        });
        let outcome = search.run().unwrap();
        assert_eq!(outcome.best.size, 8);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-0.5)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn rejects_bad_ratio(#[case] ratio: f64) {
        let g = Graph::complete(4);
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = SizeSearch::new(&g, &mut rng).unwrap();
        search.set_ratio_threshold(ratio);
        assert!(matches!(search.run(), Err(ReduceError::InvalidRatio(_))));
    }

    #[test]
    fn rejects_degenerate_graphs() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            SizeSearch::new(&Graph::with_vertices(1), &mut rng).err(),
            Some(ReduceError::DegenerateGraph { nodes: 1 })
        );
        assert_eq!(
            SizeSearch::new(&Graph::new(), &mut rng).err(),
            Some(ReduceError::DegenerateGraph { nodes: 0 })
        );
        assert_eq!(
            SizeSearch::new(&Graph::with_vertices(5), &mut rng).err(),
            Some(ReduceError::UndefinedRatio)
        );
    }

    #[test]
    fn two_vertex_graph() {
        let g = hash_graph::Graph::from_edges([("a", "b")]);
        let mut rng = StdRng::seed_from_u64(0);
        let mut search = SizeSearch::new(&g, &mut rng).unwrap();
        let outcome = search.run().unwrap();
        assert_eq!(outcome.best.size, 1);
        assert_eq!(outcome.best.ratio, 0.0);
    }
}

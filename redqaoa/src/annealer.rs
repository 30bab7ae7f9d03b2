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

//! Simulated annealing over induced subgraphs of a fixed size.
//!
//! Both variants search for the subgraph whose average degree is closest to
//! the average degree of the whole graph. Candidates are produced by
//! [`generate_neighbor`] and accepted with the Metropolis rule. The adaptive
//! variant additionally stops after too many non-improving moves and adapts
//! its cooling rate as it goes, see [`Schedule::step`].

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::degree::{average_degree, objective};
use crate::error::{ReduceError, Result};
use crate::graph::GraphLike;
use crate::hash_graph::Graph;
use crate::neighbor::generate_neighbor;
use crate::schedule::{Outcome, Schedule};
use crate::vec_graph;

/// Configuration options for the annealers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealParams {
    /// Starting temperature.
    ///
    /// Defaults to `100.0`.
    pub initial_temperature: f64,
    /// Factor applied to the temperature after every iteration.
    ///
    /// Defaults to `0.99`.
    pub cooling_rate: f64,
    /// A run stops once the temperature is at or below this value.
    ///
    /// Defaults to `1e-6`.
    pub stopping_temperature: f64,
    /// The adaptive variant stops after this many accepted moves without an
    /// improvement. Ignored by the basic variant.
    ///
    /// Defaults to `10`.
    pub max_rejections: usize,
    /// Upper bound for the adapted cooling rate. Must be below `1` so that
    /// the temperature keeps decreasing. A starting `cooling_rate` above it
    /// is never lowered by the bound. Ignored by the basic variant.
    ///
    /// Defaults to `0.999`.
    pub max_cooling_rate: f64,
}

impl Default for AnnealParams {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            cooling_rate: 0.99,
            stopping_temperature: 1e-6,
            max_rejections: 10,
            max_cooling_rate: 0.999,
        }
    }
}

impl AnnealParams {
    /// Checks that every parameter is inside its domain.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(ReduceError::InvalidParams(msg));
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return invalid(format!(
                "initial temperature must be positive, got {}",
                self.initial_temperature
            ));
        }
        if self.stopping_temperature.is_nan() || self.stopping_temperature <= 0.0 {
            return invalid(format!(
                "stopping temperature must be positive, got {}",
                self.stopping_temperature
            ));
        }
        if !unit_interval(self.cooling_rate) {
            return invalid(format!(
                "cooling rate must be in (0, 1), got {}",
                self.cooling_rate
            ));
        }
        if !unit_interval(self.max_cooling_rate) {
            return invalid(format!(
                "max cooling rate must be in (0, 1), got {}",
                self.max_cooling_rate
            ));
        }
        if self.max_rejections == 0 {
            return invalid("max rejections must be at least 1".to_string());
        }
        Ok(())
    }
}

/// The best subgraph found by an annealing run, relabeled to `0..k`.
#[derive(Debug, Clone, PartialEq)]
pub struct Annealed<N> {
    /// The subgraph, with contiguous vertices.
    pub graph: vec_graph::Graph,
    /// `labels[i]` is the vertex of the original graph behind vertex `i`.
    pub labels: Vec<N>,
    /// Distance between the subgraph's average degree and the original's.
    pub objective: f64,
    /// Average degree of the subgraph.
    pub average_degree: f64,
    /// Number of iterations the run took.
    pub iterations: usize,
}

/// Searches the induced subgraphs of a fixed size of one graph.
///
/// The annealer borrows the graph and owns its random source. Pass
/// `&mut rng` to share one generator between several annealers.
pub struct SubgraphAnnealer<'a, G: GraphLike, R: Rng> {
    graph: &'a G,
    rng: R,
    params: AnnealParams,
    target: f64,
}

impl<'a, G: GraphLike, R: Rng> SubgraphAnnealer<'a, G, R> {
    /// Fails if the graph has no vertices.
    pub fn new(graph: &'a G, rng: R) -> Result<Self> {
        let target = average_degree(graph)?;
        Ok(Self {
            graph,
            rng,
            params: AnnealParams::default(),
            target,
        })
    }

    pub fn set_params(&mut self, params: AnnealParams) -> &mut Self {
        self.params = params;
        self
    }

    pub fn set_initial_temperature(&mut self, initial_temperature: f64) -> &mut Self {
        self.params.initial_temperature = initial_temperature;
        self
    }

    pub fn set_cooling_rate(&mut self, cooling_rate: f64) -> &mut Self {
        self.params.cooling_rate = cooling_rate;
        self
    }

    pub fn set_stopping_temperature(&mut self, stopping_temperature: f64) -> &mut Self {
        self.params.stopping_temperature = stopping_temperature;
        self
    }

    pub fn set_max_rejections(&mut self, max_rejections: usize) -> &mut Self {
        self.params.max_rejections = max_rejections;
        self
    }

    pub fn params(&self) -> &AnnealParams {
        &self.params
    }

    pub fn graph(&self) -> &'a G {
        self.graph
    }

    /// Average degree of the whole graph, which the runs aim for.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Fixed-schedule annealing.
    ///
    /// Runs until the temperature reaches the stopping threshold.
    pub fn run_basic(&mut self, size: usize) -> Result<Annealed<G::Node>> {
        self.params.validate()?;
        let mut current = self.random_subgraph(size)?;
        let mut current_obj = objective(&current, self.target)?;
        let mut best = current.clone();
        let mut best_obj = current_obj;
        let mut schedule = Schedule::new(&self.params);
        let mut iterations = 0;

        while !schedule.is_frozen(&self.params) {
            let candidate = generate_neighbor(&current, self.graph, &mut self.rng)?;
            let candidate_obj = objective(&candidate, self.target)?;
            if metropolis(
                candidate_obj - current_obj,
                schedule.temperature(),
                &mut self.rng,
            ) {
                current = candidate;
                current_obj = candidate_obj;
                if current_obj < best_obj {
                    best = current.clone();
                    best_obj = current_obj;
                }
            }
            schedule = schedule.cool();
            iterations += 1;
        }

        self.finish(&best, best_obj, iterations)
    }

    /// Adaptive annealing.
    ///
    /// Stops at the stopping temperature or once `max_rejections` accepted
    /// moves in a row failed to improve on the best subgraph, whichever
    /// happens first.
    pub fn run_adaptive(&mut self, size: usize) -> Result<Annealed<G::Node>> {
        self.params.validate()?;
        let mut current = self.random_subgraph(size)?;
        let mut current_obj = objective(&current, self.target)?;
        let mut best = current.clone();
        let mut best_obj = current_obj;
        let mut schedule = Schedule::new(&self.params);
        let mut iterations = 0;

        while !schedule.is_frozen(&self.params) && !schedule.is_exhausted(&self.params) {
            let candidate = generate_neighbor(&current, self.graph, &mut self.rng)?;
            let candidate_obj = objective(&candidate, self.target)?;
            let outcome = if metropolis(
                candidate_obj - current_obj,
                schedule.temperature(),
                &mut self.rng,
            ) {
                current = candidate;
                current_obj = candidate_obj;
                if current_obj < best_obj {
                    best = current.clone();
                    best_obj = current_obj;
                    Outcome::Improved
                } else {
                    Outcome::Accepted
                }
            } else {
                Outcome::Rejected
            };
            schedule = schedule.step(outcome, &self.params);
            iterations += 1;
        }

        self.finish(&best, best_obj, iterations)
    }

    /// Induced subgraph on `size` vertices chosen uniformly at random.
    fn random_subgraph(&mut self, size: usize) -> Result<Graph<G::Node>> {
        let total = self.graph.num_vertices();
        if size == 0 || size >= total {
            return Err(ReduceError::InvalidSubgraph { size, total });
        }
        let mut nodes: Vec<G::Node> = self.graph.vertices().collect();
        nodes.shuffle(&mut self.rng);
        nodes.truncate(size);
        Ok(Graph::induced(self.graph, nodes))
    }

    fn finish(
        &self,
        best: &Graph<G::Node>,
        objective: f64,
        iterations: usize,
    ) -> Result<Annealed<G::Node>> {
        let (graph, labels) = vec_graph::Graph::relabel(best);
        let average_degree = average_degree(&graph)?;
        log::debug!(
            "annealed {} of {} vertices: average degree {:.4} (target {:.4}) after {} iterations",
            graph.num_vertices(),
            self.graph.num_vertices(),
            average_degree,
            self.target,
            iterations
        );
        Ok(Annealed {
            graph,
            labels,
            objective,
            average_degree,
            iterations,
        })
    }
}

/// True for values in the open interval `(0, 1)`; false for NaN.
fn unit_interval(x: f64) -> bool {
    (0.0..1.0).contains(&x) && x != 0.0
}

/// Metropolis acceptance: always take an improvement, otherwise take the
/// move with probability `exp(-delta / temperature)`.
fn metropolis<R: Rng + ?Sized>(delta: f64, temperature: f64, rng: &mut R) -> bool {
    delta < 0.0 || rng.random::<f64>() < (-delta / temperature).exp()
}

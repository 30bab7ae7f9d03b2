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

//! Error types for the reduction engine.

/// Errors raised by graph reduction.
///
/// All of these describe malformed input and are raised before any search
/// starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReduceError {
    /// The graph has too few vertices for the requested operation.
    #[error("Degenerate graph: {nodes} vertices is too few")]
    DegenerateGraph { nodes: usize },
    /// The degree-ratio threshold is outside `(0, 1]`.
    #[error("Ratio threshold {0} is outside (0, 1]")]
    InvalidRatio(f64),
    /// A subgraph has no neighbor one node-swap away.
    #[error("Subgraph with {size} vertices has no neighbor in a graph with {total} vertices")]
    InvalidSubgraph { size: usize, total: usize },
    /// A degree ratio was taken against a graph with average degree zero.
    #[error("Degree ratio is undefined against a graph with no edges")]
    UndefinedRatio,
    /// Annealing parameters are outside their domain.
    #[error("Invalid annealing parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, ReduceError>;

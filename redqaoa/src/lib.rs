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

//! Degree-preserving graph reduction.
//!
//! Given an undirected graph, [`reduce`] finds a much smaller induced
//! subgraph whose average degree stays close to that of the input. Subgraphs
//! of a fixed size are found by simulated annealing over node swaps, and a
//! binary search over sizes picks the smallest one that keeps the degree
//! ratio above a threshold.

pub mod graph;
pub mod hash_graph;
pub mod vec_graph;
pub mod random_graph;
pub mod error;
pub mod degree;
pub mod neighbor;
pub mod schedule;
pub mod annealer;
pub mod search;
pub mod reduce;
pub mod enumerate;
pub mod json;

pub use crate::annealer::{AnnealParams, Annealed, SubgraphAnnealer};
pub use crate::error::{ReduceError, Result};
pub use crate::reduce::{reduce, Reducer, Reduction};
pub use crate::search::{SearchOptions, SizeSearch};

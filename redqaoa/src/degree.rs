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

//! Average node degree and the quantities derived from it.

use crate::error::{ReduceError, Result};
use crate::graph::GraphLike;

/// Average node degree: the sum of vertex degrees divided by the vertex count.
///
/// A graph without edges has average degree `0.0`.
pub fn average_degree(g: &impl GraphLike) -> Result<f64> {
    let nodes = g.num_vertices();
    if nodes == 0 {
        return Err(ReduceError::DegenerateGraph { nodes });
    }
    Ok(g.degree_sum() as f64 / nodes as f64)
}

/// Ratio of the average degree of `g` to a base average degree.
///
/// Fails with [`ReduceError::UndefinedRatio`] when the base is zero, which
/// covers the `0 / 0` case of two edgeless graphs.
pub fn degree_ratio(g: &impl GraphLike, base: f64) -> Result<f64> {
    if base == 0.0 {
        return Err(ReduceError::UndefinedRatio);
    }
    Ok(average_degree(g)? / base)
}

/// Distance between the average degree of `g` and a target average degree.
///
/// This is the energy minimised by the annealers.
pub fn objective(g: &impl GraphLike, target: f64) -> Result<f64> {
    Ok((average_degree(g)? - target).abs())
}

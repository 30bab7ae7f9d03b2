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

//! Temperature schedules for subgraph annealing.
//!
//! A [`Schedule`] is a plain value. Each iteration of an annealing run maps
//! the current schedule and the [`Outcome`] of that iteration to the next
//! schedule, so the loop never mutates its cooling parameters in place.

use crate::annealer::AnnealParams;

/// Cooling rate multiplier applied when the search has plateaued.
const PLATEAU_FACTOR: f64 = 0.9;

/// Cooling rate multiplier applied after an improvement.
const PROGRESS_FACTOR: f64 = 1.1;

/// What happened to the candidate proposed in one iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Accepted, and strictly better than the best subgraph so far.
    Improved,
    /// Accepted, but no better than the best subgraph so far.
    Accepted,
    /// Not accepted.
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    temperature: f64,
    cooling_rate: f64,
    rejections: usize,
}

impl Schedule {
    pub fn new(params: &AnnealParams) -> Self {
        Schedule {
            temperature: params.initial_temperature,
            cooling_rate: params.cooling_rate,
            rejections: 0,
        }
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn cooling_rate(&self) -> f64 {
        self.cooling_rate
    }

    /// Number of accepted moves since the last improvement.
    pub fn rejections(&self) -> usize {
        self.rejections
    }

    /// Fixed geometric decay.
    pub fn cool(self) -> Self {
        Schedule {
            temperature: self.temperature * self.cooling_rate,
            ..self
        }
    }

    /// Adaptive transition.
    ///
    /// The counter is reset by an improvement and advanced by an accepted
    /// move that does not improve; a rejected move leaves it alone. The
    /// temperature decays by the current rate, then the rate itself is
    /// adapted: sped up once the counter reaches half of
    /// `max_rejections`, otherwise slowed down after an improvement (but
    /// never past `max_cooling_rate`, or the starting rate if that is
    /// higher).
    pub fn step(self, outcome: Outcome, params: &AnnealParams) -> Self {
        let rejections = match outcome {
            Outcome::Improved => 0,
            Outcome::Accepted => self.rejections + 1,
            Outcome::Rejected => self.rejections,
        };
        let temperature = self.temperature * self.cooling_rate;
        let cooling_rate = if rejections as f64 >= params.max_rejections as f64 / 2.0 {
            self.cooling_rate * PLATEAU_FACTOR
        } else if outcome == Outcome::Improved {
            let cap = params.max_cooling_rate.max(params.cooling_rate);
            (self.cooling_rate * PROGRESS_FACTOR).min(cap)
        } else {
            self.cooling_rate
        };
        if cooling_rate != self.cooling_rate {
            log::trace!(
                "cooling rate {:.4} -> {:.4} (rejections: {})",
                self.cooling_rate,
                cooling_rate,
                rejections
            );
        }
        Schedule {
            temperature,
            cooling_rate,
            rejections,
        }
    }

    /// The temperature has reached the stopping threshold.
    pub fn is_frozen(&self, params: &AnnealParams) -> bool {
        self.temperature <= params.stopping_temperature
    }

    /// The rejection counter has reached its ceiling.
    pub fn is_exhausted(&self, params: &AnnealParams) -> bool {
        self.rejections >= params.max_rejections
    }
}

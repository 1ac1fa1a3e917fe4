// Copyright 2020 Xavier Gillard
//
// Permission is hereby granted, free of charge, to any person obtaining a copy of
// this software and associated documentation files (the "Software"), to deal in
// the Software without restriction, including without limitation the rights to
// use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of
// the Software, and to permit persons to whom the Software is furnished to do so,
// subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS
// FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR
// COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER
// IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN
// CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! This module provides the GRASP (greedy randomized adaptive search
//! procedure) heuristic.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{one_swap, DistanceOracle, Error, InitialBoundProvider, Result, Seed, VectorSpace};

/// GRASP repeats a randomized version of the greedy construction followed by
/// a 1-swap local search, and keeps the best selection it came across.
///
/// During the construction, the next point is drawn uniformly among the
/// `rcl_size` points lying the farthest from the center of gravity of the
/// points not selected yet (the restricted candidate list).
///
/// # Note:
/// The random generator is seeded explicitly, hence two runs with the same
/// parameters produce the same selection.
#[derive(Debug, Clone)]
pub struct Grasp {
    iterations: usize,
    rcl_size: usize,
    rng: ChaCha8Rng,
}
impl Grasp {
    pub fn new(iterations: usize, rcl_size: usize, seed: u64) -> Self {
        Self { iterations, rcl_size: rcl_size.max(1), rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    fn construct(&mut self, space: &VectorSpace, m: usize) -> Result<Vec<usize>> {
        let mut remaining = (0..space.len()).collect::<Vec<_>>();
        let mut selection = Vec::with_capacity(m);
        while selection.len() < m {
            let center = space.centroid(remaining.iter().copied())
                .ok_or_else(|| Error::Provider("no point left to select".to_string()))?;

            let mut candidates = remaining.iter()
                .enumerate()
                .map(|(pos, i)| Ok((space[*i].distance(&center)?, pos)))
                .collect::<Result<Vec<_>>>()?;
            candidates.sort_unstable_by_key(|(d, pos)| (Reverse(OrderedFloat(*d)), *pos));
            candidates.truncate(self.rcl_size);

            let (_, pos) = candidates[self.rng.random_range(0..candidates.len())];
            selection.push(remaining.remove(pos));
        }
        Ok(selection)
    }
}
impl Default for Grasp {
    fn default() -> Self {
        Self::new(10, 2, 0)
    }
}
impl InitialBoundProvider for Grasp {
    fn name(&self) -> &str {
        "grasp"
    }

    fn solve(&mut self, space: &VectorSpace, m: usize) -> Result<Option<Seed>> {
        if m > space.len() {
            return Err(Error::Infeasible { requested: m, available: space.len() });
        }
        let oracle = DistanceOracle::precompute(space)?;

        let mut best: Option<Seed> = None;
        for it in 0..self.iterations {
            let mut selection = self.construct(space, m)?;
            let swaps = one_swap(&oracle, &mut selection);
            selection.sort_unstable();
            let value = oracle.diversity_of(&selection);
            debug!(iteration = it, swaps, value, "grasp iteration");

            if best.as_ref().map_or(true, |b| value > b.value) {
                best = Some(Seed { selection, value });
            }
        }
        Ok(best)
    }
}

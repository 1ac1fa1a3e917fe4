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

//! This module provides the admissible upper bound used to prune the search
//! tree. It overestimates the marginal contribution of every candidate point
//! and sums the best of these estimates.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::{DistanceOracle, Selection, UpperBound};

/// The neighborhood bound estimates how much each point `v` not yet selected
/// could add to a partial selection `S` of size `k`:
///
/// * `zSel(v)`   = the sum of the distances between `v` and the points of `S`
///   (which `v` is guaranteed to contribute when added),
/// * `zUnsel(v)` = half the sum of the distances between `v` and its `m-k-1`
///   farthest neighbors outside of `S` (each pair among future points is
///   seen from both of its endpoints, hence the halving).
///
/// The bound is the exact value of `S` plus the `m-k` largest estimates.
///
/// # Example
/// ```
/// # use maxdiv::*;
/// let space = VectorSpace::from_points(vec![
///     Point::new(vec![0.0, 0.0]),
///     Point::new(vec![3.0, 4.0]),
///     Point::new(vec![6.0, 8.0]),
/// ]).unwrap();
/// let oracle = DistanceOracle::precompute(&space).unwrap();
/// let bound  = NeighborhoodBound::new(&oracle, 2);
///
/// // the root bound can never be less than the optimum (here 10.0)
/// assert!(bound.upper_bound(&Selection::empty(3)) >= 10.0);
/// // a complete selection is bounded by its exact value
/// let pair = [0, 1].into_iter().collect::<Selection>();
/// assert_eq!(5.0, bound.upper_bound(&pair));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct NeighborhoodBound<'a> {
    oracle: &'a DistanceOracle,
    m: usize,
}
impl<'a> NeighborhoodBound<'a> {
    pub fn new(oracle: &'a DistanceOracle, m: usize) -> Self {
        Self { oracle, m }
    }

    /// Returns the estimated contribution of each point outside of the
    /// selection, best first. Ties are broken on the smallest index.
    fn estimates(&self, selection: &Selection) -> Vec<(f64, usize)> {
        let k = selection.len();
        let future = self.m.saturating_sub(k + 1);

        let mut estimates = (0..self.oracle.nb_points())
            .filter(|v| !selection.contains(*v))
            .map(|v| {
                let z_sel = self.oracle.distance_to(v, selection);
                let z_unsel = self.oracle.neighbors_of(v)
                    .filter(|u| !selection.contains(*u))
                    .take(future)
                    .map(|u| self.oracle.distance(v, u))
                    .sum::<f64>();
                (z_sel + 0.5 * z_unsel, v)
            })
            .collect::<Vec<_>>();

        estimates.sort_unstable_by_key(|(z, v)| (Reverse(OrderedFloat(*z)), *v));
        estimates
    }
}
impl UpperBound for NeighborhoodBound<'_> {
    fn upper_bound(&self, selection: &Selection) -> f64 {
        let z1 = self.oracle.diversity(selection);
        let k = selection.len();
        if k >= self.m {
            return z1;
        }

        let missing = self.m - k;
        let estimates = self.estimates(selection);
        if estimates.len() < missing {
            // not enough points left to ever complete this selection
            return f64::NEG_INFINITY;
        }
        z1 + estimates.iter().take(missing).map(|(z, _)| z).sum::<f64>()
    }

    fn greedy_completion(&self, selection: &Selection) -> Option<Selection> {
        let k = selection.len();
        if k >= self.m {
            return None;
        }
        let missing = self.m - k;
        let estimates = self.estimates(selection);
        if estimates.len() < missing {
            return None;
        }
        let completion = estimates.iter()
            .take(missing)
            .fold(selection.clone(), |sel, (_, v)| sel.with(*v));
        Some(completion)
    }
}

#[cfg(test)]
mod tests {
    use crate::{DistanceOracle, NeighborhoodBound, Selection, UpperBound};
    use crate::test_utils::{best_completion, combinations, random_space, scenario};

    #[test]
    fn a_complete_selection_is_bounded_by_its_exact_value() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let pair = [0, 3].into_iter().collect::<Selection>();
        assert_eq!(oracle.diversity(&pair), bound.upper_bound(&pair));
    }
    #[test]
    fn the_root_bound_covers_the_scenario_optimum() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let optimum = oracle.distance(0, 3);
        assert!(bound.upper_bound(&Selection::empty(4)) >= optimum);
    }
    #[test]
    fn with_m_equal_one_the_bound_is_zero() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 1);
        assert_eq!(0.0, bound.upper_bound(&Selection::empty(4)));
    }
    #[test]
    fn a_selection_which_cannot_be_completed_is_hopeless() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 5);
        assert_eq!(f64::NEG_INFINITY, bound.upper_bound(&Selection::empty(4)));
        assert_eq!(None, bound.greedy_completion(&Selection::empty(4)));
    }
    #[test]
    fn the_bound_is_admissible_on_every_partial_selection() {
        for seed in 0..6 {
            let n = 6 + (seed as usize % 3);
            let space = random_space(n, 3, seed);
            let oracle = DistanceOracle::precompute(&space).unwrap();
            for m in 1..=4 {
                let bound = NeighborhoodBound::new(&oracle, m);
                for k in 0..=m {
                    for partial in combinations(n, k) {
                        let sel = partial.iter().copied().collect::<Selection>();
                        let best = best_completion(&oracle, &partial, m);
                        let ub = bound.upper_bound(&sel);
                        assert!(ub + 1e-9 >= best, "seed {seed} m {m} sel {partial:?}: {ub} < {best}");
                    }
                }
            }
        }
    }
    #[test]
    fn greedy_completion_extends_the_selection_to_m_points() {
        let space = random_space(9, 2, 42);
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 4);
        let start = Selection::empty(9).with(2);
        let done = bound.greedy_completion(&start).unwrap();
        assert_eq!(4, done.len());
        assert!(done.contains(2));
        // a completion is a feasible solution hence never beats the bound
        assert!(oracle.diversity(&done) <= bound.upper_bound(&start) + 1e-9);
    }
    #[test]
    fn no_completion_is_proposed_for_complete_selections() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let pair = [1, 2].into_iter().collect::<Selection>();
        assert_eq!(None, bound.greedy_completion(&pair));
    }
}

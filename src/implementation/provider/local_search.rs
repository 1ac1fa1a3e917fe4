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

//! This module provides the 1-swap local search used to polish the solutions
//! built by the randomized heuristics.

use crate::DistanceOracle;

/// Swaps smaller than this are considered as rounding noise
const EPSILON: f64 = 1e-9;

/// Best improvement 1-swap local search.
///
/// At each step, every pair `(i, j)` with `i` selected and `j` not selected
/// is considered, and the swap that increases the diversity the most is
/// applied. The search stops when no swap strictly improves the selection,
/// that is when the selection is a local optimum. The number of applied swaps
/// is returned.
///
/// Swapping `i` for `j` changes the diversity by the distance between `j`
/// and the rest of the selection minus that between `i` and the rest.
pub fn one_swap(oracle: &DistanceOracle, selection: &mut [usize]) -> usize {
    let n = oracle.nb_points();
    let mut selected = vec![false; n];
    selection.iter().for_each(|i| selected[*i] = true);

    let mut swaps = 0;
    loop {
        let mut best_delta = EPSILON;
        let mut best_swap = None;

        for (pos, i) in selection.iter().enumerate() {
            let rest = selection.iter().filter(|s| *s != i);
            let contrib_i = rest.clone().map(|s| oracle.distance(*i, *s)).sum::<f64>();

            for j in (0..n).filter(|j| !selected[*j]) {
                let contrib_j = rest.clone().map(|s| oracle.distance(j, *s)).sum::<f64>();
                let delta = contrib_j - contrib_i;
                if delta > best_delta {
                    best_delta = delta;
                    best_swap = Some((pos, j));
                }
            }
        }

        match best_swap {
            None => return swaps,
            Some((pos, j)) => {
                selected[selection[pos]] = false;
                selected[j] = true;
                selection[pos] = j;
                swaps += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{one_swap, DistanceOracle};
    use crate::test_utils::{random_space, scenario};

    #[test]
    fn it_brings_the_outlier_in() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let mut sel = vec![1, 2];
        // (1,0) is first traded for (5,5), then (0,1) for (0,0)
        assert_eq!(2, one_swap(&oracle, &mut sel));
        sel.sort_unstable();
        assert_eq!(vec![0, 3], sel);
    }
    #[test]
    fn a_local_optimum_is_left_untouched() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let mut sel = vec![0, 3];
        assert_eq!(0, one_swap(&oracle, &mut sel));
        assert_eq!(vec![0, 3], sel);
    }
    #[test]
    fn it_never_degrades_the_selection() {
        for seed in 0..10 {
            let oracle = DistanceOracle::precompute(&random_space(20, 2, seed)).unwrap();
            let mut sel = vec![0, 1, 2, 3, 4];
            let before = oracle.diversity_of(&sel);
            one_swap(&oracle, &mut sel);
            sel.sort_unstable();
            sel.dedup();
            assert_eq!(5, sel.len());
            assert!(oracle.diversity_of(&sel) >= before);
        }
    }
}

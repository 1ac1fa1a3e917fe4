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

//! This module provides some utilities to write unit tests: tiny hand made
//! instances, a deterministic random instance generator and a brute force
//! enumerator to check the solver against.
#![cfg(test)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{DistanceOracle, Point, VectorSpace};

/// Four points of the plane: (0,0), (1,0), (0,1) and the outlier (5,5)
pub fn scenario() -> VectorSpace {
    VectorSpace::from_points(vec![
        Point::new(vec![0.0, 0.0]),
        Point::new(vec![1.0, 0.0]),
        Point::new(vec![0.0, 1.0]),
        Point::new(vec![5.0, 5.0]),
    ]).unwrap()
}

/// `n` points of dimension `d` drawn uniformly in [-100, 100)^d
pub fn random_space(n: usize, d: usize, seed: u64) -> VectorSpace {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    VectorSpace::from_points((0..n).map(|_| {
        Point::new((0..d).map(|_| rng.random_range(-100.0..100.0)).collect())
    })).unwrap()
}

/// All the subsets of size `k` of {0..n}, each sorted in increasing order
pub fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    fn rec(start: usize, n: usize, k: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if current.len() == k {
            out.push(current.clone());
            return;
        }
        for i in start..n {
            current.push(i);
            rec(i + 1, n, k, current, out);
            current.pop();
        }
    }
    let mut out = vec![];
    rec(0, n, k, &mut vec![], &mut out);
    out
}

/// The best value of a subset of `m` points which contains `partial`
pub fn best_completion(oracle: &DistanceOracle, partial: &[usize], m: usize) -> f64 {
    combinations(oracle.nb_points(), m).iter()
        .filter(|c| partial.iter().all(|p| c.contains(p)))
        .map(|c| oracle.diversity_of(c))
        .fold(f64::NEG_INFINITY, f64::max)
}

/// The optimal value and the first optimal subset found by enumerating all
/// the subsets of `m` points
pub fn brute_force(oracle: &DistanceOracle, m: usize) -> (f64, Vec<usize>) {
    let mut best = (f64::NEG_INFINITY, vec![]);
    for c in combinations(oracle.nb_points(), m) {
        let value = oracle.diversity_of(&c);
        if value > best.0 {
            best = (value, c);
        }
    }
    best
}

#[test]
fn combinations_are_complete_and_sorted() {
    let all = combinations(5, 3);
    assert_eq!(10, all.len());
    assert!(all.iter().all(|c| c.windows(2).all(|w| w[0] < w[1])));
    let empty = combinations(4, 0);
    assert_eq!(1, empty.len());
    assert!(empty[0].is_empty());
}
#[test]
fn random_spaces_are_reproducible() {
    assert_eq!(random_space(5, 3, 12), random_space(5, 3, 12));
    assert_ne!(random_space(5, 3, 12), random_space(5, 3, 13));
}

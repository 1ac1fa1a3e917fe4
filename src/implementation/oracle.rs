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

//! This module provides the distance oracle: the structure which precomputes
//! all the pairwise distances of an instance once and for all so that the
//! search never has to compute a square root again.

use std::{cmp::Reverse, iter::Copied, slice::Iter};

use ordered_float::OrderedFloat;

use crate::{Result, Selection, VectorSpace};

/// The lazy sequence of the neighbors of a point, farthest first. Calling
/// `neighbors_of` again simply restarts the sequence.
pub type Neighbors<'a> = Copied<Iter<'a, usize>>;

/// The distance oracle stores the symmetric distance matrix of a space along
/// with, for each point, the ranking of all other points by decreasing
/// distance and the total distance from that point to all the others.
///
/// # Note:
/// An oracle can only be obtained through `precompute`. Hence, there is no
/// way to query an oracle whose precomputation has not completed.
#[derive(Debug, Clone)]
pub struct DistanceOracle {
    n: usize,
    /// Row major n x n matrix
    matrix: Vec<f64>,
    /// ranking[v] holds the indices u != v by decreasing distance to v
    ranking: Vec<Vec<usize>>,
    /// totals[v] is the sum of the distances from v to all other points
    totals: Vec<f64>,
}

impl DistanceOracle {
    /// Computes the distance matrix and the neighbor rankings of the given
    /// space. This takes O(n²) distances and O(n² log n) for the sorting.
    pub fn precompute(space: &VectorSpace) -> Result<Self> {
        let n = space.len();
        let mut matrix = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = space[i].distance(&space[j])?;
                matrix[i * n + j] = d;
                matrix[j * n + i] = d;
            }
        }

        let totals = (0..n)
            .map(|v| matrix[v * n..(v + 1) * n].iter().sum())
            .collect();

        let ranking = (0..n)
            .map(|v| {
                let row = &matrix[v * n..(v + 1) * n];
                let mut others = (0..n).filter(|u| *u != v).collect::<Vec<_>>();
                // ties are broken on the index to keep things deterministic
                others.sort_by_key(|u| (Reverse(OrderedFloat(row[*u])), *u));
                others
            })
            .collect();

        Ok(Self { n, matrix, ranking, totals })
    }

    /// The number of points in the space
    pub fn nb_points(&self) -> usize {
        self.n
    }
    /// The distance between points i and j
    #[inline]
    pub fn distance(&self, i: usize, j: usize) -> f64 {
        self.matrix[i * self.n + j]
    }
    /// The other points, by decreasing distance to i
    pub fn neighbors_of(&self, i: usize) -> Neighbors<'_> {
        self.ranking[i].iter().copied()
    }
    /// The sum of the distances between i and all other points
    pub fn total_distance(&self, i: usize) -> f64 {
        self.totals[i]
    }
    /// The sum of the distances between v and every selected point
    pub fn distance_to(&self, v: usize, selection: &Selection) -> f64 {
        selection.iter().map(|s| self.distance(v, s)).sum()
    }
    /// The exact objective value of a selection: the sum of all pairwise
    /// distances. Pairs are always summed in increasing index order, which
    /// makes the value reproducible bit for bit.
    pub fn diversity(&self, selection: &Selection) -> f64 {
        self.diversity_of(&selection.to_vec())
    }
    /// Same as `diversity` for a slice of indices sorted in increasing order.
    pub fn diversity_of(&self, indices: &[usize]) -> f64 {
        let mut total = 0.0;
        for (x, i) in indices.iter().enumerate() {
            for j in indices.iter().skip(x + 1) {
                total += self.distance(*i, *j);
            }
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use crate::{DistanceOracle, Error, Point, Selection, VectorSpace};
    use crate::test_utils::scenario;

    #[test]
    fn matrix_is_symmetric_with_a_zero_diagonal() {
        let space = scenario();
        let oracle = DistanceOracle::precompute(&space).unwrap();
        for i in 0..4 {
            assert_eq!(0.0, oracle.distance(i, i));
            for j in 0..4 {
                assert_eq!(oracle.distance(i, j), oracle.distance(j, i));
                assert_eq!(space[i].distance(&space[j]).unwrap(), oracle.distance(i, j));
            }
        }
    }
    #[test]
    fn neighbors_are_ranked_farthest_first_and_exclude_self() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        // from (0,0): (5,5) is farthest, then (1,0) and (0,1) tie at 1.0
        assert_eq!(vec![3, 1, 2], oracle.neighbors_of(0).collect::<Vec<_>>());
        // from (5,5): (0,0) is farthest, (1,0) and (0,1) tie
        assert_eq!(vec![0, 1, 2], oracle.neighbors_of(3).collect::<Vec<_>>());
    }
    #[test]
    fn neighbor_sequence_is_restartable() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let first = oracle.neighbors_of(1).take(2).collect::<Vec<_>>();
        let again = oracle.neighbors_of(1).take(2).collect::<Vec<_>>();
        assert_eq!(first, again);
        assert_eq!(3, oracle.neighbors_of(1).count());
    }
    #[test]
    fn totals_sum_each_row() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        for v in 0..4 {
            let expected = (0..4).map(|u| oracle.distance(v, u)).sum::<f64>();
            assert!((oracle.total_distance(v) - expected).abs() < 1e-12);
        }
        // (5,5) is far from everything
        assert!(oracle.total_distance(3) > oracle.total_distance(0));
    }
    #[test]
    fn diversity_of_a_pair_is_their_distance() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let pair = [0, 3].into_iter().collect::<Selection>();
        assert_eq!(oracle.distance(0, 3), oracle.diversity(&pair));
        assert_eq!(0.0, oracle.diversity(&Selection::empty(4)));
    }
    #[test]
    fn distance_to_a_selection_sums_the_distances() {
        let oracle = DistanceOracle::precompute(&scenario()).unwrap();
        let sel = [0, 1].into_iter().collect::<Selection>();
        let expected = oracle.distance(3, 0) + oracle.distance(3, 1);
        assert_eq!(expected, oracle.distance_to(3, &sel));
    }
    #[test]
    fn malformed_points_never_reach_the_oracle() {
        // a space refuses such points, so no oracle can ever be built on them
        let mut space = VectorSpace::new(2);
        space.push(Point::new(vec![0.0, 0.0])).unwrap();
        assert!(space.push(Point::new(vec![0.0])).is_err());
        let res = Point::new(vec![0.0]).distance(&space[0]);
        assert!(matches!(res, Err(Error::DimensionMismatch { .. })));
    }
    #[test]
    fn an_empty_space_yields_an_empty_oracle() {
        let oracle = DistanceOracle::precompute(&VectorSpace::new(3)).unwrap();
        assert_eq!(0, oracle.nb_points());
    }
}

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

//! This module provides a dominance filter based on the total distance from
//! each point to all the others.

use std::cmp::Reverse;

use ordered_float::OrderedFloat;

use crate::{DistanceOracle, Dominance, Selection};

/// This filter deems a selection dominated when the weakest selected point
/// (the one with the smallest total distance to all other points) is strictly
/// weaker than the strongest point left aside.
///
/// # Warning
/// This rule is a heuristic filter. The total distance of a point says
/// nothing about its distance to the other *selected* points, so there are
/// instances where it discards every optimal selection. Prefer
/// `CanonicalOrder` when a proof of optimality is required.
#[derive(Debug, Clone)]
pub struct TotalDistanceDominance<'a> {
    oracle: &'a DistanceOracle,
    /// all indices by decreasing total distance
    strongest: Vec<usize>,
}
impl<'a> TotalDistanceDominance<'a> {
    pub fn new(oracle: &'a DistanceOracle) -> Self {
        let mut strongest = (0..oracle.nb_points()).collect::<Vec<_>>();
        strongest.sort_by_key(|v| (Reverse(OrderedFloat(oracle.total_distance(*v))), *v));
        Self { oracle, strongest }
    }
}
impl Dominance for TotalDistanceDominance<'_> {
    fn is_dominated(&self, selection: &Selection) -> bool {
        let min_sel = selection.iter()
            .map(|s| OrderedFloat(self.oracle.total_distance(s)))
            .min();
        let max_unsel = self.strongest.iter()
            .find(|v| !selection.contains(**v))
            .map(|v| OrderedFloat(self.oracle.total_distance(*v)));

        match (min_sel, max_unsel) {
            (Some(min_sel), Some(max_unsel)) => min_sel < max_unsel,
            _ => false,
        }
    }
}

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

//! This module provide some convenient utilities to work with user defined
//! heuristics.

use std::cmp::Ordering;

use compare::Compare;

use crate::{SelectionNode, SubProblemRanking};

/// This is a thin wrapper to convert a SubProblemRanking into a `Compare`
/// object as is required to configure the order of a binary heap.
///
/// This struct has no behavior of its own: it simply delegates to the
/// underlying implementation.
///
/// # Example
/// ```
/// # use maxdiv::*;
/// # use binary_heap_plus::BinaryHeap;
/// let comparator = CompareSubProblem::new(MaxUB);
/// let mut heap = BinaryHeap::from_vec_cmp(vec![], comparator);
///
/// heap.push(SelectionNode { selection: Selection::empty(2), level: 0, value: 0.0, ub: 3.0 });
/// heap.push(SelectionNode { selection: Selection::empty(2), level: 0, value: 0.0, ub: 7.0 });
/// assert_eq!(Some(7.0), heap.pop().map(|n| n.ub));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompareSubProblem<X: SubProblemRanking>(X);
impl<X: SubProblemRanking> CompareSubProblem<X> {
    /// Creates a new instance
    pub fn new(x: X) -> Self {
        Self(x)
    }
}
impl<X: SubProblemRanking> Compare<SelectionNode> for CompareSubProblem<X> {
    fn compare(&self, l: &SelectionNode, r: &SelectionNode) -> Ordering {
        self.0.compare(l, r)
    }
}

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

//! This module provides the ranking used by default to order the nodes of a
//! best-first fringe.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;

use crate::{SelectionNode, SubProblemRanking};

/// The MaxUB (maximum upper bound) strategy is one that always selects the
/// node having the highest upper bound in the fringe. In case of equalities,
/// it favors the node having the highest value (the one which already holds
/// the most diverse partial selection).
#[derive(Debug, Default, Clone, Copy)]
pub struct MaxUB;
impl SubProblemRanking for MaxUB {
    fn compare(&self, l: &SelectionNode, r: &SelectionNode) -> Ordering {
        OrderedFloat(l.ub).cmp(&OrderedFloat(r.ub))
            .then_with(|| OrderedFloat(l.value).cmp(&OrderedFloat(r.value)))
    }
}

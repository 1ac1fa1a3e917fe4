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

//! This module provides the canonical order dominance which guarantees that
//! each subset of points is reached through one single path of the tree.

use crate::{Dominance, Selection};

/// A subset can be built by adding its points in any order, which means that
/// the same subset is reachable from `k!` different paths. This filter only
/// keeps the path which adds the points by increasing index: a selection is
/// dominated as soon as the index which was added last is not its largest
/// index. All the completions of a dominated selection are also completions
/// of the canonical node holding the same points, hence this rule is sound.
///
/// Additionally, a canonical node can only be completed with indices larger
/// than its largest one. Whenever there are not enough of those left to reach
/// `m` points, the selection is dominated too.
///
/// # Example
/// ```
/// # use maxdiv::*;
/// let canon = CanonicalOrder::new(10, 3);
/// let sorted = Selection::empty(10).with(1).with(4);
/// let shuffled = Selection::empty(10).with(4).with(1);
/// assert!(!canon.is_dominated(&sorted));
/// assert!(canon.is_dominated(&shuffled));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CanonicalOrder {
    n: usize,
    m: usize,
}
impl CanonicalOrder {
    pub fn new(n: usize, m: usize) -> Self {
        Self { n, m }
    }
}
impl Dominance for CanonicalOrder {
    fn is_dominated(&self, selection: &Selection) -> bool {
        match (selection.last(), selection.max()) {
            (Some(last), Some(max)) => {
                let missing = self.m.saturating_sub(selection.len());
                let available = self.n - max - 1;
                last != max || available < missing
            }
            _ => false,
        }
    }
    /// Complete selections reached in a non increasing order duplicate a
    /// canonical one.
    fn applies_to_complete(&self) -> bool {
        true
    }
}

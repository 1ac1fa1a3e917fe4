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

use crate::Selection;

/// An upper bound estimator computes, for a partial selection, a value that
/// is guaranteed to be at least as large as the value of any completion of
/// that selection to the target size.
///
/// # Note:
/// Admissibility is what makes bound-based pruning safe. An estimator that
/// underestimates even one subtree may cause the solver to miss the optimum.
pub trait UpperBound {
    /// Returns an upper bound on the value of the best completion of
    /// `selection`. The level of the node is the size of the selection. When
    /// the selection is already complete, the bound is its exact value.
    fn upper_bound(&self, selection: &Selection) -> f64;

    /// Optionally proposes a complete selection extending `selection`, built
    /// from the same estimates as the bound. The solver uses it as a cheap
    /// way to discover good incumbents at inner nodes.
    fn greedy_completion(&self, _selection: &Selection) -> Option<Selection> {
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{Selection, UpperBound};

    struct Constant;
    impl UpperBound for Constant {
        fn upper_bound(&self, _: &Selection) -> f64 {
            42.0
        }
    }

    #[test]
    fn by_default_no_completion_is_proposed() {
        assert_eq!(None, Constant.greedy_completion(&Selection::empty(3)));
        assert_eq!(42.0, Constant.upper_bound(&Selection::empty(3)));
    }
}

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

//! This module defines the contract between the exact solver and the
//! heuristics used to seed its initial lower bound.

use crate::{Result, VectorSpace};

/// A seed is a feasible solution (hopefully a good one) along with its value.
/// It is used as the initial incumbent of the branch-and-bound so that pruning
/// can start right away.
#[derive(Debug, Clone, PartialEq)]
pub struct Seed {
    /// The indices of the selected points
    pub selection: Vec<usize>,
    /// The sum of pairwise distances among the selected points
    pub value: f64,
}

/// An initial bound provider is any heuristic able to produce a subset of
/// exactly `m` points of a space along with its value.
///
/// # Note:
/// The solver does not blindly trust its provider. A failure, or a seed that
/// is not a valid selection of `m` distinct points, is simply ignored and the
/// search starts with a lower bound of minus infinity.
pub trait InitialBoundProvider {
    /// A short name used when logging
    fn name(&self) -> &str;
    /// Computes a selection of `m` points of `space`. Returning `Ok(None)`
    /// means the provider has nothing to propose.
    fn solve(&mut self, space: &VectorSpace, m: usize) -> Result<Option<Seed>>;
}

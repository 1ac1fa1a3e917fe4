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

//! This module defines the `Solver` trait.

use crate::{Completion, Statistics};

/// A solution is the sorted list of indices of the selected points.
pub type Solution = Vec<usize>;

/// This is the solver abstraction. It is implemented by a structure that
/// implements the branch-and-bound paradigm to find the subset of points
/// with the maximum diversity.
pub trait Solver {
    /// This method orders the solver to search for the optimal solution among
    /// all possibilities. It returns a structure standing for the outcome of
    /// the attempted maximization. Such a `Completion` may either be marked
    /// **exact** if the maximization has been carried out until optimality was
    /// proved. Or it can be inexact, in which case it means that the
    /// maximization process was stopped because of the satisfaction of some
    /// cutoff criterion.
    ///
    /// Along with the `is_exact` exact flag, the completion provides an
    /// optional `best_value` of the maximization problem:
    ///
    /// * When the `is_exact` flag is true, the `best_value` is the maximum
    ///   diversity that can be achieved.
    /// * When the `is_exact` flag is false and a `best_value` is present, it
    ///   is the best value that was known at the time of cutoff.
    /// * When the `is_exact` flag is false and no `best_value` is present: it
    ///   simply means that no feasible solution has been found before the
    ///   cutoff occurred.
    fn maximize(&mut self) -> Completion;
    /// This method returns the value of the best solution that has been found.
    fn best_value(&self) -> Option<f64>;
    /// This method returns the best selection that has been found.
    fn best_solution(&self) -> Option<Solution>;
    /// Returns the best lower bound that has been identified so far.
    /// In case where no solution has been found, it returns minus infinity.
    fn best_lower_bound(&self) -> f64;
    /// Returns the tightest upper bound that can be guaranteed so far.
    /// In case where no upper bound has been computed, it returns infinity.
    fn best_upper_bound(&self) -> f64;
    /// Sets a primal (best known value and solution) of the problem. The
    /// solution is only accepted when it is feasible, and its value is
    /// recomputed rather than trusted.
    fn set_primal(&mut self, value: f64, solution: Solution);
    /// The counters collected while searching
    fn statistics(&self) -> &Statistics;

    /// Computes the optimality gap
    fn gap(&self) -> f64 {
        let ub = self.best_upper_bound();
        let lb = self.best_lower_bound();
        if !ub.is_finite() || !lb.is_finite() {
            1.0
        } else {
            let aub = ub.abs();
            let alb = lb.abs();
            let u = aub.max(alb);
            let l = aub.min(alb);

            if u == 0.0 { 0.0 } else { (u - l) / u }
        }
    }
}

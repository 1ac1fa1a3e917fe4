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

//! This module provides the solver implementation along with the one-call
//! entry point that assembles a solver from a `SolverConfig`.

mod sequential;

pub use sequential::*;

use crate::{CanonicalOrder, Completion, Cutoff, DistanceOracle, Dominance, DominanceRule, EmptyDominance, Error, Fringe, InitialBoundProvider, MaxUB, NeighborhoodBound, NoCutoff, Result, SimpleFringe, Solution, Solver, SolverConfig, StackFringe, Statistics, Strategy, TimeBudget, TotalDistanceDominance, VectorSpace};

/// Everything there is to know about a finished resolution
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Tells whether optimality was proved
    pub completion: Completion,
    /// The indices of the best selection, in increasing order
    pub selection: Option<Solution>,
    /// The value of the best selection
    pub value: Option<f64>,
    /// The counters of the exploration
    pub statistics: Statistics,
    /// The successive values of the incumbent, oldest first
    pub history: Vec<f64>,
}

/// Selects the `m` points of `space` with the maximum diversity, using the
/// solver components described by `config`.
///
/// # Example
/// ```
/// # use maxdiv::*;
/// let space = VectorSpace::from_points(vec![
///     Point::new(vec![0.0, 0.0]),
///     Point::new(vec![1.0, 0.0]),
///     Point::new(vec![0.0, 1.0]),
///     Point::new(vec![5.0, 5.0]),
/// ]).unwrap();
/// let outcome = solve(&space, 2, &SolverConfig::default()).unwrap();
///
/// assert!(outcome.completion.is_exact);
/// assert_eq!(Some(vec![0, 3]), outcome.selection);
/// ```
pub fn solve(space: &VectorSpace, m: usize, config: &SolverConfig) -> Result<Outcome> {
    solve_with(space, m, config, config.provider.build())
}

/// Same as `solve` except that the initial bound provider is given
/// explicitly (the one named in the config is ignored).
pub fn solve_with<'a>(
    space: &'a VectorSpace,
    m: usize,
    config: &SolverConfig,
    provider: Box<dyn InitialBoundProvider + 'a>,
) -> Result<Outcome> {
    let n = space.len();
    if m > n {
        return Err(Error::Infeasible { requested: m, available: n });
    }

    let oracle = DistanceOracle::precompute(space)?;
    let bound = NeighborhoodBound::new(&oracle, m);

    let dominance: Box<dyn Dominance + '_> = match config.dominance {
        DominanceRule::Canonical => Box::new(CanonicalOrder::new(n, m)),
        DominanceRule::TotalDistance => Box::new(TotalDistanceDominance::new(&oracle)),
        DominanceRule::Disabled => Box::new(EmptyDominance),
    };
    let cutoff: Box<dyn Cutoff> = match config.time_limit {
        Some(budget) => Box::new(TimeBudget::new(budget)),
        None => Box::new(NoCutoff),
    };
    let mut fringe: Box<dyn Fringe> = match config.strategy {
        Strategy::DepthFirst => Box::new(StackFringe::new()),
        Strategy::BestFirst => Box::new(SimpleFringe::new(MaxUB)),
    };

    let mut solver = SequentialSolver::custom(
        space,
        &oracle,
        m,
        &bound,
        dominance.as_ref(),
        cutoff.as_ref(),
        fringe.as_mut(),
        provider,
    )?
    .with_eager_pruning(config.eager_pruning)
    .with_heuristic_completion(config.heuristic_completion);

    let completion = solver.maximize();
    Ok(Outcome {
        completion,
        selection: solver.best_solution(),
        value: solver.best_value(),
        statistics: solver.statistics().clone(),
        history: solver.history().to_vec(),
    })
}

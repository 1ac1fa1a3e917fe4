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

//! # MAXDIV
//! Maxdiv is an exact solver for the Maximum Diversity Problem: given `n`
//! points of a real vector space, it selects the `m` points whose sum of
//! pairwise euclidean distances is the largest.
//!
//! The solver is a branch-and-bound over partial selections. Each node of the
//! search tree holds a selection of `k` points and is bounded by an admissible
//! estimate of the best value any of its completions can reach. Nodes which
//! cannot beat the best known solution, or which are dominated by another
//! node, are discarded without being explored.
//!
//! ## Quick Example
//! ```
//! # use maxdiv::*;
//! let space = io_utils::parse_instance("4 2\n0 0\n1 0\n0 1\n5 5\n".as_bytes()).unwrap();
//!
//! let config = SolverConfigBuilder::default()
//!     .strategy(Strategy::BestFirst)
//!     .provider(ProviderKind::Grasp { iterations: 10, rcl_size: 2, seed: 42 })
//!     .build()
//!     .unwrap();
//!
//! let outcome = solve(&space, 2, &config).unwrap();
//! assert!(outcome.completion.is_exact);
//! assert_eq!(Some(vec![0, 3]), outcome.selection);
//! ```
//!
//! ## Plugging your own components
//! The `solve` function assembles a `SequentialSolver` from a `SolverConfig`.
//! When that is not flexible enough, the solver can be assembled by hand from
//! any implementation of the traits `UpperBound`, `Dominance`, `Cutoff`,
//! `Fringe` and `InitialBoundProvider`.
//! ```
//! # use maxdiv::*;
//! # let space = io_utils::parse_instance("4 2\n0 0\n1 0\n0 1\n5 5\n".as_bytes()).unwrap();
//! let oracle    = DistanceOracle::precompute(&space).unwrap();
//! let bound     = NeighborhoodBound::new(&oracle, 2);
//! let dominance = CanonicalOrder::new(space.len(), 2);
//! let cutoff    = NoCutoff;
//! let mut fringe = StackFringe::new();
//!
//! let mut solver = SequentialSolver::custom(
//!     &space, &oracle, 2, &bound, &dominance, &cutoff, &mut fringe, Box::new(Greedy)
//! ).unwrap();
//!
//! let completion = solver.maximize();
//! assert_eq!(Some(50.0_f64.sqrt()), completion.best_value);
//! ```

mod common;
mod error;
mod abstraction;
mod implementation;
mod test_utils;

pub mod io_utils;
pub mod report;

pub use common::*;
pub use error::*;
pub use abstraction::*;
pub use implementation::*;
pub use report::*;

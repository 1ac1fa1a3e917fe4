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

//! This module provides the implementation of the sequential branch-and-bound
//! solver. That is a solver that explores the tree of partial selections with
//! one single thread of execution.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::{Completion, Cutoff, DistanceOracle, Dominance, Error, Fringe, Incumbent, InitialBoundProvider, Reason, Result, Selection, SelectionNode, Solution, Solver, Statistics, UpperBound, VectorSpace};

/// The workload the solver can get from its fringe
enum WorkLoad {
    /// There is no work left to be done: you can safely terminate
    Complete,
    /// The work must stop because of an external cutoff
    Aborted,
    /// The item to process
    WorkItem { node: SelectionNode },
}

/// The sequential solver explores the tree of partial selections. Each node
/// of that tree holds a selection of `k` points; its children are obtained by
/// adding one more point. The leaves are the selections of exactly `m`
/// points.
///
/// # Note:
/// The order of the exploration is entirely decided by the fringe. A stack
/// yields a depth-first search while a priority queue on the bounds yields a
/// best-first search.
pub struct SequentialSolver<'a> {
    /// The instance being solved
    space: &'a VectorSpace,
    /// The precomputed distances of that instance
    oracle: &'a DistanceOracle,
    /// The number of points to select
    m: usize,
    /// The estimator used to bound the value reachable from a node
    bound: &'a dyn UpperBound,
    /// The filter discarding the nodes which need not be explored
    dominance: &'a dyn Dominance,
    /// A cutoff heuristic meant to decide when to stop the resolution of
    /// a given problem.
    cutoff: &'a dyn Cutoff,
    /// This is the fringe: the set of nodes that must still be explored before
    /// the problem can be considered 'solved'.
    fringe: &'a mut dyn Fringe,
    /// The heuristic seeding the initial lower bound. The solver owns it for
    /// the duration of the run.
    provider: Box<dyn InitialBoundProvider + 'a>,

    /// When set, hopeless children never enter the fringe
    eager_pruning: bool,
    /// When set, each branched node is completed greedily
    heuristic_completion: bool,

    /// The best solution found so far
    incumbent: Incumbent,
    /// This is the value of the best known upper bound.
    best_ub: f64,
    /// If we decide not to go through a complete proof of optimality, this is
    /// the reason why we took that decision.
    abort_proof: Option<Reason>,
    /// The counters of the exploration
    stats: Statistics,
}

impl<'a> SequentialSolver<'a> {
    /// Creates a solver selecting `m` points of `space`. This fails when the
    /// space holds less than `m` points.
    #[allow(clippy::too_many_arguments)]
    pub fn custom(
        space: &'a VectorSpace,
        oracle: &'a DistanceOracle,
        m: usize,
        bound: &'a dyn UpperBound,
        dominance: &'a dyn Dominance,
        cutoff: &'a dyn Cutoff,
        fringe: &'a mut dyn Fringe,
        provider: Box<dyn InitialBoundProvider + 'a>,
    ) -> Result<Self> {
        if m > space.len() {
            return Err(Error::Infeasible { requested: m, available: space.len() });
        }
        Ok(SequentialSolver {
            space,
            oracle,
            m,
            bound,
            dominance,
            cutoff,
            fringe,
            provider,
            //
            eager_pruning: true,
            heuristic_completion: false,
            incumbent: Incumbent::new(),
            best_ub: f64::INFINITY,
            abort_proof: None,
            stats: Statistics::default(),
        })
    }
    /// Enables or disables the pruning of the children at creation time
    pub fn with_eager_pruning(mut self, eager: bool) -> Self {
        self.eager_pruning = eager;
        self
    }
    /// Enables or disables the greedy completion of the branched nodes
    pub fn with_heuristic_completion(mut self, complete: bool) -> Self {
        self.heuristic_completion = complete;
        self
    }
    /// The successive values of the incumbent, oldest first
    pub fn history(&self) -> &[f64] {
        self.incumbent.history()
    }

    /// Asks the provider for an initial solution. Whatever goes wrong with
    /// the provider is logged and the search goes on without a seed.
    fn seed(&mut self) {
        let name = self.provider.name().to_string();
        match self.provider.solve(self.space, self.m) {
            Ok(Some(seed)) => match self.validate(&seed.selection) {
                Some(selection) => {
                    let value = self.oracle.diversity(&selection);
                    self.incumbent.try_improve(selection, value);
                    info!(provider = %name, value, "initial lower bound");
                }
                None => {
                    warn!(provider = %name, selection = ?seed.selection, "invalid seed ignored");
                }
            },
            Ok(None) => {
                info!(provider = %name, "no initial lower bound");
            }
            Err(e) => {
                warn!(provider = %name, error = %e, "provider failure, starting without a lower bound");
            }
        }
    }

    /// Returns the selection made of `indices` iff they are exactly m
    /// distinct indices of the space
    fn validate(&self, indices: &[usize]) -> Option<Selection> {
        let n = self.space.len();
        if indices.len() != self.m || indices.iter().any(|i| *i >= n) {
            return None;
        }
        let selection = indices.iter().copied().collect::<Selection>();
        if selection.len() != self.m {
            return None;
        }
        Some(selection)
    }

    /// This method initializes the problem resolution. Put more simply, this
    /// method seeds the incumbent and posts the root node onto the fringe so
    /// that the processing can be bootstrapped.
    fn initialize(&mut self) {
        self.seed();

        let selection = Selection::empty(self.space.len());
        let ub = self.bound.upper_bound(&selection);
        let root = SelectionNode { selection, level: 0, value: 0.0, ub };

        self.best_ub = ub;
        self.stats.generated += 1;
        self.fringe.push(root);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.fringe.len());
    }

    /// Offers a complete selection to the incumbent
    fn evaluate(&mut self, selection: Selection) {
        self.stats.solutions += 1;
        let value = self.oracle.diversity(&selection);
        if self.incumbent.try_improve(selection, value) {
            self.stats.improvements += 1;
            debug!(value, explored = self.stats.explored, "new incumbent");
        }
    }

    /// This method processes the given `node`: a complete node is evaluated,
    /// a dominated or hopeless node is discarded and any other node is
    /// branched on.
    fn process_one_node(&mut self, node: SelectionNode) {
        if node.level >= self.m {
            if self.dominance.applies_to_complete() && self.dominance.is_dominated(&node.selection) {
                self.stats.pruned_by_dominance += 1;
            } else {
                self.evaluate(node.selection);
            }
            return;
        }
        if self.dominance.is_dominated(&node.selection) {
            self.stats.pruned_by_dominance += 1;
            return;
        }
        if node.ub <= self.incumbent.value() {
            self.stats.pruned_by_bound += 1;
            return;
        }
        if self.heuristic_completion {
            if let Some(completion) = self.bound.greedy_completion(&node.selection) {
                self.evaluate(completion);
            }
        }
        self.branch(&node);
    }

    /// Creates one child per point which is not selected yet and pushes it
    /// onto the fringe.
    fn branch(&mut self, node: &SelectionNode) {
        let level = node.level + 1;
        for v in 0..self.space.len() {
            if node.selection.contains(v) {
                continue;
            }
            let selection = node.selection.with(v);
            let value = node.value + self.oracle.distance_to(v, &node.selection);
            self.stats.generated += 1;

            let complete = level >= self.m;
            if self.eager_pruning
                && (!complete || self.dominance.applies_to_complete())
                && self.dominance.is_dominated(&selection)
            {
                self.stats.pruned_by_dominance += 1;
                continue;
            }
            let ub = self.bound.upper_bound(&selection);
            if self.eager_pruning && ub <= self.incumbent.value() {
                self.stats.pruned_by_bound += 1;
                continue;
            }

            self.fringe.push(SelectionNode { selection, level, value, ub });
        }
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.fringe.len());
    }

    fn abort_search(&mut self, reason: Reason) {
        self.abort_proof = Some(reason);
        self.fringe.clear();
    }

    /// Consults the fringe to fetch a workload. Depending on the current
    /// state, the workload can either be:
    ///
    ///   + Complete, when the fringe is exhausted and the problem is solved
    ///   + Aborted, when the cutoff criterion is met
    ///   + WorkItem, when a node was successfully popped off the fringe.
    fn get_workload(&mut self) -> WorkLoad {
        if self.abort_proof.is_some() {
            return WorkLoad::Aborted;
        }
        if self.cutoff.must_stop() {
            self.abort_search(Reason::CutoffOccurred);
            return WorkLoad::Aborted;
        }
        match self.fringe.pop() {
            None => {
                self.best_ub = self.incumbent.value();
                WorkLoad::Complete
            }
            Some(node) => {
                self.stats.explored += 1;
                WorkLoad::WorkItem { node }
            }
        }
    }
}

impl Solver for SequentialSolver<'_> {
    /// Seeds the incumbent, then pops and processes nodes until the fringe
    /// is exhausted or the cutoff fires.
    fn maximize(&mut self) -> Completion {
        let start = Instant::now();
        self.initialize();

        loop {
            match self.get_workload() {
                WorkLoad::Complete => break,
                WorkLoad::Aborted => {
                    info!(explored = self.stats.explored, "cutoff occurred");
                    break;
                }
                WorkLoad::WorkItem { node } => self.process_one_node(node),
            }
        }
        self.stats.elapsed = start.elapsed();

        let completion = Completion {
            is_exact: self.abort_proof.is_none(),
            best_value: self.best_value(),
        };
        info!(
            exact = completion.is_exact,
            value = ?completion.best_value,
            generated = self.stats.generated,
            explored = self.stats.explored,
            pruned = self.stats.pruned(),
            elapsed = ?self.stats.elapsed,
            "search complete"
        );
        completion
    }

    fn best_value(&self) -> Option<f64> {
        self.incumbent.selection().map(|_| self.incumbent.value())
    }
    fn best_solution(&self) -> Option<Solution> {
        self.incumbent.selection().map(Selection::to_vec)
    }
    fn best_lower_bound(&self) -> f64 {
        self.incumbent.value()
    }
    fn best_upper_bound(&self) -> f64 {
        self.best_ub
    }
    fn set_primal(&mut self, value: f64, solution: Solution) {
        match self.validate(&solution) {
            Some(selection) => {
                let actual = self.oracle.diversity(&selection);
                debug!(claimed = value, value = actual, "primal solution");
                self.incumbent.try_improve(selection, actual);
            }
            None => {
                warn!(solution = ?solution, "invalid primal solution ignored");
            }
        }
    }
    fn statistics(&self) -> &Statistics {
        &self.stats
    }
}

#[cfg(test)]
mod test_solver {
    use crate::*;
    use crate::test_utils::{brute_force, random_space, scenario};

    /// A cutoff which stops the search right away
    struct Immediately;
    impl Cutoff for Immediately {
        fn must_stop(&self) -> bool {
            true
        }
    }
    /// A provider which always fails
    struct Failing;
    impl InitialBoundProvider for Failing {
        fn name(&self) -> &str { "failing" }
        fn solve(&mut self, _: &VectorSpace, _: usize) -> Result<Option<Seed>> {
            Err(Error::Provider("out of luck".to_string()))
        }
    }
    /// A provider returning a fixed seed
    struct Fixed(Seed);
    impl InitialBoundProvider for Fixed {
        fn name(&self) -> &str { "fixed" }
        fn solve(&mut self, _: &VectorSpace, _: usize) -> Result<Option<Seed>> {
            Ok(Some(self.0.clone()))
        }
    }

    fn run(space: &VectorSpace, m: usize, cutoff: &dyn Cutoff, provider: Box<dyn InitialBoundProvider>) -> (Completion, Option<Solution>, Statistics) {
        let oracle = DistanceOracle::precompute(space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, m);
        let dominance = CanonicalOrder::new(space.len(), m);
        let mut fringe = SimpleFringe::new(MaxUB);
        let mut solver = SequentialSolver::custom(space, &oracle, m, &bound, &dominance, cutoff, &mut fringe, provider).unwrap();
        let completion = solver.maximize();
        (completion, solver.best_solution(), solver.statistics().clone())
    }

    #[test]
    fn it_solves_the_scenario() {
        let (completion, solution, _) = run(&scenario(), 2, &NoCutoff, Box::new(NoProvider));
        assert!(completion.is_exact);
        assert!((completion.best_value.unwrap() - 7.0710678).abs() < 1e-7);
        assert!(solution.unwrap().contains(&3));
    }
    #[test]
    fn a_failing_provider_is_not_fatal() {
        let (completion, solution, _) = run(&scenario(), 2, &NoCutoff, Box::new(Failing));
        assert!(completion.is_exact);
        assert_eq!(Some(50.0_f64.sqrt()), completion.best_value);
        assert_eq!(Some(vec![0, 3]), solution);
    }
    #[test]
    fn seeds_of_the_wrong_size_are_ignored() {
        let seed = Seed { selection: vec![0], value: 1e9 };
        let (completion, _, stats) = run(&scenario(), 2, &NoCutoff, Box::new(Fixed(seed)));
        assert_eq!(Some(50.0_f64.sqrt()), completion.best_value);
        assert!(stats.improvements >= 1);
    }
    #[test]
    fn seeds_with_duplicates_or_unknown_points_are_ignored() {
        let dup = Seed { selection: vec![3, 3], value: 1e9 };
        let (completion, _, _) = run(&scenario(), 2, &Immediately, Box::new(Fixed(dup)));
        assert_eq!(None, completion.best_value);

        let oob = Seed { selection: vec![0, 4], value: 1e9 };
        let (completion, _, _) = run(&scenario(), 2, &Immediately, Box::new(Fixed(oob)));
        assert_eq!(None, completion.best_value);
    }
    #[test]
    fn the_value_of_a_seed_is_recomputed() {
        let liar = Seed { selection: vec![1, 2], value: 1e9 };
        let (completion, solution, _) = run(&scenario(), 2, &Immediately, Box::new(Fixed(liar)));
        assert!(!completion.is_exact);
        assert_eq!(Some(2.0_f64.sqrt()), completion.best_value);
        assert_eq!(Some(vec![1, 2]), solution);
    }
    #[test]
    fn a_good_seed_is_kept_when_nothing_beats_it() {
        let seed = Seed { selection: vec![0, 3], value: 50.0_f64.sqrt() };
        let (completion, solution, stats) = run(&scenario(), 2, &NoCutoff, Box::new(Fixed(seed)));
        assert!(completion.is_exact);
        assert_eq!(Some(vec![0, 3]), solution);
        assert_eq!(0, stats.improvements);
    }
    #[test]
    fn cutoff_yields_an_inexact_completion() {
        let (completion, solution, stats) = run(&random_space(12, 2, 1), 4, &Immediately, Box::new(Greedy));
        assert!(!completion.is_exact);
        assert!(completion.best_value.is_some());
        assert_eq!(Some(4), solution.map(|s| s.len()));
        assert_eq!(0, stats.explored);
    }
    #[test]
    fn cutoff_without_seed_yields_no_value() {
        let (completion, solution, _) = run(&scenario(), 2, &Immediately, Box::new(NoProvider));
        assert!(!completion.is_exact);
        assert_eq!(None, completion.best_value);
        assert_eq!(None, solution);
    }
    #[test]
    fn it_matches_the_brute_force_optimum() {
        for seed in 0..8 {
            let space = random_space(10, 2, seed);
            let oracle = DistanceOracle::precompute(&space).unwrap();
            let (expected, _) = brute_force(&oracle, 3);
            let (completion, _, _) = run(&space, 3, &NoCutoff, Box::new(NoProvider));
            assert_eq!(Some(expected), completion.best_value);
        }
    }
    #[test]
    fn the_gap_is_closed_once_optimality_is_proved() {
        let space = scenario();
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let mut fringe = StackFringe::new();
        let mut solver = SequentialSolver::custom(&space, &oracle, 2, &bound, &EmptyDominance, &NoCutoff, &mut fringe, Box::new(Greedy)).unwrap();
        assert_eq!(1.0, solver.gap());
        solver.maximize();
        assert_eq!(0.0, solver.gap());
        assert_eq!(solver.best_lower_bound(), solver.best_upper_bound());
    }
    #[test]
    fn set_primal_only_accepts_improvements() {
        let space = scenario();
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let mut fringe = StackFringe::new();
        let mut solver = SequentialSolver::custom(&space, &oracle, 2, &bound, &EmptyDominance, &NoCutoff, &mut fringe, Box::new(NoProvider)).unwrap();
        solver.set_primal(1.0, vec![1, 2]);
        solver.set_primal(1.0, vec![0, 1]);
        assert_eq!(Some(2.0_f64.sqrt()), solver.best_value());
        assert_eq!(Some(vec![1, 2]), solver.best_solution());
        assert_eq!(&[2.0_f64.sqrt()], solver.history());
    }
    #[test]
    fn set_primal_recomputes_the_value_of_the_solution() {
        let space = scenario();
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let mut fringe = StackFringe::new();
        let mut solver = SequentialSolver::custom(&space, &oracle, 2, &bound, &EmptyDominance, &NoCutoff, &mut fringe, Box::new(NoProvider)).unwrap();
        solver.set_primal(1e9, vec![0, 1]);
        assert_eq!(Some(1.0), solver.best_value());
    }
    #[test]
    fn set_primal_ignores_malformed_solutions() {
        let space = scenario();
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 2);
        let mut fringe = StackFringe::new();
        let mut solver = SequentialSolver::custom(&space, &oracle, 2, &bound, &EmptyDominance, &NoCutoff, &mut fringe, Box::new(NoProvider)).unwrap();
        solver.set_primal(1e9, vec![0]);
        solver.set_primal(1e9, vec![0, 9]);
        solver.set_primal(1e9, vec![3, 3]);
        solver.set_primal(1e9, vec![0, 1, 3]);
        assert_eq!(None, solver.best_value());

        let completion = solver.maximize();
        assert!(completion.is_exact);
        assert_eq!(Some(50.0_f64.sqrt()), completion.best_value);
        assert_eq!(Some(vec![0, 3]), solver.best_solution());
    }
    /// A bound which never prunes anything
    struct Loose;
    impl UpperBound for Loose {
        fn upper_bound(&self, _: &Selection) -> f64 {
            f64::INFINITY
        }
    }
    #[test]
    fn canonical_order_evaluates_each_subset_once() {
        for eager in [true, false] {
            let space = random_space(6, 2, 3);
            let oracle = DistanceOracle::precompute(&space).unwrap();
            let dominance = CanonicalOrder::new(6, 3);
            let mut fringe = StackFringe::new();
            let mut solver = SequentialSolver::custom(&space, &oracle, 3, &Loose, &dominance, &NoCutoff, &mut fringe, Box::new(NoProvider))
                .unwrap()
                .with_eager_pruning(eager);
            let completion = solver.maximize();
            assert!(completion.is_exact);
            assert_eq!(20, solver.statistics().solutions);
            assert_eq!(brute_force(&oracle, 3).0, completion.best_value.unwrap());
        }
    }
    #[test]
    fn asking_for_more_points_than_available_is_infeasible() {
        let space = scenario();
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 5);
        let mut fringe = StackFringe::new();
        let res = SequentialSolver::custom(&space, &oracle, 5, &bound, &EmptyDominance, &NoCutoff, &mut fringe, Box::new(NoProvider));
        assert!(matches!(res, Err(Error::Infeasible { requested: 5, available: 4 })));
    }
    #[test]
    fn without_eager_pruning_every_generated_node_is_explored() {
        let space = random_space(8, 2, 5);
        let oracle = DistanceOracle::precompute(&space).unwrap();
        let bound = NeighborhoodBound::new(&oracle, 3);
        let dominance = CanonicalOrder::new(8, 3);
        let mut fringe = StackFringe::new();
        let mut solver = SequentialSolver::custom(&space, &oracle, 3, &bound, &dominance, &NoCutoff, &mut fringe, Box::new(NoProvider))
            .unwrap()
            .with_eager_pruning(false);
        solver.maximize();
        let stats = solver.statistics();
        assert_eq!(stats.generated, stats.explored);
        assert!(stats.pruned_by_dominance > 0);
    }
}

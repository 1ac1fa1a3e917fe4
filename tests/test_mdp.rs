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

//! This module is meant to test the correctness of the solver on the
//! instances of the `resources` directory.

use std::path::PathBuf;

use maxdiv::*;

fn locate(id: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("tests/resources/")
        .join(id)
}

fn solve_id(id: &str, m: usize, strategy: Strategy) -> f64 {
    let space = io_utils::read_instance(locate(id)).unwrap();
    let config = SolverConfigBuilder::default()
        .strategy(strategy)
        .build()
        .unwrap();

    let outcome = solve(&space, m, &config).unwrap();
    assert!(outcome.completion.is_exact);

    let selection = outcome.selection.unwrap();
    let value = outcome.value.unwrap();
    assert_eq!(m, selection.len());
    assert!((space.diversity(&selection).unwrap() - value).abs() < 1e-9);
    value
}

/// Solves the instance with a solver assembled by hand
fn solve_custom(id: &str, m: usize) -> f64 {
    let space = io_utils::read_instance(locate(id)).unwrap();
    let oracle = DistanceOracle::precompute(&space).unwrap();
    let bound = NeighborhoodBound::new(&oracle, m);
    let dominance = CanonicalOrder::new(space.len(), m);
    let cutoff = NoCutoff;
    let mut fringe = SimpleFringe::new(MaxUB);

    let mut solver = SequentialSolver::custom(
        &space,
        &oracle,
        m,
        &bound,
        &dominance,
        &cutoff,
        &mut fringe,
        Box::new(Grasp::default())).unwrap();

    let Completion { best_value, is_exact } = solver.maximize();
    assert!(is_exact);
    best_value.unwrap_or(-1.0)
}

fn check(id: &str, m: usize, expected: f64) {
    for strategy in [Strategy::DepthFirst, Strategy::BestFirst] {
        let actual = solve_id(id, m, strategy);
        assert!((actual - expected).abs() < 1e-6, "{id} m={m} {strategy}: {actual} != {expected}");
    }
    let actual = solve_custom(id, m);
    assert!((actual - expected).abs() < 1e-6, "{id} m={m} custom: {actual} != {expected}");
}

#[test]
fn scenario() {
    check("scenario.txt", 2, 7.0710678118654755);
    check("scenario.txt", 3, 14.474192049298324);
    check("scenario.txt", 4, 23.29152984910427);
}
#[test]
fn max_div_10_2() {
    check("max_div_10_2.txt", 2, 10.221046913110222);
    check("max_div_10_2.txt", 3, 24.79743985003547);
    check("max_div_10_2.txt", 4, 43.51248659433455);
    check("max_div_10_2.txt", 5, 67.12561406457827);
}
#[test]
fn max_div_12_3() {
    check("max_div_12_3.txt", 2, 12.230756313491002);
    check("max_div_12_3.txt", 3, 29.28279974194183);
    check("max_div_12_3.txt", 4, 54.68833787783353);
    check("max_div_12_3.txt", 5, 85.17504216496816);
}
#[test]
fn max_div_15_2() {
    check("max_div_15_2.txt", 2, 42.64746768566687);
    check("max_div_15_2.txt", 3, 101.0876343346705);
    check("max_div_15_2.txt", 4, 193.1204406574919);
    check("max_div_15_2.txt", 5, 294.86129675666734);
}
#[test]
fn the_whole_directory_can_be_solved() {
    let instances = io_utils::read_instances(locate("")).unwrap();
    assert_eq!(4, instances.len());

    let config = SolverConfig::default();
    let mut reporter = Reporter::new(vec![]);
    for (name, space) in instances.iter() {
        let outcome = solve(space, 3, &config).unwrap();
        reporter.write(&Report::new(name, space, 3, &outcome)).unwrap();
    }
    reporter.finish().unwrap();

    let text = String::from_utf8(reporter.into_inner()).unwrap();
    assert_eq!(4 + 4, text.lines().count());
    assert!(text.contains("max_div_15_2.txt"));
}
#[test]
fn too_many_points_is_infeasible() {
    let space = io_utils::read_instance(locate("scenario.txt")).unwrap();
    let res = solve(&space, 5, &SolverConfig::default());
    assert!(matches!(res, Err(Error::Infeasible { .. })));
}

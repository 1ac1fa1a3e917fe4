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

//! This module provides the constructive greedy heuristic.

use crate::{Error, InitialBoundProvider, Point, Result, Seed, VectorSpace};

/// Returns the position (in `remaining`) of the point farthest away from
/// `center`. Ties are resolved in favor of the first one.
fn farthest_from(space: &VectorSpace, remaining: &[usize], center: &Point) -> Result<Option<usize>> {
    let mut best = None;
    let mut best_dist = f64::NEG_INFINITY;
    for (pos, i) in remaining.iter().enumerate() {
        let dist = space[*i].distance(center)?;
        if dist > best_dist {
            best_dist = dist;
            best = Some(pos);
        }
    }
    Ok(best)
}

/// The greedy heuristic grows a selection one point at a time. At each step,
/// it picks the point which lies the farthest from the center of gravity of
/// the points that are not selected yet. The center is then recomputed
/// without the picked point.
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
/// let seed = Greedy.solve(&space, 2).unwrap().unwrap();
/// assert!(seed.selection.contains(&3));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Greedy;
impl InitialBoundProvider for Greedy {
    fn name(&self) -> &str {
        "greedy"
    }

    fn solve(&mut self, space: &VectorSpace, m: usize) -> Result<Option<Seed>> {
        if m > space.len() {
            return Err(Error::Infeasible { requested: m, available: space.len() });
        }

        let mut remaining = (0..space.len()).collect::<Vec<_>>();
        let mut selection = Vec::with_capacity(m);
        while selection.len() < m {
            let center = space.centroid(remaining.iter().copied())
                .ok_or_else(|| Error::Provider("no point left to select".to_string()))?;
            let pos = farthest_from(space, &remaining, &center)?
                .ok_or_else(|| Error::Provider("no point left to select".to_string()))?;
            selection.push(remaining.remove(pos));
        }

        selection.sort_unstable();
        let value = space.diversity(&selection)?;
        Ok(Some(Seed { selection, value }))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Error, Greedy, InitialBoundProvider, Point, VectorSpace};
    use crate::test_utils::{random_space, scenario};

    #[test]
    fn it_picks_the_outlier_first() {
        let seed = Greedy.solve(&scenario(), 1).unwrap().unwrap();
        assert_eq!(vec![3], seed.selection);
        assert_eq!(0.0, seed.value);
    }
    #[test]
    fn it_recomputes_the_center_after_each_pick() {
        // once (5,5) is gone, the center of the three remaining points is
        // (1/3, 1/3) which is farthest from (1,0) and (0,1): the first wins
        let seed = Greedy.solve(&scenario(), 2).unwrap().unwrap();
        assert_eq!(vec![1, 3], seed.selection);
    }
    #[test]
    fn its_value_is_the_diversity_of_its_selection() {
        let space = random_space(15, 3, 7);
        let seed = Greedy.solve(&space, 5).unwrap().unwrap();
        assert_eq!(5, seed.selection.len());
        assert_eq!(space.diversity(&seed.selection).unwrap(), seed.value);
    }
    #[test]
    fn selecting_every_point_is_possible() {
        let space = random_space(6, 2, 1);
        let seed = Greedy.solve(&space, 6).unwrap().unwrap();
        assert_eq!(vec![0, 1, 2, 3, 4, 5], seed.selection);
    }
    #[test]
    fn selecting_nothing_is_possible() {
        let seed = Greedy.solve(&scenario(), 0).unwrap().unwrap();
        assert!(seed.selection.is_empty());
        assert_eq!(0.0, seed.value);
    }
    #[test]
    fn asking_for_too_many_points_fails() {
        let space = VectorSpace::from_points(vec![Point::new(vec![1.0])]).unwrap();
        assert!(matches!(Greedy.solve(&space, 2), Err(Error::Infeasible { requested: 2, available: 1 })));
    }
}

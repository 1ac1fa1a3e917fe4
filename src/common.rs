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

//! This module defines the most basic data types that are used throughout all
//! the code of our library (both at the abstraction and implementation levels).
//! These are also the types your client code is likely to work with.

use std::{fmt, hash::{Hash, Hasher}, ops::Index, time::Duration};

use bit_set::BitSet;

use crate::{Error, Result};

// ----------------------------------------------------------------------------
// --- POINT ------------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A point is an immutable vector of real coordinates. It optionally carries
/// an identifier which is its index in the original instance and which remains
/// stable when the point is copied into some subset of that instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    id: Option<usize>,
    coords: Vec<f64>,
}
impl Point {
    /// Creates an anonymous point
    pub fn new(coords: Vec<f64>) -> Self {
        Self { id: None, coords }
    }
    /// Creates a point bearing the given identifier
    pub fn with_id(id: usize, coords: Vec<f64>) -> Self {
        Self { id: Some(id), coords }
    }
    pub fn id(&self) -> Option<usize> {
        self.id
    }
    /// The number of coordinates of this point
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }
    /// Returns the euclidean distance between `self` and `other`.
    ///
    /// # Example
    /// ```
    /// # use maxdiv::Point;
    /// let a = Point::new(vec![0.0, 0.0]);
    /// let b = Point::new(vec![3.0, 4.0]);
    /// assert_eq!(5.0, a.distance(&b).unwrap());
    /// ```
    pub fn distance(&self, other: &Point) -> Result<f64> {
        if self.dimension() != other.dimension() {
            return Err(Error::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        let sum = self.coords.iter()
            .zip(other.coords.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>();
        Ok(sum.sqrt())
    }
}
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "{id}"),
            None => write!(f, "{:?}", self.coords),
        }
    }
}

// ----------------------------------------------------------------------------
// --- VECTOR SPACE -----------------------------------------------------------
// ----------------------------------------------------------------------------
/// An ordered sequence of points which all have the same dimension.
///
/// Points that are added without an identifier receive their position in
/// the space as identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorSpace {
    dimension: usize,
    points: Vec<Point>,
}
impl VectorSpace {
    /// Creates an empty space of the given dimension
    pub fn new(dimension: usize) -> Self {
        Self { dimension, points: vec![] }
    }
    /// Creates a space from a sequence of points. The dimension of the space
    /// is that of the first point.
    pub fn from_points<I: IntoIterator<Item = Point>>(points: I) -> Result<Self> {
        let mut points = points.into_iter().peekable();
        let dimension = points.peek().map(Point::dimension).unwrap_or(0);
        let mut space = Self::new(dimension);
        for point in points {
            space.push(point)?;
        }
        Ok(space)
    }
    /// Appends a point to this space
    pub fn push(&mut self, mut point: Point) -> Result<()> {
        if point.dimension() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                found: point.dimension(),
            });
        }
        if point.id.is_none() {
            point.id = Some(self.points.len());
        }
        self.points.push(point);
        Ok(())
    }
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
    /// Returns the center of gravity of the points at the given `indices`
    /// (None when no index is given).
    pub fn centroid<I: IntoIterator<Item = usize>>(&self, indices: I) -> Option<Point> {
        let mut center = vec![0.0; self.dimension];
        let mut count = 0_usize;
        for i in indices {
            for (c, x) in center.iter_mut().zip(self.points[i].coords.iter()) {
                *c += x;
            }
            count += 1;
        }
        if count == 0 {
            return None;
        }
        center.iter_mut().for_each(|c| *c /= count as f64);
        Some(Point::new(center))
    }
    /// Returns the sum of the pairwise distances between the points at the
    /// given `indices`.
    pub fn diversity(&self, indices: &[usize]) -> Result<f64> {
        let mut total = 0.0;
        for (x, i) in indices.iter().enumerate() {
            for j in indices.iter().skip(x + 1) {
                total += self.points[*i].distance(&self.points[*j])?;
            }
        }
        Ok(total)
    }
}
impl Index<usize> for VectorSpace {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

// ----------------------------------------------------------------------------
// --- SELECTION --------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A set of point indices. Membership is what matters; the selection however
/// remembers which index was added last since some dominance rules need it.
/// That index plays no role in equality nor in hashing.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    members: BitSet,
    last: Option<usize>,
}
impl Selection {
    /// Creates an empty selection able to hold indices up to `n` without
    /// reallocating
    pub fn empty(n: usize) -> Self {
        Self { members: BitSet::with_capacity(n), last: None }
    }
    /// Returns a copy of this selection extended with `index`
    pub fn with(&self, index: usize) -> Self {
        let mut members = self.members.clone();
        members.insert(index);
        Self { members, last: Some(index) }
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    pub fn contains(&self, index: usize) -> bool {
        self.members.contains(index)
    }
    /// The index that was added last
    pub fn last(&self) -> Option<usize> {
        self.last
    }
    /// The largest index in the selection
    pub fn max(&self) -> Option<usize> {
        self.members.iter().last()
    }
    /// Iterates over the selected indices in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.members.iter()
    }
    /// The selected indices in increasing order
    pub fn to_vec(&self) -> Vec<usize> {
        self.members.iter().collect()
    }
}
impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.members.iter().eq(other.members.iter())
    }
}
impl Eq for Selection {}
impl Hash for Selection {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for i in self.members.iter() {
            i.hash(state);
        }
    }
}
impl FromIterator<usize> for Selection {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        let mut selection = Selection::default();
        for i in iter {
            selection.members.insert(i);
            selection.last = Some(i);
        }
        selection
    }
}

// ----------------------------------------------------------------------------
// --- SELECTION NODE ---------------------------------------------------------
// ----------------------------------------------------------------------------
/// A node of the search tree: a partial selection along with its exact value
/// and an upper bound on the best value reachable by completing it.
///
/// # Note:
/// Nodes are independent snapshots. They hold no reference to their parent
/// and can be dropped as soon as they have been processed.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionNode {
    /// The selected indices
    pub selection: Selection,
    /// The depth of the node in the tree (that is the size of the selection)
    pub level: usize,
    /// The sum of pairwise distances among the selected points
    pub value: f64,
    /// An upper bound on the value of any completion of this node
    pub ub: f64,
}

// ----------------------------------------------------------------------------
// --- Results ----------------------------------------------------------------
// ----------------------------------------------------------------------------
/// A reason explaining why the search stopped before proving optimality
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reason {
    /// It stopped because the configured cutoff criterion was met
    CutoffOccurred,
}

/// The outcome of a maximization
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    /// is the given solution exact (proved optimal) or is it the best that
    /// was known when the cutoff occurred ?
    pub is_exact: bool,
    /// if present, the value of the best solution that was found
    pub best_value: Option<f64>,
}

/// The counters maintained while exploring the search tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    /// Nodes that were created (the root included)
    pub generated: u64,
    /// Nodes that were popped off the frontier
    pub explored: u64,
    /// Nodes discarded by the dominance rule
    pub pruned_by_dominance: u64,
    /// Nodes discarded because their bound could not beat the incumbent
    pub pruned_by_bound: u64,
    /// Complete selections whose exact value was evaluated
    pub solutions: u64,
    /// Number of times the incumbent was strictly improved during the search
    pub improvements: u64,
    /// The largest number of nodes simultaneously waiting on the frontier
    pub peak_frontier: usize,
    /// Wall clock time spent in the search
    pub elapsed: Duration,
}
impl Statistics {
    /// Total number of pruned nodes
    pub fn pruned(&self) -> u64 {
        self.pruned_by_dominance + self.pruned_by_bound
    }
}

// ############################################################################
// #### TESTS #################################################################
// ############################################################################

#[cfg(test)]
mod test_point {
    use crate::{Error, Point};

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![5.0, 5.0]);
        assert!((a.distance(&b).unwrap() - 50.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(0.0, a.distance(&a).unwrap());
    }
    #[test]
    fn distance_is_symmetric() {
        let a = Point::new(vec![1.0, -2.0, 3.5]);
        let b = Point::new(vec![-4.0, 0.5, 2.0]);
        assert_eq!(a.distance(&b).unwrap(), b.distance(&a).unwrap());
    }
    #[test]
    fn distance_fails_on_dimension_mismatch() {
        let a = Point::new(vec![0.0, 0.0]);
        let b = Point::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(a.distance(&b), Err(Error::DimensionMismatch { expected: 2, found: 3 })));
    }
    #[test]
    fn display_shows_the_id_when_known() {
        assert_eq!("7", Point::with_id(7, vec![1.0]).to_string());
        assert_eq!("[1.0, 2.0]", Point::new(vec![1.0, 2.0]).to_string());
    }
}

#[cfg(test)]
mod test_space {
    use crate::{Error, Point, VectorSpace};

    fn square() -> VectorSpace {
        VectorSpace::from_points(vec![
            Point::new(vec![0.0, 0.0]),
            Point::new(vec![2.0, 0.0]),
            Point::new(vec![2.0, 2.0]),
            Point::new(vec![0.0, 2.0]),
        ]).unwrap()
    }

    #[test]
    fn points_receive_their_position_as_id() {
        let space = square();
        let ids = space.iter().map(|p| p.id()).collect::<Vec<_>>();
        assert_eq!(vec![Some(0), Some(1), Some(2), Some(3)], ids);
    }
    #[test]
    fn explicit_ids_are_preserved() {
        let space = VectorSpace::from_points(vec![Point::with_id(42, vec![1.0])]).unwrap();
        assert_eq!(Some(42), space[0].id());
    }
    #[test]
    fn pushing_a_point_of_another_dimension_fails() {
        let mut space = square();
        let res = space.push(Point::new(vec![1.0]));
        assert!(matches!(res, Err(Error::DimensionMismatch { expected: 2, found: 1 })));
        assert_eq!(4, space.len());
    }
    #[test]
    fn centroid_of_the_square_is_its_center() {
        let space = square();
        assert_eq!(Some(Point::new(vec![1.0, 1.0])), space.centroid(0..4));
        assert_eq!(Some(Point::new(vec![2.0, 1.0])), space.centroid([1, 2]));
        assert_eq!(None, space.centroid(std::iter::empty()));
    }
    #[test]
    fn diversity_sums_all_pairs() {
        let space = square();
        let expected = 4.0 * 2.0 + 2.0 * 8.0_f64.sqrt();
        assert!((space.diversity(&[0, 1, 2, 3]).unwrap() - expected).abs() < 1e-12);
        assert_eq!(0.0, space.diversity(&[2]).unwrap());
        assert_eq!(0.0, space.diversity(&[]).unwrap());
    }
}

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

//! This module provides the implementation of a simple solver fringe (priority queue)

use std::cmp::Ordering;

use binary_heap_plus::BinaryHeap;
use compare::Compare;

use crate::{CompareSubProblem, Fringe, SelectionNode, SubProblemRanking};

/// A node waiting in the heap along with its insertion rank
#[derive(Debug, Clone)]
struct Pending {
    seq: u64,
    node: SelectionNode,
}

/// Orders the pending nodes with the ranking first. Equally ranked nodes are
/// popped in the order they were pushed.
#[derive(Debug, Clone, Copy)]
struct ComparePending<O: SubProblemRanking>(CompareSubProblem<O>);
impl<O: SubProblemRanking> Compare<Pending> for ComparePending<O> {
    fn compare(&self, l: &Pending, r: &Pending) -> Ordering {
        self.0.compare(&l.node, &r.node)
            .then_with(|| r.seq.cmp(&l.seq))
    }
}

/// The simplest priority fringe you can think of: it basically consists of
/// a binary heap that pushes and pops nodes. Together with the `MaxUB`
/// ranking, it yields a best-first exploration of the search tree.
///
/// # Note
/// Ties are broken deterministically (on the insertion order) so that two
/// runs on the same instance explore exactly the same nodes.
pub struct SimpleFringe<O: SubProblemRanking> {
    heap: BinaryHeap<Pending, ComparePending<O>>,
    seq: u64,
}
impl<O> SimpleFringe<O> where O: SubProblemRanking {
    /// This creates a new simple fringe which uses a custom fringe order.
    pub fn new(o: O) -> Self {
        let cmp = ComparePending(CompareSubProblem::new(o));
        Self { heap: BinaryHeap::from_vec_cmp(vec![], cmp), seq: 0 }
    }
}
impl<O> Fringe for SimpleFringe<O> where O: SubProblemRanking {
    fn push(&mut self, node: SelectionNode) {
        self.heap.push(Pending { seq: self.seq, node });
        self.seq += 1;
    }

    fn pop(&mut self) -> Option<SelectionNode> {
        self.heap.pop().map(|p| p.node)
    }

    fn clear(&mut self) {
        self.heap.clear()
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

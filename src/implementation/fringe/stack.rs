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

//! This module provides the implementation of a last-in first-out fringe
//! which yields a depth-first exploration of the search tree.

use crate::{Fringe, SelectionNode};

/// A plain stack of nodes. The node which was pushed last is the first one to
/// be popped, so the solver explores one branch all the way down before it
/// backtracks. Its memory footprint is small but nothing guarantees that good
/// solutions are found early.
#[derive(Debug, Default, Clone)]
pub struct StackFringe {
    stack: Vec<SelectionNode>,
}
impl StackFringe {
    pub fn new() -> Self {
        Self::default()
    }
}
impl Fringe for StackFringe {
    fn push(&mut self, node: SelectionNode) {
        self.stack.push(node)
    }

    fn pop(&mut self) -> Option<SelectionNode> {
        self.stack.pop()
    }

    fn clear(&mut self) {
        self.stack.clear()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

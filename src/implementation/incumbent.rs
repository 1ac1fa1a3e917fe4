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

//! This module provides the tracker of the best solution found so far.

use crate::Selection;

/// The incumbent is the best complete selection known at any point of the
/// search along with its value. Its value never decreases: it only changes
/// upon a strict improvement, so that ties keep the earlier solution.
#[derive(Debug, Clone)]
pub struct Incumbent {
    value: f64,
    selection: Option<Selection>,
    /// the successive values taken by the incumbent
    history: Vec<f64>,
}
impl Default for Incumbent {
    fn default() -> Self {
        Self::new()
    }
}
impl Incumbent {
    /// Creates an empty tracker whose value is minus infinity
    pub fn new() -> Self {
        Self { value: f64::NEG_INFINITY, selection: None, history: vec![] }
    }
    /// Replaces the incumbent with the given selection iff `value` is
    /// strictly greater than the current value. Returns true when it did.
    pub fn try_improve(&mut self, selection: Selection, value: f64) -> bool {
        if value > self.value {
            self.value = value;
            self.selection = Some(selection);
            self.history.push(value);
            true
        } else {
            false
        }
    }
    /// The value of the incumbent (minus infinity when there is none)
    pub fn value(&self) -> f64 {
        self.value
    }
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }
    /// All the values the incumbent went through, oldest first
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}

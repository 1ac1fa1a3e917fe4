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

use crate::Selection;

/// This trait gives the possibility to model a dominance relation between
/// partial selections. It is evaluated before the bound of a node since it is
/// expected to be a much cheaper test. A selection is dominated when it is
/// known that it needs not be completed because some other node of the tree
/// covers (at least) the same completions with a value that is no worse.
pub trait Dominance {
    /// Returns true iff the given partial selection is dominated and can
    /// hence be discarded. An empty selection is never dominated.
    fn is_dominated(&self, selection: &Selection) -> bool;
    /// Returns true iff the relation may also discard complete selections.
    /// By default, a complete selection is always evaluated.
    fn applies_to_complete(&self) -> bool {
        false
    }
}

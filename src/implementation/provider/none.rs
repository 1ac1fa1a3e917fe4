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

use crate::{InitialBoundProvider, Result, Seed, VectorSpace};

/// A provider with nothing to propose. The search then starts with a lower
/// bound of minus infinity.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProvider;
impl InitialBoundProvider for NoProvider {
    fn name(&self) -> &str {
        "none"
    }
    fn solve(&mut self, _: &VectorSpace, _: usize) -> Result<Option<Seed>> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use crate::{InitialBoundProvider, NoProvider};
    use crate::test_utils::scenario;

    #[test]
    fn it_never_proposes_anything() {
        assert_eq!(None, NoProvider.solve(&scenario(), 2).unwrap());
    }
}

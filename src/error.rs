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

//! This module defines the errors that can be raised while loading an instance
//! or while setting up a solver. Once the search has started, nothing can fail
//! anymore: an empty frontier is a normal termination.

/// This enumeration groups the kind of errors that might occur when reading
/// an instance or preparing a resolution. There can be io errors (file
/// unavailable ?), format errors (e.g. the file is not an instance but
/// contains the text of your next paper), geometric errors (two points that
/// do not live in the same space) or plain infeasibility (asking for more
/// points than the instance has).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There was an io related error
    #[error("io error {0}")]
    Io(#[from] std::io::Error),
    /// The instance file is not properly formatted.
    #[error("invalid input (line {line}): {reason}")]
    InvalidInput { line: usize, reason: String },
    /// Two points being compared have coordinate vectors of different lengths.
    #[error("dimension mismatch: expected {expected} coordinates, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The requested subset size exceeds the number of available points.
    #[error("cannot select {requested} points out of {available}")]
    Infeasible { requested: usize, available: usize },
    /// An initial bound provider failed to produce a seed.
    #[error("provider failure: {0}")]
    Provider(String),
}

impl Error {
    pub(crate) fn invalid_input<S: Into<String>>(line: usize, reason: S) -> Self {
        Error::InvalidInput { line, reason: reason.into() }
    }
}

/// Shorthand for the results produced throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

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

//! This module provides the formatting of the results: one row per
//! resolution, either as a fixed width table or as json.

use std::io::{self, Write};

use serde::Serialize;

use crate::{Outcome, VectorSpace};

/// The summary of one resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The name of the instance
    pub instance: String,
    /// The number of points of the instance
    pub n: usize,
    /// The dimension of the space
    pub dimension: usize,
    /// The number of points to select
    pub m: usize,
    /// The diversity of the best selection (if any)
    pub value: Option<f64>,
    /// Whether optimality was proved
    pub exact: bool,
    /// The time spent searching, in seconds
    pub cpu_time: f64,
    /// The number of nodes created during the search
    pub nodes: u64,
    /// The number of nodes discarded during the search
    pub pruned: u64,
    /// The identifiers of the selected points
    pub selection: Vec<usize>,
}
impl Report {
    /// Summarizes the `outcome` of the selection of `m` points of `space`
    pub fn new(instance: &str, space: &VectorSpace, m: usize, outcome: &Outcome) -> Self {
        let selection = outcome.selection.iter()
            .flatten()
            .map(|i| space[*i].id().unwrap_or(*i))
            .collect();
        Self {
            instance: instance.to_string(),
            n: space.len(),
            dimension: space.dimension(),
            m,
            value: outcome.value,
            exact: outcome.completion.is_exact,
            cpu_time: outcome.statistics.elapsed.as_secs_f64(),
            nodes: outcome.statistics.generated,
            pruned: outcome.statistics.pruned(),
            selection,
        }
    }
}

/// The reporter writes the reports as the rows of a table. The header of the
/// table is written right before the first row.
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    header_printed: bool,
}
impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, header_printed: false }
    }
    /// Writes one row (preceded by the header if it has not been written yet)
    pub fn write(&mut self, report: &Report) -> io::Result<()> {
        if !self.header_printed {
            self.write_header()?;
            self.header_printed = true;
        }
        let value = report.value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
        let value = if report.exact { value } else { format!("{value}*") };
        let selection = report.selection.iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(
            self.out,
            "{:<20}{:<6}{:<6}{:<6}{:<12}{:<12.5}{:<12}{{{}}}",
            report.instance, report.n, report.dimension, report.m, value, report.cpu_time, report.nodes, selection
        )
    }
    /// Writes the closing rule of the table (if anything was written at all)
    pub fn finish(&mut self) -> io::Result<()> {
        if self.header_printed {
            writeln!(self.out, "{}", "-".repeat(81))?;
        }
        self.out.flush()
    }
    /// Gives the underlying writer back
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_header(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(81))?;
        writeln!(
            self.out,
            "{:<20}{:<6}{:<6}{:<6}{:<12}{:<12}{:<12}{}",
            "Instance", "n", "K", "m", "z", "CPU (s)", "Nodes", "S"
        )?;
        writeln!(self.out, "{}", "-".repeat(81))
    }
}

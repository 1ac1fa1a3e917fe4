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

//! This module provides the functions used to read instance files.
//!
//! An instance file starts with the number of points `n` and the dimension
//! `d` of the space, followed by `n` lines holding the `d` coordinates of one
//! point each. Coordinates may use a comma as decimal separator (`6,26` is
//! read as `6.26`). Blank lines are ignored.

use std::{fs::{self, File}, io::{BufRead, BufReader}, path::Path};

use crate::{Error, Point, Result, VectorSpace};

/// Parses one of the two positive integers of the header
fn parse_count(line: usize, token: &str) -> Result<usize> {
    let value = token.parse::<i64>()
        .map_err(|_| Error::invalid_input(line, format!("'{token}' is not an integer")))?;
    if value <= 0 {
        return Err(Error::invalid_input(line, format!("expected a positive count, found {value}")));
    }
    usize::try_from(value).map_err(|_| Error::invalid_input(line, format!("{value} is too large")))
}

/// Parses one coordinate
fn parse_coord(line: usize, token: &str) -> Result<f64> {
    let value = token.replace(',', ".").parse::<f64>()
        .map_err(|_| Error::invalid_input(line, format!("'{token}' is not a number")))?;
    if !value.is_finite() {
        return Err(Error::invalid_input(line, format!("'{token}' is not a finite number")));
    }
    Ok(value)
}

/// This function parses an instance from any buffered source. It returns
/// either the space of points described by the source or an error telling
/// what is wrong with it.
pub fn parse_instance<R: BufRead>(source: R) -> Result<VectorSpace> {
    let mut header = Vec::with_capacity(2);
    let mut space = VectorSpace::default();
    let mut last_line = 0;

    for (i, line) in source.lines().enumerate() {
        let line = line?;
        last_line = i + 1;

        let mut tokens = line.split_ascii_whitespace().peekable();
        while header.len() < 2 {
            match tokens.next() {
                Some(token) => header.push(parse_count(last_line, token)?),
                None => break,
            }
            if header.len() == 2 {
                space = VectorSpace::new(header[1]);
            }
        }
        if tokens.peek().is_none() {
            continue;
        }

        let (n, d) = (header[0], header[1]);
        if space.len() == n {
            return Err(Error::invalid_input(last_line, format!("more than the announced {n} points")));
        }
        let coords = tokens
            .map(|t| parse_coord(last_line, t))
            .collect::<Result<Vec<_>>>()?;
        if coords.len() != d {
            return Err(Error::invalid_input(last_line, format!("expected {d} coordinates, found {}", coords.len())));
        }
        space.push(Point::new(coords))?;
    }

    if header.len() < 2 {
        return Err(Error::invalid_input(last_line, "missing header (number of points and dimension)"));
    }
    if space.len() != header[0] {
        return Err(Error::invalid_input(last_line, format!("expected {} points, found {}", header[0], space.len())));
    }
    Ok(space)
}

/// This function is used to read an instance from file.
pub fn read_instance<P: AsRef<Path>>(fname: P) -> Result<VectorSpace> {
    let f = File::open(fname)?;
    parse_instance(BufReader::new(f))
}

/// Reads every regular file of a directory as an instance. The instances
/// are returned along with their file name, sorted by file name.
pub fn read_dir<P: AsRef<Path>>(dir: P) -> Result<Vec<(String, VectorSpace)>> {
    let mut files = vec![];
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            files.push((entry.file_name().to_string_lossy().into_owned(), entry.path()));
        }
    }
    files.sort();

    files.into_iter()
        .map(|(name, path)| read_instance(path).map(|space| (name, space)))
        .collect()
}

/// Reads the instance at `path` when it is a file, or all the instances it
/// holds when it is a directory.
pub fn read_instances<P: AsRef<Path>>(path: P) -> Result<Vec<(String, VectorSpace)>> {
    let path = path.as_ref();
    if path.is_dir() {
        read_dir(path)
    } else {
        let name = path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(vec![(name, read_instance(path)?)])
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::Error;
    use super::{parse_instance, read_dir, read_instance, read_instances};

    fn parse(text: &str) -> crate::Result<crate::VectorSpace> {
        parse_instance(text.as_bytes())
    }
    fn resources() -> PathBuf {
        PathBuf::new()
            .join(env!("CARGO_MANIFEST_DIR"))
            .join("tests/resources/")
    }

    #[test]
    fn a_well_formed_instance_is_parsed() {
        let space = parse("3 2\n0 0\n1.5 -2\n3 4\n").unwrap();
        assert_eq!(3, space.len());
        assert_eq!(2, space.dimension());
        assert_eq!(&[1.5, -2.0], space[1].coords());
        assert_eq!(Some(2), space[2].id());
    }
    #[test]
    fn commas_are_decimal_separators() {
        let space = parse("2 3\n6,26\t1,02 -0,5\n1 2 3\n").unwrap();
        assert_eq!(&[6.26, 1.02, -0.5], space[0].coords());
    }
    #[test]
    fn blank_lines_and_split_headers_are_accepted() {
        let space = parse("\n2\n1\n\n  4\n\n5\n").unwrap();
        assert_eq!(2, space.len());
        assert_eq!(&[5.0], space[1].coords());
    }
    #[test]
    fn non_positive_counts_are_rejected() {
        assert!(matches!(parse("0 2\n"), Err(Error::InvalidInput { line: 1, .. })));
        assert!(matches!(parse("3 -1\n"), Err(Error::InvalidInput { line: 1, .. })));
        assert!(matches!(parse("three 2\n"), Err(Error::InvalidInput { line: 1, .. })));
    }
    #[test]
    fn a_short_row_is_rejected() {
        let res = parse("2 2\n1 2\n3\n");
        assert!(matches!(res, Err(Error::InvalidInput { line: 3, .. })));
    }
    #[test]
    fn a_long_row_is_rejected() {
        let res = parse("2 2\n1 2 3\n3 4\n");
        assert!(matches!(res, Err(Error::InvalidInput { line: 2, .. })));
    }
    #[test]
    fn garbage_coordinates_are_rejected() {
        assert!(matches!(parse("1 2\n1 x\n"), Err(Error::InvalidInput { line: 2, .. })));
        assert!(matches!(parse("1 1\nNaN\n"), Err(Error::InvalidInput { line: 2, .. })));
    }
    #[test]
    fn missing_points_are_rejected() {
        assert!(matches!(parse("3 1\n1\n2\n"), Err(Error::InvalidInput { .. })));
    }
    #[test]
    fn extra_points_are_rejected() {
        assert!(matches!(parse("1 1\n1\n2\n"), Err(Error::InvalidInput { line: 3, .. })));
    }
    #[test]
    fn an_empty_source_is_rejected() {
        assert!(matches!(parse(""), Err(Error::InvalidInput { .. })));
        assert!(matches!(parse("4"), Err(Error::InvalidInput { .. })));
    }
    #[test]
    fn a_missing_file_is_an_io_error() {
        assert!(matches!(read_instance("/this/file/does/not/exist"), Err(Error::Io(_))));
    }
    #[test]
    fn a_file_is_read() {
        let space = read_instance(resources().join("scenario.txt")).unwrap();
        assert_eq!(4, space.len());
        assert_eq!(&[5.0, 5.0], space[3].coords());
    }
    #[test]
    fn a_directory_is_read_in_file_name_order() {
        let instances = read_dir(resources()).unwrap();
        let names = instances.iter().map(|(n, _)| n.clone()).collect::<Vec<_>>();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(sorted, names);
        assert!(names.contains(&"scenario.txt".to_string()));
    }
    #[test]
    fn a_single_file_is_named_after_itself() {
        let instances = read_instances(resources().join("scenario.txt")).unwrap();
        assert_eq!(1, instances.len());
        assert_eq!("scenario.txt", instances[0].0);
    }
}

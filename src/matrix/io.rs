//! Textual serialization of matrices.
//!
//! The format is whitespace-delimited: the shape header `<rows> <cols>`
//! followed by the elements in row-major order, one line per row. The
//! empty matrix is written as the literal text `Null Matrix` with no shape
//! header, and reads back as the empty matrix. [`std::fmt::Display`] and
//! [`std::str::FromStr`] implement the format over strings;
//! [`Matrix::write_to`] and [`Matrix::read_from`] stream it, with
//! `read_from` consuming exactly one matrix and leaving the rest of the
//! stream untouched.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::traits::Scalar;

use super::Matrix;

/// Errors from parsing the matrix text format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMatrixError {
    /// The input ended before both dimensions were read.
    MissingDimension,
    /// A dimension token was not a non-negative integer.
    InvalidDimension,
    /// The input ended before `rows * cols` values were read.
    MissingValue,
    /// A value token could not be parsed as an element.
    InvalidValue,
    /// The input started like the `Null Matrix` form but did not
    /// complete it.
    MalformedNull,
}

impl fmt::Display for ParseMatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMatrixError::MissingDimension => write!(f, "missing matrix dimension"),
            ParseMatrixError::InvalidDimension => write!(f, "invalid matrix dimension"),
            ParseMatrixError::MissingValue => write!(f, "missing matrix element"),
            ParseMatrixError::InvalidValue => write!(f, "invalid matrix element"),
            ParseMatrixError::MalformedNull => write!(f, "malformed null matrix"),
        }
    }
}

impl std::error::Error for ParseMatrixError {}

/// Errors from reading a matrix off a byte stream.
#[derive(Debug)]
pub enum ReadError {
    /// The underlying reader failed.
    Io(io::Error),
    /// The stream content did not parse as a matrix.
    Parse(ParseMatrixError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(e) => write!(f, "read failed: {}", e),
            ReadError::Parse(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(e) => Some(e),
            ReadError::Parse(e) => Some(e),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(e: io::Error) -> Self {
        ReadError::Io(e)
    }
}

impl From<ParseMatrixError> for ReadError {
    fn from(e: ParseMatrixError) -> Self {
        ReadError::Parse(e)
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Null Matrix");
        }

        write!(f, "{} {}", self.nrows, self.ncols)?;
        for i in 0..self.nrows {
            writeln!(f)?;
            for j in 0..self.ncols {
                write!(f, "{} ", self.data[i * self.ncols + j])?;
            }
        }
        Ok(())
    }
}

// ── FromStr ─────────────────────────────────────────────────────────

impl<T: Scalar + FromStr> FromStr for Matrix<T> {
    type Err = ParseMatrixError;

    /// Parse one matrix from the front of the string.
    ///
    /// Trailing content after the parsed matrix is ignored, mirroring the
    /// stream-extraction behavior of [`Matrix::read_from`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        let first = tokens.next().ok_or(ParseMatrixError::MissingDimension)?;
        if first == "Null" {
            return match tokens.next() {
                Some("Matrix") => Ok(Matrix::empty()),
                _ => Err(ParseMatrixError::MalformedNull),
            };
        }

        let nrows: usize = first
            .parse()
            .map_err(|_| ParseMatrixError::InvalidDimension)?;
        let ncols: usize = tokens
            .next()
            .ok_or(ParseMatrixError::MissingDimension)?
            .parse()
            .map_err(|_| ParseMatrixError::InvalidDimension)?;

        let mut data = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            let tok = tokens.next().ok_or(ParseMatrixError::MissingValue)?;
            data.push(tok.parse().map_err(|_| ParseMatrixError::InvalidValue)?);
        }

        Ok(Matrix { data, nrows, ncols })
    }
}

// ── Stream IO ───────────────────────────────────────────────────────

/// Read the next whitespace-delimited token, or `None` at end of stream.
fn next_token(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }

        let mut consumed = 0;
        let mut done = false;
        for &b in buf {
            if b.is_ascii_whitespace() {
                if token.is_empty() {
                    consumed += 1;
                    continue;
                }
                done = true;
                break;
            }
            token.push(b);
            consumed += 1;
        }
        reader.consume(consumed);
        if done {
            break;
        }
    }

    if token.is_empty() {
        Ok(None)
    } else {
        // Tokens are built from non-whitespace ASCII reads, but the stream
        // may legitimately contain UTF-8; reject anything unconvertible as
        // an invalid value downstream.
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

impl<T: Scalar + fmt::Display> Matrix<T> {
    /// Serialize in the text format to a byte stream.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let m = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let mut out = Vec::new();
    /// m.write_to(&mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "2 2\n1 2 \n3 4 ");
    /// ```
    pub fn write_to(&self, writer: &mut impl Write) -> io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl<T: Scalar + FromStr> Matrix<T> {
    /// Read one matrix in the text format from a byte stream.
    ///
    /// Consumes exactly the tokens of one matrix; subsequent stream
    /// content (further matrices, other data) is left for the caller.
    ///
    /// ```
    /// use mathkit::Matrix;
    ///
    /// let mut input = "2 2\n1 2 \n3 4 ".as_bytes();
    /// let m = Matrix::<f64>::read_from(&mut input).unwrap();
    /// assert_eq!(m, Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]));
    /// ```
    pub fn read_from(reader: &mut impl BufRead) -> Result<Self, ReadError> {
        let first = next_token(reader)?.ok_or(ParseMatrixError::MissingDimension)?;
        if first == "Null" {
            return match next_token(reader)?.as_deref() {
                Some("Matrix") => Ok(Matrix::empty()),
                _ => Err(ParseMatrixError::MalformedNull.into()),
            };
        }

        let nrows: usize = first
            .parse()
            .map_err(|_| ParseMatrixError::InvalidDimension)?;
        let ncols: usize = next_token(reader)?
            .ok_or(ParseMatrixError::MissingDimension)?
            .parse()
            .map_err(|_| ParseMatrixError::InvalidDimension)?;

        let mut data = Vec::with_capacity(nrows * ncols);
        for _ in 0..nrows * ncols {
            let tok = next_token(reader)?.ok_or(ParseMatrixError::MissingValue)?;
            data.push(tok.parse().map_err(|_| ParseMatrixError::InvalidValue)?);
        }

        Ok(Matrix { data, nrows, ncols })
    }
}

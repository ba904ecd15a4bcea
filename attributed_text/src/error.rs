// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::ops::Range;

/// Error returned when a byte range can't be used with a particular text.
///
/// Carries the [`ErrorKind`], the attempted range and the length of the text it was checked
/// against. Misaligned ranges also report which [`Endpoint`] was at fault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    range: Range<usize>,
    len: usize,
    endpoint: Option<Endpoint>,
}

impl Error {
    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The byte range the caller attempted to use.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The length in bytes of the text the range was checked against.
    pub fn text_len(&self) -> usize {
        self.len
    }

    /// For [`ErrorKind::NotOnCharBoundary`], the endpoint that split a character.
    pub fn endpoint(&self) -> Option<Endpoint> {
        self.endpoint
    }

    pub(crate) fn invalid_range(range: &Range<usize>, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidRange,
            range: range.clone(),
            len,
            endpoint: None,
        }
    }

    pub(crate) fn invalid_bounds(range: &Range<usize>, len: usize) -> Self {
        Self {
            kind: ErrorKind::InvalidBounds,
            range: range.clone(),
            len,
            endpoint: None,
        }
    }

    pub(crate) fn not_on_char_boundary(range: &Range<usize>, len: usize, which: Endpoint) -> Self {
        Self {
            kind: ErrorKind::NotOnCharBoundary,
            range: range.clone(),
            len,
            endpoint: Some(which),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Range { start, end } = self.range;
        match self.kind {
            ErrorKind::InvalidBounds => {
                write!(f, "range {start}..{end} out of bounds for len {}", self.len)
            }
            ErrorKind::InvalidRange => write!(f, "invalid range {start}..{end}: start > end"),
            ErrorKind::NotOnCharBoundary => match self.endpoint {
                Some(Endpoint::Start) => write!(
                    f,
                    "range {start}..{end}: start index {start} not on UTF-8 boundary"
                ),
                Some(Endpoint::End) => {
                    write!(f, "range {start}..{end}: end index {end} not on UTF-8 boundary")
                }
                None => write!(f, "range {start}..{end} not on UTF-8 boundary"),
            },
        }
    }
}

impl core::error::Error for Error {}

/// The category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The range reaches past the end of the text.
    InvalidBounds,

    /// The range had `start > end`.
    InvalidRange,

    /// Either `start` or `end` falls inside a UTF-8 encoded character.
    NotOnCharBoundary,
}

/// Identifies which endpoint of a range failed boundary validation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The `start` endpoint of the range.
    Start,

    /// The `end` endpoint of the range.
    End,
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::{Endpoint, Error};

/// A byte range that has been checked against a particular text.
///
/// Holding a `TextRange` means:
///
/// - `start <= end`
/// - both ends are within the text
/// - both ends lie on UTF-8 character boundaries
///
/// The range does not remember which text it was checked against; only reuse it with the same
/// text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextRange {
    start: usize,
    end: usize,
}

impl TextRange {
    /// Validates `range` against `text`.
    #[inline]
    pub fn new(text: &str, range: Range<usize>) -> Result<Self, Error> {
        validate_range(text, &range)?;
        Ok(Self {
            start: range.start,
            end: range.end,
        })
    }

    /// The start byte offset.
    #[must_use]
    #[inline]
    pub const fn start(self) -> usize {
        self.start
    }

    /// The end byte offset (exclusive).
    #[must_use]
    #[inline]
    pub const fn end(self) -> usize {
        self.end
    }

    /// Returns `true` if the range covers no bytes.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns this range as a `Range<usize>`.
    #[must_use]
    #[inline]
    pub fn as_range(self) -> Range<usize> {
        self.start..self.end
    }
}

impl From<TextRange> for Range<usize> {
    #[inline]
    fn from(value: TextRange) -> Self {
        value.as_range()
    }
}

pub(crate) fn validate_range(text: &str, range: &Range<usize>) -> Result<(), Error> {
    let len = text.len();
    if range.start > range.end {
        return Err(Error::invalid_range(range, len));
    }
    if range.end > len {
        return Err(Error::invalid_bounds(range, len));
    }
    if !text.is_char_boundary(range.start) {
        return Err(Error::not_on_char_boundary(range, len, Endpoint::Start));
    }
    if !text.is_char_boundary(range.end) {
        return Err(Error::not_on_char_boundary(range, len, Endpoint::End));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{TextRange, validate_range};
    use crate::{Endpoint, ErrorKind};

    #[test]
    fn accepts_ranges_inside_text() {
        assert!(validate_range("Hello!", &(0..0)).is_ok());
        assert!(validate_range("Hello!", &(0..6)).is_ok());
        assert!(validate_range("Hello!", &(6..6)).is_ok());
        let range = TextRange::new("Hello!", 1..3).unwrap();
        assert_eq!(range.as_range(), 1..3);
        assert!(!range.is_empty());
    }

    #[test]
    #[expect(
        clippy::reversed_empty_ranges,
        reason = "We want an invalid range for testing."
    )]
    fn rejects_start_after_end() {
        let err = TextRange::new("Hello!", 4..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRange);
        assert_eq!(err.range(), 4..3);
        assert!(err.to_string().contains("start > end"));
    }

    #[test]
    fn rejects_out_of_bounds() {
        let err = TextRange::new("Hello!", 2..7).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(err.text_len(), 6);
        assert_eq!(err.to_string(), "range 2..7 out of bounds for len 6");
    }

    #[test]
    fn rejects_split_characters() {
        // "é" is 2 bytes in UTF-8; index 1 is not a boundary.
        let err = TextRange::new("éclair", 1..3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        assert_eq!(err.endpoint(), Some(Endpoint::Start));

        let err = TextRange::new("éclair", 0..1).unwrap_err();
        assert_eq!(err.endpoint(), Some(Endpoint::End));
        assert!(err.to_string().contains("end index 1"));
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::segments::Segments;
use crate::{Error, TextRange};

/// A block of text with attributes applied to (possibly overlapping) ranges within it.
///
/// Spans are kept in the order they were applied. That order is meaningful: it is the order in
/// which [`Segments::active_spans`] reports the spans covering a segment.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText<A: Debug> {
    text: Arc<str>,
    spans: Vec<(TextRange, A)>,
}

impl<A: Debug> AttributedText<A> {
    /// Create an `AttributedText` with no attributes applied.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Borrow the underlying text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns a shared handle to the underlying text.
    #[inline]
    pub fn shared_text(&self) -> Arc<str> {
        self.text.clone()
    }

    /// Returns the length of the underlying text, in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the underlying text is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply an `attribute` to a byte `range` within the text.
    ///
    /// The range must be in bounds and on UTF-8 character boundaries.
    pub fn apply_attribute(&mut self, range: Range<usize>, attribute: A) -> Result<(), Error> {
        let range = TextRange::new(&self.text, range)?;
        self.spans.push((range, attribute));
        Ok(())
    }

    /// Iterate over all spans, in the order they were applied.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &A)> {
        self.spans
            .iter()
            .map(|(range, attribute)| (range.as_range(), attribute))
    }

    /// Returns the number of spans applied to the text.
    #[inline]
    pub fn spans_len(&self) -> usize {
        self.spans.len()
    }

    /// Iterate over the attributes covering the byte at `index`, in application order.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &A> {
        self.spans.iter().filter_map(move |(range, attribute)| {
            (range.start() <= index && index < range.end()).then_some(attribute)
        })
    }

    /// Split the text into contiguous, non-overlapping segments.
    ///
    /// See [`Segments`] for details.
    pub fn segments(&self) -> Segments<'_, A> {
        Segments::new(self)
    }

    pub(crate) fn span_at_idx(&self, idx: usize) -> Option<(&TextRange, &A)> {
        self.spans.get(idx).map(|(range, attribute)| (range, attribute))
    }

    /// Remove all applied spans.
    pub fn clear_attributes(&mut self) {
        self.spans.clear();
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{AttributedText, ErrorKind};

    #[derive(Debug, PartialEq)]
    enum Mark {
        Keep,
        Drop,
    }

    #[test]
    fn attributes_at_reports_overlaps_in_order() {
        let mut text = AttributedText::new("Hello!");
        text.apply_attribute(1..3, Mark::Keep).unwrap();
        text.apply_attribute(2..5, Mark::Drop).unwrap();

        assert!(text.attributes_at(0).next().is_none());
        assert_eq!(text.attributes_at(1).collect::<Vec<_>>(), [&Mark::Keep]);
        assert_eq!(
            text.attributes_at(2).collect::<Vec<_>>(),
            [&Mark::Keep, &Mark::Drop]
        );
        assert_eq!(text.attributes_at(4).collect::<Vec<_>>(), [&Mark::Drop]);
    }

    #[test]
    fn rejected_ranges_are_not_recorded() {
        let mut text = AttributedText::new("éclair");
        let err = text.apply_attribute(1..2, Mark::Keep).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = text.apply_attribute(0..9, Mark::Keep).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(text.spans_len(), 0);

        text.apply_attribute(0..2, Mark::Keep).unwrap();
        assert_eq!(text.spans().next(), Some((0..2, &Mark::Keep)));
    }

    #[test]
    fn clear_attributes_keeps_text() {
        let mut text = AttributedText::new("abc");
        text.apply_attribute(0..3, Mark::Keep).unwrap();
        text.clear_attributes();
        assert_eq!(text.spans_len(), 0);
        assert_eq!(text.text(), "abc");
        assert_eq!(text.len(), 3);
    }
}

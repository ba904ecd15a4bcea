// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sweep-line segmentation of overlapping spans.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::AttributedText;

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum EventKind {
    // Ends sort before starts so that a span ending at a boundary is gone before the segment
    // starting at that boundary is reported.
    End,
    Start,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Event {
    boundary: usize,
    kind: EventKind,
    span: usize,
}

/// Iterator over the contiguous segments of an [`AttributedText`].
///
/// Every span start and end becomes a segment boundary, so each yielded range is non-empty, the
/// ranges never overlap, and together they cover the whole text. The spans covering the most
/// recently yielded segment are available from [`Segments::active_spans`].
///
/// Zero-length spans are ignored entirely.
///
/// # Examples
///
/// ```
/// use attributed_text::AttributedText;
///
/// let mut text = AttributedText::new("hello");
/// text.apply_attribute(0..2, "red").unwrap();
/// text.apply_attribute(1..5, "blue").unwrap();
///
/// let mut segments = text.segments();
/// assert_eq!(segments.next(), Some(0..1));
/// assert_eq!(segments.active_spans().collect::<Vec<_>>(), [&"red"]);
/// assert_eq!(segments.next(), Some(1..2));
/// assert_eq!(segments.active_spans().collect::<Vec<_>>(), [&"red", &"blue"]);
/// assert_eq!(segments.next(), Some(2..5));
/// assert_eq!(segments.active_spans().collect::<Vec<_>>(), [&"blue"]);
/// assert_eq!(segments.next(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Segments<'a, A: Debug> {
    attributed: &'a AttributedText<A>,
    boundaries: Vec<usize>,
    events: Vec<Event>,
    cursor: usize,
    // Sorted span indices, which is also application order.
    active: Vec<usize>,
    index: usize,
}

impl<'a, A: Debug> Segments<'a, A> {
    pub(crate) fn new(attributed: &'a AttributedText<A>) -> Self {
        let mut boundaries = Vec::with_capacity(2 + attributed.spans_len() * 2);
        boundaries.push(0);
        boundaries.push(attributed.len());
        for (range, _) in attributed.spans() {
            if range.is_empty() {
                continue;
            }
            boundaries.push(range.start);
            boundaries.push(range.end);
        }
        boundaries.sort_unstable();
        boundaries.dedup();

        let mut events = Vec::with_capacity(attributed.spans_len() * 2);
        for (span, (range, _)) in attributed.spans().enumerate() {
            if range.is_empty() {
                continue;
            }
            let (Ok(start), Ok(end)) = (
                boundaries.binary_search(&range.start),
                boundaries.binary_search(&range.end),
            ) else {
                unreachable!("every span endpoint was added to the boundary list");
            };
            events.push(Event {
                boundary: start,
                kind: EventKind::Start,
                span,
            });
            events.push(Event {
                boundary: end,
                kind: EventKind::End,
                span,
            });
        }
        events.sort_unstable();

        Self {
            attributed,
            boundaries,
            events,
            cursor: 0,
            active: Vec::new(),
            index: 0,
        }
    }

    fn advance_to(&mut self, boundary: usize) {
        while let Some(event) = self.events.get(self.cursor) {
            if event.boundary != boundary {
                break;
            }
            match (event.kind, self.active.binary_search(&event.span)) {
                (EventKind::End, Ok(ix)) => {
                    self.active.remove(ix);
                }
                (EventKind::Start, Err(ix)) => self.active.insert(ix, event.span),
                _ => {}
            }
            self.cursor += 1;
        }
    }

    /// Returns the attributes covering the most recently yielded segment, in application order.
    ///
    /// Before the first call to [`Iterator::next`] and after exhaustion this is empty.
    pub fn active_spans(&self) -> impl DoubleEndedIterator<Item = &'a A> + '_ {
        let attributed = self.attributed;
        self.active.iter().filter_map(move |&ix| {
            attributed.span_at_idx(ix).map(|(_, attribute)| attribute)
        })
    }

    /// Like [`Segments::active_spans`], with each attribute paired with the index of its span.
    ///
    /// Span indices count applications, starting at zero, so two spans carrying equal attributes
    /// can still be told apart.
    pub fn active_indexed_spans(&self) -> impl DoubleEndedIterator<Item = (usize, &'a A)> + '_ {
        let attributed = self.attributed;
        self.active.iter().filter_map(move |&ix| {
            attributed
                .span_at_idx(ix)
                .map(|(_, attribute)| (ix, attribute))
        })
    }

    /// Returns the number of attributes covering the most recently yielded segment.
    pub fn active_len(&self) -> usize {
        self.active.len()
    }
}

impl<A: Debug> Iterator for Segments<'_, A> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index + 1 >= self.boundaries.len() {
            self.active.clear();
            return None;
        }
        self.advance_to(self.index);
        let start = self.boundaries[self.index];
        let end = self.boundaries[self.index + 1];
        self.index += 1;
        debug_assert!(start < end, "boundaries are sorted and deduplicated");
        Some(start..end)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.boundaries.len().saturating_sub(self.index + 1);
        (remaining, Some(remaining))
    }
}

impl<A: Debug> ExactSizeIterator for Segments<'_, A> {}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use crate::AttributedText;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Color {
        Red,
        Blue,
        Green,
    }

    fn collect(text: &AttributedText<Color>) -> Vec<(core::ops::Range<usize>, Vec<Color>)> {
        let mut out = Vec::new();
        let mut segments = text.segments();
        while let Some(range) = segments.next() {
            out.push((range, segments.active_spans().cloned().collect()));
        }
        out
    }

    #[test]
    fn empty_text_yields_nothing() {
        let text = AttributedText::<Color>::new("");
        assert!(text.segments().next().is_none());
    }

    #[test]
    fn no_spans_yields_whole_text() {
        let text = AttributedText::<Color>::new("hello");
        assert_eq!(collect(&text), [(0..5, Vec::new())]);
    }

    #[test]
    fn overlapping_spans_split_segments() {
        let mut text = AttributedText::new("abcdef");
        text.apply_attribute(1..4, Color::Red).unwrap();
        text.apply_attribute(2..5, Color::Blue).unwrap();
        assert_eq!(
            collect(&text),
            [
                (0..1, Vec::new()),
                (1..2, vec![Color::Red]),
                (2..4, vec![Color::Red, Color::Blue]),
                (4..5, vec![Color::Blue]),
                (5..6, Vec::new()),
            ]
        );
    }

    #[test]
    fn application_order_is_kept_for_nested_spans() {
        let mut text = AttributedText::new("abcdef");
        text.apply_attribute(0..6, Color::Red).unwrap();
        text.apply_attribute(2..4, Color::Blue).unwrap();
        text.apply_attribute(0..6, Color::Green).unwrap();

        let mut segments = text.segments();
        assert_eq!(segments.next(), Some(0..2));
        assert_eq!(segments.next(), Some(2..4));
        let forward: Vec<_> = segments.active_spans().collect();
        assert_eq!(forward, [&Color::Red, &Color::Blue, &Color::Green]);
        let reverse: Vec<_> = segments.active_spans().rev().collect();
        assert_eq!(reverse, [&Color::Green, &Color::Blue, &Color::Red]);
        let indices: Vec<_> = segments.active_indexed_spans().map(|(ix, _)| ix).collect();
        assert_eq!(indices, [0, 1, 2]);
    }

    #[test]
    fn adjacent_spans_do_not_leak() {
        let mut text = AttributedText::new("abcdef");
        text.apply_attribute(0..3, Color::Red).unwrap();
        text.apply_attribute(3..6, Color::Blue).unwrap();
        assert_eq!(
            collect(&text),
            [(0..3, vec![Color::Red]), (3..6, vec![Color::Blue])]
        );
    }

    #[test]
    fn zero_length_spans_are_ignored() {
        let mut text = AttributedText::new("hello");
        text.apply_attribute(2..2, Color::Red).unwrap();
        assert_eq!(collect(&text), [(0..5, Vec::new())]);
    }

    #[test]
    fn size_hint_tracks_remaining_segments() {
        let mut text = AttributedText::new("hello");
        text.apply_attribute(1..3, Color::Red).unwrap();
        let mut segments = text.segments();
        assert_eq!(segments.len(), 3);
        segments.next();
        assert_eq!(segments.len(), 2);
        segments.next();
        segments.next();
        assert_eq!(segments.len(), 0);
        assert_eq!(segments.next(), None);
        assert_eq!(segments.active_len(), 0);
    }
}

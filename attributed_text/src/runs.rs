// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use crate::{AttributedText, Error, TextRange};

/// One run of an [`AttributedRuns`]: a byte range and the attribute value covering it.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<A> {
    /// The byte range in the underlying text.
    pub range: Range<usize>,
    /// The attribute value for the whole range.
    pub attribute: A,
}

/// Text partitioned into contiguous, non-overlapping runs, each carrying one attribute value.
///
/// Unlike [`AttributedText`], which records overlapping spans, every byte of an
/// `AttributedRuns` belongs to exactly one run. Edits through [`AttributedRuns::update`] split
/// runs where needed and only touch the runs inside the edited range, so values set by earlier
/// edits elsewhere are preserved.
///
/// Empty text has no runs.
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedRuns<A> {
    text: Arc<str>,
    runs: Vec<Run<A>>,
}

impl<A: Clone> AttributedRuns<A> {
    /// Creates runs covering `text` with a single `attribute` value.
    pub fn new(text: impl Into<Arc<str>>, attribute: A) -> Self {
        let text = text.into();
        let runs = if text.is_empty() {
            Vec::new()
        } else {
            alloc::vec![Run {
                range: 0..text.len(),
                attribute,
            }]
        };
        Self { text, runs }
    }

    /// Builds runs from the segments of `spans`.
    ///
    /// `f` receives the attributes active over each segment, in application order, each paired
    /// with the index of the span it came from, and returns the value for the corresponding run.
    pub fn from_spans<S, F>(spans: &AttributedText<S>, mut f: F) -> Self
    where
        S: Debug,
        F: FnMut(&[(usize, &S)]) -> A,
    {
        let mut segments = spans.segments();
        let mut runs = Vec::with_capacity(segments.len());
        let mut active = Vec::new();
        while let Some(range) = segments.next() {
            active.clear();
            active.extend(segments.active_indexed_spans());
            runs.push(Run {
                range,
                attribute: f(active.as_slice()),
            });
        }
        Self {
            text: spans.shared_text(),
            runs,
        }
    }

    /// Applies `f` to the attribute values covering `range`.
    ///
    /// Runs straddling either end of `range` are split first, so `f` never affects bytes outside
    /// the range. An empty range is a no-op.
    pub fn update<F>(&mut self, range: Range<usize>, mut f: F) -> Result<(), Error>
    where
        F: FnMut(&mut A),
    {
        let range = TextRange::new(&self.text, range)?;
        if range.is_empty() {
            return Ok(());
        }
        let first = self.split_at(range.start());
        let last = self.split_at(range.end());
        for run in &mut self.runs[first..last] {
            f(&mut run.attribute);
        }
        Ok(())
    }

    /// Ensures a run starts at `offset` and returns its index.
    ///
    /// Returns the number of runs when `offset` is the end of the text.
    fn split_at(&mut self, offset: usize) -> usize {
        let ix = match self.runs.binary_search_by(|run| run.range.start.cmp(&offset)) {
            Ok(ix) => return ix,
            Err(ix) => ix,
        };
        let Some(containing) = ix.checked_sub(1) else {
            return ix;
        };
        let run = &mut self.runs[containing];
        if offset >= run.range.end {
            return ix;
        }
        let tail = Run {
            range: offset..run.range.end,
            attribute: run.attribute.clone(),
        };
        run.range.end = offset;
        self.runs.insert(ix, tail);
        ix
    }
}

impl<A> AttributedRuns<A> {
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

    /// Returns the runs in text order.
    #[inline]
    pub fn runs(&self) -> &[Run<A>] {
        &self.runs
    }

    /// Iterate mutably over the attribute values, in text order.
    ///
    /// Run boundaries can't be changed this way.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Range<usize>, &mut A)> {
        self.runs
            .iter_mut()
            .map(|run| (run.range.clone(), &mut run.attribute))
    }

    /// Returns the run containing the byte at `offset`.
    pub fn run_at(&self, offset: usize) -> Option<&Run<A>> {
        let ix = match self.runs.binary_search_by(|run| run.range.start.cmp(&offset)) {
            Ok(ix) => ix,
            Err(ix) => ix.checked_sub(1)?,
        };
        self.runs.get(ix).filter(|run| run.range.contains(&offset))
    }

    /// Returns an iterator that merges adjacent runs with equal attribute values.
    pub fn coalesced(&self) -> CoalescedRuns<'_, A>
    where
        A: PartialEq,
    {
        CoalescedRuns {
            runs: &self.runs,
            index: 0,
        }
    }
}

/// Iterator over the runs of an [`AttributedRuns`] with equal neighbors merged.
///
/// Created by [`AttributedRuns::coalesced`].
#[derive(Clone, Debug)]
pub struct CoalescedRuns<'a, A> {
    runs: &'a [Run<A>],
    index: usize,
}

impl<'a, A: PartialEq> Iterator for CoalescedRuns<'a, A> {
    type Item = (Range<usize>, &'a A);

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.runs.get(self.index)?;
        let mut range = first.range.clone();
        self.index += 1;
        while let Some(next) = self.runs.get(self.index) {
            if next.attribute != first.attribute {
                break;
            }
            range.end = next.range.end;
            self.index += 1;
        }
        Some((range, &first.attribute))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::{AttributedRuns, AttributedText, ErrorKind};

    fn ranges<A>(runs: &AttributedRuns<A>) -> Vec<core::ops::Range<usize>> {
        runs.runs().iter().map(|run| run.range.clone()).collect()
    }

    #[test]
    fn empty_text_has_no_runs() {
        let mut runs = AttributedRuns::new("", 0_u8);
        assert!(runs.runs().is_empty());
        assert!(runs.update(0..0, |v| *v += 1).is_ok());
        assert!(runs.runs().is_empty());
    }

    #[test]
    fn update_splits_only_at_range_ends() {
        let mut runs = AttributedRuns::new("abcdef", 0_u8);
        runs.update(2..4, |v| *v += 1).unwrap();
        assert_eq!(ranges(&runs), [0..2, 2..4, 4..6]);
        let values: Vec<_> = runs.runs().iter().map(|run| run.attribute).collect();
        assert_eq!(values, [0, 1, 0]);

        runs.update(1..5, |v| *v += 10).unwrap();
        assert_eq!(ranges(&runs), [0..1, 1..2, 2..4, 4..5, 5..6]);
        let values: Vec<_> = runs.runs().iter().map(|run| run.attribute).collect();
        assert_eq!(values, [0, 10, 11, 10, 0]);
    }

    #[test]
    fn update_rejects_bad_ranges_without_changes() {
        let mut runs = AttributedRuns::new("éclair", 0_u8);
        let err = runs.update(1..3, |v| *v += 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotOnCharBoundary);
        let err = runs.update(0..40, |v| *v += 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBounds);
        assert_eq!(ranges(&runs), [0..7]);
    }

    #[test]
    fn from_spans_follows_segments() {
        let mut spans = AttributedText::new("hello world");
        spans.apply_attribute(0..5, 'a').unwrap();
        spans.apply_attribute(3..8, 'b').unwrap();
        spans.apply_attribute(5..8, 'a').unwrap();
        let runs = AttributedRuns::from_spans(&spans, |active| {
            active
                .iter()
                .map(|&(ix, c)| (ix, *c))
                .collect::<Vec<(usize, char)>>()
        });
        assert_eq!(ranges(&runs), [0..3, 3..5, 5..8, 8..11]);
        assert_eq!(runs.runs()[1].attribute, [(0, 'a'), (1, 'b')]);
        // Equal attributes from different spans keep their own indices.
        assert_eq!(runs.runs()[2].attribute, [(1, 'b'), (2, 'a')]);
        assert!(runs.runs()[3].attribute.is_empty());
        assert_eq!(runs.text(), "hello world");
    }

    #[test]
    fn run_at_finds_containing_run() {
        let mut runs = AttributedRuns::new("abcdef", 0_u8);
        runs.update(2..4, |v| *v = 7).unwrap();
        assert_eq!(runs.run_at(0).map(|run| run.attribute), Some(0));
        assert_eq!(runs.run_at(3).map(|run| run.attribute), Some(7));
        assert_eq!(runs.run_at(4).map(|run| run.range.clone()), Some(4..6));
        assert!(runs.run_at(6).is_none());
    }

    #[test]
    fn coalesced_merges_equal_neighbors() {
        let mut runs = AttributedRuns::new("abcdef", 0_u8);
        runs.update(1..2, |v| *v = 1).unwrap();
        runs.update(2..3, |v| *v = 1).unwrap();
        runs.update(4..5, |v| *v = 0).unwrap();
        let merged: Vec<_> = runs.coalesced().map(|(range, v)| (range, *v)).collect();
        assert_eq!(merged, [(0..1, 0), (1..3, 1), (3..6, 0)]);

        let mut values: Vec<_> = Vec::new();
        for (_, value) in runs.iter_mut() {
            *value += 1;
            values.push(*value);
        }
        assert_eq!(values.len(), runs.runs().len());
    }
}

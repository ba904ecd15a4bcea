// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use attributed_text::{AttributedRuns, Error};
use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{
    Attribute, AttributeSet, IntentText, LinkTarget, ListKind, MentionRef, PresentationIntent,
};

/// What one run of a [`StyledText`] carries.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct RunData {
    pub(crate) intents: SmallVec<[PresentationIntent; 2]>,
    /// Index of the body span the run's mention came from.
    pub(crate) mention_span: Option<usize>,
    pub(crate) attributes: AttributeSet,
}

/// A borrowed view of one run of a [`StyledText`].
#[derive(Clone, Debug, PartialEq)]
pub struct StyledRun<'a> {
    /// Byte range of the run.
    pub range: Range<usize>,
    /// Intents covering the run, outermost list first.
    pub intents: &'a [PresentationIntent],
    /// Rendering attributes of the run.
    pub attributes: &'a AttributeSet,
}

/// A message body split into runs, each with its intents and rendering attributes.
///
/// Runs never overlap and together cover the whole text. A `StyledText` is built from an
/// [`IntentText`], passed by value through the styling passes, and handed to the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledText {
    runs: AttributedRuns<RunData>,
}

impl StyledText {
    /// Splits `body` into runs carrying the intents active over them.
    ///
    /// Link intents become [`Attribute::Link`] right away. No other attribute is set.
    pub fn from_intents(body: &IntentText) -> Self {
        let runs = AttributedRuns::from_spans(body, |active| {
            let mut data = RunData {
                intents: active.iter().map(|&(_, intent)| intent.clone()).collect(),
                mention_span: active
                    .iter()
                    .find(|(_, intent)| intent.mention().is_some())
                    .map(|&(span, _)| span),
                attributes: AttributeSet::new(),
            };
            for &(_, intent) in active {
                if let PresentationIntent::Link(url) = intent {
                    data.attributes
                        .insert(Attribute::Link(LinkTarget::Url(url.clone())));
                }
            }
            data
        });
        Self { runs }
    }

    /// The underlying text.
    pub fn as_str(&self) -> &str {
        self.runs.text()
    }

    /// A shared handle to the underlying text.
    pub fn shared_text(&self) -> Arc<str> {
        self.runs.shared_text()
    }

    /// Length of the text in bytes.
    pub fn len(&self) -> usize {
        self.runs.text().len()
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.runs.text().is_empty()
    }

    /// Iterate over the runs in text order.
    pub fn runs(&self) -> impl ExactSizeIterator<Item = StyledRun<'_>> + Clone {
        self.runs.runs().iter().map(|run| StyledRun {
            range: run.range.clone(),
            intents: &run.attribute.intents,
            attributes: &run.attribute.attributes,
        })
    }

    /// Iterate over runs with equal intents and attributes merged.
    pub fn coalesced_runs(&self) -> impl Iterator<Item = StyledRun<'_>> {
        self.runs.coalesced().map(|(range, data)| StyledRun {
            range,
            intents: &data.intents,
            attributes: &data.attributes,
        })
    }

    /// The run containing the byte at `offset`.
    pub fn run_at(&self, offset: usize) -> Option<StyledRun<'_>> {
        self.runs.run_at(offset).map(|run| StyledRun {
            range: run.range.clone(),
            intents: &run.attribute.intents,
            attributes: &run.attribute.attributes,
        })
    }

    /// The attributes of the byte at `offset`.
    pub fn attributes_at(&self, offset: usize) -> Option<&AttributeSet> {
        self.runs
            .run_at(offset)
            .map(|run| &run.attribute.attributes)
    }

    /// The link target of the byte at `offset`.
    ///
    /// A [`LinkTarget::Mention`] carries the mention's position in document order; the caller
    /// maps it back to its own mention table. A [`LinkTarget::Url`] can be opened directly.
    pub fn link_at(&self, offset: usize) -> Option<&LinkTarget> {
        self.attributes_at(offset)?.link()
    }

    /// The identity mentioned at `offset`.
    pub fn mention_at(&self, offset: usize) -> Option<&MentionRef> {
        self.runs
            .run_at(offset)?
            .attribute
            .intents
            .iter()
            .find_map(PresentationIntent::mention)
    }

    /// Every mention in document order, with its byte range.
    ///
    /// The position of a mention in this list is the index its synthesized link carries. A
    /// mention split over several runs, for example by emphasis, still counts once; two
    /// mentions of the same identity count twice, even when nothing separates them.
    pub fn mentions(&self) -> Vec<(Range<usize>, &MentionRef)> {
        let mut out: Vec<(Range<usize>, &MentionRef)> = Vec::new();
        let mut previous_span = None;
        for run in self.runs.runs() {
            let data = &run.attribute;
            let span = data.mention_span;
            let mention = data.intents.iter().find_map(PresentationIntent::mention);
            let (Some(span), Some(mention)) = (span, mention) else {
                previous_span = None;
                continue;
            };
            // Spans are contiguous, so runs of one span always follow each other.
            if previous_span == Some(span) {
                if let Some((range, _)) = out.last_mut() {
                    range.end = run.range.end;
                    continue;
                }
            }
            previous_span = Some(span);
            out.push((run.range.clone(), mention));
        }
        out
    }

    /// The marker the renderer draws in front of each list paragraph.
    ///
    /// Paragraphs are separated by `'\n'`. A paragraph is a list item when its first run carries
    /// a paragraph style with at least one list; the marker comes from the innermost list,
    /// numbered by how many items of that list precede it.
    pub fn list_markers(&self) -> Vec<(Range<usize>, String)> {
        let text = self.as_str();
        let mut counts: HashMap<(ListKind, u32), u32> = HashMap::new();
        let mut out = Vec::new();
        let mut start = 0;
        for paragraph in text.split('\n') {
            let range = start..start + paragraph.len();
            start = range.end + 1;
            if range.is_empty() {
                continue;
            }
            let Some(list) = self
                .attributes_at(range.start)
                .and_then(AttributeSet::paragraph_style)
                .and_then(|style| style.innermost_list())
            else {
                continue;
            };
            let count = counts.entry((list.kind, list.identity)).or_insert(0);
            out.push((range, list.marker_for_item(*count)));
            *count += 1;
        }
        out
    }

    /// Applies `f` to the attributes of every run, along with the run's intents.
    pub(crate) fn for_each_run_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&[PresentationIntent], &mut AttributeSet),
    {
        for (_, data) in self.runs.iter_mut() {
            f(&data.intents, &mut data.attributes);
        }
    }

    /// Applies `f` to the attributes covering `range`, splitting runs as needed.
    pub(crate) fn update_range<F>(&mut self, range: Range<usize>, mut f: F) -> Result<(), Error>
    where
        F: FnMut(&mut AttributeSet),
    {
        self.runs.update(range, |data| f(&mut data.attributes))
    }

    /// Applies `f` to the attributes covering `range`, logging and skipping invalid ranges.
    pub(crate) fn update_range_or_skip<F>(&mut self, range: Range<usize>, what: &str, f: F)
    where
        F: FnMut(&mut AttributeSet),
    {
        if let Err(err) = self.update_range(range, f) {
            log::debug!("skipping {what}: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use alloc::vec::Vec;

    use crate::{IntentText, LinkTarget, MentionRef, PresentationIntent, StyledText};

    #[test]
    fn from_intents_keeps_intents_and_links() {
        let mut body = IntentText::new("see example.com now");
        body.apply_attribute(4..15, PresentationIntent::Link(Arc::from("https://example.com")))
            .unwrap();
        body.apply_attribute(0..19, PresentationIntent::Emphasis)
            .unwrap();
        let styled = StyledText::from_intents(&body);

        let ranges: Vec<_> = styled.runs().map(|run| run.range).collect();
        assert_eq!(ranges, [0..4, 4..15, 15..19]);
        let middle = styled.run_at(5).unwrap();
        assert_eq!(
            middle.intents,
            [
                PresentationIntent::Link(Arc::from("https://example.com")),
                PresentationIntent::Emphasis
            ]
        );
        assert_eq!(
            styled.link_at(5),
            Some(&LinkTarget::url("https://example.com"))
        );
        assert!(styled.link_at(0).is_none());
        assert_eq!(styled.attributes_at(0).map(|set| set.len()), Some(0));
    }

    #[test]
    fn mentions_group_adjacent_runs_of_one_mention() {
        let alice = MentionRef::new("alice");
        let bob = MentionRef::new("bob");
        let mut body = IntentText::new("@alice @bob @alice");
        body.apply_attribute(0..6, PresentationIntent::Mention(alice.clone()))
            .unwrap();
        // Splits the first mention into two runs.
        body.apply_attribute(3..6, PresentationIntent::StrongEmphasis)
            .unwrap();
        body.apply_attribute(7..11, PresentationIntent::Mention(bob.clone()))
            .unwrap();
        body.apply_attribute(12..18, PresentationIntent::Mention(alice.clone()))
            .unwrap();
        let styled = StyledText::from_intents(&body);

        let mentions = styled.mentions();
        assert_eq!(mentions, [(0..6, &alice), (7..11, &bob), (12..18, &alice)]);
        assert_eq!(styled.mention_at(8), Some(&bob));
        assert_eq!(styled.mention_at(6), None);
    }

    #[test]
    fn touching_mentions_of_one_identity_stay_apart() {
        let ana = MentionRef::new("ana");
        let mut body = IntentText::new("@ana@ana");
        body.apply_attribute(0..4, PresentationIntent::Mention(ana.clone()))
            .unwrap();
        body.apply_attribute(4..8, PresentationIntent::Mention(ana.clone()))
            .unwrap();
        let styled = StyledText::from_intents(&body);

        assert_eq!(styled.mentions(), [(0..4, &ana), (4..8, &ana)]);
    }

    #[test]
    fn empty_body_has_no_runs() {
        let styled = StyledText::from_intents(&IntentText::new(""));
        assert!(styled.is_empty());
        assert_eq!(styled.runs().len(), 0);
        assert!(styled.mentions().is_empty());
        assert!(styled.link_at(0).is_none());
    }
}

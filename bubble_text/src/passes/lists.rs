// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::{ListDescriptor, ListKind, PresentationIntent, StyledText};

use super::StylePass;

/// The lists of one document, keyed by kind and identity.
///
/// Built fresh for every styling call by [`collect_list_descriptors`]. Iteration follows the order
/// in which lists were first seen.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListDescriptors {
    index: HashMap<(ListKind, u32), usize>,
    descriptors: Vec<ListDescriptor>,
}

impl ListDescriptors {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The descriptor of the list `identity` of the given kind.
    pub fn get(&self, kind: ListKind, identity: u32) -> Option<&ListDescriptor> {
        self.index
            .get(&(kind, identity))
            .map(|&ix| &self.descriptors[ix])
    }

    /// Adds `descriptor` unless its list is already known.
    ///
    /// Returns whether it was added.
    pub fn insert(&mut self, descriptor: ListDescriptor) -> bool {
        let key = (descriptor.kind, descriptor.identity);
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.descriptors.len());
        self.descriptors.push(descriptor);
        true
    }

    /// Iterate over the descriptors in first-seen order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ListDescriptor> {
        self.descriptors.iter()
    }

    /// Number of lists.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether there are no lists.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Scans `text` left to right and describes every list it finds.
///
/// An ordered list starts at the ordinal its first item was typed with, unless that ordinal is
/// `1` or absent, in which case it starts at `1`. Ordinals typed on later items are ignored, so a
/// list typed as `1.`, `1.`, `1.` is numbered `1`, `2`, `3`.
pub fn collect_list_descriptors(text: &StyledText) -> ListDescriptors {
    let mut descriptors = ListDescriptors::new();
    for run in text.runs() {
        for item in run.intents.iter().filter_map(PresentationIntent::list_item) {
            if descriptors.get(item.kind, item.identity).is_some() {
                continue;
            }
            let descriptor = match item.kind {
                ListKind::Unordered => ListDescriptor::unordered(item.identity),
                ListKind::Ordered => {
                    let start = match item.ordinal {
                        Some(ordinal) if ordinal != 1 => ordinal,
                        _ => 1,
                    };
                    ListDescriptor::ordered(item.identity, start)
                }
            };
            descriptors.insert(descriptor);
        }
    }
    log::trace!("{} lists", descriptors.len());
    descriptors
}

/// Reorders lists given outermost first into the innermost-first order paragraph styles store.
pub fn to_innermost_first(outer_to_inner: &[ListDescriptor]) -> SmallVec<[ListDescriptor; 2]> {
    outer_to_inner.iter().rev().copied().collect()
}

/// Attaches list membership to the paragraph style of every list item run.
///
/// Other paragraph style fields are left as they are. List identities missing from the
/// descriptors are skipped.
#[derive(Copy, Clone, Debug)]
pub struct ListStyleApplier<'a> {
    descriptors: &'a ListDescriptors,
}

impl<'a> ListStyleApplier<'a> {
    /// An applier resolving list identities through `descriptors`.
    pub fn new(descriptors: &'a ListDescriptors) -> Self {
        Self { descriptors }
    }
}

impl StylePass for ListStyleApplier<'_> {
    fn apply(&self, mut text: StyledText) -> StyledText {
        text.for_each_run_mut(|intents, attributes| {
            let outer_to_inner: SmallVec<[ListDescriptor; 2]> = intents
                .iter()
                .filter_map(PresentationIntent::list_item)
                .filter_map(|item| {
                    let descriptor = self.descriptors.get(item.kind, item.identity);
                    if descriptor.is_none() {
                        log::debug!("skipping unresolved list {}", item.identity);
                    }
                    descriptor.copied()
                })
                .collect();
            if outer_to_inner.is_empty() {
                return;
            }
            let lists = to_innermost_first(&outer_to_inner);
            attributes.update_paragraph_style(|style| style.text_lists = lists);
        });
        text
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{ListDescriptors, ListStyleApplier, collect_list_descriptors, to_innermost_first};
    use crate::passes::StylePass;
    use crate::{
        AttributeKey, IntentText, ListDescriptor, ListKind, MarkerFormat, PresentationIntent,
        StyledText,
    };

    #[test]
    fn innermost_first_reverses_nesting() {
        let outer = ListDescriptor::unordered(1);
        let inner = ListDescriptor::ordered(2, 1);
        assert_eq!(to_innermost_first(&[outer, inner]).as_slice(), [inner, outer]);
        assert_eq!(to_innermost_first(&[outer]).as_slice(), [outer]);
        assert!(to_innermost_first(&[]).is_empty());
    }

    #[test]
    fn first_item_decides_the_start() {
        let mut body = IntentText::new("a\nb\nc\nd");
        let items = [(0..1, 1, Some(3)), (2..3, 1, Some(1)), (4..5, 2, Some(1)), (6..7, 3, None)];
        for (range, identity, ordinal) in items {
            body.apply_attribute(range, PresentationIntent::OrderedListItem { identity, ordinal })
                .unwrap();
        }
        let descriptors = collect_list_descriptors(&StyledText::from_intents(&body));

        let starts: Vec<_> = descriptors
            .iter()
            .map(|list| (list.identity, list.start_ordinal))
            .collect();
        assert_eq!(starts, [(1, 3), (2, 1), (3, 1)]);
        assert_eq!(
            descriptors.get(ListKind::Ordered, 1).unwrap().marker_format,
            MarkerFormat::Decimal
        );
    }

    #[test]
    fn kinds_do_not_share_identities() {
        let mut body = IntentText::new("x\ny");
        body.apply_attribute(0..1, PresentationIntent::UnorderedListItem { identity: 1 })
            .unwrap();
        body.apply_attribute(
            2..3,
            PresentationIntent::OrderedListItem {
                identity: 1,
                ordinal: Some(4),
            },
        )
        .unwrap();
        let descriptors = collect_list_descriptors(&StyledText::from_intents(&body));
        assert_eq!(descriptors.len(), 2);
        assert_eq!(
            descriptors.get(ListKind::Unordered, 1),
            Some(&ListDescriptor::unordered(1))
        );
        assert_eq!(
            descriptors.get(ListKind::Ordered, 1),
            Some(&ListDescriptor::ordered(1, 4))
        );
    }

    #[test]
    fn unresolved_lists_are_skipped() {
        let mut body = IntentText::new("item\nplain");
        body.apply_attribute(0..4, PresentationIntent::UnorderedListItem { identity: 9 })
            .unwrap();
        let text = ListStyleApplier::new(&ListDescriptors::new())
            .apply(StyledText::from_intents(&body));
        assert!(
            text.runs()
                .all(|run| !run.attributes.contains(AttributeKey::ParagraphStyle))
        );
    }

    #[test]
    fn plain_runs_get_no_paragraph_style() {
        let mut body = IntentText::new("item\nplain");
        body.apply_attribute(0..4, PresentationIntent::UnorderedListItem { identity: 1 })
            .unwrap();
        let text = StyledText::from_intents(&body);
        let descriptors = collect_list_descriptors(&text);
        let text = ListStyleApplier::new(&descriptors).apply(text);

        let style = text.attributes_at(0).unwrap().paragraph_style().unwrap();
        assert_eq!(style.text_lists.as_slice(), [ListDescriptor::unordered(1)]);
        assert!(text.attributes_at(5).unwrap().paragraph_style().is_none());
    }
}

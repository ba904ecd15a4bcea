// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::{Attribute, Configuration, Font, LinkTarget, StyledText};

use super::StylePass;

/// Turns mentions into tappable links.
///
/// The `n`th mention in document order, counting from zero, gets the link
/// [`LinkTarget::Mention(n)`](LinkTarget::Mention), a bold body font, and the link color of the
/// bubble as text and underline color. The counter is positional: two mentions of the same
/// identity still get distinct links. See [`StyledText::mentions`] for the grouping of runs into
/// mentions.
#[derive(Copy, Clone, Debug)]
pub struct MentionLinkifier<'a> {
    configuration: &'a Configuration,
}

impl<'a> MentionLinkifier<'a> {
    /// A mention linkifier for `configuration`.
    pub fn new(configuration: &'a Configuration) -> Self {
        Self { configuration }
    }
}

impl StylePass for MentionLinkifier<'_> {
    fn apply(&self, mut text: StyledText) -> StyledText {
        let ranges: Vec<Range<usize>> = text
            .mentions()
            .into_iter()
            .map(|(range, _)| range)
            .collect();
        log::trace!("{} mentions", ranges.len());
        let color = self.configuration.link_color();
        for (index, range) in ranges.into_iter().enumerate() {
            text.update_range_or_skip(range, "mention", |attributes| {
                attributes.insert(Attribute::Font(Font::body().bold()));
                attributes.insert(Attribute::ForegroundColor(color));
                attributes.insert(Attribute::UnderlineColor(color));
                attributes.insert(Attribute::Link(LinkTarget::Mention(index)));
            });
        }
        text
    }
}

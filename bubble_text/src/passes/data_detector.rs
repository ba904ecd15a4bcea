// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::ops::Range;

use crate::{Attribute, LinkTarget, StyledText};

use super::StylePass;

/// A link found in the message body by platform data detection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataDetectorMatch {
    /// Byte range of the detected text.
    pub range: Range<usize>,
    /// The URL the detected text stands for, like `tel:` or `https:` links.
    pub canonical_link: Arc<str>,
}

impl DataDetectorMatch {
    /// A match of `range` linking to `canonical_link`.
    pub fn new(range: Range<usize>, canonical_link: impl Into<Arc<str>>) -> Self {
        Self {
            range,
            canonical_link: canonical_link.into(),
        }
    }
}

/// Attaches detected links to the runs they cover.
///
/// Only the link is set; fonts and colors already on those runs stay. Matches outside the text or
/// not on character boundaries are skipped.
#[derive(Copy, Clone, Debug)]
pub struct DataDetectorLinkifier<'a> {
    matches: &'a [DataDetectorMatch],
}

impl<'a> DataDetectorLinkifier<'a> {
    /// A linkifier for `matches`.
    pub fn new(matches: &'a [DataDetectorMatch]) -> Self {
        Self { matches }
    }
}

impl StylePass for DataDetectorLinkifier<'_> {
    fn apply(&self, mut text: StyledText) -> StyledText {
        log::trace!("{} data detector matches", self.matches.len());
        for detected in self.matches {
            let target = LinkTarget::Url(detected.canonical_link.clone());
            text.update_range_or_skip(detected.range.clone(), "data detector match", |attributes| {
                attributes.insert(Attribute::Link(target.clone()));
            });
        }
        text
    }
}

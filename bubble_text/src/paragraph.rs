// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

use smallvec::SmallVec;

use crate::ListKind;

/// How the renderer draws the marker in front of a list item.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MarkerFormat {
    /// A filled bullet.
    Disc,
    /// The item number followed by a period, as in `3.`.
    Decimal,
}

impl MarkerFormat {
    /// The marker text for an item numbered `ordinal`.
    pub fn marker(self, ordinal: u32) -> String {
        match self {
            Self::Disc => String::from("\u{2022}"),
            Self::Decimal => format!("{ordinal}."),
        }
    }
}

/// Rendering parameters for one list of a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListDescriptor {
    /// Identity of the list within the document.
    pub identity: u32,
    /// Whether the list is ordered.
    pub kind: ListKind,
    /// Marker drawn in front of each item.
    pub marker_format: MarkerFormat,
    /// Number of the first item.
    pub start_ordinal: u32,
}

impl ListDescriptor {
    /// A bulleted list.
    pub const fn unordered(identity: u32) -> Self {
        Self {
            identity,
            kind: ListKind::Unordered,
            marker_format: MarkerFormat::Disc,
            start_ordinal: 1,
        }
    }

    /// A numbered list whose first item is `start_ordinal`.
    pub const fn ordered(identity: u32, start_ordinal: u32) -> Self {
        Self {
            identity,
            kind: ListKind::Ordered,
            marker_format: MarkerFormat::Decimal,
            start_ordinal,
        }
    }

    /// The marker for the item at zero-based position `index` in this list.
    pub fn marker_for_item(&self, index: u32) -> String {
        self.marker_format
            .marker(self.start_ordinal.saturating_add(index))
    }
}

/// Paragraph-level layout directives.
///
/// Attached per run, but applies to the whole paragraph containing the run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Lists the paragraph belongs to, innermost first.
    pub text_lists: SmallVec<[ListDescriptor; 2]>,
    /// Extra space above the paragraph, in points.
    pub paragraph_spacing_before: f32,
}

impl ParagraphStyle {
    /// An empty paragraph style.
    pub fn new() -> Self {
        Self::default()
    }

    /// The list whose marker is drawn for this paragraph.
    pub fn innermost_list(&self) -> Option<&ListDescriptor> {
        self.text_lists.first()
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use core::fmt;

use attributed_text::AttributedText;

/// A message body annotated with [`PresentationIntent`] spans.
///
/// This is what the body parser hands over. Where list intents nest, the outer list's span must
/// be applied before the inner list's span: the application order of the spans covering a
/// segment is read as the outer-to-inner nesting order.
pub type IntentText = AttributedText<PresentationIntent>;

/// Whether a list numbers its items.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Items are numbered.
    Ordered,
    /// Items carry a bullet.
    Unordered,
}

/// An opaque reference to a mentioned identity.
///
/// The pipeline never looks inside; it only compares references for equality so that a single
/// mention split over several runs is still counted once.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MentionRef(Arc<str>);

impl MentionRef {
    /// Creates a reference from the caller's identifier for the mentioned identity.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// The caller's identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MentionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic markup attached to a range of the message body.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PresentationIntent {
    /// A header paragraph.
    Header {
        /// Header level, `1` being the most prominent.
        level: u8,
    },
    /// An item of the unordered list `identity`.
    UnorderedListItem {
        /// Identity of the list, shared by all of its items within one document.
        identity: u32,
    },
    /// An item of the ordered list `identity`.
    OrderedListItem {
        /// Identity of the list, shared by all of its items within one document.
        identity: u32,
        /// The number the author typed in front of the item, if any.
        ordinal: Option<u32>,
    },
    /// Emphasized (italic) text.
    Emphasis,
    /// Strongly emphasized (bold) text.
    StrongEmphasis,
    /// Struck-through text.
    Strikethrough,
    /// A mention of another identity.
    Mention(MentionRef),
    /// A link written in the body.
    Link(Arc<str>),
}

/// The list membership carried by a list item intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ListItem {
    /// Whether the list is ordered.
    pub kind: ListKind,
    /// Identity of the list.
    pub identity: u32,
    /// The typed ordinal, for ordered lists.
    pub ordinal: Option<u32>,
}

impl PresentationIntent {
    /// Returns the list membership if this is a list item intent.
    pub fn list_item(&self) -> Option<ListItem> {
        match *self {
            Self::UnorderedListItem { identity } => Some(ListItem {
                kind: ListKind::Unordered,
                identity,
                ordinal: None,
            }),
            Self::OrderedListItem { identity, ordinal } => Some(ListItem {
                kind: ListKind::Ordered,
                identity,
                ordinal,
            }),
            _ => None,
        }
    }

    /// Returns the mentioned identity if this is a mention intent.
    pub fn mention(&self) -> Option<&MentionRef> {
        match self {
            Self::Mention(mention) => Some(mention),
            _ => None,
        }
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

use crate::{Font, ParagraphStyle};

/// Style of an underline or strikethrough line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LineStyle {
    /// One thin line.
    Single,
    /// One thick line.
    Thick,
    /// Two thin lines.
    Double,
}

/// Where tapping a link leads.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkTarget {
    /// A real URL, written in the body or found by data detection.
    Url(Arc<str>),
    /// The mention at this zero-based position in document order.
    Mention(usize),
}

impl LinkTarget {
    /// URI scheme of synthesized mention links.
    pub const MENTION_SCHEME: &'static str = "mention";

    /// A link to `url`.
    pub fn url(url: impl Into<Arc<str>>) -> Self {
        Self::Url(url.into())
    }

    /// Parses a URI produced by [`LinkTarget::to_uri`].
    ///
    /// `mention://<n>` becomes [`LinkTarget::Mention`]; anything else is kept as a URL.
    pub fn from_uri(uri: &str) -> Self {
        uri.strip_prefix(Self::MENTION_SCHEME)
            .and_then(|rest| rest.strip_prefix("://"))
            .filter(|host| !host.is_empty() && host.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|host| host.parse().ok())
            .map_or_else(|| Self::url(uri), Self::Mention)
    }

    /// The URI form of this target.
    pub fn to_uri(&self) -> String {
        match self {
            Self::Url(url) => String::from(&**url),
            Self::Mention(index) => format!("{}://{index}", Self::MENTION_SCHEME),
        }
    }

    /// The mention position, for synthesized mention links.
    pub fn mention_index(&self) -> Option<usize> {
        match *self {
            Self::Mention(index) => Some(index),
            Self::Url(_) => None,
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::Mention(index) => write!(f, "{}://{index}", Self::MENTION_SCHEME),
        }
    }
}

/// Identifies the slot an [`Attribute`] occupies in an [`AttributeSet`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// See [`Attribute::Font`].
    Font,
    /// See [`Attribute::ForegroundColor`].
    ForegroundColor,
    /// See [`Attribute::UnderlineColor`].
    UnderlineColor,
    /// See [`Attribute::UnderlineStyle`].
    UnderlineStyle,
    /// See [`Attribute::StrikethroughStyle`].
    StrikethroughStyle,
    /// See [`Attribute::Link`].
    Link,
    /// See [`Attribute::ParagraphStyle`].
    ParagraphStyle,
    /// See [`Attribute::BackgroundColor`].
    BackgroundColor,
}

/// A single rendering attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum Attribute {
    /// The font.
    Font(Font),
    /// Text color.
    ForegroundColor(Color),
    /// Color of the underline.
    UnderlineColor(Color),
    /// Underline line style.
    UnderlineStyle(LineStyle),
    /// Strikethrough line style.
    StrikethroughStyle(LineStyle),
    /// Tap target.
    Link(LinkTarget),
    /// Paragraph directives.
    ParagraphStyle(ParagraphStyle),
    /// Background fill, only used to highlight search results.
    BackgroundColor(Color),
}

impl Attribute {
    /// The slot this attribute occupies.
    pub fn key(&self) -> AttributeKey {
        match self {
            Self::Font(_) => AttributeKey::Font,
            Self::ForegroundColor(_) => AttributeKey::ForegroundColor,
            Self::UnderlineColor(_) => AttributeKey::UnderlineColor,
            Self::UnderlineStyle(_) => AttributeKey::UnderlineStyle,
            Self::StrikethroughStyle(_) => AttributeKey::StrikethroughStyle,
            Self::Link(_) => AttributeKey::Link,
            Self::ParagraphStyle(_) => AttributeKey::ParagraphStyle,
            Self::BackgroundColor(_) => AttributeKey::BackgroundColor,
        }
    }
}

/// The attributes of one run: at most one [`Attribute`] per [`AttributeKey`].
///
/// Attributes are kept sorted by key, so two sets holding the same attributes compare equal no
/// matter the order they were inserted in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `attribute`, returning the attribute it replaced under the same key.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        match self
            .attributes
            .binary_search_by_key(&attribute.key(), Attribute::key)
        {
            Ok(ix) => Some(core::mem::replace(&mut self.attributes[ix], attribute)),
            Err(ix) => {
                self.attributes.insert(ix, attribute);
                None
            }
        }
    }

    /// Union by key; attributes from `other` win.
    pub fn merge(&mut self, other: &Self) {
        for attribute in &other.attributes {
            self.insert(attribute.clone());
        }
    }

    /// Removes and returns the attribute stored under `key`.
    pub fn remove(&mut self, key: AttributeKey) -> Option<Attribute> {
        let ix = self
            .attributes
            .binary_search_by_key(&key, Attribute::key)
            .ok()?;
        Some(self.attributes.remove(ix))
    }

    /// The attribute stored under `key`.
    pub fn get(&self, key: AttributeKey) -> Option<&Attribute> {
        self.attributes
            .binary_search_by_key(&key, Attribute::key)
            .ok()
            .map(|ix| &self.attributes[ix])
    }

    /// Whether an attribute is stored under `key`.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.get(key).is_some()
    }

    /// Iterate over the attributes in key order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Number of attributes in the set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// The font, if set.
    pub fn font(&self) -> Option<&Font> {
        match self.get(AttributeKey::Font)? {
            Attribute::Font(font) => Some(font),
            _ => None,
        }
    }

    /// The text color, if set.
    pub fn foreground_color(&self) -> Option<Color> {
        match self.get(AttributeKey::ForegroundColor)? {
            Attribute::ForegroundColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The underline color, if set.
    pub fn underline_color(&self) -> Option<Color> {
        match self.get(AttributeKey::UnderlineColor)? {
            Attribute::UnderlineColor(color) => Some(*color),
            _ => None,
        }
    }

    /// The underline style, if set.
    pub fn underline_style(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::UnderlineStyle)? {
            Attribute::UnderlineStyle(style) => Some(*style),
            _ => None,
        }
    }

    /// The strikethrough style, if set.
    pub fn strikethrough_style(&self) -> Option<LineStyle> {
        match self.get(AttributeKey::StrikethroughStyle)? {
            Attribute::StrikethroughStyle(style) => Some(*style),
            _ => None,
        }
    }

    /// The link target, if set.
    pub fn link(&self) -> Option<&LinkTarget> {
        match self.get(AttributeKey::Link)? {
            Attribute::Link(link) => Some(link),
            _ => None,
        }
    }

    /// The paragraph style, if set.
    pub fn paragraph_style(&self) -> Option<&ParagraphStyle> {
        match self.get(AttributeKey::ParagraphStyle)? {
            Attribute::ParagraphStyle(style) => Some(style),
            _ => None,
        }
    }

    /// The background color, if set.
    pub fn background_color(&self) -> Option<Color> {
        match self.get(AttributeKey::BackgroundColor)? {
            Attribute::BackgroundColor(color) => Some(*color),
            _ => None,
        }
    }

    /// Edits the paragraph style in place, inserting an empty one first if there is none.
    ///
    /// Fields `f` leaves alone keep the values earlier passes gave them.
    pub fn update_paragraph_style(&mut self, f: impl FnOnce(&mut ParagraphStyle)) {
        let ix = match self
            .attributes
            .binary_search_by_key(&AttributeKey::ParagraphStyle, Attribute::key)
        {
            Ok(ix) => ix,
            Err(ix) => {
                self.attributes
                    .insert(ix, Attribute::ParagraphStyle(ParagraphStyle::new()));
                ix
            }
        };
        if let Attribute::ParagraphStyle(style) = &mut self.attributes[ix] {
            f(style);
        }
    }
}

impl<'a> IntoIterator for &'a AttributeSet {
    type Item = &'a Attribute;
    type IntoIter = core::slice::Iter<'a, Attribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = Self::new();
        for attribute in iter {
            set.insert(attribute);
        }
        set
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::Color;
use peniko::color::palette::css;

/// Which side of the conversation a message bubble belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// A message written by the local user.
    Sent,
    /// A message written by someone else.
    Received,
}

/// Fixed colors used by the styling passes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Palette {
    /// Link color in received messages.
    pub info: Color,
    /// Background of the highlighted search result.
    pub highlight_background: Color,
    /// Text color of the highlighted search result.
    pub highlight_foreground: Color,
}

impl Palette {
    /// System blue.
    pub const INFO: Color = Color::from_rgb8(0, 122, 255);
    /// System yellow.
    pub const HIGHLIGHT_BACKGROUND: Color = Color::from_rgb8(255, 204, 0);
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            info: Self::INFO,
            highlight_background: Self::HIGHLIGHT_BACKGROUND,
            highlight_foreground: css::BLACK,
        }
    }
}

/// Everything that varies between two styling calls for the same message body.
///
/// Comparing configurations lets a caller skip restyling when nothing changed.
///
/// ```
/// use bubble_text::{Configuration, Direction};
/// use peniko::color::palette::css;
///
/// let config = Configuration::new(Direction::Received, css::BLACK).with_search("hello");
/// assert_eq!(config.searched_text_to_highlight.as_deref(), Some("hello"));
/// assert_ne!(config, Configuration::new(Direction::Received, css::BLACK));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Configuration {
    /// Side of the conversation.
    pub direction: Direction,
    /// Base text color of the bubble.
    pub text_color: Color,
    /// Search term whose first occurrence gets highlighted.
    pub searched_text_to_highlight: Option<Arc<str>>,
    /// Fixed colors.
    pub palette: Palette,
}

impl Configuration {
    /// A configuration with no search term and the default palette.
    pub fn new(direction: Direction, text_color: Color) -> Self {
        Self {
            direction,
            text_color,
            searched_text_to_highlight: None,
            palette: Palette::default(),
        }
    }

    /// Sets the search term to highlight.
    #[must_use]
    pub fn with_search(mut self, searched: impl Into<Arc<str>>) -> Self {
        self.searched_text_to_highlight = Some(searched.into());
        self
    }

    /// Replaces the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Color of links and mentions: the text color in sent bubbles, the info color otherwise.
    pub fn link_color(&self) -> Color {
        match self.direction {
            Direction::Sent => self.text_color,
            Direction::Received => self.palette.info,
        }
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Named text styles, resolved to a concrete face and size by the renderer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// Message body text.
    #[default]
    Body,
    /// Second-level title, used for level 1 headers.
    Title2,
    /// Third-level title, used for level 2 headers.
    Title3,
    /// Subheadline, used for level 3 and deeper headers.
    Subheadline,
}

impl TextStyle {
    /// Point size at the default content size category.
    pub const fn point_size(self) -> f32 {
        match self {
            Self::Body => 17.0,
            Self::Title2 => 22.0,
            Self::Title3 => 20.0,
            Self::Subheadline => 15.0,
        }
    }
}

/// A font request: a text style plus symbolic traits.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Font {
    /// The named style the font derives from.
    pub text_style: TextStyle,
    /// Bold trait.
    pub bold: bool,
    /// Italic trait.
    pub italic: bool,
}

impl Font {
    /// A regular font for `text_style`.
    pub const fn new(text_style: TextStyle) -> Self {
        Self {
            text_style,
            bold: false,
            italic: false,
        }
    }

    /// The regular body font.
    pub const fn body() -> Self {
        Self::new(TextStyle::Body)
    }

    /// This font with the bold trait.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// This font with the italic trait.
    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Point size of the underlying text style.
    pub const fn point_size(self) -> f32 {
        self.text_style.point_size()
    }
}

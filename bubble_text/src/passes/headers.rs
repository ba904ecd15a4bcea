// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Attribute, Font, PresentationIntent, StyledText, TextStyle};

use super::StylePass;

/// The font of a header of `level` and the space above its paragraph, in points.
///
/// Levels deeper than 3 share the level 3 style, and so does the out-of-range level 0.
pub fn header_style(level: u8) -> (Font, f32) {
    let (text_style, spacing_factor) = match level {
        1 => (TextStyle::Title2, 1.0),
        2 => (TextStyle::Title3, 0.75),
        // Level 0 and levels 4 and deeper get the bold subheadline of level 3.
        _ => (TextStyle::Subheadline, 0.5),
    };
    let font = Font::new(text_style).bold();
    (font, font.point_size() * spacing_factor)
}

/// Gives header runs their font and paragraph spacing.
///
/// The header font replaces whatever font the run had. Lists on the paragraph style are kept.
#[derive(Copy, Clone, Debug, Default)]
pub struct HeaderStyler;

impl StylePass for HeaderStyler {
    fn apply(&self, mut text: StyledText) -> StyledText {
        text.for_each_run_mut(|intents, attributes| {
            let Some(level) = intents.iter().find_map(|intent| match *intent {
                PresentationIntent::Header { level } => Some(level),
                _ => None,
            }) else {
                return;
            };
            let (font, spacing) = header_style(level);
            attributes.insert(Attribute::Font(font));
            attributes.update_paragraph_style(|style| style.paragraph_spacing_before = spacing);
        });
        text
    }
}

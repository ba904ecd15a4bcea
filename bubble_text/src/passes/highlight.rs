// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::fold::find_folded;
use crate::{Attribute, Configuration, StyledText};

use super::StylePass;

/// Highlights the first occurrence of the configured search term.
///
/// Matching ignores case, diacritics and character width. The highlight sets the palette's
/// background and text colors on the match and leaves every other attribute alone. Without a
/// search term, or when it does not occur, the text is returned unchanged.
#[derive(Copy, Clone, Debug)]
pub struct SearchHighlighter<'a> {
    configuration: &'a Configuration,
}

impl<'a> SearchHighlighter<'a> {
    /// A highlighter for the search term of `configuration`.
    pub fn new(configuration: &'a Configuration) -> Self {
        Self { configuration }
    }
}

impl StylePass for SearchHighlighter<'_> {
    fn apply(&self, mut text: StyledText) -> StyledText {
        let Some(searched) = self.configuration.searched_text_to_highlight.as_deref() else {
            return text;
        };
        let Some(range) = find_folded(text.as_str(), searched) else {
            log::trace!("search term not found");
            return text;
        };
        let palette = self.configuration.palette;
        text.update_range_or_skip(range, "search highlight", |attributes| {
            attributes.insert(Attribute::BackgroundColor(palette.highlight_background));
            attributes.insert(Attribute::ForegroundColor(palette.highlight_foreground));
        });
        text
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use peniko::color::palette::css;

    use super::SearchHighlighter;
    use crate::passes::StylePass;
    use crate::{Configuration, Direction, IntentText, Palette, StyledText};

    #[test]
    fn highlights_first_match_only() {
        let text = StyledText::from_intents(&IntentText::new("Na\u{ef}ve naive"));
        let config = Configuration::new(Direction::Received, css::BLACK).with_search("NAIVE");
        let text = SearchHighlighter::new(&config).apply(text);

        let highlighted: Vec<_> = text
            .runs()
            .filter(|run| run.attributes.background_color().is_some())
            .map(|run| run.range)
            .collect();
        assert_eq!(highlighted, [0..6]);
        let hit = text.attributes_at(0).unwrap();
        assert_eq!(hit.background_color(), Some(Palette::HIGHLIGHT_BACKGROUND));
        assert_eq!(hit.foreground_color(), Some(css::BLACK));
    }

    #[test]
    fn missing_term_changes_nothing() {
        let text = StyledText::from_intents(&IntentText::new("hello"));
        let config = Configuration::new(Direction::Sent, css::WHITE).with_search("bye");
        assert_eq!(SearchHighlighter::new(&config).apply(text.clone()), text);
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{
    Attribute, AttributeSet, Configuration, Font, LineStyle, PresentationIntent, StyledText,
};

use super::StylePass;

/// Sets the base font and text color on every run, then applies inline emphasis.
///
/// Emphasis makes the font italic and strong emphasis makes it bold; both together give a
/// bold italic font. Strikethrough adds a single strikethrough line.
#[derive(Copy, Clone, Debug)]
pub struct RunStyler<'a> {
    configuration: &'a Configuration,
}

impl<'a> RunStyler<'a> {
    /// A run styler using the text color of `configuration`.
    pub fn new(configuration: &'a Configuration) -> Self {
        Self { configuration }
    }
}

impl StylePass for RunStyler<'_> {
    fn apply(&self, mut text: StyledText) -> StyledText {
        log::trace!("run styles over {} bytes", text.len());
        let text_color = self.configuration.text_color;
        text.for_each_run_mut(|intents, attributes| {
            style_run(intents, attributes);
            attributes.insert(Attribute::ForegroundColor(text_color));
        });
        text
    }
}

fn style_run(intents: &[PresentationIntent], attributes: &mut AttributeSet) {
    let mut font = Font::body();
    for intent in intents {
        match intent {
            PresentationIntent::Emphasis => font = font.italic(),
            PresentationIntent::StrongEmphasis => font = font.bold(),
            PresentationIntent::Strikethrough => {
                attributes.insert(Attribute::StrikethroughStyle(LineStyle::Single));
            }
            _ => {}
        }
    }
    attributes.insert(Attribute::Font(font));
}

#[cfg(test)]
mod tests {
    use peniko::color::palette::css;

    use super::RunStyler;
    use crate::passes::StylePass;
    use crate::{
        Configuration, Direction, Font, IntentText, LineStyle, PresentationIntent, StyledText,
    };

    #[test]
    fn emphasis_traits_accumulate() {
        let mut body = IntentText::new("plain both");
        body.apply_attribute(6..10, PresentationIntent::Emphasis)
            .unwrap();
        body.apply_attribute(6..10, PresentationIntent::StrongEmphasis)
            .unwrap();
        let config = Configuration::new(Direction::Received, css::BLACK);
        let styled = RunStyler::new(&config).apply(StyledText::from_intents(&body));

        let plain = styled.attributes_at(0).unwrap();
        assert_eq!(plain.font(), Some(&Font::body()));
        assert_eq!(plain.foreground_color(), Some(css::BLACK));
        assert_eq!(
            styled.attributes_at(6).unwrap().font(),
            Some(&Font::body().bold().italic())
        );
    }

    #[test]
    fn strikethrough_keeps_the_font() {
        let mut body = IntentText::new("gone");
        body.apply_attribute(0..4, PresentationIntent::Strikethrough)
            .unwrap();
        let config = Configuration::new(Direction::Sent, css::WHITE);
        let styled = RunStyler::new(&config).apply(StyledText::from_intents(&body));

        let attributes = styled.attributes_at(0).unwrap();
        assert_eq!(attributes.strikethrough_style(), Some(LineStyle::Single));
        assert_eq!(attributes.font(), Some(&Font::body()));
        assert_eq!(attributes.foreground_color(), Some(css::WHITE));
    }
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Attribute, AttributeKey, Configuration, LineStyle, StyledText};

use super::StylePass;

/// Colors and underlines every run that carries a link.
///
/// Sent bubbles draw links in the text color; received bubbles use the palette's info color.
#[derive(Copy, Clone, Debug)]
pub struct LinkStyler<'a> {
    configuration: &'a Configuration,
}

impl<'a> LinkStyler<'a> {
    /// A link styler for `configuration`.
    pub fn new(configuration: &'a Configuration) -> Self {
        Self { configuration }
    }
}

impl StylePass for LinkStyler<'_> {
    fn apply(&self, mut text: StyledText) -> StyledText {
        let color = self.configuration.link_color();
        text.for_each_run_mut(|_, attributes| {
            if attributes.contains(AttributeKey::Link) {
                attributes.insert(Attribute::ForegroundColor(color));
                attributes.insert(Attribute::UnderlineColor(color));
                attributes.insert(Attribute::UnderlineStyle(LineStyle::Single));
            }
        });
        text
    }
}

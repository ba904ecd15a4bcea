// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The styling passes and the pipeline that chains them.
//!
//! Each pass takes a [`StyledText`] by value and returns it with more attributes set. Passes only
//! insert attributes by key over the ranges they care about; they never clear what an earlier pass
//! set on an unrelated key. Passes run in a fixed order:
//!
//! 1. [`RunStyler`]: base font and color, emphasis and strikethrough.
//! 2. [`DataDetectorLinkifier`]: externally detected links.
//! 3. [`LinkStyler`]: link color and underline.
//! 4. [`MentionLinkifier`]: mention font, color and synthesized link.
//! 5. [`collect_list_descriptors`] then [`ListStyleApplier`]: list paragraph styles.
//! 6. [`HeaderStyler`]: header font and paragraph spacing.
//! 7. [`SearchHighlighter`]: the highlighted search result.
//!
//! Mentions come after generic links so the link pass cannot touch the mention font.

mod data_detector;
mod headers;
mod highlight;
mod links;
mod lists;
mod mentions;
mod run_style;

pub use data_detector::{DataDetectorLinkifier, DataDetectorMatch};
pub use headers::{HeaderStyler, header_style};
pub use highlight::SearchHighlighter;
pub use links::LinkStyler;
pub use lists::{ListDescriptors, ListStyleApplier, collect_list_descriptors, to_innermost_first};
pub use mentions::MentionLinkifier;
pub use run_style::RunStyler;

use crate::{Configuration, IntentText, StyledText};

/// One stage of the styling pipeline.
pub trait StylePass {
    /// Returns `text` with this pass's attributes applied.
    fn apply(&self, text: StyledText) -> StyledText;
}

/// Styles a message body for display in a bubble.
///
/// This is a pure function of its inputs: calling it twice with equal inputs gives equal output.
/// Inconsistent inputs, like a detector match outside the text, are skipped rather than reported.
///
/// ```
/// use bubble_text::{Configuration, Direction, IntentText, PresentationIntent, style_message};
/// use peniko::color::palette::css;
///
/// let mut body = IntentText::new("Hello world");
/// body.apply_attribute(6..11, PresentationIntent::StrongEmphasis).unwrap();
/// let config = Configuration::new(Direction::Sent, css::WHITE);
///
/// let styled = style_message(&body, &[], &config);
/// assert!(styled.attributes_at(6).unwrap().font().unwrap().bold);
/// assert!(!styled.attributes_at(0).unwrap().font().unwrap().bold);
/// ```
pub fn style_message(
    body: &IntentText,
    matches: &[DataDetectorMatch],
    configuration: &Configuration,
) -> StyledText {
    let text = StyledText::from_intents(body);
    let text = RunStyler::new(configuration).apply(text);
    let text = DataDetectorLinkifier::new(matches).apply(text);
    let text = LinkStyler::new(configuration).apply(text);
    let text = MentionLinkifier::new(configuration).apply(text);
    let descriptors = collect_list_descriptors(&text);
    let text = ListStyleApplier::new(&descriptors).apply(text);
    let text = HeaderStyler.apply(text);
    SearchHighlighter::new(configuration).apply(text)
}

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling of chat message bodies for display in a bubble, built on [`attributed_text`].
//!
//! - [`IntentText`] is the input: a message body with semantic [`PresentationIntent`] spans
//!   (headers, list items, emphasis, mentions and links), produced by a body parser.
//! - [`passes`] turns it into a [`StyledText`]: contiguous runs, each carrying a typed
//!   [`AttributeSet`] a renderer can draw directly.
//! - [`style_message`] runs every pass in order.
//!
//! ## Scope
//!
//! This crate does not parse markup, does not detect links or phone numbers, and does not lay out
//! text. Detected links come in as [`DataDetectorMatch`]es and mentions come in as pre-resolved
//! intents.
//!
//! ## Indices
//!
//! All ranges are **byte indices** into UTF-8 text, and must be on UTF-8 character boundaries.
//!
//! ## Mentions and taps
//!
//! Each mention gets the link [`LinkTarget::Mention(n)`](LinkTarget::Mention), `n` being its
//! position among the mentions of the message, rendered as the URI `mention://n`. To resolve a
//! tap, look up [`StyledText::link_at`]; for a mention, index into your own mention table, or use
//! [`StyledText::mention_at`]. URL links can be opened as they are.
//!
//! ## Example
//!
//! ```
//! use bubble_text::{
//!     Configuration, DataDetectorMatch, Direction, IntentText, LinkTarget, MentionRef,
//!     PresentationIntent, style_message,
//! };
//! use peniko::color::palette::css;
//!
//! let mut body = IntentText::new("@ana call 555 0100");
//! body.apply_attribute(0..4, PresentationIntent::Mention(MentionRef::new("ana")))
//!     .unwrap();
//! let matches = [DataDetectorMatch::new(10..18, "tel:5550100")];
//! let config = Configuration::new(Direction::Received, css::BLACK);
//!
//! let styled = style_message(&body, &matches, &config);
//! assert_eq!(styled.link_at(0), Some(&LinkTarget::Mention(0)));
//! assert_eq!(styled.link_at(12), Some(&LinkTarget::url("tel:5550100")));
//! assert_eq!(styled.link_at(0).unwrap().to_uri(), "mention://0");
//! ```
//!
//! ## Logging
//!
//! Skipped work, like a detector match outside the text, is reported through [`log`] at the
//! debug level. The crate never installs a logger.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library in [`peniko`].
//! - `libm`: Use `libm` for floating point math in [`peniko`] when `std` is disabled.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod passes;

mod attribute;
mod config;
mod fold;
mod font;
mod intent;
mod paragraph;
mod styled;


pub use attribute::{Attribute, AttributeKey, AttributeSet, LineStyle, LinkTarget};
pub use config::{Configuration, Direction, Palette};
pub use font::{Font, TextStyle};
pub use intent::{IntentText, ListItem, ListKind, MentionRef, PresentationIntent};
pub use paragraph::{ListDescriptor, MarkerFormat, ParagraphStyle};
pub use passes::{DataDetectorMatch, StylePass, style_message};
pub use styled::{StyledRun, StyledText};

pub use attributed_text;
pub use peniko;

// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute spans and attribute runs over UTF-8 text.
//!
//! - [`AttributedText`] records attributes on possibly overlapping byte ranges, in the order they
//!   were applied.
//! - [`Segments`] sweeps those spans into contiguous, non-overlapping segments.
//! - [`AttributedRuns`] partitions a text into contiguous runs with exactly one attribute value
//!   each, and supports range edits that split runs without disturbing their neighbors.
//!
//! All ranges are byte ranges and must lie on UTF-8 character boundaries; see [`TextRange`].
//!
//! ## Features
//!
//! - `std` (enabled by default): This is currently unused and is provided for forward compatibility.
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

mod attributed_text;
mod error;
mod runs;
mod segments;
mod text_range;

pub use crate::attributed_text::AttributedText;
pub use crate::error::{Endpoint, Error, ErrorKind};
pub use crate::runs::{AttributedRuns, CoalescedRuns, Run};
pub use crate::segments::Segments;
pub use crate::text_range::TextRange;

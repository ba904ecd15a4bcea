// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case-, diacritic- and width-insensitive substring search.

use alloc::vec::Vec;
use core::ops::Range;

use icu_casemap::{CaseMapper, CaseMapperBorrowed};
use icu_normalizer::DecomposingNormalizerBorrowed;
use icu_properties::props::GeneralCategory;
use icu_properties::{CodePointMapData, CodePointMapDataBorrowed};

struct Folder {
    nfkd: DecomposingNormalizerBorrowed<'static>,
    case_mapper: CaseMapperBorrowed<'static>,
    general_category: CodePointMapDataBorrowed<'static, GeneralCategory>,
}

impl Folder {
    fn new() -> Self {
        Self {
            nfkd: DecomposingNormalizerBorrowed::new_nfkd(),
            case_mapper: CaseMapper::new(),
            general_category: CodePointMapData::<GeneralCategory>::new(),
        }
    }

    /// Pushes the folded form of `ch` onto `out`.
    ///
    /// Compatibility decomposition maps full-width and other presentation forms to their plain
    /// counterparts and splits accented letters into base plus marks. Full case folding then
    /// maps `ß` to `ss` and final `ς` to `σ`. Non-spacing marks are dropped.
    fn fold_char(&self, ch: char, mut out: impl FnMut(char)) {
        let mut buf = [0; 4];
        for decomposed in self.nfkd.normalize_iter(core::iter::once(ch)) {
            let folded = self.case_mapper.fold_string(decomposed.encode_utf8(&mut buf));
            for c in folded.chars() {
                if self.general_category.get(c) != GeneralCategory::NonspacingMark {
                    out(c);
                }
            }
        }
    }
}

/// Byte range of the first occurrence of `needle` in `haystack`, ignoring case, diacritics and
/// character width.
///
/// The range always starts and ends on character boundaries of `haystack`. Combining marks
/// directly after the last matched character are part of the match. An empty needle, or one made
/// only of marks, matches nothing.
pub(crate) fn find_folded(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let folder = Folder::new();

    let mut folded_needle = Vec::new();
    for ch in needle.chars() {
        folder.fold_char(ch, |c| folded_needle.push(c));
    }
    if folded_needle.is_empty() {
        return None;
    }

    // Each folded char remembers the byte range of the source char it came from.
    let mut folded: Vec<(char, Range<usize>)> = Vec::new();
    for (ix, ch) in haystack.char_indices() {
        let source = ix..ix + ch.len_utf8();
        folder.fold_char(ch, |c| folded.push((c, source.clone())));
    }

    let n = folded_needle.len();
    let start = folded.windows(n).position(|window| {
        window
            .iter()
            .map(|(c, _)| *c)
            .eq(folded_needle.iter().copied())
    })?;
    let mut range = folded[start].1.start..folded[start + n - 1].1.end;

    for ch in haystack[range.end..].chars() {
        let mut empty = true;
        folder.fold_char(ch, |_| empty = false);
        if !empty {
            break;
        }
        range.end += ch.len_utf8();
    }
    Some(range)
}

// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Input-safety checks for free-text option values.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::report::{Reporter, Severity};

/// Shortest-match angle-bracket pairs; used to strip every tag-like
/// sequence from the window title.
static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"<.*?>").unwrap());

/// Markup consistent with embedded script content. The scan is
/// deliberately loose: `<script`, `< SCRIPT` and a closing `</script>`
/// all match.
static SCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<\s*/?\s*script\b").unwrap());

/// Remove every shortest `<...>` match from `value`.
///
/// Unterminated brackets are left alone: `"a < b"` survives unchanged.
pub fn strip_markup(value: &str) -> String {
    MARKUP.replace_all(value, "").into_owned()
}

/// Returns `true` if `value` contains script-like markup.
pub fn looks_like_script(value: &str) -> bool {
    SCRIPT.is_match(value)
}

/// Scan a free-text option value for embedded script content and warn
/// through the reporter on a match.
///
/// Advisory only: the overall validation result is unaffected.
pub fn check_for_injected_content(flag: &str, value: &str, reporter: &mut dyn Reporter) {
    if looks_like_script(value) {
        reporter.print(
            Severity::Warning,
            &format!("option {} contains script-like markup: {}", flag, value),
        );
    }
}

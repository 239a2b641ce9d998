// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Option strings understood by the external doclint facility.
//!
//! This crate only records which doclint option was selected; the
//! facility itself lives elsewhere. The validity rules here keep
//! obviously malformed selections from reaching it.

use once_cell::sync::Lazy;
use regex::Regex;

/// Enable the default set of documentation checks.
pub const MSGS_OPTION: &str = "-Xmsgs";

/// Prefix selecting a custom set of checks, e.g. `-Xmsgs:html,syntax`.
pub const MSGS_CUSTOM_PREFIX: &str = "-Xmsgs:";

/// Prefix scoping checks to packages, e.g. `-XcheckPackage:com.example.*`.
pub const CHECK_PACKAGES_PREFIX: &str = "-XcheckPackage:";

/// The recognized check groups.
const GROUPS: &[&str] = &["accessibility", "html", "missing", "reference", "syntax"];

/// An optionally negated qualified name of at least two dot-separated
/// segments, where the final segment may be `*`.
static PACKAGE_SPEC: Lazy<Regex> = Lazy::new(|| {
    let segment = r"[A-Za-z_$][A-Za-z0-9_$]*";
    Regex::new(&format!(
        r"^-?{seg}((\.{seg})+(\.\*)?|\.\*)$",
        seg = segment
    ))
    .unwrap()
});

/// Returns `true` if `option` is a doclint option string this module
/// would hand downstream: the plain enable option, a custom category
/// list, or a package specification.
pub fn is_valid_option(option: &str) -> bool {
    if option == MSGS_OPTION {
        return true;
    }

    if let Some(list) = option.strip_prefix(MSGS_CUSTOM_PREFIX) {
        return is_valid_category_list(list);
    }

    if let Some(spec) = option.strip_prefix(CHECK_PACKAGES_PREFIX) {
        return is_valid_package_spec(spec);
    }

    false
}

/// Validate a comma-separated category list: each element is `all`,
/// `none`, or an optionally `-`-negated check group.
fn is_valid_category_list(list: &str) -> bool {
    if list.is_empty() {
        return false;
    }

    list.split(',').all(|element| {
        match element {
            "all" | "none" => true,
            _ => {
                let group = element.strip_prefix('-').unwrap_or(element);
                GROUPS.contains(&group)
            }
        }
    })
}

/// Validate a comma-separated package specification list.
fn is_valid_package_spec(spec: &str) -> bool {
    if spec.is_empty() {
        return false;
    }

    spec.split(',').all(|element| PACKAGE_SPEC.is_match(element))
}

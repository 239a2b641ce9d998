// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Post-parse validation of the configuration record.
//!
//! The handlers already check conflicting flag pairs eagerly as each
//! token is processed; the conflict checks here are the authoritative
//! backstop guaranteeing the invariants hold regardless of which
//! handler order actually fired.

use crate::config::HtmlConfig;
use crate::error::{Error, Result};
use crate::files::FileResolver;
use crate::report::{Reporter, Severity};
use crate::sanitize;

/// The free-text fields scanned for script-like markup, with the flag
/// names used in the warning. `-windowtitle` is exempt: its handler
/// strips all markup before storage.
fn free_text_fields(config: &HtmlConfig) -> [(&'static str, &str); 6] {
    [
        ("-header", config.header.as_str()),
        ("-footer", config.footer.as_str()),
        ("-top", config.top.as_str()),
        ("-bottom", config.bottom.as_str()),
        ("-doctitle", config.doc_title.as_str()),
        ("-packagesheader", config.packages_header.as_str()),
    ]
}

/// Validate the fully populated configuration record.
///
/// Order: cross-flag conflicts, then referenced files, then the
/// advisory free-text scan. The first failing check is printed through
/// the reporter and returned; the free-text scan only ever warns.
pub fn validate_options<F: FileResolver>(
    config: &HtmlConfig,
    resolver: &F,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let checks = [check_conflicts(config), check_files(config, resolver)];

    for check in &checks {
        if let Err(e) = check {
            reporter.print(Severity::Error, &e.to_string());
            return Err(e.clone());
        }
    }

    for (flag, value) in &free_text_fields(config) {
        sanitize::check_for_injected_content(flag, value, reporter);
    }

    Ok(())
}

/// Re-validate the mutually exclusive flag pairs.
fn check_conflicts(config: &HtmlConfig) -> Result<()> {
    if config.no_help && !config.help_file.is_empty() {
        return Err(Error::Conflict("-helpfile", "-nohelp"));
    }

    if config.split_index && !config.create_index {
        return Err(Error::Conflict("-splitindex", "-noindex"));
    }

    if config.no_overview && config.overview_path.is_some() {
        return Err(Error::Conflict("-overview", "-nooverview"));
    }

    Ok(())
}

/// Confirm every option value naming a file resolves to an existing
/// file. Empty/unset values are skipped. Fails fast on the first miss,
/// checking fields in declared order: help file, primary stylesheet,
/// then each additional stylesheet in list order.
fn check_files<F: FileResolver>(config: &HtmlConfig, resolver: &F) -> Result<()> {
    let mut paths = vec![];

    if !config.help_file.is_empty() {
        paths.push(config.help_file.as_str());
    }

    if !config.stylesheet_file.is_empty() {
        paths.push(config.stylesheet_file.as_str());
    }

    paths.extend(config.additional_stylesheets.iter().map(String::as_str));

    for path in paths {
        if !resolver.exists(path) {
            return Err(Error::FileNotFound(path.into()));
        }
    }

    Ok(())
}

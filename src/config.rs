// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! The shared configuration record populated by option handlers.

/// Insertion-ordered mapping from the descriptor that produced a doclint
/// selection (identified by its primary option name) to the literal
/// option string handed to the doclint facility.
///
/// Insertion order is preserved: re-inserting an existing key replaces
/// the value in place, so the position of the first occurrence wins.
/// Downstream consumers rely on this for duplicate categories.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct DoclintOpts {
    entries: Vec<(&'static str, String)>,
}

impl DoclintOpts {
    /// Create an empty map.
    pub fn new() -> Self {
        DoclintOpts::default()
    }

    /// Record `value` under `key`, replacing in place if `key` is
    /// already present.
    pub fn insert(&mut self, key: &'static str, value: impl Into<String>) {
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value recorded under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// The recorded option strings, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }

    /// Returns the number of recorded selections.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The single mutable record holding every parsed option value.
///
/// Created empty (with the documented defaults), populated incrementally
/// by option handlers during token processing, consulted once by the
/// validators, then handed off read-only to page generation.
///
/// # Note
///
/// All members are public for handler and downstream convenience.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HtmlConfig {
    /// Additional stylesheets from `--add-stylesheet`, in command-line order.
    pub additional_stylesheets: Vec<String>,

    /// Text placed at the bottom of each page (`-bottom`).
    pub bottom: String,

    /// The META charset for cross-platform viewing (`-charset`).
    pub charset: Option<String>,

    /// True if class-use pages were requested (`-use`).
    pub class_use: bool,

    /// False if `-noindex` was specified. Default is `true`.
    pub create_index: bool,

    /// False if `-notree` was specified. Default is `true`.
    pub create_tree: bool,

    /// Collected doclint selections (`-Xdoclint` and friends).
    pub doclint_opts: DoclintOpts,

    /// Parent URL for generated doc roots (`-Xdocrootparent`).
    pub docroot_parent: String,

    /// Document title (`-doctitle`).
    pub doc_title: String,

    /// Text placed in the footer of each page (`-footer`).
    pub footer: String,

    /// Text placed in the header of each page (`-header`).
    pub header: String,

    /// Path of a custom help file (`-helpfile`). Empty when unset;
    /// once validation succeeds, non-empty only if the file existed.
    pub help_file: String,

    /// True if the deprecated-API list is suppressed (`-nodeprecatedlist`).
    pub no_deprecated_list: bool,

    /// True if the help link is suppressed (`-nohelp`).
    pub no_help: bool,

    /// True if the navigation bar is suppressed (`-nonavbar`).
    pub no_navbar: bool,

    /// True if the overview page is suppressed (`-nooverview`).
    pub no_overview: bool,

    /// Path of a custom overview page (`-overview`).
    pub overview_path: Option<String>,

    /// Header for the packages frame (`-packagesheader`).
    pub packages_header: String,

    /// True if the index is split alphabetically (`-splitindex`).
    pub split_index: bool,

    /// Path of the primary stylesheet (`--main-stylesheet`).
    pub stylesheet_file: String,

    /// Text placed at the top of each page (`-top`).
    pub top: String,

    /// Browser window title (`-windowtitle`), stored markup-stripped.
    pub window_title: String,
}

impl Default for HtmlConfig {
    fn default() -> Self {
        HtmlConfig {
            additional_stylesheets: Vec::new(),
            bottom: String::new(),
            charset: None,
            class_use: false,
            create_index: true,
            create_tree: true,
            doclint_opts: DoclintOpts::new(),
            docroot_parent: String::new(),
            doc_title: String::new(),
            footer: String::new(),
            header: String::new(),
            help_file: String::new(),
            no_deprecated_list: false,
            no_help: false,
            no_navbar: false,
            no_overview: false,
            overview_path: None,
            packages_header: String::new(),
            split_index: false,
            stylesheet_file: String::new(),
            top: String::new(),
            window_title: String::new(),
        }
    }
}

impl HtmlConfig {
    /// Create a record with the default values.
    pub fn new() -> Self {
        HtmlConfig::default()
    }
}

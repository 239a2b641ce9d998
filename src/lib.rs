// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Option registry and validation for the HTML output stage of a
//! documentation generator.
//!
//! This crate declares the command-line options the HTML stage
//! recognizes, parses raw argument tokens into a shared configuration
//! record, and enforces the consistency rules that make the record safe
//! to hand to page generation.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Example](#example)
//! * [Details](#details)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Four stages, run strictly in order:
//!
//! 1. **Assembly**: the declarative HTML option table
//!    ([html_option_set]) is unioned with the base option set supplied
//!    by the hosting tool into a [Registry] — deduplicated and ordered
//!    by name, so matching and usage text are deterministic.
//!
//! 2. **Processing**: the raw token stream is walked once. Every token
//!    must select a registered option; the option's argument tokens are
//!    consumed and its handler mutates the [HtmlConfig] record.
//!    Handlers check conflicting flag pairs eagerly, from both sides,
//!    so a conflict is caught whichever of the two flags comes later.
//!
//! 3. **Validation**: after the stream is consumed, the conflict rules
//!    are re-checked as an authoritative backstop, every option value
//!    naming a file is resolved through the [FileResolver]
//!    collaborator, and free-text values are scanned for script-like
//!    markup (advisory only).
//!
//! 4. **Hand-off**: on success the record is surrendered to page
//!    generation and is read-only from then on.
//!
//! Diagnostics flow through the [Reporter] collaborator at two
//! severities: [Severity::Error] fails the pass, [Severity::Warning] is
//! advisory.
//!
//! # Quickstart
//!
//! 1. Create an [HtmlOptions] front end (the default collaborators
//!    report to standard error and resolve files against the process
//!    filesystem):
//!
//!    ```rust
//!    # use htmlopts::HtmlOptions;
//!    let mut opts = HtmlOptions::new();
//!    ```
//!
//! 2. Process the token stream for the HTML stage:
//!
//!    ```rust
//!    # use htmlopts::HtmlOptions;
//!    # let mut opts = HtmlOptions::new();
//!    let tokens: Vec<String> = vec!["-doctitle".into(), "Widget API".into()];
//!
//!    opts.process(&tokens)?;
//!    # Ok::<(), htmlopts::Error>(())
//!    ```
//!
//! 3. Validate, then hand the record to page generation:
//!
//!    ```rust
//!    # use htmlopts::HtmlOptions;
//!    # let mut opts = HtmlOptions::new();
//!    # opts.process(&["-doctitle".to_string(), "Widget API".to_string()])?;
//!    opts.validate()?;
//!
//!    let config = opts.into_config();
//!    assert_eq!(config.doc_title, "Widget API");
//!    # Ok::<(), htmlopts::Error>(())
//!    ```
//!
//! # Example
//!
//! A front end with explicit collaborators, processing a stream that
//! exercises a conflict:
//!
//! ```rust
//! use htmlopts::{Error, HtmlOptions, StdFileResolver, WriteReporter};
//!
//! let reporter = WriteReporter::new(Vec::<u8>::new());
//! let mut opts = HtmlOptions::with_collaborators(reporter, StdFileResolver);
//!
//! let tokens: Vec<String> = vec!["-nohelp".into(), "-helpfile".into(), "help.html".into()];
//!
//! // -helpfile conflicts with the earlier -nohelp; the stream is
//! // rejected no matter which of the two came first.
//! let result = opts.process(&tokens);
//! assert_eq!(result, Err(Error::Conflict("-helpfile", "-nohelp")));
//! ```
//!
//! For a runnable program, see `demos/process-args.rs`:
//!
//! ```bash
//! $ cargo run --example process-args -- -doctitle "Widget API" -use -splitindex
//! ```
//!
//! # Details
//!
//! - Options are declared once, in a table mapping alias names to an
//!   argument requirement ([Need]), a visibility tier ([OptionKind])
//!   and a handler function receiving the record explicitly — no
//!   captured state.
//! - A declaration may carry several space-separated alias names
//!   (`--main-stylesheet -stylesheetfile`); any alias selects the
//!   option. A name ending in `:` matches every token it prefixes,
//!   which is how the `-Xdoclint:...` family is expressed.
//! - Processing is strictly ordered and stops at the first failure;
//!   mutations already applied are not rolled back, the pass is simply
//!   fatal for the run.
//! - Registering two options with the same primary name is a
//!   programming error and panics during assembly.
//!
//! # Limitations
//!
//! - No positional arguments: every token must select an option.
//! - No general-purpose parsing features (typed values, subcommands,
//!   bundling); the vocabulary is fixed and small, which is the point.

mod config;
pub mod doclint;
mod error;
mod files;
mod html;
mod options;
mod report;
mod sanitize;
mod validate;

pub use error::{Error, Result};

pub use config::{DoclintOpts, HtmlConfig};
pub use files::{FileResolver, StdFileResolver};
pub use html::{html_option_set, HtmlOptions, XDOCLINT, XDOCLINT_CUSTOM, XDOCLINT_PACKAGE};
pub use options::{Need, OptionHandler, OptionKind, OptionSpec, Registry};
pub use report::{Reporter, Severity, WriteReporter};

pub use sanitize::{check_for_injected_content, looks_like_script, strip_markup};

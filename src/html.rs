// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! The HTML option vocabulary and the front-end object tying the
//! registry, the configuration record and the collaborators together.

use std::io;

use url::Url;

use crate::config::HtmlConfig;
use crate::doclint;
use crate::error::{Error, Result};
use crate::files::{FileResolver, StdFileResolver};
use crate::options::{Need, OptionKind, OptionSpec, Registry};
use crate::report::{Reporter, Severity, WriteReporter};
use crate::sanitize;
use crate::validate;

/// Primary name of `-Xdoclint`; key for its doclint selection.
pub const XDOCLINT: &str = "-Xdoclint";

/// Primary name of the `-Xdoclint:<categories>` prefix option.
pub const XDOCLINT_CUSTOM: &str = "-Xdoclint:";

/// Primary name of the `-Xdoclint/package:<spec>` prefix option.
pub const XDOCLINT_PACKAGE: &str = "-Xdoclint/package:";

//----------------------------------------
// Handlers, one per flag.
//
// Handlers that can conflict with another flag check the current record
// state from both sides, so the conflict is caught whichever of the two
// flags comes later on the command line. The post-parse validator
// re-checks the same invariants as the authoritative backstop.

fn add_stylesheet(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.additional_stylesheets.push(args[0].clone());
    Ok(())
}

fn bottom(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.bottom = args[0].clone();
    Ok(())
}

fn charset(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.charset = Some(args[0].clone());
    Ok(())
}

fn doc_title(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.doc_title = args[0].clone();
    Ok(())
}

fn footer(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.footer = args[0].clone();
    Ok(())
}

fn header(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.header = args[0].clone();
    Ok(())
}

fn help_file(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    if c.no_help {
        return Err(Error::Conflict("-helpfile", "-nohelp"));
    }

    if !c.help_file.is_empty() {
        return Err(Error::Reuse("-helpfile"));
    }

    c.help_file = args[0].clone();
    Ok(())
}

fn html5(_o: &str, _args: &[String], _c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    // Accepted for compatibility; HTML5 is the only output format.
    Ok(())
}

fn no_deprecated_list(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.no_deprecated_list = true;
    Ok(())
}

fn no_help(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.no_help = true;

    if !c.help_file.is_empty() {
        return Err(Error::Conflict("-nohelp", "-helpfile"));
    }

    Ok(())
}

fn no_index(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.create_index = false;

    if c.split_index {
        return Err(Error::Conflict("-noindex", "-splitindex"));
    }

    Ok(())
}

fn no_navbar(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.no_navbar = true;
    Ok(())
}

fn no_overview(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.no_overview = true;

    if c.overview_path.is_some() {
        return Err(Error::Conflict("-nooverview", "-overview"));
    }

    Ok(())
}

fn no_tree(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.create_tree = false;
    Ok(())
}

fn overview(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.overview_path = Some(args[0].clone());

    if c.no_overview {
        return Err(Error::Conflict("-overview", "-nooverview"));
    }

    Ok(())
}

fn packages_header(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.packages_header = args[0].clone();
    Ok(())
}

fn split_index(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.split_index = true;

    if !c.create_index {
        return Err(Error::Conflict("-splitindex", "-noindex"));
    }

    Ok(())
}

fn stylesheet_file(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.stylesheet_file = args[0].clone();
    Ok(())
}

fn top(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.top = args[0].clone();
    Ok(())
}

fn class_use(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.class_use = true;
    Ok(())
}

fn window_title(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.window_title = sanitize::strip_markup(&args[0]);
    Ok(())
}

fn xdoclint(_o: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.doclint_opts.insert(XDOCLINT, doclint::MSGS_OPTION);
    Ok(())
}

fn xdocroot_parent(_o: &str, args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    c.docroot_parent = args[0].clone();

    if Url::parse(&c.docroot_parent).is_err() {
        return Err(Error::MalformedUrl(c.docroot_parent.clone()));
    }

    Ok(())
}

fn xdoclint_custom(opt: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    let dopt = opt.replacen(XDOCLINT_CUSTOM, doclint::MSGS_CUSTOM_PREFIX, 1);
    c.doclint_opts.insert(XDOCLINT_CUSTOM, dopt.clone());

    if dopt.contains('/') {
        return Err(Error::DoclintQualifier);
    }

    if !doclint::is_valid_option(&dopt) {
        return Err(Error::InvalidDoclintOption(dopt));
    }

    Ok(())
}

fn xdoclint_package(opt: &str, _args: &[String], c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
    let dopt = opt.replacen(XDOCLINT_PACKAGE, doclint::CHECK_PACKAGES_PREFIX, 1);
    c.doclint_opts.insert(XDOCLINT_PACKAGE, dopt.clone());

    if !doclint::is_valid_option(&dopt) {
        return Err(Error::InvalidDoclintPackage(dopt));
    }

    Ok(())
}

fn no_frames(_o: &str, _args: &[String], _c: &mut HtmlConfig, r: &mut dyn Reporter) -> Result<()> {
    r.print(
        Severity::Warning,
        "--no-frames is deprecated and will be removed in a future release",
    );
    Ok(())
}

/// The declarative option set for the HTML output stage.
///
/// Reconstructed on every call; the registry is the deduplicated,
/// sorted view of this list plus whatever base set the hosting tool
/// supplies.
pub fn html_option_set() -> Vec<OptionSpec> {
    vec![
        OptionSpec::new("--add-stylesheet", add_stylesheet)
            .needs(Need::Argument)
            .describe("Additional stylesheet for generated pages"),
        OptionSpec::new("-bottom", bottom)
            .needs(Need::Argument)
            .describe("Text placed at the bottom of each page"),
        OptionSpec::new("-charset", charset)
            .needs(Need::Argument)
            .describe("Charset for cross-platform viewing"),
        OptionSpec::new("-doctitle", doc_title)
            .needs(Need::Argument)
            .describe("Title for the overview page"),
        OptionSpec::new("-footer", footer)
            .needs(Need::Argument)
            .describe("Text placed in the footer of each page"),
        OptionSpec::new("-header", header)
            .needs(Need::Argument)
            .describe("Text placed in the header of each page"),
        OptionSpec::new("-helpfile", help_file)
            .needs(Need::Argument)
            .describe("Custom help file"),
        OptionSpec::new("-html5", html5).describe("Generate HTML 5 output"),
        OptionSpec::new("-nodeprecatedlist", no_deprecated_list)
            .describe("Do not generate the deprecated list"),
        OptionSpec::new("-nohelp", no_help).describe("Do not generate the help link"),
        OptionSpec::new("-noindex", no_index).describe("Do not generate the index"),
        OptionSpec::new("-nonavbar", no_navbar).describe("Do not generate the navigation bar"),
        OptionSpec::new("-nooverview", no_overview).kind(OptionKind::Hidden),
        OptionSpec::new("-notree", no_tree).describe("Do not generate the class hierarchy"),
        OptionSpec::new("-overview", overview)
            .needs(Need::Argument)
            .describe("Read overview documentation from the given file"),
        OptionSpec::new("-packagesheader", packages_header)
            .needs(Need::Argument)
            .kind(OptionKind::Hidden),
        OptionSpec::new("-splitindex", split_index)
            .describe("Split the index into one file per letter"),
        OptionSpec::new("--main-stylesheet -stylesheetfile", stylesheet_file)
            .needs(Need::Argument)
            .describe("Primary stylesheet for generated pages"),
        OptionSpec::new("-top", top)
            .needs(Need::Argument)
            .describe("Text placed at the top of each page"),
        OptionSpec::new("-use", class_use).describe("Generate class and package usage pages"),
        OptionSpec::new("-windowtitle", window_title)
            .needs(Need::Argument)
            .describe("Browser window title"),
        OptionSpec::new(XDOCLINT, xdoclint)
            .kind(OptionKind::Extended)
            .describe("Enable recommended documentation checks"),
        OptionSpec::new("-Xdocrootparent", xdocroot_parent)
            .needs(Need::Argument)
            .kind(OptionKind::Extended)
            .describe("Redirect relative doc-root links to the given URL"),
        OptionSpec::new(XDOCLINT_CUSTOM, xdoclint_custom)
            .kind(OptionKind::Extended)
            .describe("Enable or disable specific documentation checks"),
        OptionSpec::new(XDOCLINT_PACKAGE, xdoclint_package)
            .kind(OptionKind::Extended)
            .describe("Restrict documentation checks to the given packages"),
        OptionSpec::new("--no-frames", no_frames)
            .kind(OptionKind::Extended)
            .describe("Accepted for compatibility; frames are gone"),
    ]
}

/// The front-end object for the HTML output stage's options.
///
/// Owns the configuration record for the duration of one parse and
/// validate pass: assemble, [process](HtmlOptions::process) the token
/// stream, [validate](HtmlOptions::validate), then hand the record to
/// page generation with [into_config](HtmlOptions::into_config).
#[derive(Debug)]
pub struct HtmlOptions<R: Reporter, F: FileResolver> {
    registry: Registry,
    config: HtmlConfig,
    reporter: R,
    resolver: F,
}

impl HtmlOptions<WriteReporter<io::Stderr>, StdFileResolver> {
    /// Create a front end with the default collaborators: diagnostics
    /// on standard error, files resolved against the process
    /// filesystem.
    pub fn new() -> Self {
        HtmlOptions::with_collaborators(WriteReporter::new(io::stderr()), StdFileResolver)
    }
}

impl Default for HtmlOptions<WriteReporter<io::Stderr>, StdFileResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Reporter, F: FileResolver> HtmlOptions<R, F> {
    /// Create a front end with explicit diagnostic and file-resolution
    /// collaborators.
    pub fn with_collaborators(reporter: R, resolver: F) -> Self {
        HtmlOptions {
            registry: Registry::assemble(html_option_set(), Vec::new()),
            config: HtmlConfig::new(),
            reporter,
            resolver,
        }
    }

    /// Union the externally supplied base option set into the registry.
    ///
    /// # Panics
    ///
    /// Panics if a base option's primary name collides with one of this
    /// module's options (a programming error in the base set).
    pub fn base_options(self, base: Vec<OptionSpec>) -> Self {
        HtmlOptions {
            registry: Registry::assemble(html_option_set(), base),
            ..self
        }
    }

    /// The assembled registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Process a raw token stream, mutating the configuration record.
    ///
    /// Stops at the first failing token or handler; every failure is
    /// also printed through the reporter.
    pub fn process(&mut self, tokens: &[String]) -> Result<()> {
        self.registry
            .process(tokens, &mut self.config, &mut self.reporter)
    }

    /// Run the post-parse validators: cross-flag conflicts, referenced
    /// files, and the free-text content scan.
    pub fn validate(&mut self) -> Result<()> {
        validate::validate_options(&self.config, &self.resolver, &mut self.reporter)
    }

    /// The configuration record in its current state.
    pub fn config(&self) -> &HtmlConfig {
        &self.config
    }

    /// Consume the front end, handing the configuration record to the
    /// caller (normally after [validate](HtmlOptions::validate)
    /// succeeded).
    pub fn into_config(self) -> HtmlConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::files::test_support::FixedResolver;
    use crate::report::test_support::RecordingReporter;

    fn front_end() -> HtmlOptions<RecordingReporter, FixedResolver> {
        HtmlOptions::with_collaborators(RecordingReporter::new(), FixedResolver::default())
    }

    fn process(tokens: &[&str]) -> (Result<()>, HtmlOptions<RecordingReporter, FixedResolver>) {
        let mut opts = front_end();

        let tokens: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        let result = opts.process(&tokens);

        (result, opts)
    }

    #[test]
    fn test_registry_contains_every_flag() {
        let opts = front_end();

        let expected = &[
            "--add-stylesheet",
            "-bottom",
            "-charset",
            "-doctitle",
            "-footer",
            "-header",
            "-helpfile",
            "-html5",
            "-nodeprecatedlist",
            "-nohelp",
            "-noindex",
            "-nonavbar",
            "-nooverview",
            "-notree",
            "-overview",
            "-packagesheader",
            "-splitindex",
            "--main-stylesheet",
            "-stylesheetfile",
            "-top",
            "-use",
            "-windowtitle",
            "-Xdoclint",
            "-Xdocrootparent",
            "--no-frames",
        ];

        for token in expected {
            let found: Vec<_> = opts
                .registry()
                .iter()
                .filter(|spec| spec.matches(token))
                .collect();

            assert_eq!(found.len(), 1, "token: {}", token);
        }

        // Prefix options match through their prefix.
        assert!(opts.registry().find("-Xdoclint:html").is_some());
        assert!(opts.registry().find("-Xdoclint/package:foo.*").is_some());
    }

    #[test]
    fn test_simple_setters() {
        let (result, opts) = process(&[
            "--add-stylesheet",
            "extra.css",
            "-bottom",
            "bottom text",
            "-charset",
            "UTF-8",
            "-doctitle",
            "Widget API",
            "-footer",
            "footer text",
            "-header",
            "header text",
            "-helpfile",
            "help.html",
            "-html5",
            "-nodeprecatedlist",
            "-nonavbar",
            "-notree",
            "-overview",
            "overview.html",
            "-packagesheader",
            "packages",
            "--main-stylesheet",
            "main.css",
            "-top",
            "top text",
            "-use",
            "-Xdocrootparent",
            "http://example.com/docs",
        ]);

        assert!(result.is_ok());

        let config = opts.config();

        assert_eq!(config.additional_stylesheets, vec!["extra.css"]);
        assert_eq!(config.bottom, "bottom text");
        assert_eq!(config.charset.as_deref(), Some("UTF-8"));
        assert_eq!(config.doc_title, "Widget API");
        assert_eq!(config.footer, "footer text");
        assert_eq!(config.header, "header text");
        assert_eq!(config.help_file, "help.html");
        assert!(config.no_deprecated_list);
        assert!(config.no_navbar);
        assert!(!config.create_tree);
        assert_eq!(config.overview_path.as_deref(), Some("overview.html"));
        assert_eq!(config.packages_header, "packages");
        assert_eq!(config.stylesheet_file, "main.css");
        assert_eq!(config.top, "top text");
        assert!(config.class_use);
        assert_eq!(config.docroot_parent, "http://example.com/docs");
    }

    #[test]
    fn test_stylesheet_alias() {
        let (result, opts) = process(&["-stylesheetfile", "alias.css"]);

        assert!(result.is_ok());
        assert_eq!(opts.config().stylesheet_file, "alias.css");
    }

    #[test]
    fn test_conflicts_detected_in_both_orders() {
        #[derive(Debug)]
        struct TestData<'a> {
            tokens: Vec<&'a str>,
            result: Result<()>,
        }

        let tests = &[
            //------------------------------
            // help file vs no-help
            //------------------------------
            TestData {
                tokens: vec!["-helpfile", "help.html", "-nohelp"],
                result: Err(Error::Conflict("-nohelp", "-helpfile")),
            },
            TestData {
                tokens: vec!["-nohelp", "-helpfile", "help.html"],
                result: Err(Error::Conflict("-helpfile", "-nohelp")),
            },
            TestData {
                tokens: vec!["-nohelp"],
                result: Ok(()),
            },
            //------------------------------
            // split index requires index generation
            //------------------------------
            TestData {
                tokens: vec!["-noindex", "-splitindex"],
                result: Err(Error::Conflict("-splitindex", "-noindex")),
            },
            TestData {
                tokens: vec!["-splitindex", "-noindex"],
                result: Err(Error::Conflict("-noindex", "-splitindex")),
            },
            // Index generation defaults to on.
            TestData {
                tokens: vec!["-splitindex"],
                result: Ok(()),
            },
            TestData {
                tokens: vec!["-noindex"],
                result: Ok(()),
            },
            //------------------------------
            // overview vs no-overview
            //------------------------------
            TestData {
                tokens: vec!["-overview", "o.html", "-nooverview"],
                result: Err(Error::Conflict("-nooverview", "-overview")),
            },
            TestData {
                tokens: vec!["-nooverview", "-overview", "o.html"],
                result: Err(Error::Conflict("-overview", "-nooverview")),
            },
            TestData {
                tokens: vec!["-nooverview"],
                result: Ok(()),
            },
            //------------------------------
            // help file may not be repeated
            //------------------------------
            TestData {
                tokens: vec!["-helpfile", "a.html", "-helpfile", "b.html"],
                result: Err(Error::Reuse("-helpfile")),
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let (result, _) = process(&d.tokens);

            let msg = format!("{}, result: {:?}", msg, result);

            assert_eq!(result, d.result, "{}", msg);
        }
    }

    #[test]
    fn test_window_title_strips_markup() {
        let (result, opts) = process(&["-windowtitle", "<b>Title</b>"]);

        assert!(result.is_ok());
        assert_eq!(opts.config().window_title, "Title");
    }

    #[test]
    fn test_docroot_parent_must_be_url() {
        let (result, opts) = process(&["-Xdocrootparent", "not a url"]);

        assert_eq!(result, Err(Error::MalformedUrl("not a url".into())));

        // The value was recorded before the check fired; the failed
        // pass is fatal, so nothing downstream observes it.
        assert_eq!(opts.config().docroot_parent, "not a url");
    }

    #[test]
    fn test_doclint_options() {
        #[derive(Debug)]
        struct TestData<'a> {
            tokens: Vec<&'a str>,
            result: Result<()>,
            recorded: Vec<&'a str>,
        }

        let tests = &[
            TestData {
                tokens: vec!["-Xdoclint"],
                result: Ok(()),
                recorded: vec!["-Xmsgs"],
            },
            TestData {
                tokens: vec!["-Xdoclint:html"],
                result: Ok(()),
                recorded: vec!["-Xmsgs:html"],
            },
            TestData {
                tokens: vec!["-Xdoclint:all,-missing"],
                result: Ok(()),
                recorded: vec!["-Xmsgs:all,-missing"],
            },
            TestData {
                tokens: vec!["-Xdoclint", "-Xdoclint:syntax"],
                result: Ok(()),
                recorded: vec!["-Xmsgs", "-Xmsgs:syntax"],
            },
            TestData {
                tokens: vec!["-Xdoclint/package:foo.*"],
                result: Ok(()),
                recorded: vec!["-XcheckPackage:foo.*"],
            },
            //------------------------------
            // Each rejection still records the selection first.
            //------------------------------
            TestData {
                tokens: vec!["-Xdoclint:html/private"],
                result: Err(Error::DoclintQualifier),
                recorded: vec!["-Xmsgs:html/private"],
            },
            TestData {
                tokens: vec!["-Xdoclint:bogus"],
                result: Err(Error::InvalidDoclintOption("-Xmsgs:bogus".into())),
                recorded: vec!["-Xmsgs:bogus"],
            },
            TestData {
                tokens: vec!["-Xdoclint/package:badsyntax"],
                result: Err(Error::InvalidDoclintPackage(
                    "-XcheckPackage:badsyntax".into(),
                )),
                recorded: vec!["-XcheckPackage:badsyntax"],
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let (result, opts) = process(&d.tokens);

            let msg = format!("{}, result: {:?}", msg, result);

            assert_eq!(result, d.result, "{}", msg);

            let recorded: Vec<&str> = opts.config().doclint_opts.values().collect();
            assert_eq!(recorded, d.recorded, "{}", msg);
        }
    }

    #[test]
    fn test_no_frames_warns_but_succeeds() {
        let (result, opts) = process(&["--no-frames"]);

        assert!(result.is_ok());

        let warnings = opts.reporter.warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("--no-frames"));
    }

    #[test]
    fn test_unknown_option_is_reported() {
        let (result, opts) = process(&["-frobnicate"]);

        assert_eq!(result, Err(Error::UnknownOption("-frobnicate".into())));
        assert_eq!(
            opts.reporter.errors(),
            vec!["unknown option: -frobnicate".to_string()]
        );
    }

    #[test]
    fn test_missing_argument() {
        let (result, _) = process(&["-doctitle"]);

        assert_eq!(result, Err(Error::MissingArgument("-doctitle".into())));
    }

    #[test]
    fn test_base_options_union() {
        fn quiet(_o: &str, _a: &[String], _c: &mut HtmlConfig, _r: &mut dyn Reporter) -> Result<()> {
            Ok(())
        }

        let mut opts = front_end().base_options(vec![OptionSpec::new("-quiet", quiet)]);

        assert!(opts.registry().find("-quiet").is_some());
        assert!(opts.registry().find("-doctitle").is_some());

        let tokens = vec!["-quiet".to_string()];
        assert!(opts.process(&tokens).is_ok());
    }

    #[test]
    fn test_process_then_validate_pipeline() {
        let resolver = FixedResolver::with(&["help.html", "main.css", "extra.css"]);
        let mut opts = HtmlOptions::with_collaborators(RecordingReporter::new(), resolver);

        let tokens: Vec<String> = vec![
            "-helpfile",
            "help.html",
            "--main-stylesheet",
            "main.css",
            "--add-stylesheet",
            "extra.css",
            "-windowtitle",
            "<i>Widget</i> API",
            "-splitindex",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        assert!(opts.process(&tokens).is_ok());
        assert!(opts.validate().is_ok());

        let config = opts.into_config();

        assert_eq!(config.window_title, "Widget API");
        assert!(config.split_index);
        assert!(config.create_index);
    }
}

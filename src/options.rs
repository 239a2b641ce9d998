// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Option descriptors, the registry, and the token-processing loop.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use crate::config::HtmlConfig;
use crate::error::{Error, Result};
use crate::report::{Reporter, Severity};

const USAGE_PREFIX_SPACES: &str = "    ";

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it requires an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument required).
    Nothing,
    /// Option needs an argument.
    Argument,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Number of argument tokens the option consumes.
    fn arity(self) -> usize {
        match self {
            Need::Nothing => 0,
            Need::Argument => 1,
        }
    }
}

/// Visibility tier of an option.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum OptionKind {
    /// Documented, shown in the standard usage section.
    Standard,
    /// Accepted but undocumented.
    Hidden,
    /// Experimental; shown in the extended usage section.
    Extended,
}

impl Default for OptionKind {
    fn default() -> Self {
        OptionKind::Standard
    }
}

/// Function that handles one matched option.
///
/// # Parameters
///
/// - the option name as it appeared on the command line (for prefix
///   options this is the full token),
/// - the consumed argument tokens (exactly as many as the option's
///   [Need] demands),
/// - the configuration record to mutate,
/// - the diagnostic reporter (for advisory warnings only; errors are
///   returned and the processing loop reports them).
///
/// # Notes
///
/// If a handler call fails, token processing stops and the error is
/// returned to the caller; mutations already applied are not rolled
/// back.
pub type OptionHandler =
    fn(opt: &str, args: &[String], config: &mut HtmlConfig, reporter: &mut dyn Reporter) -> Result<()>;

/// A single recognized option.
///
/// Declares the option's alias names, its argument requirement, its
/// visibility tier and the handler that consumes matched arguments.
#[derive(Clone)]
pub struct OptionSpec {
    /// One or more alias names, space-separated. The first is the
    /// primary name (registry key). A name ending in `:` matches any
    /// token starting with it.
    names: &'static str,
    /// Type of option (required, but defaults).
    need: Need,
    /// Visibility tier.
    kind: OptionKind,
    /// One-line description for the usage statement.
    description: &'static str,
    /// Handler invoked when the option matches.
    handler: OptionHandler,
}

impl OptionSpec {
    /// Create a new flag option with the given name(s) and handler.
    pub fn new(names: &'static str, handler: OptionHandler) -> Self {
        OptionSpec {
            names,
            need: Need::default(),
            kind: OptionKind::default(),
            description: "",
            handler,
        }
    }

    /// Specify the requirement for the option.
    pub fn needs(self, need: Need) -> Self {
        OptionSpec { need, ..self }
    }

    /// Specify the visibility tier for the option.
    pub fn kind(self, kind: OptionKind) -> Self {
        OptionSpec { kind, ..self }
    }

    /// Specify the usage description for the option.
    pub fn describe(self, description: &'static str) -> Self {
        OptionSpec {
            description,
            ..self
        }
    }

    /// The option's primary (first-declared) name.
    pub fn primary_name(&self) -> &'static str {
        self.names.split_whitespace().next().unwrap_or(self.names)
    }

    /// All alias names for the option.
    pub fn aliases(&self) -> impl Iterator<Item = &'static str> {
        self.names.split_whitespace()
    }

    /// The option's visibility tier.
    pub fn visibility(&self) -> OptionKind {
        self.kind
    }

    /// Determine whether `token` selects this option.
    ///
    /// An alias ending in `:` is a prefix match; any other alias must
    /// match exactly.
    pub fn matches(&self, token: &str) -> bool {
        self.aliases().any(|name| {
            if name.ends_with(':') {
                token.starts_with(name)
            } else {
                token == name
            }
        })
    }
}

impl fmt::Debug for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("OptionSpec")
            .field("names", &self.names)
            .field("need", &self.need)
            .field("kind", &self.kind)
            .finish()
    }
}

impl fmt::Display for OptionSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.need {
            Need::Argument => " <value>",
            Need::Nothing => "",
        };

        let description: String = match self.description {
            "" => "".into(),
            d => format!(" # {}", d),
        };

        write!(f, "{}{}{}", self.names, value, description)
    }
}

/// The deduplicated, name-ordered collection of all recognized options.
///
/// Built fresh per run from this module's declarative list unioned with
/// the externally supplied base set; never mutated after assembly.
#[derive(Debug)]
pub struct Registry {
    /// Descriptors keyed by primary name, so iteration order (and with
    /// it usage text and matching) is deterministic.
    entries: BTreeMap<&'static str, OptionSpec>,
}

impl Registry {
    /// Assemble a registry from this module's option set and the base
    /// set supplied by the hosting tool.
    ///
    /// # Panics
    ///
    /// Panics if two descriptors share a primary name. That is a
    /// programming error in the declarative tables, not a runtime
    /// condition.
    pub fn assemble(own: Vec<OptionSpec>, base: Vec<OptionSpec>) -> Self {
        let mut entries = BTreeMap::new();

        for spec in own.into_iter().chain(base) {
            let name = spec.primary_name();

            assert!(
                entries.insert(name, spec).is_none(),
                "duplicate option registered: {}",
                name
            );
        }

        Registry { entries }
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the descriptor selected by `token`, if any alias (or
    /// prefix) matches.
    pub fn find(&self, token: &str) -> Option<&OptionSpec> {
        self.entries.values().find(|spec| spec.matches(token))
    }

    /// The registered descriptors, ordered by primary name.
    pub fn iter(&self) -> impl Iterator<Item = &OptionSpec> {
        self.entries.values()
    }

    /// Process a raw token stream against the registry.
    ///
    /// Each token must select a registered option; the option's
    /// argument tokens are consumed and its handler invoked. Processing
    /// stops at the first failure, which is also printed through the
    /// reporter. Mutations applied before the failure remain in place
    /// (a failed pass is fatal for the run).
    pub fn process(
        &self,
        tokens: &[String],
        config: &mut HtmlConfig,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];

            let result = self.process_one(token, &tokens[index + 1..], config, reporter);

            match result {
                Ok(consumed) => index += 1 + consumed,
                Err(e) => {
                    reporter.print(Severity::Error, &e.to_string());
                    return Err(e);
                }
            }
        }

        Ok(())
    }

    /// Handle a single option token; returns the number of argument
    /// tokens consumed from `rest`.
    fn process_one(
        &self,
        token: &str,
        rest: &[String],
        config: &mut HtmlConfig,
        reporter: &mut dyn Reporter,
    ) -> Result<usize> {
        let spec = self
            .find(token)
            .ok_or_else(|| Error::UnknownOption(token.into()))?;

        let arity = spec.need.arity();

        if rest.len() < arity {
            return Err(Error::MissingArgument(token.into()));
        }

        (spec.handler)(token, &rest[..arity], config, reporter)?;

        Ok(arity)
    }

    /// Render a usage statement for the registered options.
    ///
    /// Standard options come first, extended options in their own
    /// section, hidden options not at all. Ordering follows the
    /// registry, so the output is deterministic.
    pub fn write_usage<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: Write,
    {
        let mut lines = Vec::<String>::new();

        lines.push("Standard options:".into());

        for spec in self.iter().filter(|s| s.kind == OptionKind::Standard) {
            lines.push(format!("{}{}", USAGE_PREFIX_SPACES, spec));
        }

        let extended: Vec<&OptionSpec> =
            self.iter().filter(|s| s.kind == OptionKind::Extended).collect();

        if !extended.is_empty() {
            lines.push("\nExtended options:".into());

            for spec in extended {
                lines.push(format!("{}{}", USAGE_PREFIX_SPACES, spec));
            }
        }

        writeln!(writer, "{}", lines.join("\n"))
    }
}

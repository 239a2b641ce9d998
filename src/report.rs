// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::io::Write;

/// Severity of a reported diagnostic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Severity {
    /// The condition fails the parse/validate pass.
    Error,
    /// Advisory only; the pass continues.
    Warning,
}

impl Severity {
    /// Prefix used when rendering the diagnostic as text.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

/// Trait that the diagnostic sink must implement.
///
/// Formatting and localization of messages beyond the plain text passed
/// here is the sink's concern, not this crate's.
pub trait Reporter {
    /// Emit a single diagnostic.
    fn print(&mut self, severity: Severity, message: &str);
}

/// A [Reporter] that renders each diagnostic as a single
/// `"<severity>: <message>"` line on a generic writer.
#[derive(Clone, Debug, Default)]
pub struct WriteReporter<W: Write> {
    out: W,
}

impl<W: Write> WriteReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        WriteReporter { out }
    }

    /// Consume the reporter, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for WriteReporter<W> {
    fn print(&mut self, severity: Severity, message: &str) {
        // A failed diagnostic write has no better channel to report on.
        let _ = writeln!(self.out, "{}: {}", severity.label(), message);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// Reporter that records every diagnostic for later inspection.
    #[derive(Clone, Debug, Default)]
    pub struct RecordingReporter {
        pub printed: Vec<(Severity, String)>,
    }

    impl RecordingReporter {
        pub fn new() -> Self {
            RecordingReporter::default()
        }

        pub fn errors(&self) -> Vec<&str> {
            self.printed
                .iter()
                .filter(|(s, _)| *s == Severity::Error)
                .map(|(_, m)| m.as_str())
                .collect()
        }

        pub fn warnings(&self) -> Vec<&str> {
            self.printed
                .iter()
                .filter(|(s, _)| *s == Severity::Warning)
                .map(|(_, m)| m.as_str())
                .collect()
        }
    }

    impl Reporter for RecordingReporter {
        fn print(&mut self, severity: Severity, message: &str) {
            self.printed.push((severity, message.into()));
        }
    }
}

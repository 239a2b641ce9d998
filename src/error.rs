// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
///
/// Every variant names the offending flag(s) or value in its display
/// message; the message is what the diagnostic reporter prints.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Token stream errors
    //------------------------------
    /// User specified an option not present in the registry.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Option requires an argument but the token stream ended first.
    #[error("option {0} requires an argument")]
    MissingArgument(String),

    //------------------------------
    // Cross-flag consistency errors
    //------------------------------
    /// Two options with conflicting semantics were both specified.
    #[error("conflicting options: {0} and {1}")]
    Conflict(&'static str, &'static str),

    /// An option that may only be specified once was repeated.
    #[error("option {0} may only be specified once")]
    Reuse(&'static str),

    //------------------------------
    // Value errors
    //------------------------------
    /// An option value named a file that does not exist.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// An option value that must be a URL failed to parse as one.
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// A doclint category list used `/` access-qualifier syntax,
    /// which is not accepted on the command line.
    #[error("access qualifiers are not permitted in doclint options")]
    DoclintQualifier,

    /// A doclint category list contained an unrecognized category.
    #[error("invalid doclint option: {0}")]
    InvalidDoclintOption(String),

    /// A doclint package specification was malformed.
    #[error("invalid doclint package specification: {0}")]
    InvalidDoclintPackage(String),
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

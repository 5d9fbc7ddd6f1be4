use std::{num::ParseIntError, path::PathBuf};

/// Errors from parsing or incrementing a version.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum VersionError {
    /// The version string did not split into exactly `major.minor.patch`.
    #[error("Version `{version}` should have 3 dot-separated fields, but has {count}")]
    WrongFieldCount {
        /// The version string that was given
        version: String,
        /// How many fields were found
        count: usize,
    },

    /// One of the fields was not a non-negative integer.
    #[error("Field `{field}` of version `{version}` should be a non-negative integer: {source}")]
    InvalidField {
        /// The version string that was given
        version: String,
        /// The name of the offending field, like `minor`
        field: &'static str,
        /// Why the field failed to parse
        source: ParseIntError,
    },

    /// Incrementing a field would exceed the largest representable value.
    #[error("Field `{field}` of version `{version}` cannot be incremented without overflowing")]
    Overflow {
        /// The version being incremented
        version: String,
        /// The name of the field that would overflow
        field: &'static str,
    },

    /// The bump type was not one of `major`, `minor`, or `patch`.
    #[error("Unknown bump type `{level}`, expected one of `major`, `minor`, or `patch`")]
    UnknownLevel {
        /// The token that was given
        level: String,
    },
}

/// Errors from reading, rewriting, or writing a properties file.
#[derive(thiserror::Error, Debug)]
pub enum PropertiesError {
    /// The file could not be read or written.
    #[error("Could not access `{}`: {source}", path.display())]
    Io {
        /// The properties file path
        path: PathBuf,
        /// The underlying I/O failure
        source: std::io::Error,
    },

    /// The document has no `appVersionName=` assignment.
    #[error("No `appVersionName=` assignment found")]
    VersionNameNotFound,

    /// The `appVersionCode=` value could not be read as an integer.
    #[error("Version code `{code}` should fit in an unsigned 64-bit integer: {source}")]
    InvalidVersionCode {
        /// The digits that were found
        code: String,
        /// Why they failed to parse
        source: ParseIntError,
    },

    /// Incrementing the version code would overflow.
    #[error("Version code `{code}` cannot be incremented without overflowing")]
    VersionCodeOverflow {
        /// The current version code
        code: u64,
    },
}

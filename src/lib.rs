//! # appver
//!
//! Bumps the version of an app whose build reads it from a properties file, like an Android
//! project's `gradle.properties`.
//!
//! Two fields are maintained in that file:
//!
//! - `appVersionName`: the human-readable `major.minor.patch` version, replaced with the bumped
//!   version.
//! - `appVersionCode`: a monotonically increasing integer build identifier, incremented by one on
//!   every bump.
//!
//! ## Examples
//!
//! Compute a next version:
//!
//! ```
//! use appver::prelude::*;
//!
//! let next = bump("1.2.3", "minor", Strictness::Lenient).unwrap();
//! assert_eq!(next.to_string(), "1.3.0");
//! ```
//!
//! Rewrite a properties document in memory:
//!
//! ```
//! use appver::prelude::*;
//!
//! let doc = "appVersionName=1.0.0\nappVersionCode=5\n";
//! let rewritten = rewrite(doc, &Version::new(1, 1, 0)).unwrap();
//! assert_eq!(rewritten.content, "appVersionName=1.1.0\nappVersionCode=6\n");
//! ```
//!
//! Or do both against a file on disk with [update_file].
//!
//! ## Bump types
//!
//! | Token | Effect on `1.2.3` |
//! |---|---|
//! | `major` | `2.0.0` |
//! | `minor` | `1.3.0` |
//! | `patch` | `1.2.4` |
//! | anything else | `1.2.3` when [Strictness::Lenient], an error when [Strictness::Strict] |
//!
//! ## Prelude
//!
//! appver provides a prelude module for convenience. Use it with:
//!
//! ```
//! use appver::prelude::*;
//! ```
#![warn(missing_docs)]

mod error;
mod level;
mod properties;
mod version;

pub use crate::error::{PropertiesError, VersionError};
pub use crate::level::Level;
pub use crate::properties::{
    rewrite, update_file, CodeChange, Rewrite, DEFAULT_PATH, VERSION_CODE_KEY, VERSION_NAME_KEY,
};
pub use crate::version::{bump, Version};

/// How to treat input that is recognizable but not quite right.
///
/// This governs unrecognized bump types (see [bump]) and properties documents that lack a version
/// name (see [update_file]).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Strictness {
    /// Log a warning and carry on without changing anything.
    #[default]
    Lenient,
    /// Fail with an error.
    Strict,
}

/// A convenience module appropriate for glob imports (`use appver::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::bump;
    #[doc(no_inline)]
    pub use crate::rewrite;
    #[doc(no_inline)]
    pub use crate::update_file;
    #[doc(no_inline)]
    pub use crate::CodeChange;
    #[doc(no_inline)]
    pub use crate::Level;
    #[doc(no_inline)]
    pub use crate::PropertiesError;
    #[doc(no_inline)]
    pub use crate::Rewrite;
    #[doc(no_inline)]
    pub use crate::Strictness;
    #[doc(no_inline)]
    pub use crate::Version;
    #[doc(no_inline)]
    pub use crate::VersionError;
}

//! Rewriting the version fields of a properties file.
//!
//! The file is treated as plain text rather than parsed as a properties format: the two
//! assignments are found by pattern and substituted in place, so comments, ordering, spacing, and
//! every other line survive byte-for-byte.

use std::{fs, path::Path, sync::LazyLock};

use regex::{NoExpand, Regex};
use tracing::{debug, warn};

use crate::{error::PropertiesError, version::Version, Strictness};

/// Where the properties file is looked for when no path is given, relative to the working
/// directory.
pub const DEFAULT_PATH: &str = "gradle.properties";

/// The key holding the human-readable version.
pub const VERSION_NAME_KEY: &str = "appVersionName";

/// The key holding the integer build identifier.
pub const VERSION_CODE_KEY: &str = "appVersionCode";

// The value runs to the end of the line, but not into a `\r` of a CRLF terminator.
static VERSION_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}=[^\r\n]*", regex::escape(VERSION_NAME_KEY)))
        .expect("version name pattern should compile")
});

// ASCII digits only; `\d` is Unicode-aware.
static VERSION_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}=([0-9]+)", regex::escape(VERSION_CODE_KEY)))
        .expect("version code pattern should compile")
});

/// The version code before and after a rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeChange {
    /// The code found in the document
    pub from: u64,
    /// The code written in its place, always `from + 1`
    pub to: u64,
}

/// The result of rewriting a properties document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
    /// The full rewritten document.
    pub content: String,

    /// Whether an `appVersionName=` assignment was found and replaced.
    pub version_name_found: bool,

    /// The version code change, or `None` if the document has no `appVersionCode=` assignment.
    pub version_code: Option<CodeChange>,
}

/// Rewrites the version fields of a properties document.
///
/// - The first `appVersionName=...` assignment has its value (up to the end of its line) replaced
///   with `new_version`.
/// - The first `appVersionCode=<digits>` assignment has its value incremented by one.
///
/// Either assignment may be absent, in which case that part of the document is left alone. The
/// returned [Rewrite] records what was found.
///
/// # Example
///
/// ```
/// use appver::{rewrite, CodeChange, Version};
///
/// let doc = "# release\nappVersionName=1.0.0\nappVersionCode=5\n";
/// let rewritten = rewrite(doc, &Version::new(1, 1, 0)).unwrap();
/// assert_eq!("# release\nappVersionName=1.1.0\nappVersionCode=6\n", rewritten.content);
/// assert_eq!(Some(CodeChange { from: 5, to: 6 }), rewritten.version_code);
/// ```
///
/// # Errors
///
/// - Returns a [PropertiesError::InvalidVersionCode] if the version code does not fit in a `u64`.
/// - Returns a [PropertiesError::VersionCodeOverflow] if the version code is already [u64::MAX].
pub fn rewrite(content: &str, new_version: &Version) -> Result<Rewrite, PropertiesError> {
    let version_name_found = VERSION_NAME.is_match(content);
    let assignment = format!("{VERSION_NAME_KEY}={new_version}");
    let mut content = VERSION_NAME
        .replace(content, NoExpand(&assignment))
        .into_owned();

    let digits = VERSION_CODE
        .captures(&content)
        .and_then(|caps| caps.get(1))
        .map(|digits| digits.range());

    let version_code = match digits {
        Some(range) => {
            let code = &content[range.clone()];
            let from = code
                .parse::<u64>()
                .map_err(|source| PropertiesError::InvalidVersionCode {
                    code: code.to_owned(),
                    source,
                })?;
            let to = from
                .checked_add(1)
                .ok_or(PropertiesError::VersionCodeOverflow { code: from })?;
            content.replace_range(range, &to.to_string());
            Some(CodeChange { from, to })
        }
        None => None,
    };

    Ok(Rewrite {
        content,
        version_name_found,
        version_code,
    })
}

/// Rewrites the version fields of the properties file at `path` (see [rewrite]) and writes the
/// result back over it.
///
/// The file is read once and written once, in full. There is no locking, atomic replacement, or
/// backup. When `dry_run` is true, everything but the write happens.
///
/// A missing version code is not an error. A missing version name is logged and tolerated when
/// [Strictness::Lenient]; when [Strictness::Strict] it is an error and nothing is written.
///
/// # Errors
///
/// - Returns a [PropertiesError::Io] if the file cannot be read or written.
/// - Returns a [PropertiesError::VersionNameNotFound] under [Strictness::Strict] if the file has no
///   version name.
/// - Any error from [rewrite].
pub fn update_file(
    path: &Path,
    new_version: &Version,
    strictness: Strictness,
    dry_run: bool,
) -> Result<Rewrite, PropertiesError> {
    let io_error = |source| PropertiesError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = fs::read_to_string(path).map_err(io_error)?;
    let rewritten = rewrite(&content, new_version)?;

    if !rewritten.version_name_found {
        match strictness {
            Strictness::Strict => return Err(PropertiesError::VersionNameNotFound),
            Strictness::Lenient => warn!(
                path = %path.display(),
                "no {VERSION_NAME_KEY} assignment found, version name left as is"
            ),
        }
    }

    match rewritten.version_code {
        Some(CodeChange { from, to }) => debug!(from, to, "incremented version code"),
        None => debug!(
            path = %path.display(),
            "no {VERSION_CODE_KEY} assignment found, version code left as is"
        ),
    }

    if dry_run {
        debug!(path = %path.display(), "dry run, not writing");
    } else {
        fs::write(path, &rewritten.content).map_err(io_error)?;
        debug!(path = %path.display(), version = %new_version, "wrote properties");
    }

    Ok(rewritten)
}

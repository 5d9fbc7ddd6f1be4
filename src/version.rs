use crate::{error::VersionError, level::Level, Strictness};
use core::{
    fmt::{self, Display},
    str::FromStr,
};
use tracing::{debug, warn};

/// A `major.minor.patch` version.
///
/// Versions are created by parsing a string with [str::parse] (or [Version::from_str]) and can be
/// [displayed](Version::to_string), [incremented](Version::next), and compared. Ordering is by
/// major, then minor, then patch.
///
/// Parsing is deliberately plain: the string is split on `.` and each of the three fields must be
/// an unsigned integer. Pre-release and build-metadata suffixes are not supported.
///
/// # Examples
///
/// ```
/// use appver::prelude::*;
///
/// let cur: Version = "1.2.3".parse().unwrap();
/// let next = cur.next(Level::Minor).unwrap();
/// assert_eq!("1.3.0", next.to_string());
/// assert!(cur < next);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// The major field
    pub major: u64,
    /// The minor field
    pub minor: u64,
    /// The patch field
    pub patch: u64,
}

impl Version {
    /// Creates a version from its three fields.
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns a new version where the field for `level` is incremented by one and all lesser
    /// fields are reset to zero.
    ///
    /// # Example
    ///
    /// ```
    /// use appver::{Level, Version};
    ///
    /// let version = Version::new(2, 9, 9);
    /// assert_eq!(Version::new(3, 0, 0), version.next(Level::Major).unwrap());
    /// assert_eq!(Version::new(2, 10, 0), version.next(Level::Minor).unwrap());
    /// assert_eq!(Version::new(2, 9, 10), version.next(Level::Patch).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// - Returns a [VersionError::Overflow] if the incremented field is already [u64::MAX].
    pub fn next(&self, level: Level) -> Result<Self, VersionError> {
        let overflow = || VersionError::Overflow {
            version: self.to_string(),
            field: level.name(),
        };

        let next = match level {
            Level::Major => Self::new(self.major.checked_add(1).ok_or_else(overflow)?, 0, 0),
            Level::Minor => Self::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(overflow)?,
                0,
            ),
            Level::Patch => Self::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(overflow)?,
            ),
        };
        Ok(next)
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses a version string of exactly three dot-separated unsigned integers.
    ///
    /// # Errors
    ///
    /// - If the string does not have exactly three fields, returns a
    ///   [VersionError::WrongFieldCount].
    /// - If a field is not an unsigned integer, returns a [VersionError::InvalidField].
    fn from_str(version_str: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = version_str.split('.').collect();
        let [major, minor, patch] = fields.as_slice() else {
            return Err(VersionError::WrongFieldCount {
                version: version_str.to_owned(),
                count: fields.len(),
            });
        };

        let parse_field = |value: &str, field: &'static str| {
            value
                .parse::<u64>()
                .map_err(|source| VersionError::InvalidField {
                    version: version_str.to_owned(),
                    field,
                    source,
                })
        };

        Ok(Self::new(
            parse_field(*major, "major")?,
            parse_field(*minor, "minor")?,
            parse_field(*patch, "patch")?,
        ))
    }
}

/// Computes the version that follows `current` when bumped by the `bump_type` token.
///
/// The token is matched exactly against `major`, `minor`, and `patch`. What happens to any other
/// token depends on `strictness`: when [Strictness::Lenient], the parsed version is returned
/// unchanged (and a warning is logged); when [Strictness::Strict], it is an error.
///
/// # Example
///
/// ```
/// use appver::prelude::*;
///
/// let next = bump("1.2.3", "minor", Strictness::Lenient).unwrap();
/// assert_eq!("1.3.0", next.to_string());
///
/// let same = bump("1.2.3", "foo", Strictness::Lenient).unwrap();
/// assert_eq!("1.2.3", same.to_string());
///
/// assert!(bump("1.2.3", "foo", Strictness::Strict).is_err());
/// ```
///
/// # Errors
///
/// - Any error from parsing `current` (see [Version::from_str]).
/// - [VersionError::UnknownLevel] for an unrecognized token under [Strictness::Strict].
/// - [VersionError::Overflow] if the bumped field cannot be incremented.
pub fn bump(
    current: &str,
    bump_type: &str,
    strictness: Strictness,
) -> Result<Version, VersionError> {
    let version: Version = current.parse()?;

    let level = match bump_type.parse::<Level>() {
        Ok(level) => level,
        Err(err) => match strictness {
            Strictness::Strict => return Err(err),
            Strictness::Lenient => {
                warn!(bump_type, %version, "unrecognized bump type, leaving version unchanged");
                return Ok(version);
            }
        },
    };

    let next = version.next(level)?;
    debug!(%level, from = %version, to = %next, "bumped version");
    Ok(next)
}

use core::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::error::VersionError;

/// A level to bump in a version, like `major`, `minor`, or `patch`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Level {
    /// The major level. It is greater than the minor and patch levels.
    Major,
    /// The minor level. It is less than the major level and greater than the patch level.
    Minor,
    /// The patch level. It is less than the major and minor levels.
    Patch,
}

impl Level {
    /// All levels, from most to least significant.
    pub const ALL: [Level; 3] = [Level::Major, Level::Minor, Level::Patch];

    /// Returns the lowercase name of this level, which is also the token that parses to it.
    pub fn name(&self) -> &'static str {
        match self {
            Level::Major => "major",
            Level::Minor => "minor",
            Level::Patch => "patch",
        }
    }

    fn order_key(&self) -> u8 {
        match self {
            Level::Major => 0,
            Level::Minor => 1,
            Level::Patch => 2,
        }
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = VersionError;

    /// Parses a bump-type token. Matching is exact: `Minor` or ` minor` are not recognized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| VersionError::UnknownLevel {
                level: s.to_owned(),
            })
    }
}

impl PartialOrd for Level {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Level {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // reverse it so e.g. major > minor
        other.order_key().cmp(&self.order_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("major", Level::Major)]
    #[case("minor", Level::Minor)]
    #[case("patch", Level::Patch)]
    fn test_parse_ok(#[case] token: &str, #[case] expected: Level) {
        assert_eq!(Ok(expected), token.parse::<Level>());
        assert_eq!(token, expected.to_string());
    }

    #[rstest]
    #[case("foo")]
    #[case("")]
    #[case("Major")]
    #[case("PATCH")]
    #[case(" minor")]
    fn test_parse_unknown(#[case] token: &str) {
        assert_eq!(
            Err(VersionError::UnknownLevel {
                level: token.to_owned()
            }),
            token.parse::<Level>()
        );
    }

    #[test]
    fn test_ordering() {
        assert!(Level::Major > Level::Minor);
        assert!(Level::Minor > Level::Patch);
        assert!(Level::Major > Level::Patch);
    }
}

//! `vX.Y.Z` versions used in changelog file names and channel listings

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, VersionError};

/// A three-component release version.
///
/// Ordering is lexicographic over `(major, minor, patch)`. Pre-release and
/// build metadata are not part of the format: `v1.2.3-rc.1` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Patch version
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, with or without the leading `v`
    pub fn parse(input: &str) -> Result<Self> {
        let invalid = || VersionError::InvalidFormat(input.to_string());

        let digits = input.strip_prefix('v').unwrap_or(input);
        let parts: Vec<&str> = digits.split('.').collect();
        if parts.len() != 3 {
            return Err(invalid().into());
        }

        let mut numbers = [0u64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse::<u64>().map_err(|_| invalid())?;
        }

        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }

    /// Render without the `v` marker, e.g. `1.2.3`
    pub fn number(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// Render as a tag, e.g. `v1.2.3`
    pub fn tag(&self) -> String {
        format!("v{}", self.number())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = crate::error::RelnotesError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Compare two version strings.
///
/// Fails when either side is not a valid `vX.Y.Z` version.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering> {
    let a = Version::parse(a)?;
    let b = Version::parse(b)?;
    Ok(a.cmp(&b))
}

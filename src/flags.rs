//! Header fields and mirror targets, combinable with `|`.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Bitmask selecting which header fields render and which streams get a mirrored copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Flags(u32);

impl Flags {
    /// No header fields, no mirrors — only the level tag is rendered.
    pub const NONE: Self = Self(0);
    /// Local date: `2009-01-23`.
    pub const DATE: Self = Self(1 << 0);
    /// Local time with milliseconds: `01:23:23.456`.
    pub const TIME: Self = Self(1 << 1);
    /// Full caller path and line: `src/net/conn.rs:23`.
    pub const LONG_FILE: Self = Self(1 << 2);
    /// Final path element and line: `conn.rs:23`. Overrides `LONG_FILE`.
    pub const SHORT_FILE: Self = Self(1 << 3);
    /// Copy every line to standard error as well.
    pub const MIRROR_STDERR: Self = Self(1 << 4);
    /// Copy every line to standard output as well.
    pub const MIRROR_STDOUT: Self = Self(1 << 5);
    /// Initial value for new loggers.
    pub const STD: Self = Self(Self::DATE.0 | Self::TIME.0 | Self::SHORT_FILE.0);

    const NAMED: [(&'static str, Self); 6] = [
        ("date", Self::DATE),
        ("time", Self::TIME),
        ("longfile", Self::LONG_FILE),
        ("shortfile", Self::SHORT_FILE),
        ("mirror_stderr", Self::MIRROR_STDERR),
        ("mirror_stdout", Self::MIRROR_STDOUT),
    ];

    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Unknown bits are dropped.
    #[must_use]
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & 0b11_1111)
    }

    /// True if any bit of `other` is set in `self`.
    #[must_use]
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// True if every bit of `other` is set in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// `self` with every bit of `other` cleared.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Builds a mask from config-style names (`"date"`, `"shortfile"`, ...).
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlag`] for the first unknown name.
    pub fn from_names<I, S>(names: I) -> Result<Self, crate::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .try_fold(Self::NONE, |acc, name| Ok(acc | name.as_ref().parse::<Self>()?))
    }
}

impl BitOr for Flags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromStr for Flags {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        if wanted == "std" {
            return Ok(Self::STD);
        }
        Self::NAMED
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, flag)| *flag)
            .ok_or_else(|| crate::Error::InvalidFlag(s.to_string()))
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect();
        f.write_str(&names.join("|"))
    }
}

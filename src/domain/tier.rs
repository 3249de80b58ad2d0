use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::domain::error::Error;

/// The craft rank of a recipe.
///
/// Tiers are ordered from weakest to strongest, so they can be used directly
/// as a threshold: `tier >= Tier::Advanced`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// The lowest rank.
    #[default]
    Basic,
    /// Second rank.
    Advanced,
    /// Third rank.
    Expert,
    /// Fourth rank.
    Master,
    /// The highest rank.
    Mythic,
}

impl Tier {
    /// Every tier, weakest first.
    pub const ALL: [Self; 5] = [
        Self::Basic,
        Self::Advanced,
        Self::Expert,
        Self::Master,
        Self::Mythic,
    ];

    /// The 0-based rank of this tier (`Basic` is 0).
    #[must_use]
    pub const fn rank(self) -> usize {
        self as usize
    }

    /// The lowercase name of this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Master => "master",
            Self::Mythic => "mythic",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| Error::invalid(format!("unknown tier '{s}'")))
    }
}

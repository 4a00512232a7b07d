//! Progress record types.

use serde::{Deserialize, Serialize};

/// Maximum number of stars a level can award
pub const MAX_STARS: u8 = 3;

/// Best-ever result for one level, persisted under its level key
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Stars earned, 0..=3
    pub stars: u8,

    /// Experience points
    pub xp: u32,
}

impl Progress {
    /// Create a record, clamping stars into range
    pub fn new(stars: u8, xp: u32) -> Self {
        Self {
            stars: stars.min(MAX_STARS),
            xp,
        }
    }

    /// Keep the best of both records, field by field. Progress never
    /// downgrades: merging always yields values >= both inputs.
    pub fn merged(self, other: Progress) -> Progress {
        Progress {
            stars: self.stars.max(other.stars).min(MAX_STARS),
            xp: self.xp.max(other.xp),
        }
    }
}

//! Relation: the combined follow state between two accounts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Four-way classification of the `following` / `followed_by` flags.
///
/// Every combination of the two flags maps to exactly one variant and back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Both accounts follow each other.
    Mutual,
    /// The authenticated account follows the other, not followed back.
    Following,
    /// The other account follows the authenticated one, not followed back.
    FollowedBy,
    /// Neither account follows the other.
    Unrelated,
}

impl Relation {
    #[must_use]
    pub fn from_flags(following: bool, followed_by: bool) -> Self {
        match (following, followed_by) {
            (true, true) => Self::Mutual,
            (true, false) => Self::Following,
            (false, true) => Self::FollowedBy,
            (false, false) => Self::Unrelated,
        }
    }

    /// Whether the authenticated account follows the other account.
    #[must_use]
    pub fn is_following(self) -> bool {
        matches!(self, Self::Mutual | Self::Following)
    }

    /// Whether the other account follows the authenticated account.
    #[must_use]
    pub fn is_followed_by(self) -> bool {
        matches!(self, Self::Mutual | Self::FollowedBy)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mutual => "mutual",
            Self::Following => "following",
            Self::FollowedBy => "followed_by",
            Self::Unrelated => "unrelated",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

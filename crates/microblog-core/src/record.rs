//! Friendship record slot.
//!
//! Callers that hold a place for a friendship before the lookup has
//! completed use [`FriendshipRecord::Unpopulated`]. Reading from the
//! placeholder is a usage error and fails with
//! [`FriendshipError::NotPopulated`]; it is never papered over with
//! default values.

use crate::error::FriendshipError;
use crate::friendship::Friendship;

/// A friendship that may not have been populated yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum FriendshipRecord {
    #[default]
    Unpopulated,
    Populated(Friendship),
}

impl FriendshipRecord {
    #[must_use]
    pub fn is_populated(&self) -> bool {
        matches!(self, Self::Populated(_))
    }

    #[must_use]
    pub fn as_populated(&self) -> Option<&Friendship> {
        match self {
            Self::Populated(friendship) => Some(friendship),
            Self::Unpopulated => None,
        }
    }

    /// Take the populated friendship out of the record.
    ///
    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] on the placeholder.
    pub fn into_populated(self) -> Result<Friendship, FriendshipError> {
        match self {
            Self::Populated(friendship) => Ok(friendship),
            Self::Unpopulated => Err(FriendshipError::NotPopulated { field: "friendship" }),
        }
    }

    fn populated(&self, field: &'static str) -> Result<&Friendship, FriendshipError> {
        self.as_populated()
            .ok_or(FriendshipError::NotPopulated { field })
    }

    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] on the placeholder.
    pub fn get_id(&self) -> Result<i64, FriendshipError> {
        self.populated("id").map(Friendship::id)
    }

    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] on the placeholder.
    pub fn get_name(&self) -> Result<&str, FriendshipError> {
        self.populated("name").map(Friendship::name)
    }

    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] on the placeholder.
    pub fn get_screen_name(&self) -> Result<&str, FriendshipError> {
        self.populated("screen_name").map(Friendship::screen_name)
    }

    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] on the placeholder.
    pub fn is_followed_by(&self) -> Result<bool, FriendshipError> {
        self.populated("followed_by").map(Friendship::is_followed_by)
    }

    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] on the placeholder.
    pub fn is_following(&self) -> Result<bool, FriendshipError> {
        self.populated("following").map(Friendship::is_following)
    }
}

impl From<Friendship> for FriendshipRecord {
    fn from(friendship: Friendship) -> Self {
        Self::Populated(friendship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn populated_record_reads_every_field() {
        let record: FriendshipRecord = Friendship::new(42, "Ada", "ada", true, false)
            .unwrap()
            .into();

        assert!(record.is_populated());
        assert_eq!(record.get_id(), Ok(42));
        assert_eq!(record.get_name(), Ok("Ada"));
        assert_eq!(record.get_screen_name(), Ok("ada"));
        assert_eq!(record.is_followed_by(), Ok(true));
        assert_eq!(record.is_following(), Ok(false));
    }

    #[test]
    fn unpopulated_record_fails_every_accessor() {
        let record = FriendshipRecord::default();
        assert!(!record.is_populated());
        assert!(record.as_populated().is_none());

        let not_populated = |field| FriendshipError::NotPopulated { field };
        assert_eq!(record.get_id(), Err(not_populated("id")));
        assert_eq!(record.get_name(), Err(not_populated("name")));
        assert_eq!(record.get_screen_name(), Err(not_populated("screen_name")));
        assert_eq!(record.is_followed_by(), Err(not_populated("followed_by")));
        assert_eq!(record.is_following(), Err(not_populated("following")));
        assert_eq!(record.into_populated(), Err(not_populated("friendship")));
    }

    #[test]
    fn into_populated_returns_inner_value() {
        let friendship = Friendship::new(7, "Grace", "grace", false, true).unwrap();
        let record = FriendshipRecord::from(friendship.clone());
        assert_eq!(record.into_populated(), Ok(friendship));
    }
}

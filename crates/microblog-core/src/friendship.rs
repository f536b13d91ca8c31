//! Friendship: the follow state between the authenticated account and
//! one other account.
//!
//! A [`Friendship`] can only exist fully populated: it is produced by
//! [`Friendship::new`] or by validating a [`RawFriendship`], and has no
//! setters afterwards. A changed relationship is a new value.

use serde::{Deserialize, Serialize};

use crate::error::FriendshipError;
use crate::relation::Relation;

/// Relationship between the authenticated account and another account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFriendship")]
pub struct Friendship {
    id: i64,
    name: String,
    screen_name: String,
    followed_by: bool,
    following: bool,
}

impl Friendship {
    /// Build a friendship from all five attributes.
    ///
    /// # Errors
    ///
    /// Returns [`FriendshipError::InvalidId`] if `id` is negative.
    /// Returns [`FriendshipError::EmptyScreenName`] if `screen_name` is blank
    /// once a leading `@` is removed.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        screen_name: impl Into<String>,
        followed_by: bool,
        following: bool,
    ) -> Result<Self, FriendshipError> {
        if id < 0 {
            return Err(FriendshipError::InvalidId(id));
        }

        let mut screen_name = screen_name.into();
        if screen_name.starts_with('@') {
            screen_name.remove(0);
        }
        if screen_name.trim().is_empty() {
            return Err(FriendshipError::EmptyScreenName);
        }

        Ok(Self {
            id,
            name: name.into(),
            screen_name,
            followed_by,
            following,
        })
    }

    /// Identifier of the other account.
    #[must_use]
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name of the other account.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Handle of the other account, without the leading `@`.
    #[must_use]
    pub fn screen_name(&self) -> &str {
        &self.screen_name
    }

    /// True if the other account follows the authenticated account.
    #[must_use]
    pub fn is_followed_by(&self) -> bool {
        self.followed_by
    }

    /// True if the authenticated account follows the other account.
    #[must_use]
    pub fn is_following(&self) -> bool {
        self.following
    }

    #[must_use]
    pub fn relation(&self) -> Relation {
        Relation::from_flags(self.following, self.followed_by)
    }

    #[must_use]
    pub fn is_mutual(&self) -> bool {
        self.following && self.followed_by
    }

    /// The handle as written in a post, e.g. `@ada`.
    #[must_use]
    pub fn mention(&self) -> String {
        format!("@{}", self.screen_name)
    }

    /// Parse a friendship from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`MicroblogError::Serialization`](crate::MicroblogError::Serialization)
    /// if `json` is malformed, or [`MicroblogError::Friendship`](crate::MicroblogError::Friendship)
    /// if a field is missing or invalid.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let raw: RawFriendship = serde_json::from_str(json)?;
        Ok(raw.build()?)
    }

    /// # Errors
    ///
    /// Returns [`MicroblogError::Serialization`](crate::MicroblogError::Serialization)
    /// if serialization fails.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Friendship attributes before validation.
/// All fields are optional so the first missing one can be reported by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawFriendship {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub screen_name: Option<String>,
    pub followed_by: Option<bool>,
    pub following: Option<bool>,
}

impl RawFriendship {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_screen_name(mut self, screen_name: impl Into<String>) -> Self {
        self.screen_name = Some(screen_name.into());
        self
    }

    #[must_use]
    pub fn with_followed_by(mut self, followed_by: bool) -> Self {
        self.followed_by = Some(followed_by);
        self
    }

    #[must_use]
    pub fn with_following(mut self, following: bool) -> Self {
        self.following = Some(following);
        self
    }

    /// Validate the raw attributes and produce a [`Friendship`].
    ///
    /// Missing attributes are checked in declaration order, so the error
    /// always names the first one absent.
    ///
    /// # Errors
    ///
    /// Returns [`FriendshipError::NotPopulated`] if any attribute is `None`,
    /// otherwise the same errors as [`Friendship::new`].
    pub fn build(self) -> Result<Friendship, FriendshipError> {
        let result = self.validate();
        if let Err(err) = &result {
            tracing::debug!(error = %err, "rejected friendship input");
        }
        result
    }

    fn validate(self) -> Result<Friendship, FriendshipError> {
        let id = self.id.ok_or(FriendshipError::NotPopulated { field: "id" })?;
        let name = self
            .name
            .ok_or(FriendshipError::NotPopulated { field: "name" })?;
        let screen_name = self.screen_name.ok_or(FriendshipError::NotPopulated {
            field: "screen_name",
        })?;
        let followed_by = self.followed_by.ok_or(FriendshipError::NotPopulated {
            field: "followed_by",
        })?;
        let following = self.following.ok_or(FriendshipError::NotPopulated {
            field: "following",
        })?;

        Friendship::new(id, name, screen_name, followed_by, following)
    }
}

impl TryFrom<RawFriendship> for Friendship {
    type Error = FriendshipError;

    fn try_from(raw: RawFriendship) -> Result<Self, Self::Error> {
        raw.build()
    }
}

impl From<Friendship> for RawFriendship {
    fn from(friendship: Friendship) -> Self {
        Self {
            id: Some(friendship.id),
            name: Some(friendship.name),
            screen_name: Some(friendship.screen_name),
            followed_by: Some(friendship.followed_by),
            following: Some(friendship.following),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MicroblogError;

    fn ada() -> Friendship {
        Friendship::new(42, "Ada", "ada", true, false).unwrap()
    }

    #[test]
    fn accessors_return_supplied_values() {
        let f = ada();
        assert_eq!(f.id(), 42);
        assert_eq!(f.name(), "Ada");
        assert_eq!(f.screen_name(), "ada");
        assert!(f.is_followed_by());
        assert!(!f.is_following());
        assert_eq!(f.relation(), Relation::FollowedBy);
        assert!(!f.is_mutual());
        assert_eq!(f.mention(), "@ada");
    }

    #[test]
    fn new_rejects_negative_id() {
        let err = Friendship::new(-1, "Ada", "ada", false, false).unwrap_err();
        assert_eq!(err, FriendshipError::InvalidId(-1));
    }

    #[test]
    fn new_rejects_blank_screen_name() {
        for handle in ["", "   "] {
            let err = Friendship::new(1, "Ada", handle, false, false).unwrap_err();
            assert_eq!(err, FriendshipError::EmptyScreenName);
        }
    }

    #[test]
    fn leading_at_sign_is_not_part_of_the_handle() {
        let f = Friendship::new(1, "Ada", "@ada", false, false).unwrap();
        assert_eq!(f.screen_name(), "ada");
        assert_eq!(f.mention(), "@ada");
        assert_eq!(f, Friendship::new(1, "Ada", "ada", false, false).unwrap());

        let err = Friendship::new(1, "Ada", "@", false, false).unwrap_err();
        assert_eq!(err, FriendshipError::EmptyScreenName);
    }

    #[test]
    fn zero_id_and_empty_display_name_are_accepted() {
        let f = Friendship::new(0, "", "nobody", false, false).unwrap();
        assert_eq!(f.id(), 0);
        assert_eq!(f.name(), "");
    }

    #[test]
    fn raw_build_reports_first_missing_field() {
        let err = RawFriendship::new().build().unwrap_err();
        assert_eq!(err, FriendshipError::NotPopulated { field: "id" });

        let err = RawFriendship::new()
            .with_id(42)
            .with_name("Ada")
            .with_screen_name("ada")
            .with_following(true)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            FriendshipError::NotPopulated {
                field: "followed_by"
            }
        );
    }

    #[test]
    fn raw_build_accepts_complete_input() {
        let f = RawFriendship::new()
            .with_id(42)
            .with_name("Ada")
            .with_screen_name("ada")
            .with_followed_by(true)
            .with_following(false)
            .build()
            .unwrap();
        assert_eq!(f, ada());
    }

    #[test]
    fn raw_build_still_checks_invariants() {
        let err = RawFriendship::from(ada())
            .with_screen_name("")
            .build()
            .unwrap_err();
        assert_eq!(err, FriendshipError::EmptyScreenName);
    }

    #[test]
    fn friendship_serialization_roundtrip() {
        let f = ada();
        let json = serde_json::to_string(&f).expect("serialize");
        assert!(json.contains("\"screen_name\":\"ada\""));
        assert!(json.contains("\"followed_by\":true"));

        let back: Friendship = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(f, back);
    }

    #[test]
    fn json_helpers_separate_syntax_from_content_errors() {
        let f = Friendship::from_json(&ada().to_json().unwrap()).unwrap();
        assert_eq!(f, ada());

        let err = Friendship::from_json("{not json").unwrap_err();
        assert!(matches!(err, MicroblogError::Serialization(_)));

        let err = Friendship::from_json(r#"{"id": 42, "name": "Ada"}"#).unwrap_err();
        assert!(matches!(
            err,
            MicroblogError::Friendship(FriendshipError::NotPopulated {
                field: "screen_name"
            })
        ));
    }

    #[test]
    fn deserialization_rejects_incomplete_or_invalid_records() {
        let missing = r#"{"id": 42, "name": "Ada", "screen_name": "ada", "following": true}"#;
        let err = serde_json::from_str::<Friendship>(missing).unwrap_err();
        assert!(err.to_string().contains("followed_by"));

        let negative = r#"{"id": -3, "name": "Ada", "screen_name": "ada",
            "followed_by": false, "following": false}"#;
        assert!(serde_json::from_str::<Friendship>(negative).is_err());
    }
}

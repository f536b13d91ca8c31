//! # microblog-core
//!
//! Friendship value types for the microblog client library.
//!
//! This crate defines the relationship model between the authenticated
//! account and other accounts:
//! - [`Friendship`]: the immutable, fully populated relationship
//! - [`RawFriendship`]: pre-validation input, reports missing attributes
//! - [`FriendshipRecord`]: placeholder-or-populated slot
//! - [`Relation`]: four-way classification of the follow flags
//! - [`FriendshipLookup`]: results of one multi-account lookup
//! - Error hierarchy ([`MicroblogError`], [`FriendshipError`])

pub mod error;
pub mod friendship;
pub mod lookup;
pub mod record;
pub mod relation;

pub use error::{FriendshipError, MicroblogError, Result};
pub use friendship::{Friendship, RawFriendship};
pub use lookup::FriendshipLookup;
pub use record::FriendshipRecord;
pub use relation::Relation;

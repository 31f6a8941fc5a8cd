use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::SessionError;

/// One person being evaluated. Identity is immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    /// Stable identity, assigned at creation.
    pub id: String,
    /// Display name, unique (case-insensitive) within a roster.
    pub name: String,
    /// Optional image reference (URL or object key).
    pub avatar: Option<String>,
    /// When the friend was added.
    pub created_at: DateTime<Utc>,
}

impl Friend {
    /// Create a friend with a fresh id and no avatar.
    /// The name is trimmed; an empty name is rejected.
    pub fn new(name: &str) -> Result<Self, SessionError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            avatar: None,
            created_at: Utc::now(),
        })
    }

    /// Create a friend with an avatar reference.
    pub fn with_avatar(name: &str, avatar: &str) -> Result<Self, SessionError> {
        let mut friend = Self::new(name)?;
        friend.avatar = Some(avatar.to_string());
        Ok(friend)
    }
}

/// Insertion-ordered friend list enforcing case-insensitive name uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    friends: Vec<Friend>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a friend. Rejects names already present, ignoring case.
    pub fn add(&mut self, friend: Friend) -> Result<(), SessionError> {
        if self.contains_name(&friend.name) {
            return Err(SessionError::DuplicateFriend { name: friend.name });
        }
        self.friends.push(friend);
        Ok(())
    }

    /// Remove a friend by id. Returns the removed friend, if present.
    pub fn remove(&mut self, friend_id: &str) -> Option<Friend> {
        let pos = self.friends.iter().position(|f| f.id == friend_id)?;
        Some(self.friends.remove(pos))
    }

    pub fn get(&self, friend_id: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == friend_id)
    }

    /// Case-insensitive name lookup on the trimmed name.
    pub fn contains_name(&self, name: &str) -> bool {
        let needle = name.trim().to_lowercase();
        self.friends.iter().any(|f| f.name.to_lowercase() == needle)
    }

    /// Friends in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Friend> {
        self.friends.iter()
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}

impl FromIterator<Friend> for Roster {
    /// Collect friends, silently skipping case-insensitive duplicates.
    fn from_iter<I: IntoIterator<Item = Friend>>(iter: I) -> Self {
        let mut roster = Roster::new();
        for friend in iter {
            let _ = roster.add(friend);
        }
        roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_whitespace_names() {
        assert!(Friend::new("").is_err());
        assert!(Friend::new("   ").is_err());
    }

    #[test]
    fn trims_names_on_creation() {
        let friend = Friend::new("  Alice  ").unwrap();
        assert_eq!(friend.name, "Alice");
    }

    #[test]
    fn roster_rejects_case_insensitive_duplicates() {
        let mut roster = Roster::new();
        roster.add(Friend::new("Alice").unwrap()).unwrap();
        let err = roster.add(Friend::new("ALICE").unwrap());
        assert!(matches!(err, Err(SessionError::DuplicateFriend { .. })));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn roster_preserves_insertion_order() {
        let mut roster = Roster::new();
        for name in ["Carol", "Alice", "Bob"] {
            roster.add(Friend::new(name).unwrap()).unwrap();
        }
        let names: Vec<_> = roster.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn remove_by_id() {
        let mut roster = Roster::new();
        let friend = Friend::new("Alice").unwrap();
        let id = friend.id.clone();
        roster.add(friend).unwrap();
        assert!(roster.remove(&id).is_some());
        assert!(roster.is_empty());
        assert!(roster.remove(&id).is_none());
    }
}

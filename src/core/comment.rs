//! Comment entity
//!
//! Comments are append-only messages attached to a ticket, tagged with the
//! author type so the customer-comment gate can query for staff activity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::TicketId;

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(Uuid);

impl CommentId {
    /// Generate a new random comment ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity space and role of a comment's author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthorType {
    Admin,
    Agent,
    Customer,
}

impl AuthorType {
    /// Whether this author belongs to the support staff
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Agent)
    }
}

impl fmt::Display for AuthorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::Customer => "customer",
        };
        write!(f, "{s}")
    }
}

/// A message appended to a ticket's discussion thread
///
/// Comments are never edited or deleted. Display ordering is by
/// `created_at` ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier
    pub id: CommentId,
    /// The ticket this comment belongs to
    pub ticket_id: TicketId,
    /// Comment body
    pub message: String,
    /// Id of the authoring identity (user or customer, per `author_type`)
    pub author_id: String,
    /// Which identity space and role authored this comment
    pub author_type: AuthorType,
    /// When the comment was appended
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staff_classification() {
        assert!(AuthorType::Admin.is_staff());
        assert!(AuthorType::Agent.is_staff());
        assert!(!AuthorType::Customer.is_staff());
    }

    #[test]
    fn test_author_type_serialized_lowercase() {
        let yaml = serde_yaml::to_string(&AuthorType::Agent).unwrap();
        assert_eq!(yaml.trim(), "agent");
    }
}

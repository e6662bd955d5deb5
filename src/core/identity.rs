//! User and customer identities
//!
//! Users (support staff) and customers are distinct identity spaces: a
//! customer is never a user and cannot hold a staff role. Email uniqueness
//! is enforced per space at registration, not across spaces.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a staff user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Generate a new random user ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form
    pub fn parse_str(input: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(input).map(Self)
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a customer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(Uuid);

impl CustomerId {
    /// Generate a new random customer ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form
    pub fn parse_str(input: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(input).map(Self)
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Staff role, fixed at registration and never transitioned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Agent,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "agent" => Ok(Self::Agent),
            other => Err(format!("unknown role '{other}', expected admin or agent")),
        }
    }
}

/// A support staff member (admin or agent)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Unique among users
    pub email: String,
    /// bcrypt hash, never the plaintext password
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with the current timestamp
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, role: Role) -> Self {
        Self {
            id: UserId::new(),
            name,
            email,
            password_hash,
            role,
            created_at: Utc::now(),
        }
    }
}

/// A customer who files support requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    /// Unique among customers
    pub email: String,
    /// bcrypt hash, never the plaintext password
    pub password_hash: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    /// Create a new customer with the current timestamp
    #[must_use]
    pub fn new(name: String, email: String, password_hash: String, phone: String) -> Self {
        Self {
            id: CustomerId::new(),
            name,
            email,
            password_hash,
            phone,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("AGENT".parse::<Role>().unwrap(), Role::Agent);
        assert!("customer".parse::<Role>().is_err());
    }

    #[test]
    fn test_identity_spaces_have_distinct_id_types() {
        // UserId and CustomerId share a string form but not a type
        let user_id = UserId::new();
        let reparsed = CustomerId::parse_str(&user_id.to_string()).unwrap();
        assert_eq!(user_id.to_string(), reparsed.to_string());
    }
}

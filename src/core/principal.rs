//! The authenticated principal attached to an inbound action
//!
//! A principal is derived from a verified token and lives only for the
//! duration of one request. It is threaded explicitly through workflow
//! calls, never stored on shared mutable state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AuthorType, Role};

/// Role carried by a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrincipalRole {
    Admin,
    Agent,
    Customer,
}

impl PrincipalRole {
    /// Whether this principal belongs to the support staff
    #[must_use]
    pub const fn is_staff(self) -> bool {
        matches!(self, Self::Admin | Self::Agent)
    }

    /// The author type a comment by this principal is tagged with
    #[must_use]
    pub const fn author_type(self) -> AuthorType {
        match self {
            Self::Admin => AuthorType::Admin,
            Self::Agent => AuthorType::Agent,
            Self::Customer => AuthorType::Customer,
        }
    }
}

impl From<Role> for PrincipalRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Agent => Self::Agent,
        }
    }
}

impl fmt::Display for PrincipalRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Admin => "admin",
            Self::Agent => "agent",
            Self::Customer => "customer",
        };
        write!(f, "{s}")
    }
}

/// An authenticated identity, valid for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    /// Id of the underlying identity, in its string form
    pub id: String,
    /// Role claimed by the verified token
    pub role: PrincipalRole,
}

impl Principal {
    /// Build a principal from already-verified claims
    #[must_use]
    pub const fn new(id: String, role: PrincipalRole) -> Self {
        Self { id, role }
    }
}

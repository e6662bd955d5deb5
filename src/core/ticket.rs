//! Ticket entity and its lifecycle state
//!
//! A ticket is created open by a customer support request and transitions
//! one-way to closed; it is otherwise immutable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for a ticket
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generate a new random ticket ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an ID from its string form
    pub fn parse_str(input: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(input).map(Self)
    }
}

impl Default for TicketId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Support request topic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Account,
    Billing,
    Website,
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Account => "account",
            Self::Billing => "billing",
            Self::Website => "website",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "account" => Ok(Self::Account),
            "billing" => Ok(Self::Billing),
            "website" => Ok(Self::Website),
            other => Err(format!(
                "unknown topic '{other}', expected one of: account, billing, website"
            )),
        }
    }
}

/// A customer support request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier
    pub id: TicketId,
    /// What the request is about
    pub topic: Topic,
    /// Short subject line
    pub subject: String,
    /// Full request message
    pub message: String,
    /// The customer who filed the request; the ticket's exclusive owner
    pub requested_by: super::CustomerId,
    /// Whether the ticket has been closed
    pub is_closed: bool,
    /// When the ticket was filed
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_parsing() {
        assert_eq!("billing".parse::<Topic>().unwrap(), Topic::Billing);
        assert_eq!("Account".parse::<Topic>().unwrap(), Topic::Account);
        assert!("payroll".parse::<Topic>().is_err());
    }

    #[test]
    fn test_ticket_id_round_trip() {
        let id = TicketId::new();
        let parsed = TicketId::parse_str(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }
}

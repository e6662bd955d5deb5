//! helpdesk - a support ticketing backend
//!
//! Customers file support tickets, staff (admins and agents) respond via
//! comments, and ticket state and audit timestamps are tracked. The core
//! of the crate is the access-control and comment-visibility workflow:
//! who may act on a ticket and when.
//!
//! # Comment gating
//!
//! A customer may comment on a ticket only after a staff member has
//! commented on it at least once, and only on tickets they own. The gate
//! is re-derived from the comment store on every attempt, so concurrent
//! comment insertion never produces a stale "unlocked" state.
//!
//! # Example
//!
//! ```rust,ignore
//! use helpdesk::storage::FileStorage;
//! use helpdesk::workflow::{CommentWorkflow, TicketWorkflow};
//! use helpdesk::core::Topic;
//!
//! let storage = FileStorage::new(".helpdesk");
//! let tickets = TicketWorkflow::new(&storage);
//!
//! let ticket = tickets.create_ticket(
//!     "carol@example.com",
//!     Topic::Billing,
//!     "Double charge",
//!     "I was billed twice for March",
//! )?;
//!
//! let comments = CommentWorkflow::new(&storage);
//! // Denied until an agent has responded:
//! comments.can_customer_comment(&ticket.id, &customer)?;
//! ```

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod storage;
pub mod workflow;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};

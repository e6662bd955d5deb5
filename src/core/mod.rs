//! Core domain model for the helpdesk backend
//!
//! This module contains the persistent entities (tickets, comments, users,
//! customers), the ephemeral [`Principal`] derived from a verified token,
//! and the field validation applied at the boundary before any store write.

mod builders;
mod comment;
mod identity;
mod principal;
mod ticket;
mod validate;

pub use builders::{CommentBuilder, TicketBuilder};
pub use comment::{AuthorType, Comment, CommentId};
pub use identity::{Customer, CustomerId, Role, User, UserId};
pub use principal::{Principal, PrincipalRole};
pub use ticket::{Ticket, TicketId, Topic};
pub use validate::{validate_email, validate_length, validate_message, validate_subject};

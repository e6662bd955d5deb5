//! Business workflows over the stores
//!
//! Each workflow borrows a storage handle and exposes decision and
//! mutation operations returning classified results. The transport layer
//! (CLI handlers) stays thin and maps these results to output.

mod comments;
mod identity;
mod tickets;

pub use comments::CommentWorkflow;
pub use identity::IdentityWorkflow;
pub use tickets::{PreviousTicketStatus, TicketWorkflow};

//! Comment authorization workflow
//!
//! The central business rule: a customer may comment on a ticket only
//! after a staff member (admin or agent) has commented on it at least
//! once, and only on a ticket they own. Eligibility is re-derived from
//! the comment store on every attempt; no unlocked state is cached on the
//! ticket, so a staff comment committed before an attempt begins is
//! always observed.

use tracing::{debug, info};

use crate::core::{
    AuthorType, Comment, CommentBuilder, Customer, Principal, Ticket, TicketId, validate_message,
};
use crate::error::{HelpdeskError, Result};
use crate::storage::{CommentRepository, TicketRepository};

/// Decides and appends comments on tickets
pub struct CommentWorkflow<'a, S> {
    storage: &'a S,
}

impl<'a, S> CommentWorkflow<'a, S>
where
    S: TicketRepository + CommentRepository,
{
    /// Create a workflow over the given storage handle
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Decide whether a customer may comment on a ticket
    ///
    /// Checks, in order: the ticket exists, the customer owns it, and at
    /// least one staff comment already exists on it. Once a staff comment
    /// exists the gate stays open for the lifetime of the ticket; it never
    /// reverts to `AwaitingAgentResponse`.
    pub fn can_customer_comment(&self, ticket_id: &TicketId, customer: &Customer) -> Result<()> {
        let ticket = TicketRepository::load(self.storage, ticket_id)?;

        if ticket.requested_by != customer.id {
            debug!(ticket = %ticket_id, customer = %customer.id, "comment denied: not owner");
            return Err(HelpdeskError::NotTicketOwner);
        }

        if !self.storage.has_staff_comment(ticket_id)? {
            debug!(ticket = %ticket_id, "comment denied: no staff response yet");
            return Err(HelpdeskError::AwaitingAgentResponse);
        }

        Ok(())
    }

    /// Decide whether a staff principal may comment on a ticket
    ///
    /// Unconditionally allowed for any authenticated admin or agent; there
    /// is no ticket-state check, so closed tickets still accept staff
    /// comments. Customer principals are rejected.
    pub fn can_staff_comment(&self, _ticket_id: &TicketId, principal: &Principal) -> Result<()> {
        if !principal.role.is_staff() {
            return Err(HelpdeskError::Forbidden);
        }
        Ok(())
    }

    /// Append a customer comment, subject to the gating rule
    pub fn add_customer_comment(
        &self,
        ticket_id: &TicketId,
        customer: &Customer,
        message: &str,
    ) -> Result<Comment> {
        validate_message("message", message)?;
        self.can_customer_comment(ticket_id, customer)?;

        let comment = CommentBuilder::new()
            .ticket_id(ticket_id.clone())
            .message(message.trim())
            .author_id(customer.id.to_string())
            .author_type(AuthorType::Customer)
            .build();
        CommentRepository::save(self.storage, &comment)?;
        info!(ticket = %ticket_id, comment = %comment.id, "customer comment appended");
        Ok(comment)
    }

    /// Append a staff comment, tagged with the principal's role
    pub fn add_staff_comment(
        &self,
        ticket_id: &TicketId,
        principal: &Principal,
        message: &str,
    ) -> Result<Comment> {
        validate_message("message", message)?;
        self.can_staff_comment(ticket_id, principal)?;

        // Referential integrity: a comment must point at a stored ticket
        if !TicketRepository::exists(self.storage, ticket_id)? {
            return Err(HelpdeskError::TicketNotFound {
                id: ticket_id.to_string(),
            });
        }

        let comment = CommentBuilder::new()
            .ticket_id(ticket_id.clone())
            .message(message.trim())
            .author_id(principal.id.clone())
            .author_type(principal.role.author_type())
            .build();
        CommentRepository::save(self.storage, &comment)?;
        info!(
            ticket = %ticket_id,
            comment = %comment.id,
            author_type = %comment.author_type,
            "staff comment appended"
        );
        Ok(comment)
    }

    /// A ticket together with its comments in display order
    pub fn ticket_with_comments(&self, ticket_id: &TicketId) -> Result<(Ticket, Vec<Comment>)> {
        let ticket = TicketRepository::load(self.storage, ticket_id)?;
        let comments = self.storage.find_by_ticket(ticket_id)?;
        Ok((ticket, comments))
    }

    /// All comments in the system, each joined with its ticket
    pub fn list_comments(&self) -> Result<Vec<(Comment, Option<Ticket>)>> {
        let comments = CommentRepository::load_all(self.storage)?;
        let mut joined = Vec::with_capacity(comments.len());
        for comment in comments {
            let ticket = match TicketRepository::load(self.storage, &comment.ticket_id) {
                Ok(t) => Some(t),
                Err(HelpdeskError::TicketNotFound { .. }) => None,
                Err(e) => return Err(e),
            };
            joined.push((comment, ticket));
        }
        Ok(joined)
    }
}

//! Ticket lifecycle workflow
//!
//! Tickets are created open by a customer support request and closed via
//! an explicit field-set operation. The close operation accepts either
//! flag value; it is isolated behind [`TicketWorkflow::set_closed`] so a
//! one-way policy can be tightened later without touching callers.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use tracing::info;

use crate::core::{
    Customer, Ticket, TicketBuilder, TicketId, Topic, validate_email, validate_message,
    validate_subject,
};
use crate::error::{HelpdeskError, Result};
use crate::storage::{CustomerRepository, TicketRepository};

/// Status of a customer's second-most-recent ticket
#[derive(Debug, Clone, Serialize)]
pub struct PreviousTicketStatus {
    pub is_closed: bool,
    pub created_at: DateTime<Utc>,
}

/// Create, close, and query tickets
pub struct TicketWorkflow<'a, S> {
    storage: &'a S,
}

impl<'a, S> TicketWorkflow<'a, S>
where
    S: TicketRepository + CustomerRepository,
{
    /// Create a workflow over the given storage handle
    pub const fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    fn resolve_customer(&self, email: &str) -> Result<Customer> {
        CustomerRepository::find_by_email(self.storage, email)?.ok_or_else(|| {
            HelpdeskError::CustomerNotFound {
                reference: email.to_string(),
            }
        })
    }

    /// File a new support request for the customer matching `email`
    ///
    /// Validation runs before the customer lookup and any write; the
    /// ticket is created open.
    pub fn create_ticket(
        &self,
        email: &str,
        topic: Topic,
        subject: &str,
        message: &str,
    ) -> Result<Ticket> {
        validate_email("email", email)?;
        validate_subject("subject", subject)?;
        validate_message("message", message)?;

        let customer = self.resolve_customer(email)?;
        let ticket = TicketBuilder::new()
            .topic(topic)
            .subject(subject.trim())
            .message(message.trim())
            .requested_by(customer.id)
            .build();
        TicketRepository::save(self.storage, &ticket)?;
        info!(ticket = %ticket.id, topic = %ticket.topic, "ticket created");
        Ok(ticket)
    }

    /// Set the closed flag on a ticket
    ///
    /// A field-set, not a strict one-way transition: passing `false`
    /// reopens the ticket. Idempotent for repeated calls with the same
    /// value.
    pub fn set_closed(&self, ticket_id: &TicketId, is_closed: bool) -> Result<Ticket> {
        let ticket = TicketRepository::set_closed(self.storage, ticket_id, is_closed)?;
        info!(ticket = %ticket_id, is_closed, "ticket closed flag updated");
        Ok(ticket)
    }

    /// Look up a ticket by id
    pub fn get_ticket(&self, ticket_id: &TicketId) -> Result<Ticket> {
        TicketRepository::load(self.storage, ticket_id)
    }

    /// All tickets in the system
    pub fn list_tickets(&self) -> Result<Vec<Ticket>> {
        TicketRepository::load_all(self.storage)
    }

    /// Status of the customer's second-most-recent ticket
    ///
    /// Selects index 1 of the tickets sorted by creation time descending.
    /// Customers with fewer than two tickets get `InsufficientHistory`
    /// rather than an out-of-bounds access.
    pub fn previous_ticket_status(&self, email: &str) -> Result<PreviousTicketStatus> {
        let customer = self.resolve_customer(email)?;
        let tickets = TicketRepository::find_by_owner(self.storage, &customer.id)?;
        let previous = tickets.get(1).ok_or(HelpdeskError::InsufficientHistory)?;
        Ok(PreviousTicketStatus {
            is_closed: previous.is_closed,
            created_at: previous.created_at,
        })
    }

    /// Closed tickets filed within the last `days` days
    ///
    /// The window is `[now - days, now)`: a ticket filed exactly `days`
    /// days ago is included, one filed a day earlier is not.
    pub fn closed_within_window(&self, days: i64) -> Result<Vec<Ticket>> {
        let end = Utc::now();
        let start = end - Duration::days(days);
        self.storage.find_closed_in_range(start, end)
    }
}

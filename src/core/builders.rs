use super::{AuthorType, Comment, CommentId, CustomerId, Ticket, TicketId, Topic};
use chrono::{DateTime, Utc};

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    topic: Option<Topic>,
    subject: Option<String>,
    message: Option<String>,
    requested_by: Option<CustomerId>,
    is_closed: bool,
    created_at: Option<DateTime<Utc>>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the topic
    #[must_use]
    pub const fn topic(mut self, topic: Topic) -> Self {
        self.topic = Some(topic);
        self
    }

    /// Set the subject
    #[must_use]
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the message
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the owning customer
    #[must_use]
    pub fn requested_by(mut self, customer_id: CustomerId) -> Self {
        self.requested_by = Some(customer_id);
        self
    }

    /// Set the closed flag
    #[must_use]
    pub const fn closed(mut self, is_closed: bool) -> Self {
        self.is_closed = is_closed;
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the ticket
    #[must_use]
    pub fn build(self) -> Ticket {
        Ticket {
            id: self.id.unwrap_or_default(),
            topic: self.topic.unwrap_or(Topic::Account),
            subject: self.subject.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            requested_by: self.requested_by.unwrap_or_default(),
            is_closed: self.is_closed,
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

/// Builder for creating Comment instances
#[derive(Default)]
pub struct CommentBuilder {
    id: Option<CommentId>,
    ticket_id: Option<TicketId>,
    message: Option<String>,
    author_id: Option<String>,
    author_type: Option<AuthorType>,
    created_at: Option<DateTime<Utc>>,
}

impl CommentBuilder {
    /// Create a new comment builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the comment ID
    #[must_use]
    pub fn id(mut self, id: CommentId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the ticket this comment belongs to
    #[must_use]
    pub fn ticket_id(mut self, ticket_id: TicketId) -> Self {
        self.ticket_id = Some(ticket_id);
        self
    }

    /// Set the message
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the author id
    #[must_use]
    pub fn author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = Some(author_id.into());
        self
    }

    /// Set the author type
    #[must_use]
    pub const fn author_type(mut self, author_type: AuthorType) -> Self {
        self.author_type = Some(author_type);
        self
    }

    /// Set `created_at` timestamp
    #[must_use]
    pub const fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Build the comment
    #[must_use]
    pub fn build(self) -> Comment {
        Comment {
            id: self.id.unwrap_or_default(),
            ticket_id: self.ticket_id.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            author_id: self.author_id.unwrap_or_default(),
            author_type: self.author_type.unwrap_or(AuthorType::Customer),
            created_at: self.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_builder() {
        let owner = CustomerId::new();
        let ticket = TicketBuilder::new()
            .topic(Topic::Website)
            .subject("Site is down")
            .message("The dashboard has been unreachable since noon")
            .requested_by(owner.clone())
            .build();

        assert_eq!(ticket.topic, Topic::Website);
        assert_eq!(ticket.subject, "Site is down");
        assert_eq!(ticket.requested_by, owner);
        assert!(!ticket.is_closed);
    }

    #[test]
    fn test_ticket_builder_accepts_explicit_state() {
        let filed = Utc::now() - chrono::Duration::days(2);
        let ticket = TicketBuilder::new()
            .topic(Topic::Billing)
            .subject("Old refund request")
            .message("Backfilled from an earlier support channel")
            .created_at(filed)
            .closed(true)
            .build();

        assert_eq!(ticket.created_at, filed);
        assert!(ticket.is_closed);
    }

    #[test]
    fn test_comment_builder_defaults_to_customer() {
        let comment = CommentBuilder::new().message("thanks for the fix").build();
        assert_eq!(comment.author_type, AuthorType::Customer);
    }
}

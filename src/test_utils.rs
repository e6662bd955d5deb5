//! Test utilities
//!
//! Shared fixtures for workflow and storage tests: a temporary data
//! directory with initialized storage plus helpers for seeding
//! customers, tickets, and comments.

#![cfg(test)]

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use crate::core::{
    AuthorType, CommentBuilder, Customer, Principal, PrincipalRole, Ticket, TicketBuilder, Topic,
    UserId,
};
use crate::storage::FileStorage;

/// A temporary helpdesk environment backed by initialized file storage
pub struct TestEnv {
    pub temp_dir: TempDir,
    pub storage: FileStorage,
}

impl TestEnv {
    /// Create a fresh environment with an initialized data directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join(".helpdesk"));
        storage.init().expect("Failed to init storage");
        Self { temp_dir, storage }
    }

    /// Seed a customer with the given email
    pub fn create_customer(&self, email: &str) -> Customer {
        let customer = Customer::new(
            "Test Customer".to_string(),
            email.to_string(),
            "test-password-hash".to_string(),
            "08012345678".to_string(),
        );
        self.storage
            .save_customer(&customer)
            .expect("Failed to save customer");
        customer
    }

    /// Seed an open ticket owned by the customer
    pub fn create_ticket(&self, customer: &Customer) -> Ticket {
        self.create_ticket_at(customer, Utc::now())
    }

    /// Seed a ticket with a specific creation time
    pub fn create_ticket_at(&self, customer: &Customer, created_at: DateTime<Utc>) -> Ticket {
        let ticket = TicketBuilder::new()
            .topic(Topic::Account)
            .subject("Test support request")
            .message("Something is wrong with my account")
            .requested_by(customer.id.clone())
            .created_at(created_at)
            .build();
        self.storage
            .save_ticket(&ticket)
            .expect("Failed to save ticket");
        ticket
    }

    /// Append a staff comment directly to storage
    pub fn add_staff_comment(&self, ticket_id: &crate::core::TicketId, author_type: AuthorType) {
        assert!(author_type.is_staff(), "use a staff author type");
        let comment = CommentBuilder::new()
            .ticket_id(ticket_id.clone())
            .message("We are looking into this")
            .author_id(UserId::new().to_string())
            .author_type(author_type)
            .build();
        self.storage
            .save_comment(&comment)
            .expect("Failed to save comment");
    }

    /// Build a principal with a fresh id and the given role
    pub fn principal(&self, role: PrincipalRole) -> Principal {
        Principal::new(UserId::new().to_string(), role)
    }
}

//! File-backed document storage
//!
//! One YAML file per record, named by the record's id, grouped in a
//! subdirectory per entity. Writes go through a temp file followed by a
//! rename, so each document write is atomic; no operation here spans
//! multiple documents that must commit as a unit.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::{Comment, Customer, CustomerId, Ticket, TicketId, User, UserId};
use crate::error::{HelpdeskError, Result};

const USERS_DIR: &str = "users";
const CUSTOMERS_DIR: &str = "customers";
const TICKETS_DIR: &str = "tickets";
const COMMENTS_DIR: &str = "comments";

/// Storage for all helpdesk entities, rooted at a data directory
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    /// Create a storage handle rooted at the given directory
    ///
    /// The directory is not created here; call [`FileStorage::init`] once at
    /// setup time.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Create the data directory layout
    pub fn init(&self) -> Result<()> {
        for dir in [USERS_DIR, CUSTOMERS_DIR, TICKETS_DIR, COMMENTS_DIR] {
            fs::create_dir_all(self.base.join(dir))?;
        }
        debug!(path = %self.base.display(), "initialized storage directories");
        Ok(())
    }

    /// Whether the data directory layout exists
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.base.join(TICKETS_DIR).is_dir()
    }

    fn entity_dir(&self, dir: &str) -> Result<PathBuf> {
        let path = self.base.join(dir);
        if !path.is_dir() {
            return Err(HelpdeskError::NotInitialized);
        }
        Ok(path)
    }

    /// Serialize a document and atomically replace its file
    fn write_doc<T: Serialize>(&self, dir: &str, id: &str, value: &T) -> Result<()> {
        let dir = self.entity_dir(dir)?;
        let content = serde_yaml::to_string(value)?;
        let tmp = dir.join(format!(".{id}.tmp"));
        let target = dir.join(format!("{id}.yaml"));
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &target)?;
        Ok(())
    }

    fn read_doc<T: DeserializeOwned>(path: &Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Load every document in an entity directory
    fn read_all<T: DeserializeOwned>(&self, dir: &str) -> Result<Vec<T>> {
        let dir = self.entity_dir(dir)?;
        let mut docs = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                docs.push(Self::read_doc(&path)?);
            }
        }
        Ok(docs)
    }

    // --- users ---

    pub fn save_user(&self, user: &User) -> Result<()> {
        self.write_doc(USERS_DIR, &user.id.to_string(), user)
    }

    pub fn load_user(&self, id: &UserId) -> Result<User> {
        let path = self.entity_dir(USERS_DIR)?.join(format!("{id}.yaml"));
        if !path.exists() {
            return Err(HelpdeskError::UserNotFound { id: id.to_string() });
        }
        Self::read_doc(&path)
    }

    pub fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users: Vec<User> = self.read_all(USERS_DIR)?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    pub fn load_all_users(&self) -> Result<Vec<User>> {
        self.read_all(USERS_DIR)
    }

    // --- customers ---

    pub fn save_customer(&self, customer: &Customer) -> Result<()> {
        self.write_doc(CUSTOMERS_DIR, &customer.id.to_string(), customer)
    }

    pub fn load_customer(&self, id: &CustomerId) -> Result<Customer> {
        let path = self.entity_dir(CUSTOMERS_DIR)?.join(format!("{id}.yaml"));
        if !path.exists() {
            return Err(HelpdeskError::CustomerNotFound {
                reference: id.to_string(),
            });
        }
        Self::read_doc(&path)
    }

    pub fn find_customer_by_email(&self, email: &str) -> Result<Option<Customer>> {
        let customers: Vec<Customer> = self.read_all(CUSTOMERS_DIR)?;
        Ok(customers.into_iter().find(|c| c.email == email))
    }

    pub fn load_all_customers(&self) -> Result<Vec<Customer>> {
        self.read_all(CUSTOMERS_DIR)
    }

    // --- tickets ---

    pub fn save_ticket(&self, ticket: &Ticket) -> Result<()> {
        self.write_doc(TICKETS_DIR, &ticket.id.to_string(), ticket)
    }

    pub fn load_ticket(&self, id: &TicketId) -> Result<Ticket> {
        let path = self.entity_dir(TICKETS_DIR)?.join(format!("{id}.yaml"));
        if !path.exists() {
            return Err(HelpdeskError::TicketNotFound { id: id.to_string() });
        }
        Self::read_doc(&path)
    }

    pub fn ticket_exists(&self, id: &TicketId) -> Result<bool> {
        match self.load_ticket(id) {
            Ok(_) => Ok(true),
            Err(HelpdeskError::TicketNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn load_all_tickets(&self) -> Result<Vec<Ticket>> {
        self.read_all(TICKETS_DIR)
    }

    /// Tickets owned by a customer, newest first
    pub fn find_tickets_by_owner(&self, owner: &CustomerId) -> Result<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self.read_all(TICKETS_DIR)?;
        tickets.retain(|t| &t.requested_by == owner);
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(tickets)
    }

    /// Set the closed flag on a single ticket document
    pub fn set_ticket_closed(&self, id: &TicketId, is_closed: bool) -> Result<Ticket> {
        let mut ticket = self.load_ticket(id)?;
        ticket.is_closed = is_closed;
        self.save_ticket(&ticket)?;
        Ok(ticket)
    }

    /// Closed tickets filed within `start <= created_at < end`
    pub fn find_closed_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Ticket>> {
        let mut tickets: Vec<Ticket> = self.read_all(TICKETS_DIR)?;
        tickets.retain(|t| t.is_closed && t.created_at >= start && t.created_at < end);
        tickets.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tickets)
    }

    // --- comments ---

    pub fn save_comment(&self, comment: &Comment) -> Result<()> {
        self.write_doc(COMMENTS_DIR, &comment.id.to_string(), comment)
    }

    pub fn load_all_comments(&self) -> Result<Vec<Comment>> {
        self.read_all(COMMENTS_DIR)
    }

    /// Comments on a ticket, oldest first (display order)
    pub fn find_comments_by_ticket(&self, ticket_id: &TicketId) -> Result<Vec<Comment>> {
        let mut comments: Vec<Comment> = self.read_all(COMMENTS_DIR)?;
        comments.retain(|c| &c.ticket_id == ticket_id);
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(comments)
    }

    /// Whether any admin or agent comment exists on the ticket
    ///
    /// Always recomputed from the stored comments; no unlocked state is
    /// cached on the ticket.
    pub fn has_staff_comment(&self, ticket_id: &TicketId) -> Result<bool> {
        let comments: Vec<Comment> = self.read_all(COMMENTS_DIR)?;
        Ok(comments
            .iter()
            .any(|c| &c.ticket_id == ticket_id && c.author_type.is_staff()))
    }
}

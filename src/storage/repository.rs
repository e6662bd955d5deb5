use chrono::{DateTime, Utc};

use super::file::FileStorage;
use crate::core::{Comment, Customer, CustomerId, Ticket, TicketId, User, UserId};
use crate::error::Result;

/// Repository trait for staff user records
pub trait UserRepository: Send + Sync {
    /// Saves a user
    fn save(&self, user: &User) -> Result<()>;

    /// Loads a user by ID
    fn load(&self, id: &UserId) -> Result<User>;

    /// Finds a user by email, if one exists
    fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Loads all users
    fn load_all(&self) -> Result<Vec<User>>;
}

/// Repository trait for customer records
pub trait CustomerRepository: Send + Sync {
    /// Saves a customer
    fn save(&self, customer: &Customer) -> Result<()>;

    /// Loads a customer by ID
    fn load(&self, id: &CustomerId) -> Result<Customer>;

    /// Finds a customer by email, if one exists
    fn find_by_email(&self, email: &str) -> Result<Option<Customer>>;

    /// Loads all customers
    fn load_all(&self) -> Result<Vec<Customer>>;
}

/// Repository trait for ticket storage operations
pub trait TicketRepository: Send + Sync {
    /// Saves a ticket
    fn save(&self, ticket: &Ticket) -> Result<()>;

    /// Loads a ticket by ID
    fn load(&self, id: &TicketId) -> Result<Ticket>;

    /// Loads all tickets
    fn load_all(&self) -> Result<Vec<Ticket>>;

    /// Checks if a ticket exists by ID
    fn exists(&self, id: &TicketId) -> Result<bool>;

    /// Tickets owned by a customer, sorted by creation time descending
    fn find_by_owner(&self, owner: &CustomerId) -> Result<Vec<Ticket>>;

    /// Sets the closed flag and returns the updated ticket
    fn set_closed(&self, id: &TicketId, is_closed: bool) -> Result<Ticket>;

    /// Closed tickets with `start <= created_at < end`
    fn find_closed_in_range(&self, start: DateTime<Utc>, end: DateTime<Utc>)
    -> Result<Vec<Ticket>>;
}

/// Repository trait for append-only comment storage
pub trait CommentRepository: Send + Sync {
    /// Appends a comment
    fn save(&self, comment: &Comment) -> Result<()>;

    /// Comments on a ticket, sorted by creation time ascending
    fn find_by_ticket(&self, ticket_id: &TicketId) -> Result<Vec<Comment>>;

    /// Whether any staff (admin or agent) comment exists on the ticket
    fn has_staff_comment(&self, ticket_id: &TicketId) -> Result<bool>;

    /// Loads all comments
    fn load_all(&self) -> Result<Vec<Comment>>;
}

impl UserRepository for FileStorage {
    fn save(&self, user: &User) -> Result<()> {
        self.save_user(user)
    }

    fn load(&self, id: &UserId) -> Result<User> {
        self.load_user(id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_user_by_email(email)
    }

    fn load_all(&self) -> Result<Vec<User>> {
        self.load_all_users()
    }
}

impl CustomerRepository for FileStorage {
    fn save(&self, customer: &Customer) -> Result<()> {
        self.save_customer(customer)
    }

    fn load(&self, id: &CustomerId) -> Result<Customer> {
        self.load_customer(id)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>> {
        self.find_customer_by_email(email)
    }

    fn load_all(&self) -> Result<Vec<Customer>> {
        self.load_all_customers()
    }
}

impl TicketRepository for FileStorage {
    fn save(&self, ticket: &Ticket) -> Result<()> {
        self.save_ticket(ticket)
    }

    fn load(&self, id: &TicketId) -> Result<Ticket> {
        self.load_ticket(id)
    }

    fn load_all(&self) -> Result<Vec<Ticket>> {
        self.load_all_tickets()
    }

    fn exists(&self, id: &TicketId) -> Result<bool> {
        self.ticket_exists(id)
    }

    fn find_by_owner(&self, owner: &CustomerId) -> Result<Vec<Ticket>> {
        self.find_tickets_by_owner(owner)
    }

    fn set_closed(&self, id: &TicketId, is_closed: bool) -> Result<Ticket> {
        self.set_ticket_closed(id, is_closed)
    }

    fn find_closed_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Ticket>> {
        self.find_closed_in_range(start, end)
    }
}

impl CommentRepository for FileStorage {
    fn save(&self, comment: &Comment) -> Result<()> {
        self.save_comment(comment)
    }

    fn find_by_ticket(&self, ticket_id: &TicketId) -> Result<Vec<Comment>> {
        self.find_comments_by_ticket(ticket_id)
    }

    fn has_staff_comment(&self, ticket_id: &TicketId) -> Result<bool> {
        self.has_staff_comment(ticket_id)
    }

    fn load_all(&self) -> Result<Vec<Comment>> {
        self.load_all_comments()
    }
}

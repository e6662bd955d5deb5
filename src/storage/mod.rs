//! Persistence layer
//!
//! Stores are constructed explicitly with a data directory handle and
//! passed by reference to workflow components; there is no ambient global
//! registry. Each record is one YAML document, written atomically.

mod file;
mod repository;

pub use file::FileStorage;
pub use repository::{
    CommentRepository, CustomerRepository, TicketRepository, UserRepository,
};

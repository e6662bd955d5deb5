//! Authentication and authorization
//!
//! Token verification produces a [`crate::core::Principal`]; access control
//! is a pure decision over that already-verified principal. Password
//! hashing wraps bcrypt.

mod access;
mod password;
mod token;

pub use access::{authorize, require_authenticated};
pub use password::{hash_password, verify_password};
pub use token::TokenService;

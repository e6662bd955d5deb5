//! Error types for the helpdesk backend
//!
//! Every operation returns a [`Result`] carrying a classified
//! [`HelpdeskError`]; no failure is suppressed or reported generically.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// All failure kinds produced by the helpdesk core
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// A request field failed validation before any store write
    #[error("validation failed for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// No valid principal was presented (missing, invalid, or expired token)
    #[error("access denied: no valid authentication provided")]
    Unauthenticated,

    /// The authenticated principal lacks the required role
    #[error("access denied: not sufficient authorization")]
    Forbidden,

    /// No user matches the given reference
    #[error("user not found: {id}")]
    UserNotFound { id: String },

    /// No customer matches the given reference
    #[error("customer not found: {reference}")]
    CustomerNotFound { reference: String },

    /// No ticket matches the given id
    #[error("ticket not found: {id}")]
    TicketNotFound { id: String },

    /// A customer attempted to act on a ticket they do not own
    #[error("you are not allowed to comment on this ticket")]
    NotTicketOwner,

    /// Customer comments are gated on a prior staff comment
    #[error("you can't comment on this ticket for now")]
    AwaitingAgentResponse,

    /// The email already exists in the same identity space
    #[error("email already exists: {email}")]
    DuplicateEmail { email: String },

    /// Login credentials did not match
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Fewer than two tickets exist for the customer
    #[error("not enough ticket history for this customer")]
    InsufficientHistory,

    /// Underlying persistence failure, surfaced unchanged
    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored document could not be read or written
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Token could not be issued
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing failure
    #[error("password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// The data directory has not been initialized
    #[error("helpdesk data directory not initialized")]
    NotInitialized,

    /// Catch-all for transport-level problems
    #[error("{0}")]
    Custom(String),
}

impl HelpdeskError {
    /// Create a custom error from any displayable value
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    /// User-facing message for CLI display
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(e) => format!("Storage operation failed: {e}"),
            Self::Serialization(e) => format!("Could not read stored data: {e}"),
            Self::NotInitialized => {
                "No helpdesk data directory found. Run 'helpdesk init' first.".to_string()
            },
            other => other.to_string(),
        }
    }

    /// Suggestions to display alongside the error, when any apply
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Unauthenticated => vec![
                "Provide a token with --token".to_string(),
                "Obtain a token with 'helpdesk user login'".to_string(),
            ],
            Self::AwaitingAgentResponse => {
                vec!["Wait for a support agent to respond to the ticket first".to_string()]
            },
            Self::NotInitialized => vec!["Run 'helpdesk init' to set up the data directory".to_string()],
            Self::InsufficientHistory => {
                vec!["The customer needs at least two tickets for a previous-status lookup".to_string()]
            },
            _ => Vec::new(),
        }
    }

    /// Whether the caller can retry after fixing the input
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialization(_) | Self::Config(_))
    }
}

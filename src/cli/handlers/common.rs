use std::path::PathBuf;

use crate::config::Config;
use crate::core::TicketId;
use crate::error::{HelpdeskError, Result};
use crate::storage::FileStorage;

/// Common context for all handler operations
pub struct HandlerContext {
    pub storage: FileStorage,
    pub config: Config,
}

impl HandlerContext {
    /// Create a handler context rooted at the project directory
    ///
    /// Fails with `NotInitialized` when the data directory does not exist;
    /// only the init handler builds its storage without this check.
    pub fn new(project_dir: Option<&str>) -> Result<Self> {
        let config = Config::load_or_default()?;
        let storage = FileStorage::new(Self::data_dir(project_dir, &config));
        if !storage.is_initialized() {
            return Err(HelpdeskError::NotInitialized);
        }
        Ok(Self { storage, config })
    }

    /// Resolve the data directory from the CLI flag and config
    pub fn data_dir(project_dir: Option<&str>, config: &Config) -> PathBuf {
        match project_dir {
            Some(dir) => PathBuf::from(dir).join(&config.data_dir),
            None => config.data_dir.clone(),
        }
    }
}

/// Parse a ticket reference from its CLI string form
pub fn parse_ticket_id(ticket_ref: &str) -> Result<TicketId> {
    TicketId::parse_str(ticket_ref)
        .map_err(|_| HelpdeskError::custom(format!("Invalid ticket ID: {ticket_ref}")))
}

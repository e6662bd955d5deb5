//! Init command handler

use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::config::Config;
use crate::error::Result;
use crate::storage::FileStorage;

/// Create the data directory layout
pub fn handle_init(project_dir: Option<&str>, formatter: &OutputFormatter) -> Result<()> {
    let config = Config::load_or_default()?;
    let data_dir = HandlerContext::data_dir(project_dir, &config);
    let storage = FileStorage::new(&data_dir);
    storage.init()?;

    formatter.success(&format!(
        "Initialized helpdesk data directory at {}",
        data_dir.display()
    ));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "status": "ok",
            "data_dir": data_dir,
        }))?;
    }
    Ok(())
}

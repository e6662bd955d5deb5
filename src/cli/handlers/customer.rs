//! Customer command handlers

use crate::auth::authorize;
use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::{Principal, Role};
use crate::error::Result;
use crate::workflow::IdentityWorkflow;

/// Register a new customer (admin only)
pub fn handle_customer_register(
    name: &str,
    email: &str,
    password: &str,
    phone: &str,
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    authorize(principal, Role::Admin)?;

    let customer =
        IdentityWorkflow::new(&ctx.storage).register_customer(name, email, password, phone)?;

    formatter.success(&format!("Registered customer '{}' ({})", customer.name, customer.id));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": customer.id.to_string(),
            "name": customer.name,
            "created_at": customer.created_at,
        }))?;
    }
    Ok(())
}

/// List customers (admin only)
pub fn handle_customer_list(
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    authorize(principal, Role::Admin)?;

    let customers = IdentityWorkflow::new(&ctx.storage).list_customers()?;
    for customer in &customers {
        formatter.info(&format!(
            "{}  {}  {}  {}",
            customer.id, customer.name, customer.email, customer.phone
        ));
    }
    if formatter.is_json() {
        let rows: Vec<_> = customers
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id.to_string(),
                    "name": c.name,
                    "email": c.email,
                    "phone": c.phone,
                    "created_at": c.created_at,
                })
            })
            .collect();
        formatter.json(&rows)?;
    }
    Ok(())
}

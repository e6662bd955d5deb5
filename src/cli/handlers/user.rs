//! Staff user command handlers

use crate::auth::{TokenService, authorize, require_authenticated};
use crate::cli::OutputFormatter;
use crate::cli::handlers::common::HandlerContext;
use crate::core::{Principal, Role, UserId};
use crate::error::{HelpdeskError, Result};
use crate::workflow::IdentityWorkflow;

/// Register a new staff user (admin only)
pub fn handle_user_register(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;

    // First-run bootstrap: a fresh system has no admin to authorize the
    // first registration, so an empty user store skips the gate.
    if !ctx.storage.load_all_users()?.is_empty() {
        authorize(principal, Role::Admin)?;
    }

    let role: Role = role
        .parse()
        .map_err(|reason| HelpdeskError::Validation {
            field: "role".to_string(),
            reason,
        })?;
    let user = IdentityWorkflow::new(&ctx.storage).register_user(name, email, password, role)?;

    formatter.success(&format!("Registered {} '{}' ({})", user.role, user.name, user.id));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": user.id.to_string(),
            "name": user.name,
            "role": user.role,
            "created_at": user.created_at,
        }))?;
    }
    Ok(())
}

/// Log in and print a token
pub fn handle_user_login(
    email: &str,
    password: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let user = IdentityWorkflow::new(&ctx.storage).login(email, password)?;
    let token = TokenService::new(
        &ctx.config.auth.token_secret,
        ctx.config.auth.token_expiry_hours,
    )
    .issue(&user)?;

    formatter.success(&format!("Logged in as {} ({})", user.name, user.role));
    formatter.info(&token);
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "token": token,
            "id": user.id.to_string(),
            "role": user.role,
        }))?;
    }
    Ok(())
}

/// List staff users (admin only)
pub fn handle_user_list(
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    authorize(principal, Role::Admin)?;

    let users = IdentityWorkflow::new(&ctx.storage).list_users()?;
    for user in &users {
        formatter.info(&format!("{}  {}  {}  {}", user.id, user.role, user.name, user.email));
    }
    if formatter.is_json() {
        let rows: Vec<_> = users
            .iter()
            .map(|u| {
                serde_json::json!({
                    "id": u.id.to_string(),
                    "name": u.name,
                    "email": u.email,
                    "role": u.role,
                    "created_at": u.created_at,
                })
            })
            .collect();
        formatter.json(&rows)?;
    }
    Ok(())
}

/// Show the authenticated user
pub fn handle_user_me(
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let principal = require_authenticated(principal)?;

    let id = UserId::parse_str(&principal.id)
        .map_err(|_| HelpdeskError::UserNotFound {
            id: principal.id.clone(),
        })?;
    let user = ctx.storage.load_user(&id)?;

    formatter.info(&format!("{}  {}  {}  {}", user.id, user.role, user.name, user.email));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": user.id.to_string(),
            "name": user.name,
            "email": user.email,
            "role": user.role,
            "created_at": user.created_at,
        }))?;
    }
    Ok(())
}

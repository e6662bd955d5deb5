//! Comment command handlers

use crate::auth::{authorize, require_authenticated};
use crate::cli::OutputFormatter;
use crate::cli::handlers::common::{HandlerContext, parse_ticket_id};
use crate::core::{Principal, Role};
use crate::error::Result;
use crate::workflow::{CommentWorkflow, IdentityWorkflow};

/// Comment on a ticket as an authenticated staff member
pub fn handle_comment_staff(
    ticket_ref: &str,
    message: &str,
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let principal = require_authenticated(principal)?;

    let ticket_id = parse_ticket_id(ticket_ref)?;
    let comment =
        CommentWorkflow::new(&ctx.storage).add_staff_comment(&ticket_id, principal, message)?;

    formatter.success(&format!("Added {} comment {}", comment.author_type, comment.id));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": comment.id.to_string(),
            "ticket_id": comment.ticket_id.to_string(),
            "author_type": comment.author_type,
            "created_at": comment.created_at,
        }))?;
    }
    Ok(())
}

/// Comment on a ticket as a customer, gated on a prior staff comment
pub fn handle_comment_customer(
    ticket_ref: &str,
    email: &str,
    message: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let customer = IdentityWorkflow::new(&ctx.storage).find_customer_by_email(email)?;

    let ticket_id = parse_ticket_id(ticket_ref)?;
    let comment =
        CommentWorkflow::new(&ctx.storage).add_customer_comment(&ticket_id, &customer, message)?;

    formatter.success(&format!("Added customer comment {}", comment.id));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": comment.id.to_string(),
            "ticket_id": comment.ticket_id.to_string(),
            "author_type": comment.author_type,
            "created_at": comment.created_at,
        }))?;
    }
    Ok(())
}

/// List all comments joined with their tickets (admin only)
pub fn handle_comment_list(
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    authorize(principal, Role::Admin)?;

    let joined = CommentWorkflow::new(&ctx.storage).list_comments()?;
    for (comment, ticket) in &joined {
        let subject = ticket
            .as_ref()
            .map_or("<missing ticket>", |t| t.subject.as_str());
        formatter.info(&format!(
            "{}  [{}]  on '{}': {}",
            comment.id, comment.author_type, subject, comment.message
        ));
    }
    if formatter.is_json() {
        let rows: Vec<_> = joined
            .iter()
            .map(|(c, t)| {
                serde_json::json!({
                    "id": c.id.to_string(),
                    "ticket_id": c.ticket_id.to_string(),
                    "ticket_subject": t.as_ref().map(|t| t.subject.clone()),
                    "author_type": c.author_type,
                    "message": c.message,
                    "created_at": c.created_at,
                })
            })
            .collect();
        formatter.json(&rows)?;
    }
    Ok(())
}

//! Ticket command handlers

use crate::auth::require_authenticated;
use crate::cli::OutputFormatter;
use crate::cli::handlers::common::{HandlerContext, parse_ticket_id};
use crate::core::{Principal, Ticket, Topic};
use crate::error::{HelpdeskError, Result};
use crate::workflow::{CommentWorkflow, TicketWorkflow};

fn ticket_line(ticket: &Ticket) -> String {
    let state = if ticket.is_closed { "closed" } else { "open" };
    format!(
        "{}  [{}]  {}  {}  ({})",
        ticket.id,
        ticket.topic,
        state,
        ticket.subject,
        ticket.created_at.format("%Y-%m-%d %H:%M")
    )
}

fn ticket_json(ticket: &Ticket) -> serde_json::Value {
    serde_json::json!({
        "id": ticket.id.to_string(),
        "topic": ticket.topic,
        "subject": ticket.subject,
        "message": ticket.message,
        "requested_by": ticket.requested_by.to_string(),
        "is_closed": ticket.is_closed,
        "created_at": ticket.created_at,
    })
}

/// File a support request as a customer (no token required)
pub fn handle_ticket_create(
    email: &str,
    topic: &str,
    subject: &str,
    message: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let topic: Topic = topic
        .parse()
        .map_err(|reason| HelpdeskError::Validation {
            field: "topic".to_string(),
            reason,
        })?;

    let ticket = TicketWorkflow::new(&ctx.storage).create_ticket(email, topic, subject, message)?;

    formatter.success(&format!("Created ticket {}", ticket.id));
    if formatter.is_json() {
        formatter.json(&serde_json::json!({
            "id": ticket.id.to_string(),
            "created_at": ticket.created_at,
        }))?;
    }
    Ok(())
}

/// Show a ticket together with its comment thread
pub fn handle_ticket_show(
    ticket_ref: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let ticket_id = parse_ticket_id(ticket_ref)?;

    let (ticket, comments) = CommentWorkflow::new(&ctx.storage).ticket_with_comments(&ticket_id)?;

    formatter.info(&ticket_line(&ticket));
    formatter.info(&ticket.message);
    for comment in &comments {
        formatter.info(&format!(
            "  [{}] {}  {}",
            comment.author_type,
            comment.created_at.format("%Y-%m-%d %H:%M"),
            comment.message
        ));
    }
    if formatter.is_json() {
        let comment_rows: Vec<_> = comments
            .iter()
            .map(|c| {
                serde_json::json!({
                    "id": c.id.to_string(),
                    "author_type": c.author_type,
                    "message": c.message,
                    "created_at": c.created_at,
                })
            })
            .collect();
        formatter.json(&serde_json::json!({
            "ticket": ticket_json(&ticket),
            "comments": comment_rows,
        }))?;
    }
    Ok(())
}

/// List all tickets (staff)
pub fn handle_ticket_list(
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    require_authenticated(principal)?;

    let tickets = TicketWorkflow::new(&ctx.storage).list_tickets()?;
    for ticket in &tickets {
        formatter.info(&ticket_line(ticket));
    }
    if formatter.is_json() {
        let rows: Vec<_> = tickets.iter().map(ticket_json).collect();
        formatter.json(&rows)?;
    }
    Ok(())
}

/// Set the closed flag on a ticket (staff)
pub fn handle_ticket_close(
    ticket_ref: &str,
    reopen: bool,
    principal: Option<&Principal>,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    require_authenticated(principal)?;

    let ticket_id = parse_ticket_id(ticket_ref)?;
    let ticket = TicketWorkflow::new(&ctx.storage).set_closed(&ticket_id, !reopen)?;

    let verb = if ticket.is_closed { "Closed" } else { "Reopened" };
    formatter.success(&format!("{verb} ticket {}", ticket.id));
    if formatter.is_json() {
        formatter.json(&ticket_json(&ticket))?;
    }
    Ok(())
}

/// Status of a customer's second-most-recent ticket (no token required)
pub fn handle_ticket_previous(
    email: &str,
    project_dir: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    let ctx = HandlerContext::new(project_dir)?;
    let status = TicketWorkflow::new(&ctx.storage).previous_ticket_status(email)?;

    let state = if status.is_closed { "closed" } else { "open" };
    formatter.info(&format!(
        "Previous ticket: {} (filed {})",
        state,
        status.created_at.format("%Y-%m-%d %H:%M")
    ));
    if formatter.is_json() {
        formatter.json(&status)?;
    }
    Ok(())
}

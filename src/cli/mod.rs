//! Command-line interface
//!
//! The CLI is a thin transport over the workflows: it parses arguments,
//! resolves the principal from a token when one is supplied, invokes a
//! single workflow operation, and formats the result.

pub mod handlers;
mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};

/// Helpdesk ticketing backend
#[derive(Parser)]
#[command(name = "helpdesk", version, about)]
pub struct Cli {
    /// Data directory root (defaults to the configured location)
    #[arg(long, global = true)]
    pub project: Option<String>,

    /// Authentication token for staff operations
    #[arg(long, global = true, env = "HELPDESK_TOKEN")]
    pub token: Option<String>,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data directory
    Init,
    /// Staff user operations
    User {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Customer operations
    Customer {
        #[command(subcommand)]
        command: CustomerCommands,
    },
    /// Ticket operations
    Ticket {
        #[command(subcommand)]
        command: TicketCommands,
    },
    /// Comment operations
    Comment {
        #[command(subcommand)]
        command: CommentCommands,
    },
    /// Reporting
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a staff user (admin only)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// admin or agent
        #[arg(long)]
        role: String,
    },
    /// Log in and print a token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// List staff users (admin only)
    List,
    /// Show the authenticated user
    Me,
}

#[derive(Subcommand)]
pub enum CustomerCommands {
    /// Register a customer (admin only)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        phone: String,
    },
    /// List customers (admin only)
    List,
}

#[derive(Subcommand)]
pub enum TicketCommands {
    /// File a support request as a customer
    Create {
        /// Customer email
        #[arg(long)]
        email: String,
        /// account, billing, or website
        #[arg(long)]
        topic: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Show a ticket with its comments
    Show {
        /// Ticket id
        ticket: String,
    },
    /// List all tickets (staff)
    List,
    /// Set a ticket's closed flag (staff)
    Close {
        /// Ticket id
        ticket: String,
        /// Reopen instead of closing
        #[arg(long)]
        reopen: bool,
    },
    /// Status of a customer's second-most-recent ticket
    Previous {
        /// Customer email
        #[arg(long)]
        email: String,
    },
}

#[derive(Subcommand)]
pub enum CommentCommands {
    /// Comment as an authenticated staff member
    Staff {
        /// Ticket id
        ticket: String,
        #[arg(long)]
        message: String,
    },
    /// Comment as a customer, gated on a prior staff comment
    Customer {
        /// Ticket id
        ticket: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        message: String,
    },
    /// List all comments with their tickets (admin only)
    List,
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Export closed tickets from the last N days as CSV
    Closed {
        /// Window size in days
        #[arg(long, default_value_t = 30)]
        days: i64,
        /// Write the CSV to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },
}

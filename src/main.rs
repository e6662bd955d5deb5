//! helpdesk - support ticketing backend CLI
//!
//! Parses command-line arguments, resolves the principal from the token
//! when one is supplied, and dispatches to the command handlers. All
//! business rules live in the workflow layer.

use clap::Parser;
use std::process;

use helpdesk::auth::TokenService;
use helpdesk::cli::{
    Cli, Commands, CommentCommands, CustomerCommands, OutputFormatter, ReportCommands,
    TicketCommands, UserCommands, handlers,
};
use helpdesk::config::Config;
use helpdesk::core::Principal;
use helpdesk::error::Result;

fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, &formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: &OutputFormatter) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    // Resolve the principal once; handlers receive it explicitly. A
    // missing token is an absent principal, not an error: customer
    // routes are tokenless.
    let principal = resolve_principal(cli.token.as_deref())?;

    dispatch_command(cli.command, principal.as_ref(), cli.project.as_deref(), formatter)
}

/// Verify the supplied token, if any, into a principal
fn resolve_principal(token: Option<&str>) -> Result<Option<Principal>> {
    let Some(token) = token else {
        return Ok(None);
    };
    let config = Config::load_or_default()?;
    let service = TokenService::new(&config.auth.token_secret, config.auth.token_expiry_hours);
    Ok(Some(service.verify(token)?))
}

fn dispatch_command(
    command: Commands,
    principal: Option<&Principal>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        Commands::Init => handlers::handle_init(project, formatter),
        Commands::User { command } => dispatch_user_command(command, principal, project, formatter),
        Commands::Customer { command } => {
            dispatch_customer_command(command, principal, project, formatter)
        },
        Commands::Ticket { command } => {
            dispatch_ticket_command(command, principal, project, formatter)
        },
        Commands::Comment { command } => {
            dispatch_comment_command(command, principal, project, formatter)
        },
        Commands::Report { command } => {
            dispatch_report_command(command, principal, project, formatter)
        },
    }
}

fn dispatch_user_command(
    command: UserCommands,
    principal: Option<&Principal>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        UserCommands::Register {
            name,
            email,
            password,
            role,
        } => handlers::handle_user_register(
            &name, &email, &password, &role, principal, project, formatter,
        ),
        UserCommands::Login { email, password } => {
            handlers::handle_user_login(&email, &password, project, formatter)
        },
        UserCommands::List => handlers::handle_user_list(principal, project, formatter),
        UserCommands::Me => handlers::handle_user_me(principal, project, formatter),
    }
}

fn dispatch_customer_command(
    command: CustomerCommands,
    principal: Option<&Principal>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        CustomerCommands::Register {
            name,
            email,
            password,
            phone,
        } => handlers::handle_customer_register(
            &name, &email, &password, &phone, principal, project, formatter,
        ),
        CustomerCommands::List => handlers::handle_customer_list(principal, project, formatter),
    }
}

fn dispatch_ticket_command(
    command: TicketCommands,
    principal: Option<&Principal>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        TicketCommands::Create {
            email,
            topic,
            subject,
            message,
        } => handlers::handle_ticket_create(&email, &topic, &subject, &message, project, formatter),
        TicketCommands::Show { ticket } => handlers::handle_ticket_show(&ticket, project, formatter),
        TicketCommands::List => handlers::handle_ticket_list(principal, project, formatter),
        TicketCommands::Close { ticket, reopen } => {
            handlers::handle_ticket_close(&ticket, reopen, principal, project, formatter)
        },
        TicketCommands::Previous { email } => {
            handlers::handle_ticket_previous(&email, project, formatter)
        },
    }
}

fn dispatch_comment_command(
    command: CommentCommands,
    principal: Option<&Principal>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        CommentCommands::Staff { ticket, message } => {
            handlers::handle_comment_staff(&ticket, &message, principal, project, formatter)
        },
        CommentCommands::Customer {
            ticket,
            email,
            message,
        } => handlers::handle_comment_customer(&ticket, &email, &message, project, formatter),
        CommentCommands::List => handlers::handle_comment_list(principal, project, formatter),
    }
}

fn dispatch_report_command(
    command: ReportCommands,
    principal: Option<&Principal>,
    project: Option<&str>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match command {
        ReportCommands::Closed { days, output } => handlers::handle_report_closed(
            days,
            output.as_deref(),
            principal,
            project,
            formatter,
        ),
    }
}

/// Display a classified error and its suggestions
fn handle_error(error: &helpdesk::HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  - {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}

//! End-to-end workflow scenario over real file storage
//!
//! Exercises the full comment-gating story: a customer files a ticket,
//! is blocked from commenting until an agent responds, then allowed,
//! while other customers stay locked out.

use tempfile::TempDir;

use helpdesk::HelpdeskError;
use helpdesk::auth::{TokenService, authorize, hash_password};
use helpdesk::core::{PrincipalRole, Role, Topic};
use helpdesk::storage::FileStorage;
use helpdesk::workflow::{CommentWorkflow, IdentityWorkflow, TicketWorkflow};

struct Env {
    _temp: TempDir,
    storage: FileStorage,
}

fn env() -> Env {
    let temp = TempDir::new().unwrap();
    let storage = FileStorage::new(temp.path().join(".helpdesk"));
    storage.init().unwrap();
    Env {
        _temp: temp,
        storage,
    }
}

#[test]
fn customer_comment_gating_scenario() {
    let env = env();
    let identity = IdentityWorkflow::new(&env.storage);
    let tickets = TicketWorkflow::new(&env.storage);
    let comments = CommentWorkflow::new(&env.storage);

    // Customer C files a ticket
    let carol = identity
        .register_customer("Carol Jones", "carol@example.com", "carols-pass", "080111222")
        .unwrap();
    let ticket = tickets
        .create_ticket(
            "carol@example.com",
            Topic::Website,
            "Dashboard is down",
            "The dashboard has returned 502 since this morning",
        )
        .unwrap();
    assert_eq!(ticket.requested_by, carol.id);

    // C cannot comment before staff responds
    assert!(matches!(
        comments.can_customer_comment(&ticket.id, &carol),
        Err(HelpdeskError::AwaitingAgentResponse)
    ));
    assert!(matches!(
        comments.add_customer_comment(&ticket.id, &carol, "any updates on this?"),
        Err(HelpdeskError::AwaitingAgentResponse)
    ));

    // Agent A logs in through the token path and comments
    let agent = identity
        .register_user("Agent Smith", "smith@example.com", "agents-pass", Role::Agent)
        .unwrap();
    let service = TokenService::new("scenario-secret", 24);
    let token = service.issue(&agent).unwrap();
    let principal = service.verify(&token).unwrap();
    assert_eq!(principal.role, PrincipalRole::Agent);

    comments
        .add_staff_comment(&ticket.id, &principal, "We are rolling back the deploy now")
        .unwrap();

    // C is now allowed, and the gate stays open
    assert!(comments.can_customer_comment(&ticket.id, &carol).is_ok());
    comments
        .add_customer_comment(&ticket.id, &carol, "thanks, it works again")
        .unwrap();
    assert!(comments.can_customer_comment(&ticket.id, &carol).is_ok());

    // Another customer is still denied, by ownership
    let dave = identity
        .register_customer("Dave Brown", "dave@example.com", "daves-pass", "080333444")
        .unwrap();
    assert!(matches!(
        comments.can_customer_comment(&ticket.id, &dave),
        Err(HelpdeskError::NotTicketOwner)
    ));

    // The thread reads in order: staff reply first, then the customer
    let (_, thread) = comments.ticket_with_comments(&ticket.id).unwrap();
    assert_eq!(thread.len(), 2);
    assert!(thread[0].author_type.is_staff());
    assert!(!thread[1].author_type.is_staff());
}

#[test]
fn close_report_and_previous_status_flow() {
    let env = env();
    let identity = IdentityWorkflow::new(&env.storage);
    let tickets = TicketWorkflow::new(&env.storage);

    identity
        .register_customer("Carol Jones", "carol@example.com", "carols-pass", "080111222")
        .unwrap();

    let first = tickets
        .create_ticket(
            "carol@example.com",
            Topic::Billing,
            "Old invoice question",
            "Question about my January invoice",
        )
        .unwrap();
    let second = tickets
        .create_ticket(
            "carol@example.com",
            Topic::Account,
            "Recent login issue",
            "I could not log in yesterday evening",
        )
        .unwrap();

    // Close the older ticket; closing twice is not an error
    tickets.set_closed(&first.id, true).unwrap();
    let again = tickets.set_closed(&first.id, true).unwrap();
    assert!(again.is_closed);

    // Previous status is the second-most-recent ticket: the closed one.
    // The tie on creation time is broken by making `second` newest.
    let mut newest = env.storage.load_ticket(&second.id).unwrap();
    newest.created_at = first.created_at + chrono::Duration::seconds(10);
    env.storage.save_ticket(&newest).unwrap();

    let status = tickets.previous_ticket_status("carol@example.com").unwrap();
    assert!(status.is_closed);
    assert_eq!(status.created_at, first.created_at);

    // The closed ticket shows up in the 30-day report
    let report = tickets.closed_within_window(30).unwrap();
    assert_eq!(report.len(), 1);
    assert_eq!(report[0].id, first.id);
}

#[test]
fn admin_gate_over_verified_tokens() {
    let env = env();
    let identity = IdentityWorkflow::new(&env.storage);
    let service = TokenService::new("scenario-secret", 24);

    let admin = identity
        .register_user("Admin Adams", "adams@example.com", "admins-pass", Role::Admin)
        .unwrap();
    let agent = identity
        .register_user("Agent Smith", "smith@example.com", "agents-pass", Role::Agent)
        .unwrap();

    let admin_principal = service.verify(&service.issue(&admin).unwrap()).unwrap();
    let agent_principal = service.verify(&service.issue(&agent).unwrap()).unwrap();

    assert!(authorize(Some(&admin_principal), Role::Admin).is_ok());
    assert!(matches!(
        authorize(Some(&agent_principal), Role::Admin),
        Err(HelpdeskError::Forbidden)
    ));
    assert!(matches!(
        authorize(None, Role::Admin),
        Err(HelpdeskError::Unauthenticated)
    ));
}

#[test]
fn login_verifies_stored_hash() {
    let env = env();
    let identity = IdentityWorkflow::new(&env.storage);

    let user = identity
        .register_user("Agent Smith", "smith@example.com", "agents-pass", Role::Agent)
        .unwrap();
    // The stored hash is not the plaintext
    assert_ne!(user.password_hash, "agents-pass");
    assert!(hash_password("agents-pass").unwrap() != user.password_hash);

    assert!(identity.login("smith@example.com", "agents-pass").is_ok());
    assert!(matches!(
        identity.login("smith@example.com", "bad-pass"),
        Err(HelpdeskError::InvalidCredentials)
    ));
}

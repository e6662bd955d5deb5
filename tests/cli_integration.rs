//! CLI smoke test covering the full helpdesk flow end to end
//!
//! Runs the binary against a temporary project directory: bootstrap an
//! admin, issue a token, register a customer, file a ticket, walk the
//! comment gate, and export the closed-ticket report.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn helpdesk(project: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("helpdesk").expect("binary exists");
    cmd.arg("--project").arg(project.path());
    cmd.env_remove("HELPDESK_TOKEN");
    cmd
}

fn stdout_json(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout is JSON")
}

#[test]
fn full_ticket_lifecycle_via_cli() {
    let project = TempDir::new().unwrap();

    helpdesk(&project).arg("init").assert().success();

    // Bootstrap: the first user registers without a token
    helpdesk(&project)
        .args([
            "user", "register", "--name", "Admin Adams", "--email", "adams@example.com",
            "--password", "admins-pass", "--role", "admin",
        ])
        .assert()
        .success();

    // A second registration without a token is gated
    helpdesk(&project)
        .args([
            "user", "register", "--name", "Agent Smith", "--email", "smith@example.com",
            "--password", "agents-pass", "--role", "agent",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication"));

    // Log in and capture a token
    let output = helpdesk(&project)
        .args([
            "--json", "user", "login", "--email", "adams@example.com",
            "--password", "admins-pass",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let token = stdout_json(&output.stdout)["token"]
        .as_str()
        .expect("login returns a token")
        .to_string();

    // Register a customer (admin-gated)
    helpdesk(&project)
        .args([
            "--token", token.as_str(), "customer", "register", "--name", "Carol Jones",
            "--email", "carol@example.com", "--password", "carols-pass",
            "--phone", "080111222",
        ])
        .assert()
        .success();

    // The customer files a ticket (no token)
    let output = helpdesk(&project)
        .args([
            "--json", "ticket", "create", "--email", "carol@example.com",
            "--topic", "website", "--subject", "Dashboard is down",
            "--message", "The dashboard has returned 502 since this morning",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let ticket_id = stdout_json(&output.stdout)["id"]
        .as_str()
        .expect("create returns the ticket id")
        .to_string();

    // Customer comment is gated until staff responds
    helpdesk(&project)
        .args([
            "comment", "customer", ticket_id.as_str(), "--email", "carol@example.com",
            "--message", "any updates on this?",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't comment"));

    // Staff comments, which opens the gate
    helpdesk(&project)
        .args([
            "--token", token.as_str(), "comment", "staff", ticket_id.as_str(),
            "--message", "We are rolling back the deploy now",
        ])
        .assert()
        .success();

    helpdesk(&project)
        .args([
            "comment", "customer", ticket_id.as_str(), "--email", "carol@example.com",
            "--message", "thanks, it works again",
        ])
        .assert()
        .success();

    // Close the ticket and export the report
    helpdesk(&project)
        .args(["--token", token.as_str(), "ticket", "close", ticket_id.as_str()])
        .assert()
        .success();

    helpdesk(&project)
        .args(["--token", token.as_str(), "report", "closed", "--days", "30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TICKET_ID"))
        .stdout(predicate::str::contains(ticket_id.as_str()));

    // The thread shows both comments in order
    helpdesk(&project)
        .args(["ticket", "show", ticket_id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("rolling back"))
        .stdout(predicate::str::contains("works again"));
}

#[test]
fn staff_routes_require_a_token() {
    let project = TempDir::new().unwrap();
    helpdesk(&project).arg("init").assert().success();

    helpdesk(&project)
        .args(["ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication"));

    helpdesk(&project)
        .args(["--token", "garbage-token", "ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("authentication"));
}

#[test]
fn uninitialized_project_is_reported() {
    let project = TempDir::new().unwrap();
    helpdesk(&project)
        .args(["ticket", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("init"));
}

//! End-to-end flows through the bootstrapper and session state, driven the
//! way the views drive them.

use chat_client::command::Dispatch;
use chat_client::state::bootstrap::BootstrapState;
use chat_client::state::session::{ConnectionStatus, LineOrigin, SessionState};

/// Outbound frames as the socket driver would emit them.
struct Wire {
    outbound: Vec<String>,
}

/// Confirm a name and open the connection, recording the opening frame.
fn connect(name: &str) -> (SessionState, Wire) {
    let mut bootstrap = BootstrapState::default();
    let display_name = bootstrap.confirm(name).expect("name accepted");
    assert!(!bootstrap.is_login());

    let mut session = SessionState::new(display_name);
    let mut wire = Wire { outbound: Vec::new() };
    if let Some(frame) = session.handle_open() {
        wire.outbound.push(frame);
    }
    (session, wire)
}

/// Confirm input the way the message field does. Returns the field value
/// afterwards.
fn confirm_input(session: &mut SessionState, wire: &mut Wire, raw: &str) -> String {
    let outcome = session.dispatch_input(raw);
    if let Dispatch::Send(text) = &outcome {
        wire.outbound.push(text.clone());
    }
    if outcome.clears_input() { String::new() } else { raw.to_owned() }
}

#[test]
fn name_submission_opens_session_and_sends_name_first() {
    let (session, wire) = connect("Alice");
    assert_eq!(session.status, ConnectionStatus::Open);
    assert_eq!(wire.outbound, vec!["Alice".to_owned()]);
}

#[test]
fn padded_name_is_sent_as_typed() {
    let (_session, wire) = connect("  Alice ");
    assert_eq!(wire.outbound, vec!["  Alice ".to_owned()]);
}

#[test]
fn blank_name_never_reaches_a_session() {
    let mut bootstrap = BootstrapState::default();
    assert!(bootstrap.confirm("   ").is_none());
    assert!(bootstrap.is_login());
}

#[test]
fn first_server_line_renders_without_separator() {
    let (mut session, _wire) = connect("Alice");
    session.handle_frame("Bob: hi".to_owned());

    assert_eq!(session.lines.len(), 1);
    assert_eq!(session.lines[0].text, "Bob: hi");
    assert_eq!(session.lines[0].origin, LineOrigin::Remote);
    assert!(!session.lines[0].separated);
}

#[test]
fn help_renders_locally_and_clears_field() {
    let (mut session, mut wire) = connect("Alice");
    let field = confirm_input(&mut session, &mut wire, "/help");

    assert_eq!(field, "");
    assert_eq!(wire.outbound, vec!["Alice".to_owned()]);
    assert_eq!(session.lines.last().map(|l| l.text.as_str()), Some("Commands: /users, /clear"));
}

#[test]
fn chat_text_is_forwarded_and_clears_field() {
    let (mut session, mut wire) = connect("Alice");
    let field = confirm_input(&mut session, &mut wire, "hello world");

    assert_eq!(field, "");
    assert_eq!(wire.outbound, vec!["Alice".to_owned(), "hello world".to_owned()]);
    assert!(session.lines.is_empty());
}

#[test]
fn empty_input_leaves_everything_unchanged() {
    let (mut session, mut wire) = connect("Alice");
    let field = confirm_input(&mut session, &mut wire, "");

    assert_eq!(field, "");
    assert_eq!(wire.outbound.len(), 1);
    assert!(session.lines.is_empty());
}

#[test]
fn separators_follow_session_count_across_clear() {
    let (mut session, mut wire) = connect("Alice");
    for i in 0..3 {
        session.handle_frame(format!("msg {i}"));
    }
    confirm_input(&mut session, &mut wire, "/clear");
    session.handle_frame("after".to_owned());

    let rendered: Vec<(&str, bool)> = session
        .lines
        .iter()
        .map(|l| (l.text.as_str(), l.separated))
        .collect();
    assert_eq!(rendered, vec![("Chat cleared.", true), ("after", true)]);
    assert_eq!(session.rendered(), 5);
}

#[test]
fn dropped_connection_stops_sending_silently() {
    let (mut session, mut wire) = connect("Alice");
    session.handle_closed();
    let field = confirm_input(&mut session, &mut wire, "anyone there?");

    assert_eq!(field, "");
    assert_eq!(wire.outbound, vec!["Alice".to_owned()]);
    assert!(session.lines.is_empty());
}

use super::*;

// =============================================================
// Command::parse
// =============================================================

#[test]
fn parse_recognizes_each_command() {
    assert_eq!(Command::parse("/help"), Some(Command::Help));
    assert_eq!(Command::parse("/users"), Some(Command::Users));
    assert_eq!(Command::parse("/clear"), Some(Command::Clear));
}

#[test]
fn parse_is_case_sensitive() {
    assert_eq!(Command::parse("/HELP"), None);
    assert_eq!(Command::parse("/Clear"), None);
}

#[test]
fn parse_requires_exact_match() {
    assert_eq!(Command::parse("/help "), None);
    assert_eq!(Command::parse(" /users"), None);
    assert_eq!(Command::parse("/clear all"), None);
    assert_eq!(Command::parse("/"), None);
}

#[test]
fn parse_rejects_plain_text_and_whitespace() {
    assert_eq!(Command::parse("hello world"), None);
    assert_eq!(Command::parse("   "), None);
}

#[test]
fn as_str_round_trips_through_parse() {
    for cmd in [Command::Help, Command::Users, Command::Clear] {
        assert_eq!(Command::parse(cmd.as_str()), Some(cmd));
    }
}

#[test]
fn help_text_lists_remaining_commands() {
    assert_eq!(HELP_TEXT, "Commands: /users, /clear");
}

// =============================================================
// Dispatch
// =============================================================

#[test]
fn only_ignored_leaves_input_untouched() {
    assert!(!Dispatch::Ignored.clears_input());
    assert!(Dispatch::Rendered.clears_input());
    assert!(Dispatch::FetchUsers.clears_input());
    assert!(Dispatch::Send("hi".to_owned()).clears_input());
    assert!(Dispatch::Dropped("hi".to_owned()).clears_input());
}

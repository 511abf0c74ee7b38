use super::*;

#[test]
fn default_leaves_ports_to_the_page_scheme() {
    let config = ChatConfig::default();
    assert_eq!(config.port, None);
    assert_eq!(config.chat_path, "/chat");
    assert_eq!(config.users_port, None);
    assert_eq!(config.users_path, "/users");
}

#[test]
fn from_json_fills_missing_fields_with_defaults() {
    let config = ChatConfig::from_json(r#"{"port": 8080}"#).expect("config");
    assert_eq!(config.port, Some(8080));
    assert_eq!(config.chat_path, "/chat");
    assert_eq!(config.users_path, "/users");
}

#[test]
fn from_json_accepts_null_port() {
    let config = ChatConfig::from_json(r#"{"port": null, "chat_path": "/ws/chat"}"#).expect("config");
    assert_eq!(config.port, None);
    assert_eq!(config.chat_path, "/ws/chat");
}

#[test]
fn from_json_empty_object_is_default() {
    assert_eq!(ChatConfig::from_json("{}").expect("config"), ChatConfig::default());
}

#[test]
fn from_json_rejects_malformed_input() {
    assert!(matches!(ChatConfig::from_json("{port"), Err(ChatError::Config(_))));
    assert!(matches!(ChatConfig::from_json(r#"{"port": 70000}"#), Err(ChatError::Config(_))));
}

#[test]
fn from_document_without_browser_is_default() {
    assert_eq!(ChatConfig::from_document(), ChatConfig::default());
}

use super::types::{TgResponse, TgUpdate};
use super::TelegramChannel;
use codemedic_core::config::TelegramConfig;

#[test]
fn test_channel_keeps_only_token_url_and_allowlist() {
    let channel = TelegramChannel::new(TelegramConfig {
        enabled: true,
        bot_token: "123:abc".to_string(),
        allowed_users: vec![42],
    });
    assert_eq!(channel.base_url, "https://api.telegram.org/bot123:abc");
    assert_eq!(channel.allowed_users, vec![42]);
}

#[test]
fn test_deserialize_text_update() {
    let raw = r#"{
        "ok": true,
        "result": [{
            "update_id": 1001,
            "message": {
                "message_id": 5,
                "from": {"id": 42, "first_name": "Ada", "username": "ada"},
                "chat": {"id": 42, "type": "private"},
                "text": "my python code raises a IndentationError"
            }
        }]
    }"#;
    let body: TgResponse<Vec<TgUpdate>> = serde_json::from_str(raw).unwrap();
    assert!(body.ok);
    let updates = body.result.unwrap();
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].update_id, 1001);
    let msg = updates[0].message.as_ref().unwrap();
    assert_eq!(msg.chat.id, 42);
    assert_eq!(msg.chat.chat_type, "private");
    assert_eq!(
        msg.text.as_deref(),
        Some("my python code raises a IndentationError")
    );
    assert_eq!(msg.from.as_ref().unwrap().id, 42);
}

#[test]
fn test_deserialize_non_text_update() {
    // Sticker messages have no "text" field; the poll loop skips them.
    let raw = r#"{
        "ok": true,
        "result": [{
            "update_id": 1002,
            "message": {
                "message_id": 6,
                "from": {"id": 42, "first_name": "Ada"},
                "chat": {"id": 42, "type": "private"}
            }
        }]
    }"#;
    let body: TgResponse<Vec<TgUpdate>> = serde_json::from_str(raw).unwrap();
    let updates = body.result.unwrap();
    assert!(updates[0].message.as_ref().unwrap().text.is_none());
}

#[test]
fn test_deserialize_api_error() {
    let raw = r#"{"ok": false, "description": "Unauthorized"}"#;
    let body: TgResponse<Vec<TgUpdate>> = serde_json::from_str(raw).unwrap();
    assert!(!body.ok);
    assert_eq!(body.description.as_deref(), Some("Unauthorized"));
    assert!(body.result.is_none());
}

//! Outbound action events.
//!
//! An action event is a named, payload-bearing message requesting a
//! server-side state change. The client never awaits a reply to one; the
//! session framework delivers it and routes any failure through its own
//! error channel.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Interaction kind understood by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Pointer/tap interaction.
    Click,
}

/// A named message sent from client to server with a string payload map.
///
/// Serializes as `{"type": "click", "event": "join", "value": {"id": "..."}}`.
/// The payload uses a `BTreeMap` so key order on the wire is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionEvent {
    /// Interaction kind tag.
    #[serde(rename = "type")]
    pub kind: ActionKind,
    /// Server-side event name to trigger.
    pub event: String,
    /// Payload mapping of string keys to string values.
    pub value: BTreeMap<String, String>,
}

impl ActionEvent {
    /// Creates a click action for the given event name with an empty payload.
    pub fn click(event: impl Into<String>) -> Self {
        Self {
            kind: ActionKind::Click,
            event: event.into(),
            value: BTreeMap::new(),
        }
    }

    /// Adds a payload entry, replacing any previous value for the key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.value.insert(key.into(), value.into());
        self
    }

    /// The join action dispatched when a deep link names a game.
    pub fn join(game_id: impl Into<String>) -> Self {
        Self::click("join").with("id", game_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_wire_shape() {
        let event = ActionEvent::join("ABC123");
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "click",
                "event": "join",
                "value": {"id": "ABC123"}
            })
        );
    }

    #[test]
    fn test_click_builder_accumulates_payload() {
        let event = ActionEvent::click("move")
            .with("from", "e2")
            .with("to", "e4");

        assert_eq!(event.kind, ActionKind::Click);
        assert_eq!(event.event, "move");
        assert_eq!(event.value.get("from").map(String::as_str), Some("e2"));
        assert_eq!(event.value.get("to").map(String::as_str), Some("e4"));
    }

    #[test]
    fn test_with_replaces_existing_key() {
        let event = ActionEvent::click("join").with("id", "a").with("id", "b");
        assert_eq!(event.value.get("id").map(String::as_str), Some("b"));
    }

    #[test]
    fn test_roundtrip() {
        let event = ActionEvent::join("game42");
        let json = serde_json::to_string(&event).unwrap();
        let back: ActionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}

//! Domain types shared by the backend, fixtures, and TUI.
//!
//! Everything here is plain data: the client holds fixtures in local state
//! and nothing is persisted. Types are serializable for future JSON output
//! mode support.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geographic coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// A member profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub bio: String,
    pub interests: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    /// Whether the user appears on other members' nearby screens.
    pub is_visible: bool,
}

impl User {
    /// Interests shared with another interest list (case-sensitive, original order).
    pub fn shared_interests(&self, other: &[String]) -> Vec<String> {
        self.interests
            .iter()
            .filter(|i| other.contains(i))
            .cloned()
            .collect()
    }
}

/// A single chat message inside a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub read: bool,
}

/// Preview of the most recent message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    pub content: String,
    pub sent_at: DateTime<Utc>,
    pub sender_id: String,
}

/// A two-party conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub participants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message: Option<LastMessage>,
    pub unread_count: u32,
}

impl Conversation {
    /// The participant that is not `me`, if any.
    pub fn other_participant<'a>(&'a self, me: &str) -> Option<&'a str> {
        self.participants
            .iter()
            .map(String::as_str)
            .find(|p| *p != me)
    }
}

/// A community event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub starts_at: DateTime<Utc>,
    pub attendees: Vec<String>,
    pub tags: Vec<String>,
}

/// Source of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Nearby,
    Message,
    Event,
    Connection,
}

impl NotificationKind {
    /// Short glyph shown in front of the notification title.
    pub fn glyph(self) -> &'static str {
        match self {
            NotificationKind::Nearby => "◎",
            NotificationKind::Message => "✉",
            NotificationKind::Event => "▣",
            NotificationKind::Connection => "⚑",
        }
    }
}

/// An in-app notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_event_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_interests_filters_and_keeps_order() {
        let user = User {
            id: "1".into(),
            name: "Alex".into(),
            email: "alex@example.com".into(),
            bio: String::new(),
            interests: vec!["Hiking".into(), "Coffee".into(), "Photography".into()],
            location: None,
            is_visible: true,
        };
        let mine = vec!["Photography".to_string(), "Hiking".to_string()];
        assert_eq!(user.shared_interests(&mine), vec!["Hiking", "Photography"]);
    }

    #[test]
    fn test_other_participant() {
        let convo = Conversation {
            id: "c1".into(),
            participants: vec!["me".into(), "1".into()],
            last_message: None,
            unread_count: 0,
        };
        assert_eq!(convo.other_participant("me"), Some("1"));
        assert_eq!(convo.other_participant("1"), Some("me"));
    }

    #[test]
    fn test_notification_kind_serializes_snake_case() {
        let json = serde_json::to_string(&NotificationKind::Nearby).unwrap();
        assert_eq!(json, "\"nearby\"");
    }
}

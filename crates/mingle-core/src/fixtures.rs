//! Hard-coded sample data.
//!
//! All of the client's data lives here: the accounts that can log in, the
//! nearby users shown on the discovery screen, conversations, events, and
//! notifications. Timestamps are computed relative to "now" so relative
//! formatting ("5m ago") stays believable.

use chrono::{Duration, Utc};

use crate::types::{
    Conversation, Event, GeoPoint, LastMessage, Message, Notification, NotificationKind, User,
};

/// Sentinel id for the signed-in user inside conversation fixtures.
pub const CURRENT_USER: &str = "currentUser";

/// Accounts accepted by the simulated login (with password "password").
pub fn login_users() -> Vec<User> {
    vec![
        User {
            id: "u-john".into(),
            name: "John Doe".into(),
            email: "john@example.com".into(),
            bio: "Software developer passionate about mobile apps".into(),
            interests: vec!["Coding".into(), "Hiking".into(), "Photography".into()],
            location: None,
            is_visible: true,
        },
        User {
            id: "u-jane".into(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            bio: "Digital artist and music enthusiast".into(),
            interests: vec!["Art".into(), "Music".into(), "Travel".into()],
            location: None,
            is_visible: true,
        },
    ]
}

/// Users shown on the nearby screen.
pub fn nearby_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "Alex Johnson".into(),
            email: "alex@example.com".into(),
            bio: "Hiking enthusiast and coffee lover".into(),
            interests: vec!["Hiking".into(), "Coffee".into(), "Photography".into()],
            location: Some(GeoPoint {
                latitude: 37.7855,
                longitude: -122.4071,
            }),
            is_visible: true,
        },
        User {
            id: "2".into(),
            name: "Sarah Williams".into(),
            email: "sarah@example.com".into(),
            bio: "Tech developer with a passion for music".into(),
            interests: vec!["Coding".into(), "Music".into(), "Travel".into()],
            location: Some(GeoPoint {
                latitude: 37.7861,
                longitude: -122.4055,
            }),
            is_visible: true,
        },
        User {
            id: "3".into(),
            name: "Michael Chen".into(),
            email: "michael@example.com".into(),
            bio: "Foodie exploring new cuisines".into(),
            interests: vec!["Food".into(), "Cooking".into(), "Travel".into()],
            location: Some(GeoPoint {
                latitude: 37.7870,
                longitude: -122.4065,
            }),
            is_visible: true,
        },
    ]
}

/// Display name for a fixture user id, falling back to the id itself.
pub fn user_name(id: &str) -> String {
    match id {
        CURRENT_USER => "You".to_string(),
        "1" => "Alex Johnson".to_string(),
        "2" => "Sarah Williams".to_string(),
        "3" => "Michael Chen".to_string(),
        "4" => "Jane Smith".to_string(),
        "5" => "David Brown".to_string(),
        "6" => "Emily Davis".to_string(),
        other => other.to_string(),
    }
}

/// Conversation list for the messages screen.
pub fn conversations() -> Vec<Conversation> {
    let now = Utc::now();
    vec![
        Conversation {
            id: "1".into(),
            participants: vec![CURRENT_USER.into(), "1".into()],
            last_message: Some(LastMessage {
                content: "I saw you like hiking! Any recommendations for trails?".into(),
                sent_at: now - Duration::minutes(10),
                sender_id: "1".into(),
            }),
            unread_count: 1,
        },
        Conversation {
            id: "2".into(),
            participants: vec![CURRENT_USER.into(), "2".into()],
            last_message: Some(LastMessage {
                content: "Would love to chat more about the latest tech trends!".into(),
                sent_at: now - Duration::hours(2),
                sender_id: CURRENT_USER.into(),
            }),
            unread_count: 0,
        },
        Conversation {
            id: "3".into(),
            participants: vec![CURRENT_USER.into(), "3".into()],
            last_message: Some(LastMessage {
                content: "That new restaurant downtown is amazing, we should go!".into(),
                sent_at: now - Duration::days(1),
                sender_id: "3".into(),
            }),
            unread_count: 2,
        },
    ]
}

/// Message thread for a conversation id. Unknown ids yield an empty thread.
pub fn messages_for(conversation_id: &str) -> Vec<Message> {
    let now = Utc::now();
    let msg = |id: &str, sender: &str, receiver: &str, content: &str, ago: Duration, read: bool| {
        Message {
            id: id.into(),
            sender_id: sender.into(),
            receiver_id: receiver.into(),
            content: content.into(),
            sent_at: now - ago,
            read,
        }
    };

    match conversation_id {
        "1" => vec![
            msg(
                "1-1",
                "1",
                CURRENT_USER,
                "Hi there! I noticed we both enjoy hiking.",
                Duration::hours(3),
                true,
            ),
            msg(
                "1-2",
                CURRENT_USER,
                "1",
                "Hey! Yes, I love hiking. Been doing it for years!",
                Duration::hours(3) - Duration::minutes(4),
                true,
            ),
            msg(
                "1-3",
                "1",
                CURRENT_USER,
                "That's awesome! Do you have any favorite trails?",
                Duration::hours(2),
                true,
            ),
            msg(
                "1-4",
                CURRENT_USER,
                "1",
                "I really like the trails at Mount Tamalpais. The views are incredible.",
                Duration::hours(1),
                true,
            ),
            msg(
                "1-5",
                "1",
                CURRENT_USER,
                "I saw you like hiking! Any recommendations for trails?",
                Duration::minutes(10),
                false,
            ),
        ],
        "2" => vec![
            msg(
                "2-1",
                "2",
                CURRENT_USER,
                "Hello! I see you're into coding too.",
                Duration::hours(5),
                true,
            ),
            msg(
                "2-2",
                CURRENT_USER,
                "2",
                "Yes! I'm currently learning React Native. How about you?",
                Duration::hours(4),
                true,
            ),
            msg(
                "2-3",
                "2",
                CURRENT_USER,
                "I work with Python mostly, but interested in mobile development too.",
                Duration::hours(3),
                true,
            ),
            msg(
                "2-4",
                CURRENT_USER,
                "2",
                "Would love to chat more about the latest tech trends!",
                Duration::hours(2),
                true,
            ),
        ],
        "3" => vec![
            msg(
                "3-1",
                "3",
                CURRENT_USER,
                "Hi! I noticed we both love food and cooking.",
                Duration::days(2),
                true,
            ),
            msg(
                "3-2",
                CURRENT_USER,
                "3",
                "Absolutely! I've been trying to perfect my pasta-making skills lately.",
                Duration::days(2) - Duration::hours(1),
                true,
            ),
            msg(
                "3-3",
                "3",
                CURRENT_USER,
                "Fresh pasta is amazing! I learned a great carbonara recipe recently.",
                Duration::days(1) + Duration::hours(6),
                true,
            ),
            msg(
                "3-4",
                CURRENT_USER,
                "3",
                "I'd love to hear about it! Maybe we can swap recipes sometime.",
                Duration::days(1) + Duration::hours(3),
                true,
            ),
            msg(
                "3-5",
                "3",
                CURRENT_USER,
                "That sounds great! Also, have you tried that new Italian place downtown?",
                Duration::days(1) + Duration::hours(1),
                false,
            ),
            msg(
                "3-6",
                "3",
                CURRENT_USER,
                "That new restaurant downtown is amazing, we should go!",
                Duration::days(1),
                false,
            ),
        ],
        _ => Vec::new(),
    }
}

/// Events list for the events screen.
pub fn events() -> Vec<Event> {
    let now = Utc::now();
    vec![
        Event {
            id: "1".into(),
            name: "Local Tech Meetup".into(),
            description: "Join us for an evening of tech talks, networking, and refreshments. \
                          This month's theme is mobile app development."
                .into(),
            location: "Tech Hub Downtown, 123 Main St".into(),
            starts_at: now + Duration::days(1),
            attendees: vec!["1".into(), "2".into(), "3".into()],
            tags: vec!["Tech".into(), "Networking".into(), "Development".into()],
        },
        Event {
            id: "2".into(),
            name: "Morning Hiking Group".into(),
            description: "Early morning hike to catch the sunrise. All experience levels \
                          welcome. Bring water and comfortable shoes."
                .into(),
            location: "Mountain Park Trailhead, North Entrance".into(),
            starts_at: now + Duration::days(3),
            attendees: vec!["1".into(), "4".into()],
            tags: vec!["Hiking".into(), "Outdoors".into(), "Fitness".into()],
        },
        Event {
            id: "3".into(),
            name: "Photography Workshop".into(),
            description: "Learn composition techniques and editing skills in this hands-on \
                          workshop. Bring your own camera."
                .into(),
            location: "Art Center Gallery, 456 Oak St".into(),
            starts_at: now + Duration::days(5),
            attendees: vec!["2".into(), "5".into()],
            tags: vec!["Photography".into(), "Art".into(), "Learning".into()],
        },
        Event {
            id: "4".into(),
            name: "Cooking Class: Italian Cuisine".into(),
            description: "Learn to make authentic Italian pasta from scratch, along with \
                          sauces and appetizers."
                .into(),
            location: "Culinary Institute, 789 Elm St".into(),
            starts_at: now + Duration::days(7),
            attendees: vec!["3".into(), "6".into()],
            tags: vec!["Cooking".into(), "Food".into(), "Italian".into()],
        },
    ]
}

/// Notifications list.
pub fn notifications() -> Vec<Notification> {
    let now = Utc::now();
    vec![
        Notification {
            id: "1".into(),
            kind: NotificationKind::Nearby,
            title: "New Connection Opportunity".into(),
            message: "Alex Johnson is within 5 meters of you. You share interests in Hiking \
                      and Photography."
                .into(),
            created_at: now - Duration::minutes(5),
            read: false,
            related_user_id: Some("1".into()),
            related_event_id: None,
        },
        Notification {
            id: "2".into(),
            kind: NotificationKind::Connection,
            title: "Connection Request Accepted".into(),
            message: "Sarah Williams accepted your connection request.".into(),
            created_at: now - Duration::hours(1),
            read: true,
            related_user_id: Some("2".into()),
            related_event_id: None,
        },
        Notification {
            id: "3".into(),
            kind: NotificationKind::Message,
            title: "New Message".into(),
            message: "Michael Chen sent you a message: \"Hi, I noticed we both enjoy cooking. \
                      Would love to chat!\""
                .into(),
            created_at: now - Duration::hours(2),
            read: false,
            related_user_id: Some("3".into()),
            related_event_id: None,
        },
        Notification {
            id: "4".into(),
            kind: NotificationKind::Event,
            title: "Upcoming Event".into(),
            message: "Local Tech Meetup is happening tomorrow at 6PM. You and 5 connections \
                      are attending."
                .into(),
            created_at: now - Duration::hours(12),
            read: true,
            related_user_id: None,
            related_event_id: Some("1".into()),
        },
        Notification {
            id: "5".into(),
            kind: NotificationKind::Nearby,
            title: "Someone Nearby Shares Your Interests".into(),
            message: "Jane Smith is near you and shares your interest in Art.".into(),
            created_at: now - Duration::days(1),
            read: true,
            related_user_id: Some("4".into()),
            related_event_id: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversations_reference_known_threads() {
        for convo in conversations() {
            assert!(
                !messages_for(&convo.id).is_empty(),
                "conversation {} has no thread",
                convo.id
            );
            assert!(convo.participants.contains(&CURRENT_USER.to_string()));
        }
    }

    #[test]
    fn test_thread_last_message_matches_preview() {
        for convo in conversations() {
            let thread = messages_for(&convo.id);
            let last = thread.last().unwrap();
            let preview = convo.last_message.unwrap();
            assert_eq!(last.content, preview.content);
        }
    }

    #[test]
    fn test_unknown_conversation_has_empty_thread() {
        assert!(messages_for("nope").is_empty());
    }

    #[test]
    fn test_nearby_users_have_locations() {
        let users = nearby_users();
        assert_eq!(users.len(), 3);
        assert!(users.iter().all(|u| u.location.is_some()));
    }
}

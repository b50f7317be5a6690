//! Messages tab state.
//!
//! Conversations and threads live entirely in memory: the fixture data
//! seeds them and sent messages are appended locally, mirroring how the
//! original client held this in component state.

use std::collections::BTreeMap;

use chrono::Utc;
use mingle_core::fixtures::{self, CURRENT_USER};
use mingle_core::types::{Conversation, LastMessage, Message};
use uuid::Uuid;

use crate::common::TextField;

/// State for the messages tab.
pub struct MessagesState {
    pub conversations: Vec<Conversation>,
    /// Message threads, loaded from fixtures the first time a conversation
    /// is opened.
    threads: BTreeMap<String, Vec<Message>>,
    pub selected: usize,
    /// Id of the open conversation, if the thread view is active.
    pub open: Option<String>,
    pub compose: TextField,
}

impl MessagesState {
    pub fn new() -> Self {
        Self {
            conversations: fixtures::conversations(),
            threads: BTreeMap::new(),
            selected: 0,
            open: None,
            compose: TextField::new(),
        }
    }

    /// True while the thread view owns the keyboard (compose field).
    pub fn is_composing(&self) -> bool {
        self.open.is_some()
    }

    pub fn selected_conversation(&self) -> Option<&Conversation> {
        self.conversations.get(self.selected)
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.conversations.len() {
            self.selected += 1;
        }
    }

    /// Opens the selected conversation: loads its thread and clears the
    /// unread counter.
    pub fn open_selected(&mut self) {
        let Some(conversation) = self.conversations.get_mut(self.selected) else {
            return;
        };
        let id = conversation.id.clone();
        conversation.unread_count = 0;
        self.threads
            .entry(id.clone())
            .or_insert_with(|| fixtures::messages_for(&id));
        self.open = Some(id);
    }

    pub fn close_thread(&mut self) {
        self.open = None;
        self.compose.clear();
    }

    pub fn open_thread(&self) -> Option<&[Message]> {
        let id = self.open.as_deref()?;
        self.threads.get(id).map(Vec::as_slice)
    }

    /// Appends a message from the current user to the open thread and
    /// updates the conversation preview.
    pub fn send(&mut self, content: String) {
        let Some(id) = self.open.clone() else {
            return;
        };
        let Some(conversation) = self.conversations.iter_mut().find(|c| c.id == id) else {
            return;
        };
        let receiver = conversation
            .other_participant(CURRENT_USER)
            .unwrap_or_default()
            .to_string();
        let now = Utc::now();
        let message = Message {
            id: Uuid::new_v4().to_string(),
            sender_id: CURRENT_USER.to_string(),
            receiver_id: receiver,
            content: content.clone(),
            sent_at: now,
            read: true,
        };
        conversation.last_message = Some(LastMessage {
            content,
            sent_at: now,
            sender_id: CURRENT_USER.to_string(),
        });
        self.threads.entry(id).or_default().push(message);
    }
}

impl Default for MessagesState {
    fn default() -> Self {
        Self::new()
    }
}

//! Inbox channel types.
//!
//! Async handlers send their result events to the inbox; the runtime drains
//! it every frame. One channel for everything keeps event collection simple.

use tokio::sync::mpsc;

use crate::events::UiEvent;

pub type UiEventSender = mpsc::UnboundedSender<UiEvent>;
pub type UiEventReceiver = mpsc::UnboundedReceiver<UiEvent>;

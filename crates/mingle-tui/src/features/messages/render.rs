//! Messages tab rendering.

use chrono::Utc;
use mingle_core::fixtures::{self, CURRENT_USER};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::MessagesState;
use crate::common::{format_relative, truncate_with_ellipsis};

/// Renders the messages tab: conversation list, or the open thread.
pub fn render(messages: &MessagesState, frame: &mut Frame, area: Rect) {
    if messages.open.is_some() {
        render_thread(messages, frame, area);
    } else {
        render_list(messages, frame, area);
    }
}

fn render_list(messages: &MessagesState, frame: &mut Frame, area: Rect) {
    let now = Utc::now();
    let preview_width = area.width.saturating_sub(30) as usize;
    let mut rows: Vec<Line<'static>> = Vec::new();
    for (idx, conversation) in messages.conversations.iter().enumerate() {
        let selected = idx == messages.selected;
        let marker = if selected { "▸ " } else { "  " };
        let name = conversation
            .other_participant(CURRENT_USER)
            .map_or_else(String::new, fixtures::user_name);
        let name_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if conversation.unread_count > 0 {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(format!("{marker}{name}"), name_style)];
        if conversation.unread_count > 0 {
            spans.push(Span::styled(
                format!(" ({})", conversation.unread_count),
                Style::default().fg(Color::Yellow),
            ));
        }
        if let Some(last) = &conversation.last_message {
            spans.push(Span::styled(
                format!("  {}", truncate_with_ellipsis(&last.content, preview_width)),
                Style::default().fg(Color::Gray),
            ));
            spans.push(Span::styled(
                format!("  {}", format_relative(last.sent_at, now)),
                Style::default().fg(Color::DarkGray),
            ));
        }
        rows.push(Line::from(spans));
    }
    let block = Block::default().borders(Borders::ALL).title(" Messages ");
    frame.render_widget(Paragraph::new(rows).block(block), area);
}

fn render_thread(messages: &MessagesState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(3)])
        .split(area);

    let name = messages
        .open
        .as_deref()
        .and_then(|id| {
            messages
                .conversations
                .iter()
                .find(|c| c.id == id)
                .and_then(|c| c.other_participant(CURRENT_USER))
                .map(fixtures::user_name)
        })
        .unwrap_or_default();

    let now = Utc::now();
    let thread = messages.open_thread().unwrap_or(&[]);
    // Follow the bottom of the thread: show the newest messages that fit.
    let visible_height = chunks[0].height.saturating_sub(2) as usize;
    let skip = thread.len().saturating_sub(visible_height);
    let mut lines: Vec<Line<'static>> = Vec::new();
    for message in &thread[skip..] {
        let mine = message.sender_id == CURRENT_USER;
        let time = format_relative(message.sent_at, now);
        let line = if mine {
            Line::from(vec![
                Span::styled(format!("{time} "), Style::default().fg(Color::DarkGray)),
                Span::styled(message.content.clone(), Style::default().fg(Color::Cyan)),
            ])
            .alignment(Alignment::Right)
        } else {
            Line::from(vec![
                Span::raw(message.content.clone()),
                Span::styled(format!(" {time}"), Style::default().fg(Color::DarkGray)),
            ])
        };
        lines.push(line);
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {name} "));
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let display = messages.compose.display();
    let cursor = messages.compose.cursor();
    let before: String = display.chars().take(cursor).collect();
    let at: String = display
        .chars()
        .nth(cursor)
        .map_or_else(|| " ".to_string(), |ch| ch.to_string());
    let after: String = display.chars().skip(cursor + 1).collect();
    let compose = Paragraph::new(Line::from(vec![
        Span::raw(before),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Message "));
    frame.render_widget(compose, chunks[1]);
}

//! Notifications tab rendering.

use chrono::Utc;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::NotificationsState;
use crate::common::format_relative;

/// Renders the notifications tab.
pub fn render(notifications: &NotificationsState, frame: &mut Frame, area: Rect) {
    let now = Utc::now();
    let mut rows: Vec<Line<'static>> = Vec::new();
    for (idx, item) in notifications.items.iter().enumerate() {
        let selected = idx == notifications.selected;
        let marker = if selected { "▸ " } else { "  " };
        let title_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if item.read {
            Style::default().fg(Color::Gray)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let mut spans = vec![Span::styled(
            format!("{marker}{} {}", item.kind.glyph(), item.title),
            title_style,
        )];
        if !item.read {
            spans.push(Span::styled(" ●", Style::default().fg(Color::Yellow)));
        }
        spans.push(Span::styled(
            format!("  {}", format_relative(item.created_at, now)),
            Style::default().fg(Color::DarkGray),
        ));
        rows.push(Line::from(spans));
        rows.push(Line::from(Span::styled(
            format!("    {}", item.message),
            Style::default().fg(Color::Gray),
        )));
    }
    let title = if notifications.unread_count() > 0 {
        format!(" Notifications ({} unread) ", notifications.unread_count())
    } else {
        " Notifications ".to_string()
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(rows).block(block), area);
}

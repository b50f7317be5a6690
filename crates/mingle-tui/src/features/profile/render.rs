//! Profile tab rendering.

use mingle_core::types::User;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{ProfileRow, ProfileState};

/// Renders the profile tab: identity card plus the settings rows.
pub fn render(profile: &ProfileState, user: Option<&User>, frame: &mut Frame, area: Rect) {
    let mut lines: Vec<Line<'static>> = Vec::new();
    if let Some(user) = user {
        lines.push(Line::from(Span::styled(
            user.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            user.email.clone(),
            Style::default().fg(Color::Gray),
        )));
        lines.push(Line::from(""));
    }

    for (idx, row) in ProfileRow::ALL.iter().enumerate() {
        let selected = idx == profile.selected;
        let marker = if selected { "▸ " } else { "  " };
        let label_style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if *row == ProfileRow::LogOut {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        // Inline editor replaces the value while this row is being edited.
        if let Some(edit) = profile.editing.as_ref().filter(|e| e.row == *row) {
            lines.push(Line::from(Span::styled(
                format!("{marker}{}", row.label()),
                label_style,
            )));
            let display = edit.field.display();
            let cursor = edit.field.cursor();
            let before: String = display.chars().take(cursor).collect();
            let at: String = display
                .chars()
                .nth(cursor)
                .map_or_else(|| " ".to_string(), |ch| ch.to_string());
            let after: String = display.chars().skip(cursor + 1).collect();
            lines.push(Line::from(vec![
                Span::raw(format!("    {before}")),
                Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(after),
            ]));
            continue;
        }

        let value = row_value(*row, profile, user);
        let mut spans = vec![Span::styled(
            format!("{marker}{}", row.label()),
            label_style,
        )];
        if let Some(value) = value {
            spans.push(Span::styled(
                format!("  {value}"),
                Style::default().fg(Color::Gray),
            ));
        }
        lines.push(Line::from(spans));
    }

    let block = Block::default().borders(Borders::ALL).title(" Profile ");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn row_value(row: ProfileRow, profile: &ProfileState, user: Option<&User>) -> Option<String> {
    match row {
        ProfileRow::Bio => user.map(|u| u.bio.clone()),
        ProfileRow::Interests => user.map(|u| u.interests.join(", ")),
        ProfileRow::Visibility => Some(on_off(user.is_some_and(|u| u.is_visible)).to_string()),
        ProfileRow::LocationSharing => Some(on_off(profile.location_sharing).to_string()),
        ProfileRow::Notifications => Some(on_off(profile.notifications_enabled).to_string()),
        ProfileRow::LogOut => None,
    }
}

fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

//! Nearby tab rendering.

use mingle_core::types::User;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{NearbyState, NearbyStatus};
use crate::render::SPINNER_FRAMES;

/// Renders the nearby tab: the user list plus an optional detail pane.
pub fn render(
    nearby: &NearbyState,
    me: Option<&User>,
    spinner_frame: usize,
    frame: &mut Frame,
    area: Rect,
) {
    match &nearby.status {
        NearbyStatus::Loading => {
            let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("{glyph} Finding people nearby…"),
                    Style::default().fg(Color::Yellow),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(titled_block(me)),
                area,
            );
        }
        NearbyStatus::Failed(message) => {
            let lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    "Press r to retry",
                    Style::default().fg(Color::DarkGray),
                )),
            ];
            frame.render_widget(
                Paragraph::new(lines).block(titled_block(me)),
                area,
            );
        }
        NearbyStatus::Loaded => render_loaded(nearby, me, frame, area),
    }
}

fn titled_block(me: Option<&User>) -> Block<'static> {
    let visibility = match me {
        Some(user) if user.is_visible => " People nearby · visible ",
        Some(_) => " People nearby · hidden ",
        None => " People nearby ",
    };
    Block::default()
        .borders(Borders::ALL)
        .title(visibility.to_string())
}

fn render_loaded(nearby: &NearbyState, me: Option<&User>, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let my_interests: &[String] = me.map_or(&[], |u| &u.interests);
    let mut rows: Vec<Line<'static>> = Vec::new();
    for (idx, user) in nearby.users.iter().enumerate() {
        let selected = idx == nearby.selected;
        let marker = if selected { "▸ " } else { "  " };
        let shared = user.shared_interests(my_interests).len();
        let mut spans = vec![Span::styled(
            format!("{marker}{}", user.name),
            if selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            },
        )];
        if shared > 0 {
            spans.push(Span::styled(
                format!("  {shared} shared"),
                Style::default().fg(Color::Green),
            ));
        }
        rows.push(Line::from(spans));
    }
    frame.render_widget(Paragraph::new(rows).block(titled_block(me)), chunks[0]);

    let detail = Block::default().borders(Borders::ALL).title(" Profile ");
    let lines = if nearby.preview_open {
        nearby
            .selected_user()
            .map_or_else(Vec::new, |user| detail_lines(user, my_interests, nearby))
    } else {
        vec![Line::from(Span::styled(
            "Enter to preview a profile",
            Style::default().fg(Color::DarkGray),
        ))]
    };
    frame.render_widget(Paragraph::new(lines).block(detail), chunks[1]);
}

fn detail_lines(user: &User, my_interests: &[String], nearby: &NearbyState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            user.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(user.bio.clone()),
        Line::from(""),
        Line::from(vec![
            Span::styled("Interests: ", Style::default().fg(Color::Gray)),
            Span::raw(user.interests.join(", ")),
        ]),
    ];
    let shared = user.shared_interests(my_interests);
    if !shared.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("In common: ", Style::default().fg(Color::Gray)),
            Span::styled(shared.join(", "), Style::default().fg(Color::Green)),
        ]));
    }
    lines.push(Line::from(""));
    if nearby.connecting.as_deref() == Some(user.id.as_str()) {
        lines.push(Line::from(Span::styled(
            "Sending connection request…",
            Style::default().fg(Color::Yellow),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Press c to connect",
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines
}

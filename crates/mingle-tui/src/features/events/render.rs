//! Events tab rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::EventsState;

/// Renders the events tab: list pane plus detail pane when open.
pub fn render(events: &EventsState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut rows: Vec<Line<'static>> = Vec::new();
    for (idx, event) in events.events.iter().enumerate() {
        let selected = idx == events.selected;
        let marker = if selected { "▸ " } else { "  " };
        let style = if selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let mut spans = vec![Span::styled(format!("{marker}{}", event.name), style)];
        if events.is_going(event) {
            spans.push(Span::styled(" ✓", Style::default().fg(Color::Green)));
        }
        rows.push(Line::from(spans));
        rows.push(Line::from(Span::styled(
            format!("    {} · {}", event.starts_at.format("%a %b %d, %H:%M"), event.location),
            Style::default().fg(Color::DarkGray),
        )));
    }
    let list = Block::default().borders(Borders::ALL).title(" Events ");
    frame.render_widget(Paragraph::new(rows).block(list), chunks[0]);

    let detail = Block::default().borders(Borders::ALL).title(" Details ");
    let lines = if events.detail_open {
        events.selected_event().map_or_else(Vec::new, |event| {
            let going = events.is_going(event);
            vec![
                Line::from(Span::styled(
                    event.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("{} · {}", event.starts_at.format("%A %B %d, %H:%M"), event.location),
                    Style::default().fg(Color::Gray),
                )),
                Line::from(""),
                Line::from(event.description.clone()),
                Line::from(""),
                Line::from(vec![
                    Span::styled("Tags: ", Style::default().fg(Color::Gray)),
                    Span::raw(event.tags.join(", ")),
                ]),
                Line::from(vec![
                    Span::styled("Attending: ", Style::default().fg(Color::Gray)),
                    Span::raw(event.attendees.len().to_string()),
                ]),
                Line::from(""),
                if going {
                    Line::from(Span::styled(
                        "You're going · press r to cancel",
                        Style::default().fg(Color::Green),
                    ))
                } else {
                    Line::from(Span::styled(
                        "Press r to RSVP",
                        Style::default().fg(Color::DarkGray),
                    ))
                },
            ]
        })
    } else {
        vec![Line::from(Span::styled(
            "Enter to open an event",
            Style::default().fg(Color::DarkGray),
        ))]
    };
    frame.render_widget(Paragraph::new(lines).block(detail), chunks[1]);
}

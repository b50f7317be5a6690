//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{auth, events, messages, nearby, notifications, profile};
use crate::state::{AppState, Screen, Tab, TabsState};

/// Height of the status line at the bottom.
const STATUS_HEIGHT: u16 = 1;

/// Height of the tab bar above the content.
const TAB_BAR_HEIGHT: u16 = 1;

/// Spinner frames for status line animation.
pub const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
///
/// This is a pure render function - it only reads state and draws to frame.
/// No mutations, no side effects.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    match &app.screen {
        Screen::Auth(auth_screen) => {
            auth::render::render(auth_screen, app.spinner_frame, frame, chunks[0]);
        }
        Screen::Tabs(tabs) => render_tabs(app, tabs, frame, chunks[0]),
    }

    render_status_line(app, frame, chunks[1]);
}

fn render_tabs(app: &AppState, tabs: &TabsState, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(TAB_BAR_HEIGHT), Constraint::Min(1)])
        .split(area);

    render_tab_bar(tabs, frame, chunks[0]);

    let me = app.session.current_user();
    match tabs.active {
        Tab::Nearby => {
            nearby::render::render(&tabs.nearby, me, app.spinner_frame, frame, chunks[1]);
        }
        Tab::Messages => messages::render::render(&tabs.messages, frame, chunks[1]),
        Tab::Events => events::render::render(&tabs.events, frame, chunks[1]),
        Tab::Notifications => {
            notifications::render::render(&tabs.notifications, frame, chunks[1]);
        }
        Tab::Profile => profile::render::render(&tabs.profile, me, frame, chunks[1]),
    }
}

fn render_tab_bar(tabs: &TabsState, frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
    for (idx, tab) in Tab::ALL.iter().enumerate() {
        let mut label = format!(" {} {} ", idx + 1, tab.title());
        if *tab == Tab::Notifications {
            let unread = tabs.notifications.unread_count();
            if unread > 0 {
                label = format!(" {} {} ({unread}) ", idx + 1, tab.title());
            }
        }
        let style = if *tab == tabs.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    // An active toast takes over the status line
    if let Some(toast) = &app.toast {
        let line = Line::from(Span::styled(
            format!(" {}", toast.message),
            Style::default().fg(Color::Yellow),
        ));
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    let hints = match &app.screen {
        Screen::Auth(auth_screen) => match auth_screen {
            auth::AuthScreen::Welcome(_) => "↑↓ choose · enter select · esc quit",
            auth::AuthScreen::Login(_) => {
                "tab field · enter sign in · ctrl+f forgot password · ctrl+n new account · esc back"
            }
            auth::AuthScreen::Register(_) | auth::AuthScreen::ResetPassword(_) => {
                "tab field · enter continue · esc back"
            }
        },
        Screen::Tabs(tabs) => {
            if tabs.captures_input() {
                match tabs.active {
                    Tab::Messages => "enter send · esc back",
                    _ => "enter save · esc cancel",
                }
            } else {
                match tabs.active {
                    Tab::Nearby => {
                        "↑↓ select · enter preview · c connect · v visibility · r reload · tab switch · q quit"
                    }
                    Tab::Messages => "↑↓ select · enter open · tab switch · q quit",
                    Tab::Events => "↑↓ select · enter details · r rsvp · tab switch · q quit",
                    Tab::Notifications => {
                        "↑↓ select · enter mark read · a mark all · tab switch · q quit"
                    }
                    Tab::Profile => "↑↓ select · enter edit/toggle · tab switch · q quit",
                }
            }
        }
    };
    let line = Line::from(Span::styled(
        format!(" {hints}"),
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// A rect of the given size centered inside `area`, clamped to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(56, 20, area);
        assert_eq!(rect, Rect::new(22, 10, 56, 20));

        let small = Rect::new(0, 0, 30, 10);
        let rect = centered_rect(56, 20, small);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 10);
    }
}

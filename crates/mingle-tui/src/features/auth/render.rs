//! Auth screen rendering.

use mingle_core::forms::{Step, SubmissionStatus};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::{AuthScreen, FieldInput, LoginState, RegisterState, ResetState, WelcomeState};
use crate::common::TextField;
use crate::render::{SPINNER_FRAMES, centered_rect};

/// Panel width for the auth screens.
const PANEL_WIDTH: u16 = 56;

/// Renders the active auth screen into `area`.
pub fn render(auth: &AuthScreen, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    match auth {
        AuthScreen::Welcome(welcome) => render_welcome(welcome, frame, area),
        AuthScreen::Login(login) => render_login(login, spinner_frame, frame, area),
        AuthScreen::Register(register) => render_register(register, spinner_frame, frame, area),
        AuthScreen::ResetPassword(reset) => render_reset(reset, spinner_frame, frame, area),
    }
}

fn render_welcome(welcome: &WelcomeState, frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Mingle",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from("Meet people around you").alignment(Alignment::Center),
        Line::from(""),
        button_line("Sign in", welcome.selected == 0),
        Line::from(""),
        button_line("Create account", welcome.selected == 1),
        Line::from(""),
    ];
    draw_panel(lines, None, frame, area);
}

fn button_line(label: &str, selected: bool) -> Line<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    Line::from(Span::styled(format!("  {label}  "), style)).alignment(Alignment::Center)
}

fn render_login(login: &LoginState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(Span::styled(
            "Sign in",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (idx, input) in login.form.inputs.iter().enumerate() {
        push_field(
            &mut lines,
            input,
            idx == login.form.focus,
            login.fields.error(input.name),
        );
    }
    if login.status == SubmissionStatus::Pending {
        lines.push(pending_line("Signing in…", spinner_frame));
    }
    if let Some(banner) = login.fields.banner() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            banner.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
    draw_panel(lines, Some(" Mingle "), frame, area);
}

fn render_register(register: &RegisterState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let mut lines = flow_header(
        "Create account",
        register.flow.step_number(),
        register.flow.step_count(),
        step_title(register.flow.current_step(), false),
    );
    for (idx, input) in register.form.inputs.iter().enumerate() {
        push_field(
            &mut lines,
            input,
            idx == register.form.focus,
            register.flow.fields.error(input.name),
        );
    }
    if register.flow.is_pending() {
        lines.push(pending_line("Creating account…", spinner_frame));
    }
    push_banner(&mut lines, register.flow.fields.banner());
    draw_panel(lines, Some(" Mingle "), frame, area);
}

fn render_reset(reset: &ResetState, spinner_frame: usize, frame: &mut Frame, area: Rect) {
    let step = reset.flow.current_step();
    let mut lines = flow_header(
        "Reset password",
        reset.flow.step_number(),
        reset.flow.step_count(),
        step_title(step, true),
    );
    for (idx, input) in reset.form.inputs.iter().enumerate() {
        push_field(
            &mut lines,
            input,
            idx == reset.form.focus,
            reset.flow.fields.error(input.name),
        );
    }
    if reset.flow.is_pending() {
        let label = match step {
            Step::ResetEmail => "Sending code…",
            Step::Verification => "Verifying code…",
            _ => "Updating password…",
        };
        lines.push(pending_line(label, spinner_frame));
    }
    push_banner(&mut lines, reset.flow.fields.banner());
    draw_panel(lines, Some(" Mingle "), frame, area);
}

fn step_title(step: Step, reset: bool) -> &'static str {
    match step {
        Step::Identity => "About you",
        Step::Credentials => {
            if reset {
                "New password"
            } else {
                "Choose a password"
            }
        }
        Step::Verification => "Enter the code we sent",
        Step::ResetEmail => "Account email",
    }
}

fn flow_header(title: &str, step: usize, count: usize, subtitle: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(vec![
            Span::styled(title.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  step {step} of {count}"),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            subtitle.to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
    ]
}

fn push_field(
    lines: &mut Vec<Line<'static>>,
    input: &FieldInput,
    focused: bool,
    error: Option<&str>,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    lines.push(Line::from(Span::styled(
        input.label.to_string(),
        label_style,
    )));
    lines.push(value_line(&input.field, focused));
    if let Some(message) = error {
        lines.push(Line::from(Span::styled(
            format!("  {message}"),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));
}

/// Draws the field value with a reversed-video cursor when focused.
fn value_line(field: &TextField, focused: bool) -> Line<'static> {
    let display = field.display();
    if !focused {
        return Line::from(format!("  {display}"));
    }
    let cursor = field.cursor();
    let before: String = display.chars().take(cursor).collect();
    let at: String = display
        .chars()
        .nth(cursor)
        .map_or_else(|| " ".to_string(), |ch| ch.to_string());
    let after: String = display.chars().skip(cursor + 1).collect();
    Line::from(vec![
        Span::raw(format!("  {before}")),
        Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ])
}

fn pending_line(label: &str, spinner_frame: usize) -> Line<'static> {
    let glyph = SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()];
    Line::from(Span::styled(
        format!("{glyph} {label}"),
        Style::default().fg(Color::Yellow),
    ))
}

fn push_banner(lines: &mut Vec<Line<'static>>, banner: Option<&str>) {
    if let Some(message) = banner {
        lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        )));
    }
}

fn draw_panel(lines: Vec<Line<'static>>, title: Option<&str>, frame: &mut Frame, area: Rect) {
    let height = (lines.len() as u16).saturating_add(2).min(area.height);
    let panel = centered_rect(PANEL_WIDTH, height, area);
    let mut block = Block::default().borders(Borders::ALL);
    if let Some(title) = title {
        block = block.title(title.to_string());
    }
    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

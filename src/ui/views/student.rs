use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::portal::chat::ChatLogState;
use crate::portal::projects::{format_average, Project};
use crate::ui::app::{App, Panel};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DIM_TEXT, HEADER_TEXT, STAR_GOLD};
use crate::ui::views::card;

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(body);

    render_announcements(frame, chunks[0], app);
    render_projects(frame, chunks[1], app);
    render_chat(frame, chunks[2], app.chat(), app.panel() == Panel::Chat);
}

fn render_announcements(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(DIM_TEXT);

    let capacity = area.height.saturating_sub(2) as usize;
    let entries = &app.announcements().entries;
    let skip = entries.len().saturating_sub(capacity);
    let lines: Vec<Line> = entries
        .iter()
        .skip(skip)
        .map(|entry| {
            Line::from(vec![
                Span::styled("• ", dim_style),
                Span::styled(entry.clone(), text_style),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(card("Announcements", false)),
        area,
    );
}

fn render_projects(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let board = app.projects();
    let list_focused = app.panel() == Panel::Projects;
    let composer_focused = app.panel() == Panel::Composer;
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(DIM_TEXT);

    let mut lines: Vec<Line> = Vec::new();
    for (idx, project) in board.projects.iter().enumerate() {
        let selected = idx == board.selected;
        let marker = if selected && list_focused { "▶ " } else { "  " };
        let mut line = Line::from(vec![
            Span::styled(marker, dim_style),
            Span::styled(project.name.clone(), text_style),
            Span::styled(
                format!("  ★ {}", format_average(&project.ratings)),
                Style::default().fg(STAR_GOLD),
            ),
        ]);
        if selected && list_focused {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }

    if let Some(project) = board.selected_project() {
        lines.push(Line::from(""));
        lines.extend(detail_lines(project, area.width));
    }

    let mut composer = vec![
        Span::styled("  Feedback> ", dim_style),
        Span::styled(board.feedback_draft.clone(), text_style),
    ];
    if composer_focused {
        composer.push(Span::styled("█", text_style));
    }
    lines.push(Line::from(composer));

    frame.render_widget(
        Paragraph::new(lines).block(card("Projects", list_focused || composer_focused)),
        area,
    );
}

/// Members, rating and latest feedback for the selected project.
fn detail_lines(project: &Project, width: u16) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(DIM_TEXT);

    let members = if project.members.is_empty() {
        "None yet".to_string()
    } else {
        project.members.join(", ")
    };
    let mut lines = vec![Line::from(vec![
        Span::styled("  Members: ", dim_style),
        Span::styled(members, text_style),
    ])];

    // Show only the latest comments that can plausibly fit.
    let visible = 3.min(project.feedback.len());
    let skip = project.feedback.len() - visible;
    for entry in project.feedback.iter().skip(skip) {
        let mut entry = entry.clone();
        let max = width.saturating_sub(6) as usize;
        if entry.chars().count() > max {
            entry = entry.chars().take(max.saturating_sub(1)).collect::<String>() + "…";
        }
        lines.push(Line::from(vec![
            Span::styled("  💬 ", dim_style),
            Span::styled(entry, text_style),
        ]));
    }
    lines
}

fn render_chat(frame: &mut Frame<'_>, area: Rect, chat: &ChatLogState, focused: bool) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(DIM_TEXT);

    let capacity = area.height.saturating_sub(3) as usize;
    let skip = chat.messages.len().saturating_sub(capacity);
    let mut lines: Vec<Line> = chat
        .messages
        .iter()
        .skip(skip)
        .map(|msg| Line::from(Span::styled(msg.clone(), text_style)))
        .collect();

    let mut composer = vec![
        Span::styled("> ", dim_style),
        Span::styled(chat.draft.clone(), text_style),
    ];
    if focused {
        composer.push(Span::styled("█", text_style));
    }
    lines.push(Line::from(composer));

    frame.render_widget(
        Paragraph::new(lines).block(card("Collaboration Chat", focused)),
        area,
    );
}

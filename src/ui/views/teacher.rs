use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::portal::announcements::AnnouncementBoardState;
use crate::portal::projects::{format_average, ProjectBoardState};
use crate::ui::app::{App, Panel};
use crate::ui::theme::{ACTIVE_HIGHLIGHT, DIM_TEXT, HEADER_TEXT, PROGRESS_FILL};
use crate::ui::views::{card, progress_bar};

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(body);

    render_announcements(frame, chunks[0], app.announcements(), app.panel() == Panel::Composer);
    render_projects(frame, chunks[1], app.projects(), app.panel() == Panel::Projects);
}

fn render_announcements(
    frame: &mut Frame<'_>,
    area: Rect,
    board: &AnnouncementBoardState,
    focused: bool,
) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(DIM_TEXT);

    let mut lines: Vec<Line> = Vec::new();
    // Keep the newest entries in view when the card overflows.
    let capacity = area.height.saturating_sub(3) as usize;
    let skip = board.entries.len().saturating_sub(capacity);
    for entry in board.entries.iter().skip(skip) {
        lines.push(Line::from(vec![
            Span::styled("• ", dim_style),
            Span::styled(entry.clone(), text_style),
        ]));
    }

    let mut composer = vec![
        Span::styled("> ", dim_style),
        Span::styled(board.draft.clone(), text_style),
    ];
    if focused {
        composer.push(Span::styled("█", text_style));
    }
    lines.push(Line::from(composer));

    frame.render_widget(
        Paragraph::new(lines).block(card("Announcements", focused)),
        area,
    );
}

fn render_projects(frame: &mut Frame<'_>, area: Rect, board: &ProjectBoardState, focused: bool) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let dim_style = Style::default().fg(DIM_TEXT);
    let bar_style = Style::default().fg(PROGRESS_FILL);

    let bar_width = (area.width.saturating_sub(14) as usize).clamp(10, 40);
    let mut lines: Vec<Line> = Vec::new();
    for (idx, project) in board.projects.iter().enumerate() {
        let selected = focused && idx == board.selected;
        let marker = if selected { "▶ " } else { "  " };
        let mut name_line = Line::from(vec![
            Span::styled(marker, dim_style),
            Span::styled(project.name.clone(), text_style),
        ]);
        let mut stats_line = Line::from(Span::styled(
            format!(
                "    Feedbacks: {} | Avg Rating: {} | Members: {}",
                project.feedback.len(),
                format_average(&project.ratings),
                project.members.len()
            ),
            dim_style,
        ));
        let mut bar_line = Line::from(vec![
            Span::styled("    ", dim_style),
            Span::styled(progress_bar(project.progress, bar_width), bar_style),
        ]);
        if selected {
            let highlight = Style::default().bg(ACTIVE_HIGHLIGHT);
            name_line = name_line.style(highlight);
            stats_line = stats_line.style(highlight);
            bar_line = bar_line.style(highlight);
        }
        lines.push(name_line);
        lines.push(stats_line);
        lines.push(bar_line);
    }
    if board.projects.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No projects yet. Press 'a' to add one.",
            dim_style,
        )));
    }

    frame.render_widget(
        Paragraph::new(lines).block(card("Manage Projects", focused)),
        area,
    );
}

//! The three derived screens: login, teacher dashboard, student dashboard.

pub mod login;
pub mod student;
pub mod teacher;

use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT};

/// Bordered card block; the border turns accent-colored when focused.
pub fn card(title: &str, focused: bool) -> Block<'static> {
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
}

/// Text progress bar, e.g. `[█████·····] 50%`.
pub fn progress_bar(progress: u8, width: usize) -> String {
    let filled = (usize::from(progress.min(100)) * width) / 100;
    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for i in 0..width {
        bar.push(if i < filled { '█' } else { '·' });
    }
    bar.push(']');
    bar.push_str(&format!(" {progress}%"));
    bar
}

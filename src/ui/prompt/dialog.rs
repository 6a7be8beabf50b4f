//! Rendering for the input prompt overlay.

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::components::PopupDialog;
use crate::ui::prompt::state::PromptState;
use crate::ui::theme::{DIM_TEXT, HEADER_TEXT};

const DIALOG_WIDTH: u16 = 44;

pub fn render_prompt_dialog(frame: &mut Frame<'_>, state: &PromptState) {
    let PromptState::Visible { kind, input } = state else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(kind.hint(), Style::default().fg(DIM_TEXT))),
        Line::from(vec![
            Span::styled("> ", Style::default().fg(DIM_TEXT)),
            Span::styled(input.clone(), Style::default().fg(HEADER_TEXT)),
            Span::styled("█", Style::default().fg(HEADER_TEXT)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: Confirm  Esc: Cancel",
            Style::default().fg(DIM_TEXT),
        )),
    ];

    PopupDialog::new(kind.title(), lines)
        .fixed_width(DIALOG_WIDTH)
        .render(frame, frame.area());
}

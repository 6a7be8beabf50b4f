use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::portal::session::{LoginField, SessionState};
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT};
use crate::ui::views::card;

const BOX_WIDTH: u16 = 44;
const BOX_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame<'_>, body: Rect, session: &SessionState) {
    let SessionState::LoggedOut { form, .. } = session else {
        return;
    };

    let area = centered_rect_by_size(body, BOX_WIDTH, BOX_HEIGHT);
    frame.render_widget(Clear, area);

    let label_style = |field: LoginField| {
        if form.focus == field {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(DIM_TEXT)
        }
    };
    let value_style = Style::default().fg(HEADER_TEXT);
    let cursor = |field: LoginField| if form.focus == field { "█" } else { "" };

    let masked: String = "*".repeat(form.password.chars().count());
    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled("  Name:     ", label_style(LoginField::Name)),
            Span::styled(form.name.clone(), value_style),
            Span::styled(cursor(LoginField::Name), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Password: ", label_style(LoginField::Password)),
            Span::styled(masked, value_style),
            Span::styled(cursor(LoginField::Password), value_style),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Role:     ", label_style(LoginField::Role)),
            Span::styled(format!("◄ {} ►", form.role.label()), value_style),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter: Login",
            Style::default().fg(DIM_TEXT),
        )),
    ];

    let block = card("Peer Review Platform", true);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::Frame;

use crate::ui::app::{App, Screen};
use crate::ui::components::PopupDialog;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::prompt::render_prompt_dialog;
use crate::ui::theme::{DIM_TEXT, STATUS_ERROR};
use crate::ui::views;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.session().user()), header);

    match app.screen() {
        Screen::Login => views::login::render(frame, body, app.session()),
        Screen::Teacher => views::teacher::render(frame, body, app),
        Screen::Student => views::student::render(frame, body, app),
    }

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(app.screen(), footer), footer);

    // Modal overlays: the prompt sits above the screen, the alert above all.
    render_prompt_dialog(frame, app.prompt());
    if let Some(alert) = app.alert() {
        let lines = vec![
            Line::from(Span::styled(
                alert.to_string(),
                Style::default().fg(STATUS_ERROR),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter: Dismiss",
                Style::default().fg(DIM_TEXT),
            )),
        ];
        PopupDialog::new("Login", lines).render(frame, body);
    }
}

use crate::portal::session::User;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, user: Option<&User>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let accent_style = Style::default().fg(ACCENT);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("Peerboard", accent_style),
            Span::styled("  │  ", separator_style),
            Span::styled("Peer Review Portal", text_style),
        ];
        if let Some(user) = user {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(user.name.clone(), text_style));
            spans.push(Span::styled(
                format!(" ({})", user.role.label()),
                separator_style,
            ));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

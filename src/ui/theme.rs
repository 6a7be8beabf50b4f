use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x00, 0x7a, 0xcc);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const PROGRESS_FILL: Color = Color::Rgb(0x00, 0xf2, 0xfe);
pub const STAR_GOLD: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const DIM_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const HINTS: &[(&str, &str)] = &[
    ("+", "inc"),
    ("-", "dec"),
    ("l", "delayed"),
    ("Tab", "focus"),
    ("Enter", "press"),
    ("q", "quit"),
];

pub struct Footer;

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let key_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let mut spans = vec![Span::raw("  ")];
        for (idx, (key, action)) in HINTS.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled("  │  ", separator_style));
            }
            spans.push(Span::styled(format!("{key} {action}"), key_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

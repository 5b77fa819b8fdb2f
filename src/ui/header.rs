use crate::counter::CounterState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PENDING};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &CounterState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status, status_style) = if state.is_pending() {
            (
                format!("pending ({})", state.in_flight()),
                Style::default().fg(STATUS_PENDING),
            )
        } else {
            ("idle".to_string(), Style::default().fg(STATUS_OK))
        };
        let line = Line::from(vec![
            Span::styled("  counterflow", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

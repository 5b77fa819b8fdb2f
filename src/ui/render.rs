use crate::store::StoreAccess;
use crate::ui::app::App;
use crate::ui::counter_view::CounterView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, vertical_center};
use crate::ui::theme::STATUS_PENDING;
use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

/// Rows used by the counter view with its pending line.
const COUNTER_VIEW_HEIGHT: u16 = 5;

pub fn draw<S: StoreAccess>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(&app.state()), header);
    frame.render_widget(Clear, body);

    if app.is_loading() {
        // Nothing is drawn until the loading gate elapses.
        if let Some(spinner) = app.loading_spinner() {
            let line = Line::from(Span::styled(
                format!("{} Loading", spinner.frame()),
                Style::default().fg(STATUS_PENDING),
            ));
            frame.render_widget(
                Paragraph::new(line).alignment(Alignment::Center),
                vertical_center(body, 1),
            );
        }
    } else {
        let view = CounterView::new(app.props(), app.focus()).pending_spinner(app.pending_spinner());
        frame.render_widget(view, vertical_center(body, COUNTER_VIEW_HEIGHT));
    }

    frame.render_widget(Footer::new().widget(), footer);
}

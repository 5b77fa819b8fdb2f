//! The counter widget and the mapping between store state, props and
//! dispatched actions.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::counter::{CounterAction, CounterState};
use crate::store::StoreAccess;
use crate::ui::spinner::Spinner;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, HEADER_TEXT, STATUS_PENDING};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterButton {
    Increment,
    Decrement,
    DelayedIncrement,
}

impl CounterButton {
    pub const ALL: [CounterButton; 3] = [
        CounterButton::Increment,
        CounterButton::Decrement,
        CounterButton::DelayedIncrement,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CounterButton::Increment => "Increment",
            CounterButton::Decrement => "Decrement",
            CounterButton::DelayedIncrement => "Delayed increment",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CounterButton::Increment => CounterButton::Decrement,
            CounterButton::Decrement => CounterButton::DelayedIncrement,
            CounterButton::DelayedIncrement => CounterButton::Increment,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CounterButton::Increment => CounterButton::DelayedIncrement,
            CounterButton::Decrement => CounterButton::Increment,
            CounterButton::DelayedIncrement => CounterButton::Decrement,
        }
    }
}

/// What the counter view needs to draw itself and build actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterProps {
    pub count: i64,
    pub pending: bool,
    pub increment_amount: i64,
}

impl CounterProps {
    pub fn from_state(state: &CounterState, increment_amount: i64) -> Self {
        Self {
            count: state.count(),
            pending: state.is_pending(),
            increment_amount,
        }
    }

    /// The delayed increment button is disabled while one is pending.
    pub fn is_enabled(&self, button: CounterButton) -> bool {
        match button {
            CounterButton::DelayedIncrement => !self.pending,
            CounterButton::Increment | CounterButton::Decrement => true,
        }
    }

    pub fn action_for(&self, button: CounterButton) -> CounterAction {
        let amount = self.increment_amount;
        match button {
            CounterButton::Increment => CounterAction::IncrementBy { amount },
            CounterButton::Decrement => CounterAction::DecrementBy { amount },
            CounterButton::DelayedIncrement => CounterAction::DelayedIncrementBy { amount },
        }
    }
}

/// Dispatch the action behind `button`. Returns false if the button is
/// disabled and nothing was sent.
pub fn press<S: StoreAccess + ?Sized>(
    store: &S,
    props: &CounterProps,
    button: CounterButton,
) -> bool {
    if !props.is_enabled(button) {
        tracing::debug!(button = button.label(), "Ignoring press on disabled button");
        return false;
    }
    store.dispatch(props.action_for(button));
    true
}

pub struct CounterView<'a> {
    props: CounterProps,
    focus: CounterButton,
    pending_spinner: Option<&'a Spinner>,
}

impl<'a> CounterView<'a> {
    pub fn new(props: CounterProps, focus: CounterButton) -> Self {
        Self {
            props,
            focus,
            pending_spinner: None,
        }
    }

    pub fn pending_spinner(mut self, spinner: Option<&'a Spinner>) -> Self {
        self.pending_spinner = spinner;
        self
    }

    fn button_span(&self, button: CounterButton) -> Span<'static> {
        let mut style = Style::default().fg(HEADER_TEXT);
        if !self.props.is_enabled(button) {
            style = Style::default().fg(DISABLED_TEXT);
        }
        if button == self.focus {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        Span::styled(format!("[ {} ]", button.label()), style)
    }
}

impl Widget for CounterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut buttons = Vec::new();
        for (idx, button) in CounterButton::ALL.into_iter().enumerate() {
            if idx > 0 {
                buttons.push(Span::raw("  "));
            }
            buttons.push(self.button_span(button));
        }

        let mut lines = vec![
            Line::from(Span::styled(
                format!("Count {}", self.props.count),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(buttons),
        ];

        if let Some(spinner) = self.pending_spinner {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("{} Delayed increment in progress", spinner.frame()),
                Style::default().fg(STATUS_PENDING),
            )));
        }

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

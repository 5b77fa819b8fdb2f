use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::store::StoreAccess;
use crate::ui::app::App;
use crate::ui::counter_view::CounterButton;

pub fn handle_key<S: StoreAccess>(app: &mut App<S>, key: KeyEvent) {
    // Raw mode swallows SIGINT, so Ctrl-C arrives as a key.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
            app.request_quit();
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('+') | KeyCode::Char('i') => {
            app.press(CounterButton::Increment);
        }
        KeyCode::Char('-') | KeyCode::Char('d') => {
            app.press(CounterButton::Decrement);
        }
        KeyCode::Char('l') => {
            app.press(CounterButton::DelayedIncrement);
        }
        KeyCode::Tab | KeyCode::Right => app.focus_next(),
        KeyCode::BackTab | KeyCode::Left => app.focus_prev(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.press_focused();
        }
        _ => {}
    }
}

use std::io::Stdout;

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::config::Config;
use crate::counter::CounterState;
use crate::shutdown::{ShutdownCoordinator, ShutdownHandle};
use crate::store::{CounterStore, StoreHandle};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the counter UI until the user quits or shutdown is signalled.
///
/// Returns the final counter state. Delayed increments still in flight
/// when the user quits are allowed to settle before this returns.
pub async fn run(config: &Config, shutdown: &ShutdownCoordinator) -> anyhow::Result<CounterState> {
    let (store, store_task) = CounterStore::spawn(
        CounterState::new(config.counter.initial_count),
        config.store_config(),
    );
    let app = App::new(
        store.clone(),
        config.counter.increment_amount,
        config.ui.spinner_delay_ms,
    )?;

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(shutdown.handle())?;
    let result = event_loop(&mut terminal, app, &store, events, config, shutdown.handle()).await;

    shutdown.signal();
    drop(terminal);
    drop(guard);
    let last_published = store.subscribe();
    drop(store);

    let final_state = match store_task.await {
        Ok(state) => state,
        Err(err) => {
            tracing::error!("Counter store task failed: {}", err);
            *last_published.borrow()
        }
    };
    result.map(|()| final_state)
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App<StoreHandle>,
    store: &StoreHandle,
    mut events: EventHandler,
    config: &Config,
    shutdown: ShutdownHandle,
) -> anyhow::Result<()> {
    let mut updates = store.subscribe();
    let mut ticker = tokio::time::interval(config.tick_rate());
    let ready = store.state();
    tokio::pin!(ready);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            state = &mut ready, if app.is_loading() => app.finish_loading(state),
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = *updates.borrow_and_update();
                if !app.is_loading() {
                    app.on_state(state);
                }
            }
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                // The next draw picks up the new size.
                Some(AppEvent::Resize(..)) => {}
                None => break,
            },
            _ = ticker.tick() => app.on_tick(),
            _ = shutdown.wait() => break,
        }
    }

    Ok(())
}

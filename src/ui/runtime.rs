use crate::config::Config;
use crate::feed::FeedClient;
use crate::loader::spawn_fetch;
use crate::store::CounterStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the item list screen until the user quits.
///
/// `store` is the process-wide counter; the screen gets a handle to it
/// rather than reaching for a global.
pub fn run(
    runtime: &Handle,
    config: &Config,
    username: String,
    store: CounterStore,
) -> anyhow::Result<()> {
    let client = FeedClient::new(config.feed.endpoint.clone())?;
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(username, store);
    let events = EventHandler::new(tick_rate);

    let size = terminal.size()?;
    app.on_resize(size.width, size.height);

    if let Some(scope) = app.mount() {
        tracing::info!(endpoint = %client.endpoint(), "Screen mounted, fetching items");
        spawn_fetch(runtime, client, scope, events.sender());
    }

    let mut dirty = true;
    let mut failure = None;
    loop {
        if dirty {
            terminal.draw(|frame| draw(frame, &app))?;
            dirty = false;
        }
        if app.should_quit() {
            break;
        }

        match handle_event(&mut app, events.next(tick_rate)) {
            Ok(LoopStep::Redraw) => dirty = true,
            Ok(LoopStep::Continue) => {}
            Ok(LoopStep::Exit) => break,
            Err(err) => {
                failure = Some(err);
                break;
            }
        }

        // The badge follows the shared counter, whoever moved it.
        if app.badge_changed() {
            dirty = true;
        }
    }

    app.unmount();
    drop(guard);
    tracing::info!(clicks = app.click_count(), "Screen closed");
    match failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// What the loop does after one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStep {
    Redraw,
    Continue,
    Exit,
}

/// Apply one received event (or receive timeout) to the screen.
///
/// A dead input thread is an error: with the terminal in raw mode there is
/// no other way for the user to leave.
pub fn handle_event(
    app: &mut App,
    event: Result<AppEvent, RecvTimeoutError>,
) -> anyhow::Result<LoopStep> {
    let step = match event {
        Ok(AppEvent::Key(key)) => {
            handle_key(app, key);
            LoopStep::Redraw
        }
        Ok(AppEvent::Mouse(mouse)) => {
            handle_mouse(app, mouse);
            LoopStep::Redraw
        }
        Ok(AppEvent::Resize(cols, rows)) => {
            app.on_resize(cols, rows);
            LoopStep::Redraw
        }
        Ok(AppEvent::FeedLoaded(items)) => {
            app.on_items_loaded(items);
            LoopStep::Redraw
        }
        Ok(AppEvent::FeedFailed) => {
            app.on_fetch_failed();
            LoopStep::Continue
        }
        Ok(AppEvent::InputFailed(reason)) => {
            anyhow::bail!("Terminal input stopped: {reason}")
        }
        Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => LoopStep::Continue,
        Err(RecvTimeoutError::Disconnected) => {
            anyhow::bail!("Terminal input stopped: event channel closed")
        }
    };
    Ok(if app.should_quit() { LoopStep::Exit } else { step })
}

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::feed::HealthItem;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
    Resize(u16, u16),
    /// The screen's fetch succeeded.
    FeedLoaded(Vec<HealthItem>),
    /// The screen's fetch failed; already logged.
    FeedFailed,
    /// The input thread could not read the terminal and has stopped.
    InputFailed(String),
}

/// Where terminal input comes from.
pub trait EventSource: Send + 'static {
    /// Wait up to `timeout` for the next event.
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>>;
}

/// The real terminal, through crossterm.
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_event(&mut self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            event::read().map(Some)
        } else {
            Ok(None)
        }
    }
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_source(tick_rate, CrosstermEvents)
    }

    /// Start the input thread over `source`. It stops once the handler is
    /// dropped, or after reporting `InputFailed` when the source errors.
    pub fn with_source<S: EventSource>(tick_rate: Duration, mut source: S) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                // Short poll so a dropped receiver is noticed quickly.
                let timeout = tick_rate
                    .saturating_sub(last_tick.elapsed())
                    .min(Duration::from_millis(50));

                let forwarded = match source.next_event(timeout) {
                    Ok(Some(Event::Key(key))) => event_tx.send(AppEvent::Key(key)),
                    Ok(Some(Event::Mouse(mouse))) => event_tx.send(AppEvent::Mouse(mouse)),
                    Ok(Some(Event::Resize(cols, rows))) => {
                        event_tx.send(AppEvent::Resize(cols, rows))
                    }
                    Ok(_) => Ok(()),
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal input failed");
                        let _ = event_tx.send(AppEvent::InputFailed(err.to_string()));
                        break;
                    }
                };
                if forwarded.is_err() {
                    break;
                }

                if last_tick.elapsed() >= tick_rate {
                    if event_tx.send(AppEvent::Tick).is_err() {
                        break;
                    }
                    last_tick = Instant::now();
                }
            }
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

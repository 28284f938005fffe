use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent, KeyEventKind};
use tracing::warn;

/// Unified event type consumed by the app runner
#[derive(Clone, Debug)]
pub enum TypoEvent {
    Key(KeyEvent),
    Resize,
    Tick,
    /// The event source hung up, no more input will arrive
    Closed,
}

/// Source of terminal events (keyboard, resize, etc.)
pub trait TypoEventSource: Send + 'static {
    /// Block for up to `timeout` waiting for an event.
    fn recv_timeout(&self, timeout: Duration) -> Result<TypoEvent, RecvTimeoutError>;
}

/// Production event source using crossterm
pub struct CrosstermEventSource {
    rx: Receiver<TypoEvent>,
}

impl CrosstermEventSource {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let evt = match event::read() {
                // key releases are reported on some platforms, only presses edit the buffer
                Ok(CtEvent::Key(key)) if key.kind == KeyEventKind::Press => TypoEvent::Key(key),
                Ok(CtEvent::Resize(_, _)) => TypoEvent::Resize,
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "terminal event reader stopped");
                    break;
                }
            };

            if tx.send(evt).is_err() {
                break;
            }
        });

        Self { rx }
    }
}

impl Default for CrosstermEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TypoEventSource for CrosstermEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TypoEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Configurable ticker interface
pub trait Ticker: Send + Sync + 'static {
    fn interval(&self) -> Duration;
}

/// Fixed interval ticker
#[derive(Clone, Copy, Debug)]
pub struct FixedTicker {
    interval: Duration,
}

impl FixedTicker {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Ticker for FixedTicker {
    fn interval(&self) -> Duration {
        self.interval
    }
}

/// Test event source for unit tests
pub struct TestEventSource {
    rx: Receiver<TypoEvent>,
}

impl TestEventSource {
    pub fn new(rx: Receiver<TypoEvent>) -> Self {
        Self { rx }
    }
}

impl TypoEventSource for TestEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<TypoEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Runner that advances the application one event/tick at a time
pub struct Runner<E: TypoEventSource, T: Ticker> {
    event_source: E,
    ticker: T,
}

impl<E: TypoEventSource, T: Ticker> Runner<E, T> {
    pub fn new(event_source: E, ticker: T) -> Self {
        Self {
            event_source,
            ticker,
        }
    }

    /// Blocks up to tick interval and returns the next event, Tick on timeout
    /// and Closed once the source is gone
    pub fn step(&self) -> TypoEvent {
        match self.event_source.recv_timeout(self.ticker.interval()) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => TypoEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => TypoEvent::Closed,
        }
    }
}

//! Event-dispatch service: serializes keystrokes for one calculator.
//!
//! The UI side holds a [`CalculatorHandle`] and sends [`Event`]s into a
//! bounded queue. A single task running [`CalculatorService::run`] applies
//! them one at a time and broadcasts a [`DisplayUpdate`] after each, so a
//! calculator never sees two keystrokes at once no matter how many handles
//! exist.

use calcpad_config::AppConfig;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::controller::{CalcState, Calculator};
use crate::event::Event;

/// Shutdown signal sent via broadcast channel.
#[derive(Debug, Clone)]
struct ShutdownSignal;

/// What the collaborator renders after each keystroke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    pub buffer: String,
    pub state: CalcState,
}

impl DisplayUpdate {
    fn of(calculator: &Calculator) -> Self {
        Self {
            buffer: calculator.buffer().to_string(),
            state: calculator.state(),
        }
    }
}

/// Errors returned to handle holders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("calculator service has stopped")]
    Closed,

    #[error("keystroke queue is full")]
    Full,
}

/// Owns a [`Calculator`] and applies queued keystrokes to it.
pub struct CalculatorService {
    calculator: Calculator,
    events_rx: mpsc::Receiver<Event>,
    display_tx: broadcast::Sender<DisplayUpdate>,
    shutdown_rx: broadcast::Receiver<ShutdownSignal>,
    // Keeps the shutdown channel open after every handle is gone, so queued
    // keystrokes are still drained.
    _shutdown_tx: broadcast::Sender<ShutdownSignal>,
}

/// Cloneable sending side of a [`CalculatorService`].
#[derive(Debug, Clone)]
pub struct CalculatorHandle {
    events_tx: mpsc::Sender<Event>,
    display_tx: broadcast::Sender<DisplayUpdate>,
    shutdown_tx: broadcast::Sender<ShutdownSignal>,
}

impl CalculatorService {
    /// Wrap `calculator` with a keystroke queue of `queue_capacity` entries.
    pub fn new(calculator: Calculator, queue_capacity: usize) -> (Self, CalculatorHandle) {
        let capacity = queue_capacity.max(1);
        let (events_tx, events_rx) = mpsc::channel(capacity);
        let (display_tx, _) = broadcast::channel(capacity);
        let (shutdown_tx, shutdown_rx) = broadcast::channel(1);

        let handle = CalculatorHandle {
            events_tx,
            display_tx: display_tx.clone(),
            shutdown_tx: shutdown_tx.clone(),
        };
        let service = Self {
            calculator,
            events_rx,
            display_tx,
            shutdown_rx,
            _shutdown_tx: shutdown_tx,
        };
        (service, handle)
    }

    /// Build a fresh calculator and service from the loaded configuration.
    pub fn from_config(config: &AppConfig) -> (Self, CalculatorHandle) {
        Self::new(
            Calculator::with_config(&config.display),
            config.service.queue_capacity,
        )
    }

    /// Apply keystrokes until shutdown is requested or every handle has been
    /// dropped, then hand back the calculator. Keystrokes still queued when
    /// shutdown is requested are discarded.
    pub async fn run(mut self) -> Calculator {
        info!(buffer = %self.calculator.buffer(), "calculator service starting");

        loop {
            tokio::select! {
                biased;
                _ = self.shutdown_rx.recv() => {
                    info!("shutdown requested, stopping calculator service");
                    break;
                }
                event = self.events_rx.recv() => match event {
                    Some(event) => {
                        self.calculator.handle(event);
                        // No subscribers is fine; the buffer is still current.
                        let _ = self.display_tx.send(DisplayUpdate::of(&self.calculator));
                    }
                    None => {
                        debug!("all handles dropped");
                        break;
                    }
                },
            }
        }

        info!(buffer = %self.calculator.buffer(), "calculator service stopped");
        self.calculator
    }
}

impl CalculatorHandle {
    /// Queue a keystroke, waiting for room if the queue is full.
    pub async fn send(&self, event: Event) -> Result<(), ServiceError> {
        self.events_tx
            .send(event)
            .await
            .map_err(|_| ServiceError::Closed)
    }

    /// Queue a keystroke without waiting.
    pub fn try_send(&self, event: Event) -> Result<(), ServiceError> {
        self.events_tx.try_send(event).map_err(|err| match err {
            mpsc::error::TrySendError::Full(_) => ServiceError::Full,
            mpsc::error::TrySendError::Closed(_) => ServiceError::Closed,
        })
    }

    /// Receive a [`DisplayUpdate`] for every keystroke applied from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DisplayUpdate> {
        self.display_tx.subscribe()
    }

    /// Request a graceful shutdown of the service.
    pub fn shutdown(&self) {
        let _ = self.shutdown_tx.send(ShutdownSignal);
    }
}

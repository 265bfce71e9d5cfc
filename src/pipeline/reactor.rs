use thiserror::Error;
use tokio::sync::{broadcast, mpsc};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::engine::{Input, PipelineEngine};
use super::event::Orientation;
use super::lifecycle::{Command, Notification, PipelineState};
use super::metrics::PipelineStats;
use super::signal::RawSignal;

const NOTIFICATION_CAPACITY: usize = 16;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("pipeline input queue is full")]
    QueueFull,
    #[error("pipeline has shut down")]
    Closed,
}

/// Sending side of the pipeline. Cheap to clone; one per producing context.
#[derive(Clone)]
pub struct PipelineHandle {
    tx: mpsc::Sender<Input>,
    notifications: broadcast::Sender<Notification>,
    cancel: CancellationToken,
}

impl PipelineHandle {
    /// Non-blocking enqueue for the instrumentation callback. A full queue
    /// drops the signal.
    pub fn try_signal(&self, signal: RawSignal) -> Result<(), SubmitError> {
        self.tx.try_send(Input::Signal(signal)).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => SubmitError::QueueFull,
            mpsc::error::TrySendError::Closed(_) => SubmitError::Closed,
        })
    }

    pub async fn command(&self, command: Command) -> Result<(), SubmitError> {
        self.send(Input::Command(command)).await
    }

    pub async fn configuration_changed(&self, orientation: Orientation) -> Result<(), SubmitError> {
        self.send(Input::ConfigurationChanged { orientation }).await
    }

    pub async fn send(&self, input: Input) -> Result<(), SubmitError> {
        self.tx.send(input).await.map_err(|_| SubmitError::Closed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.notifications.subscribe()
    }

    pub fn shutdown(&self) {
        self.cancel.cancel();
    }
}

/// Async driver. Drains one queue carrying signals and commands, in arrival
/// order, into the engine it owns.
pub struct Reactor {
    receiver: mpsc::Receiver<Input>,
    notifications: broadcast::Sender<Notification>,
    cancel: CancellationToken,
    pub engine: PipelineEngine,
}

impl Reactor {
    pub fn new(engine: PipelineEngine, queue_capacity: usize) -> (Self, PipelineHandle) {
        let (tx, receiver) = mpsc::channel(queue_capacity.max(1));
        let (notifications, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        let cancel = CancellationToken::new();

        let handle = PipelineHandle {
            tx,
            notifications: notifications.clone(),
            cancel: cancel.clone(),
        };
        let reactor = Self {
            receiver,
            notifications,
            cancel,
            engine,
        };
        (reactor, handle)
    }

    /// Apply one input and publish whatever notifications it produced.
    pub fn step(&mut self, input: Input) -> Vec<Notification> {
        let notifications = self.engine.step(input);
        for n in &notifications {
            // No subscribers is fine.
            let _ = self.notifications.send(*n);
        }
        notifications
    }

    /// Runs until every handle is dropped or `shutdown` is called, then
    /// destroys the pipeline so the kernel is not left running.
    pub async fn run(mut self) -> PipelineStats {
        info!("Reactor started");

        loop {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!("Reactor cancelled");
                    break;
                }
                input = self.receiver.recv() => match input {
                    Some(input) => {
                        self.step(input);
                    }
                    None => {
                        debug!("All pipeline handles dropped");
                        break;
                    }
                },
            }
        }

        if self.engine.state() == PipelineState::Running {
            self.step(Input::Command(Command::PipelineDestroy));
        }

        let stats = self.engine.stats().clone();
        info!(?stats, "Reactor stopped");
        stats
    }
}

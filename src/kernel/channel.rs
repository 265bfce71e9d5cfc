use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::info;

use super::{KernelError, KernelFactory, LoggingKernel};
use crate::pipeline::event::StructuredEvent;

/// Kernel that forwards events into a bounded channel drained by whoever
/// stands in for the logging subsystem (the binary prints them).
pub struct ChannelKernel {
    tx: mpsc::Sender<StructuredEvent>,
    running: bool,
}

impl ChannelKernel {
    pub fn new(tx: mpsc::Sender<StructuredEvent>) -> Self {
        Self { tx, running: false }
    }
}

impl LoggingKernel for ChannelKernel {
    fn is_running(&self) -> bool {
        self.running
    }

    fn start(&mut self) -> Result<(), KernelError> {
        if self.tx.is_closed() {
            return Err(KernelError::Startup("event consumer has gone away".to_string()));
        }
        self.running = true;
        info!("Channel kernel up");
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        info!("Channel kernel down");
    }

    fn submit(&self, event: StructuredEvent) -> Result<(), KernelError> {
        self.tx.try_send(event).map_err(|e| match e {
            TrySendError::Full(_) => KernelError::Backpressure,
            TrySendError::Closed(_) => KernelError::Closed,
        })
    }
}

pub struct ChannelKernelFactory {
    tx: mpsc::Sender<StructuredEvent>,
}

impl ChannelKernelFactory {
    pub fn new(tx: mpsc::Sender<StructuredEvent>) -> Self {
        Self { tx }
    }

    /// Factory plus the receiving end, with room for `buffer` in-flight events.
    pub fn with_buffer(buffer: usize) -> (Self, mpsc::Receiver<StructuredEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self::new(tx), rx)
    }
}

impl KernelFactory for ChannelKernelFactory {
    fn initialize(&mut self) -> Result<Box<dyn LoggingKernel>, KernelError> {
        if self.tx.is_closed() {
            return Err(KernelError::Initialization("event consumer has gone away".to_string()));
        }
        Ok(Box::new(ChannelKernel::new(self.tx.clone())))
    }
}

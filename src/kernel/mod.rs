//! Boundary to the external logging kernel.
//!
//! The kernel persists or uploads structured events; none of that lives here.
//! The pipeline only needs to start it, stop it, ask whether it is up, and hand
//! it events without waiting on persistence.

pub mod channel;

use thiserror::Error;

use crate::pipeline::event::StructuredEvent;

#[derive(Debug, Error)]
pub enum KernelError {
    #[error("kernel initialization failed: {0}")]
    Initialization(String),
    #[error("kernel startup failed: {0}")]
    Startup(String),
    #[error("kernel ingestion queue is full")]
    Backpressure,
    #[error("kernel ingestion channel closed")]
    Closed,
}

/// A started-or-stopped kernel instance.
///
/// `submit` must not block: it is called from the signal pass and only while
/// `is_running()` holds.
pub trait LoggingKernel: Send {
    fn is_running(&self) -> bool;
    fn start(&mut self) -> Result<(), KernelError>;
    fn stop(&mut self);
    fn submit(&self, event: StructuredEvent) -> Result<(), KernelError>;
}

/// Acquires configuration and allocates a kernel. Called until it succeeds once.
pub trait KernelFactory: Send {
    fn initialize(&mut self) -> Result<Box<dyn LoggingKernel>, KernelError>;
}

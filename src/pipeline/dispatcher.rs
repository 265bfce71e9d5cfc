use std::sync::Arc;

use thiserror::Error;
use tracing::trace;

use super::classifier::{Category, EventShape};
use super::event::{InteractionEvent, InteractionKind, Orientation, ScreenVisitEvent, StructuredEvent};
use super::signal::RawSignal;
use super::time::{Clock, SystemClock};
use crate::kernel::{KernelError, LoggingKernel};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("screen visit needs an origin")]
    MissingOrigin,
    #[error(transparent)]
    Kernel(#[from] KernelError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The kernel accepted the hand-off. Persistence is not awaited.
    Submitted,
    /// Kernel was not running; the event was dropped.
    KernelDown,
}

pub struct EventDispatcher {
    clock: Arc<dyn Clock>,
    orientation: Orientation,
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl EventDispatcher {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            orientation: Orientation::Undefined,
        }
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn build(&self, signal: &RawSignal, shape: EventShape) -> Result<StructuredEvent, DispatchError> {
        let timestamp = self.clock.now_millis();

        match shape {
            EventShape::ScreenVisit => {
                let origin = signal.origin().ok_or(DispatchError::MissingOrigin)?;
                Ok(StructuredEvent::ScreenVisit(ScreenVisitEvent {
                    origin: origin.to_string(),
                    element_class_name: signal.class_name.clone(),
                    title: signal.text.join(" "),
                    timestamp,
                    orientation: self.orientation,
                }))
            }
            EventShape::Interaction(kind) => Ok(StructuredEvent::Interaction(interaction(signal, kind, timestamp))),
        }
    }

    pub fn dispatch(
        &self,
        kernel: &dyn LoggingKernel,
        signal: &RawSignal,
        category: &Category,
    ) -> Result<Delivery, DispatchError> {
        if !kernel.is_running() {
            trace!(kind = ?signal.kind, "kernel not running, dropping event");
            return Ok(Delivery::KernelDown);
        }

        let event = self.build(signal, category.shape)?;
        kernel.submit(event)?;
        Ok(Delivery::Submitted)
    }
}

fn interaction(signal: &RawSignal, kind: InteractionKind, timestamp: u64) -> InteractionEvent {
    match &signal.node {
        Some(node) => InteractionEvent {
            interaction_kind: kind,
            element_class_name: node.class_name.clone(),
            text: node.text.clone(),
            content_description: node.content_description.clone(),
            resource_id: node.resource_id.clone(),
            timestamp,
            screen_bounds: node.screen_bounds,
            parent_bounds: node.parent_bounds,
        },
        None => InteractionEvent {
            interaction_kind: kind,
            element_class_name: None,
            text: None,
            content_description: None,
            resource_id: None,
            timestamp,
            screen_bounds: None,
            parent_bounds: None,
        },
    }
}

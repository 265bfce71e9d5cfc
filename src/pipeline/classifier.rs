use tracing::debug;

use super::event::InteractionKind;
use super::signal::{RawSignal, SignalKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Processed whenever the filter allows it.
    Global,
    /// Filtered and passed through the debouncer.
    Debounced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventShape {
    ScreenVisit,
    Interaction(InteractionKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub scope: Scope,
    pub shape: EventShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingDecision {
    Process(Category),
    Ignored,
    /// No usable origin. The caller must not filter or dispatch.
    DroppedMalformed,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct EventClassifier;

impl EventClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Pure function: Signal -> Decision. Logs malformed signals, nothing else.
    pub fn classify(&self, signal: &RawSignal) -> ProcessingDecision {
        if signal.origin().is_none() {
            debug!(kind = ?signal.kind, timestamp = signal.timestamp, "signal has no origin, dropping");
            return ProcessingDecision::DroppedMalformed;
        }

        let category = match signal.kind {
            SignalKind::WindowStateChanged => Category {
                scope: Scope::Global,
                shape: EventShape::ScreenVisit,
            },
            SignalKind::ViewScrolled => Category {
                scope: Scope::Debounced,
                shape: EventShape::Interaction(InteractionKind::Scrolled),
            },
            kind => match InteractionKind::from_signal(kind) {
                Some(interaction) => Category {
                    scope: Scope::Global,
                    shape: EventShape::Interaction(interaction),
                },
                None => return ProcessingDecision::Ignored,
            },
        };

        ProcessingDecision::Process(category)
    }
}

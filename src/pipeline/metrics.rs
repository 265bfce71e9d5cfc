use serde::Serialize;

/// Result of one signal pass through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalOutcome {
    /// Pipeline not running; nothing looked at.
    Inactive,
    DroppedMalformed,
    Ignored,
    Filtered,
    Debounced,
    Dispatched,
    /// Accepted by the pipeline but the kernel reported itself down.
    KernelDown,
    Failed,
}

/// Counters only. Read for observability, never for decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub received: u64,
    pub inactive: u64,
    pub malformed: u64,
    pub ignored: u64,
    pub filtered: u64,
    pub debounced: u64,
    pub dispatched: u64,
    pub kernel_down: u64,
    pub failed: u64,
    pub starts: u64,
    pub stops: u64,
}

impl PipelineStats {
    pub fn record(&mut self, outcome: SignalOutcome) {
        self.received += 1;
        match outcome {
            SignalOutcome::Inactive => self.inactive += 1,
            SignalOutcome::DroppedMalformed => self.malformed += 1,
            SignalOutcome::Ignored => self.ignored += 1,
            SignalOutcome::Filtered => self.filtered += 1,
            SignalOutcome::Debounced => self.debounced += 1,
            SignalOutcome::Dispatched => self.dispatched += 1,
            SignalOutcome::KernelDown => self.kernel_down += 1,
            SignalOutcome::Failed => self.failed += 1,
        }
    }
}

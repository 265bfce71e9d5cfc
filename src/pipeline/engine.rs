use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::classifier::{EventClassifier, ProcessingDecision, Scope};
use super::debounce::Debouncer;
use super::dispatcher::{Delivery, EventDispatcher};
use super::event::Orientation;
use super::filter::PackageFilter;
use super::lifecycle::{Command, LifecycleController, Notification, PipelineState};
use super::metrics::{PipelineStats, SignalOutcome};
use super::signal::RawSignal;
use super::time::{Clock, SystemClock};
use crate::config::{FilterScope, ServiceConfig};
use crate::kernel::KernelFactory;

/// Everything that can reach the engine, in one stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", rename_all = "snake_case")]
pub enum Input {
    Signal(RawSignal),
    Command(Command),
    ConfigurationChanged { orientation: Orientation },
}

/// Owns the pipeline stages and all state shared between signals and commands.
///
/// The engine is not synchronized itself; exactly one owner (the reactor task)
/// drives it, which serializes signal passes against lifecycle commands.
pub struct PipelineEngine {
    lifecycle: LifecycleController,
    classifier: EventClassifier,
    filter: PackageFilter,
    filter_scope: FilterScope,
    debouncer: Debouncer,
    dispatcher: EventDispatcher,
    stats: PipelineStats,
}

impl PipelineEngine {
    pub fn new(config: &ServiceConfig, factory: Box<dyn KernelFactory>) -> Self {
        Self::with_clock(config, factory, Arc::new(SystemClock))
    }

    /// The inclusion list is read here, once.
    pub fn with_clock(config: &ServiceConfig, factory: Box<dyn KernelFactory>, clock: Arc<dyn Clock>) -> Self {
        Self {
            lifecycle: LifecycleController::new(factory),
            classifier: EventClassifier::new(),
            filter: PackageFilter::new(config.include_only.as_deref()),
            filter_scope: config.filter_scope,
            debouncer: Debouncer::new(config.quiet_window()),
            dispatcher: EventDispatcher::new(clock),
            stats: PipelineStats::default(),
        }
    }

    pub fn state(&self) -> PipelineState {
        self.lifecycle.state()
    }

    pub fn lifecycle(&self) -> &LifecycleController {
        &self.lifecycle
    }

    pub fn debouncer(&self) -> &Debouncer {
        &self.debouncer
    }

    pub fn stats(&self) -> &PipelineStats {
        &self.stats
    }

    pub fn orientation(&self) -> Orientation {
        self.dispatcher.orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.dispatcher.set_orientation(orientation);
    }

    pub fn step(&mut self, input: Input) -> Vec<Notification> {
        match input {
            Input::Signal(signal) => {
                self.handle_signal(signal);
                Vec::new()
            }
            Input::Command(command) => self.handle_command(command),
            Input::ConfigurationChanged { orientation } => {
                self.set_orientation(orientation);
                Vec::new()
            }
        }
    }

    pub fn handle_command(&mut self, command: Command) -> Vec<Notification> {
        let was_running = self.state() == PipelineState::Running;
        let notification = self.lifecycle.handle(command);

        if was_running && self.state() != PipelineState::Running {
            self.debouncer.reset();
        }

        match notification {
            Some(Notification::PipelineStarted) => self.stats.starts += 1,
            Some(Notification::PipelineStopped) => self.stats.stops += 1,
            None => {}
        }

        notification.into_iter().collect()
    }

    pub fn handle_signal(&mut self, signal: RawSignal) -> SignalOutcome {
        let outcome = self.process(&signal);
        self.stats.record(outcome);
        outcome
    }

    fn process(&mut self, signal: &RawSignal) -> SignalOutcome {
        // === 1. GATE ===
        if self.state() != PipelineState::Running {
            return SignalOutcome::Inactive;
        }
        let Some(kernel) = self.lifecycle.kernel() else {
            return SignalOutcome::Inactive;
        };

        // === 2. CLASSIFY ===
        let category = match self.classifier.classify(signal) {
            ProcessingDecision::Process(category) => category,
            ProcessingDecision::Ignored => return SignalOutcome::Ignored,
            ProcessingDecision::DroppedMalformed => return SignalOutcome::DroppedMalformed,
        };

        // === 3. FILTER ===
        let filtered = !matches!((self.filter_scope, category.scope), (FilterScope::ScopedOnly, Scope::Global));
        if filtered {
            let origin = signal.origin().unwrap_or_default();
            if !self.filter.is_allowed(origin) {
                debug!(origin, kind = ?signal.kind, "origin not included");
                return SignalOutcome::Filtered;
            }
        }

        // === 4. DEBOUNCE ===
        if category.scope == Scope::Debounced && self.debouncer.should_suppress(signal.timestamp) {
            return SignalOutcome::Debounced;
        }

        // === 5. DISPATCH ===
        match self.dispatcher.dispatch(kernel, signal, &category) {
            Ok(Delivery::Submitted) => SignalOutcome::Dispatched,
            Ok(Delivery::KernelDown) => SignalOutcome::KernelDown,
            Err(e) => {
                warn!("Dispatch failed: {}", e);
                SignalOutcome::Failed
            }
        }
    }
}

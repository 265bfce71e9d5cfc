#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use tapline::kernel::{KernelError, KernelFactory, LoggingKernel};
use tapline::pipeline::engine::PipelineEngine;
use tapline::pipeline::event::StructuredEvent;
use tapline::pipeline::signal::{RawSignal, SignalKind};
use tapline::pipeline::time::ManualClock;
use tapline::ServiceConfig;

/// What the mock kernel saw. Shared between the test and the boxed kernel.
#[derive(Debug, Default)]
pub struct KernelLog {
    pub inits: u32,
    pub starts: u32,
    pub stops: u32,
    pub events: Vec<StructuredEvent>,
    /// Makes a started kernel report itself down.
    pub force_down: bool,
}

pub type SharedLog = Arc<Mutex<KernelLog>>;

pub struct MockKernel {
    log: SharedLog,
    running: bool,
    fail_starts: u32,
}

impl LoggingKernel for MockKernel {
    fn is_running(&self) -> bool {
        self.running && !self.log.lock().unwrap().force_down
    }

    fn start(&mut self) -> Result<(), KernelError> {
        if self.fail_starts > 0 {
            self.fail_starts -= 1;
            return Err(KernelError::Startup("mock start failure".to_string()));
        }
        self.running = true;
        self.log.lock().unwrap().starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
        self.log.lock().unwrap().stops += 1;
    }

    fn submit(&self, event: StructuredEvent) -> Result<(), KernelError> {
        self.log.lock().unwrap().events.push(event);
        Ok(())
    }
}

pub struct MockFactory {
    log: SharedLog,
    fail_inits: u32,
    fail_starts: u32,
}

impl MockFactory {
    pub fn new(log: SharedLog) -> Self {
        Self { log, fail_inits: 0, fail_starts: 0 }
    }

    pub fn failing_inits(mut self, n: u32) -> Self {
        self.fail_inits = n;
        self
    }

    pub fn failing_starts(mut self, n: u32) -> Self {
        self.fail_starts = n;
        self
    }
}

impl KernelFactory for MockFactory {
    fn initialize(&mut self) -> Result<Box<dyn LoggingKernel>, KernelError> {
        if self.fail_inits > 0 {
            self.fail_inits -= 1;
            return Err(KernelError::Initialization("mock config unreadable".to_string()));
        }
        self.log.lock().unwrap().inits += 1;
        Ok(Box::new(MockKernel {
            log: self.log.clone(),
            running: false,
            fail_starts: self.fail_starts,
        }))
    }
}

pub fn new_log() -> SharedLog {
    Arc::new(Mutex::new(KernelLog::default()))
}

pub fn engine_with(config: &ServiceConfig, log: &SharedLog) -> PipelineEngine {
    PipelineEngine::with_clock(config, Box::new(MockFactory::new(log.clone())), Arc::new(ManualClock::new(1_000)))
}

pub fn engine(log: &SharedLog) -> PipelineEngine {
    engine_with(&ServiceConfig::default(), log)
}

pub fn click(origin: &str, timestamp: u64) -> RawSignal {
    RawSignal::new(SignalKind::ViewClicked, origin, timestamp)
}

pub fn scroll(origin: &str, timestamp: u64) -> RawSignal {
    RawSignal::new(SignalKind::ViewScrolled, origin, timestamp)
}

pub fn event_count(log: &SharedLog) -> usize {
    log.lock().unwrap().events.len()
}

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::kernel::{KernelFactory, LoggingKernel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    #[default]
    Stopped,
    Running,
    /// Administrative hold. Power and create commands are ignored until cleared.
    Disabled,
}

/// Inbound control messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    PipelineCreate,
    PipelineDestroy,
    PowerOn,
    PowerOff,
    PowerShutdown,
    SetDisabledState { disabled: bool },
}

/// Outbound, fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notification {
    PipelineStarted,
    PipelineStopped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Start,
    Stop,
    /// State change only.
    Hold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: PipelineState,
    pub action: Action,
}

/// The transition table.
pub struct LifecycleGraph;

impl LifecycleGraph {
    /// Pure function: (Current State, Command) -> Transition.
    /// Returns None for commands that do nothing in the current state.
    pub fn transition(current: PipelineState, command: Command) -> Option<Transition> {
        use Command::*;
        use PipelineState::*;

        let (next, action) = match (current, command) {
            (Stopped, PipelineCreate | PowerOn) => (Running, Action::Start),
            (Running, PowerOff | PowerShutdown | PipelineDestroy) => (Stopped, Action::Stop),
            (Stopped | Running, SetDisabledState { disabled: true }) => (Disabled, Action::Stop),
            // Clearing the hold does not restart; the next power-on or create does.
            (Disabled, SetDisabledState { disabled: false }) => (Stopped, Action::Hold),
            _ => return None,
        };

        Some(Transition { next, action })
    }
}

/// Owns the pipeline state and the kernel instance.
///
/// The kernel is initialized lazily on the first start and kept for the
/// lifetime of the controller once that succeeds.
pub struct LifecycleController {
    state: PipelineState,
    factory: Box<dyn KernelFactory>,
    kernel: Option<Box<dyn LoggingKernel>>,
}

impl LifecycleController {
    pub fn new(factory: Box<dyn KernelFactory>) -> Self {
        Self {
            state: PipelineState::Stopped,
            factory,
            kernel: None,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state == PipelineState::Disabled
    }

    pub fn is_initialized(&self) -> bool {
        self.kernel.is_some()
    }

    pub fn is_kernel_running(&self) -> bool {
        self.kernel.as_ref().is_some_and(|k| k.is_running())
    }

    pub fn kernel(&self) -> Option<&dyn LoggingKernel> {
        self.kernel.as_deref()
    }

    pub fn handle(&mut self, command: Command) -> Option<Notification> {
        let transition = LifecycleGraph::transition(self.state, command)?;
        let from = self.state;
        let notification = match transition.action {
            Action::Start => {
                if self.start_kernel() {
                    self.state = transition.next;
                    Some(Notification::PipelineStarted)
                } else {
                    // Someone else may have brought the kernel up already.
                    if self.is_kernel_running() {
                        self.state = transition.next;
                    }
                    None
                }
            }
            Action::Stop => {
                self.state = transition.next;
                self.stop_kernel()
            }
            Action::Hold => {
                self.state = transition.next;
                None
            }
        };

        if self.state != from {
            info!(?from, to = ?self.state, ?command, "pipeline transition");
        }
        notification
    }

    fn initialize_kernel(&mut self) -> bool {
        if self.kernel.is_some() {
            return true;
        }
        match self.factory.initialize() {
            Ok(kernel) => {
                self.kernel = Some(kernel);
                true
            }
            Err(e) => {
                warn!("Kernel initialization failed, will retry on next start: {}", e);
                false
            }
        }
    }

    /// Returns true only when this call brought the kernel up.
    fn start_kernel(&mut self) -> bool {
        if !self.initialize_kernel() {
            return false;
        }
        let Some(kernel) = self.kernel.as_mut() else {
            return false;
        };
        if kernel.is_running() {
            return false;
        }
        match kernel.start() {
            Ok(()) => true,
            Err(e) => {
                warn!("Kernel start failed, will retry on next start: {}", e);
                false
            }
        }
    }

    fn stop_kernel(&mut self) -> Option<Notification> {
        match self.kernel.as_mut() {
            Some(kernel) if kernel.is_running() => {
                kernel.stop();
                Some(Notification::PipelineStopped)
            }
            _ => None,
        }
    }
}

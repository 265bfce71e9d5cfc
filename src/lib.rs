pub mod config;
pub mod kernel;
pub mod pipeline;
pub mod platform;

pub use config::ServiceConfig;
pub use pipeline::engine::{Input, PipelineEngine};
pub use pipeline::reactor::{PipelineHandle, Reactor};

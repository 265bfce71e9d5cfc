//! Signal pipeline.
//!
//! Raw signal -> classifier -> package filter -> debouncer (scroll only) ->
//! dispatcher -> kernel. The lifecycle controller gates the whole pass.
//!
//! # ORDERING INVARIANT
//! Signals and lifecycle commands reach the [`engine::PipelineEngine`] through a
//! single queue. A signal either completes before a stop is applied or is seen
//! after it and dropped.

pub mod classifier;
pub mod debounce;
pub mod dispatcher;
pub mod engine;
pub mod event;
pub mod filter;
pub mod lifecycle;
pub mod metrics;
pub mod reactor;
pub mod signal;
pub mod time;

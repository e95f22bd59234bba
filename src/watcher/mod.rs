//! Album change watcher - polls the server and alerts on count changes.
//!
//! # Architecture
//!
//! - **Traits** (`traits.rs`) - Seams over the Immich and Telegram clients
//!   so the cycle logic is testable without a network
//! - **Job** (`job.rs`) - One fetch → diff → alert → persist cycle
//! - **Scheduler** (`scheduler.rs`) - Drives cycles on a fixed interval,
//!   strictly one at a time
//!
//! The watcher never aborts: a failed cycle is logged and the next tick
//! starts clean from the untouched cache.

pub mod job;
pub mod scheduler;
pub mod traits;

pub use job::{CycleReport, TargetOutcome, run_cycle};
pub use scheduler::run;
pub use traits::{AlbumsApi, Messenger};

//! # SCYTHE
//!
//! The integration crate: a frame driver around the core pool.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      FRAME DRIVER                           │
//! │                                                             │
//! │   once per frame:                                           │
//! │   ┌───────────────┐      ┌──────────────────────────────┐   │
//! │   │  FrameDriver  │─────>│  UpdatePool::update_cycle()  │   │
//! │   │  (timing)     │<─────│  (update/draw, notify,       │   │
//! │   └───────────────┘      │   mark, sweep)               │   │
//! │          │               └──────────────────────────────┘   │
//! │          v                                                  │
//! │   CycleStatsAccumulator (avg / min / max / over budget)     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `driver`: frame orchestration and timing

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod driver;

// Re-export the core
pub use scythe_core as core;

// Re-export commonly used types
pub use driver::{CycleStats, CycleStatsAccumulator, DriverConfig, FrameDriver};

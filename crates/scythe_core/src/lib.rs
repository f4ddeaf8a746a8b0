//! # SCYTHE Core
//!
//! A deferred-reclaim pool for per-frame "updatable" entities:
//! - Live entities are updated and drawn once per cycle, in insertion order
//! - Destruction is entity-initiated; the pool only observes the flag
//! - Removal is deferred: marked during the pass, swept after it
//!
//! ## Architecture Rules
//!
//! 1. **Single-threaded by contract** - no locks, no atomics; the structure
//!    is `!Send` by construction
//! 2. **Two-phase reclaim** - indices marked during a pass stay valid until
//!    the sweep, because only the sweep moves elements
//! 3. **One backing sequence** - the pool and its view share the same live
//!    sequence, never copies
//!
//! ## Example
//!
//! ```rust,ignore
//! use scythe_core::{UpdatePool, Updatable};
//!
//! let mut pool: UpdatePool<Particle> = UpdatePool::new(256);
//! pool.add_instance(particle);
//!
//! // Once per frame:
//! let report = pool.update_cycle();
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod events;
pub mod pool;

pub use config::{ConfigError, ConfigResult, PoolConfig};
pub use events::{DestroyHandler, DestroyListeners, ListenerHandle};
pub use pool::{
    CycleReport, GarbageList, PoolView, SharedUpdatable, Updatable, UpdatePool, ViewIter,
    DEFAULT_CAPACITY,
};

//! # Updatable Pool
//!
//! The live sequence, its bounded read-only view, and the per-cycle reclaim
//! machinery.
//!
//! ## Design Philosophy
//!
//! - The pool owns the authoritative live sequence; the view wraps the same
//!   sequence and is what entities see during a cycle
//! - Destroyed entities are never removed mid-pass: their indices are marked
//!   and swept (highest first) once the pass completes
//! - Insertion is append-only, so positions already visited never shift

mod garbage;
mod updatable;
mod update_pool;
mod view;

pub use garbage::GarbageList;
pub use updatable::{SharedUpdatable, Updatable};
pub use update_pool::{CycleReport, UpdatePool};
pub use view::{PoolView, ViewIter, DEFAULT_CAPACITY};

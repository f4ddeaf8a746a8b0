//! # Update Pool
//!
//! The owning pool: drives the per-cycle update/draw pass, detects destroyed
//! entities, fires destroy notifications, and sweeps the destroyed out once
//! the pass completes.
//!
//! ```text
//! update_cycle():
//! ┌──────────────────────────────────────────────────────────────┐
//! │ for index in 0.. (live, possibly-growing sequence)           │
//! │   ├─ live entity      → update(view) then draw()             │
//! │   └─ destroyed entity → notify listeners, mark index         │
//! │ sweep: remove marked indices, highest first, then clear      │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::PoolConfig;
use crate::events::{DestroyHandler, DestroyListeners, ListenerHandle};
use crate::pool::garbage::GarbageList;
use crate::pool::updatable::{SharedUpdatable, Updatable};
use crate::pool::view::{PoolView, DEFAULT_CAPACITY};

/// Summary of one completed cycle.
///
/// Purely observational: ignoring it changes nothing about the cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Entities that received `update` and `draw` this cycle.
    pub updated: usize,
    /// Destroyed entities notified out and swept this cycle.
    pub reclaimed: usize,
}

/// The authoritative owner of the live sequence.
///
/// The pool and the view it hands out share one backing sequence; the pool
/// is the only party that ever removes from it, and only during the sweep
/// that ends a cycle. Entities are added through [`UpdatePool::add_instance`]
/// (or the view) and leave only after the pool observes their destruction
/// flag.
///
/// # Thread Safety
///
/// NOT thread-safe, by contract: one owner thread drives cycles, all
/// callbacks run synchronously on it, and the structure is `!Send` by
/// construction. There is no locking to configure or misuse.
///
/// # Example
///
/// ```rust,ignore
/// let mut pool: UpdatePool<Particle> = UpdatePool::new(256);
/// pool.add_instance(Rc::new(RefCell::new(Particle::new())));
///
/// // Once per frame:
/// let report = pool.update_cycle();
/// assert_eq!(report.reclaimed, 0);
/// ```
pub struct UpdatePool<T: Updatable> {
    /// The live sequence. Shared with `view` - same object, never a copy.
    entries: Rc<RefCell<Vec<SharedUpdatable<T>>>>,
    /// The single view handed to entities and external readers.
    view: PoolView<T>,
    /// Deferred-removal bookkeeping, cleared by every sweep.
    garbage: GarbageList,
    /// Destroy-notification subscriptions.
    listeners: DestroyListeners<T>,
    /// Emit a trace event per cycle.
    trace_cycles: bool,
}

impl<T: Updatable> UpdatePool<T> {
    /// Creates a pool bounded to `capacity` live entities.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero. Configuration loading reports the same
    /// condition as an error instead; see [`PoolConfig::validate`].
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        let entries = Rc::new(RefCell::new(Vec::new()));
        let view = PoolView::new(Rc::clone(&entries), capacity);

        Self {
            entries,
            view,
            garbage: GarbageList::new(),
            listeners: DestroyListeners::new(),
            trace_cycles: false,
        }
    }

    /// Creates a pool from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration carries a zero capacity; run
    /// [`PoolConfig::validate`] after loading untrusted input.
    #[must_use]
    pub fn with_config(config: &PoolConfig) -> Self {
        let mut pool = Self::new(config.capacity);
        pool.trace_cycles = config.trace_cycles;
        pool
    }

    /// Returns the maximum number of live entities.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.view.capacity()
    }

    /// Returns the number of currently live entities.
    ///
    /// Entities destroyed but not yet swept still count: they remain
    /// physically present until the cycle pass that observes them completes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Checks whether the live sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Adds an entity, bounded by capacity.
    ///
    /// Delegates to the view: same soft cap, same silent drop at capacity,
    /// and the handle always comes back unchanged.
    pub fn add_instance(&self, instance: SharedUpdatable<T>) -> SharedUpdatable<T> {
        self.view.add_instance(instance)
    }

    /// Returns the single shared view bound to this pool's live sequence.
    ///
    /// Not a copy: every clone of this view reads and appends through the
    /// same backing sequence the pool sweeps.
    #[must_use]
    pub fn view(&self) -> &PoolView<T> {
        &self.view
    }

    /// Registers a destroy listener; returns the subscription handle.
    ///
    /// Listeners fire once per destroyed entity per subscription, in
    /// registration order, during the pass that observes the destruction -
    /// before the entity is swept.
    pub fn add_destroy_listener(&mut self, handler: DestroyHandler<T>) -> ListenerHandle {
        self.listeners.add(handler)
    }

    /// Removes a destroy subscription.
    ///
    /// Unknown or already-removed handles return `false`; the call is
    /// otherwise a no-op.
    pub fn remove_destroy_listener(&mut self, handle: ListenerHandle) -> bool {
        self.listeners.remove(handle)
    }

    /// Runs one full cycle: update/draw every live entity, notify and mark
    /// every destroyed one, then sweep.
    ///
    /// The pass is index-based over the live, possibly-growing sequence:
    /// entities appended mid-pass (through the view) are visited in this
    /// same pass. Destruction fully pre-empts processing - a destroyed
    /// entity receives neither the view nor `update`/`draw` in the cycle
    /// that observes it, and is gone from the sequence when this returns.
    ///
    /// Calling this on an empty pool is a no-op.
    pub fn update_cycle(&mut self) -> CycleReport {
        let mut updated = 0;
        let mut index = 0;
        loop {
            let entry = {
                let entries = self.entries.borrow();
                match entries.get(index) {
                    Some(entry) => Rc::clone(entry),
                    None => break,
                }
            };

            let destroyed = entry.borrow().is_destroyed();
            if destroyed {
                self.listeners.notify(&entry);
                self.garbage.mark(index);
            } else {
                let mut updatable = entry.borrow_mut();
                updatable.update(&self.view);
                updatable.draw();
                updated += 1;
            }
            index += 1;
        }

        let reclaimed = self.garbage.sweep(&mut self.entries.borrow_mut());
        let report = CycleReport { updated, reclaimed };

        if self.trace_cycles {
            tracing::trace!(
                updated = report.updated,
                reclaimed = report.reclaimed,
                "cycle complete"
            );
        }

        report
    }
}

impl<T: Updatable> Default for UpdatePool<T> {
    /// A pool with the default capacity of [`DEFAULT_CAPACITY`].
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

//! # Updatable Contract
//!
//! The capability contract every pooled entity implements. The pool never
//! creates, destroys, or mutates entity state on its own: it reads the
//! destruction flag, invokes the per-cycle callbacks, and drops its handle
//! once the entity has been swept.

use std::cell::RefCell;
use std::rc::Rc;

use crate::pool::view::PoolView;

/// Shared handle to a pooled entity.
///
/// Entities are owned externally and handed to the pool as shared handles.
/// The pool keeps one handle per live entity purely for iteration and
/// reclaim; sweeping an entity drops the pool's handle, not the entity.
pub type SharedUpdatable<T> = Rc<RefCell<T>>;

/// Per-cycle capability contract for pooled entities.
///
/// The pool drives each live entity through `update` then `draw`, strictly
/// in that order, once per cycle. A destroyed entity receives neither: the
/// flag fully pre-empts processing for the cycle that observes it.
///
/// # Destruction
///
/// Destruction is entity-initiated. `destroy` flips the flag; the pool
/// reacts to it on the next pass over that entity and never calls `destroy`
/// itself. The transition is one-directional: once the pool has observed the
/// flag, the entity is notified out and swept, and the pool will not
/// interact with it again.
///
/// # The view parameter
///
/// `update` receives the pool's view as a borrow valid only for the duration
/// of the call. Entities may query siblings and append new instances through
/// it, but must not retain it. While an entity's `update` runs, its own cell
/// is mutably borrowed: reaching itself back through the view (for example
/// borrowing the result of `get_by_index` on its own slot) will panic.
pub trait Updatable: Sized {
    /// Returns whether this entity has been destroyed.
    ///
    /// Once this returns `true` it must keep returning `true`; the pool
    /// treats the transition as irreversible.
    fn is_destroyed(&self) -> bool;

    /// Flips the destruction flag.
    ///
    /// Called by the entity itself or by external owners - never by the
    /// pool.
    fn destroy(&mut self);

    /// Advances the entity by one cycle.
    ///
    /// # Arguments
    ///
    /// * `view` - the pool's bounded view, valid for this call only
    fn update(&mut self, view: &PoolView<Self>);

    /// Presents the entity after `update` in the same cycle.
    fn draw(&self);
}

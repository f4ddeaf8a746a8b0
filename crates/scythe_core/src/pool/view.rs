//! # Pool View
//!
//! The bounded, read-mostly façade over the pool's live sequence. This is
//! what entities are handed during a cycle: they can count, look up, search,
//! and append siblings, but structural removal stays with the pool.

use std::cell::RefCell;
use std::rc::Rc;

use crate::pool::updatable::SharedUpdatable;

/// Default live-sequence capacity when none is configured.
pub const DEFAULT_CAPACITY: usize = 256;

/// Bounded read-only view over a pool's live sequence.
///
/// The view wraps the *same* backing sequence the owning pool iterates -
/// never a copy. Its capacity is fixed for the view's lifetime and enforced
/// at insertion time only: an insert at the cap is a silent no-op, not an
/// error.
///
/// # Thread Safety
///
/// This view is NOT thread-safe. It shares single-threaded state with its
/// pool and is `!Send` by construction.
///
/// # Example
///
/// ```rust,ignore
/// let spawned = view.add_instance(Rc::new(RefCell::new(Particle::new())));
/// let first_dead = view.find_first(|p| p.is_destroyed());
/// ```
pub struct PoolView<T> {
    /// The live sequence, shared with the owning pool.
    entries: Rc<RefCell<Vec<SharedUpdatable<T>>>>,
    /// Maximum number of live entities. Fixed at construction.
    capacity: usize,
}

impl<T> PoolView<T> {
    /// Creates a view over an existing live sequence.
    ///
    /// Only the owning pool constructs views; everyone else receives one.
    pub(crate) fn new(entries: Rc<RefCell<Vec<SharedUpdatable<T>>>>, capacity: usize) -> Self {
        Self { entries, capacity }
    }

    /// Returns the maximum number of live entities.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of currently live entities.
    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Checks whether the live sequence is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Appends an entity to the live sequence, bounded by capacity.
    ///
    /// The passed-in handle is always returned unchanged. If the sequence is
    /// at capacity the append is silently skipped - callers that need
    /// truthful insertion must compare `count` against `capacity`
    /// themselves. This is a deliberate soft cap, not an invariant.
    ///
    /// Appending never shifts existing positions, so calling this from
    /// inside an entity's `update` (mid-cycle) is supported.
    pub fn add_instance(&self, instance: SharedUpdatable<T>) -> SharedUpdatable<T> {
        let mut entries = self.entries.borrow_mut();
        if entries.len() < self.capacity {
            entries.push(Rc::clone(&instance));
        }
        instance
    }

    /// Returns the entity at `index`, or `None` when `index >= count`.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<SharedUpdatable<T>> {
        self.entries.borrow().get(index).map(Rc::clone)
    }

    /// Returns every live entity satisfying `predicate`, in sequence order.
    ///
    /// Returns an empty vec when nothing matches.
    ///
    /// Entities whose cells cannot be borrowed are skipped: mid-cycle, the
    /// one entity currently being updated is mutably borrowed by the pool,
    /// so a search from inside `update` observes every sibling but not the
    /// caller itself.
    pub fn find_all<P>(&self, mut predicate: P) -> Vec<SharedUpdatable<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| {
                entry
                    .try_borrow()
                    .is_ok_and(|updatable| predicate(&updatable))
            })
            .map(Rc::clone)
            .collect()
    }

    /// Returns the first live entity satisfying `predicate`, in sequence
    /// order, or `None` when nothing matches.
    ///
    /// Same borrow semantics as [`PoolView::find_all`]: the caller itself is
    /// skipped when searching from inside its own `update`.
    pub fn find_first<P>(&self, mut predicate: P) -> Option<SharedUpdatable<T>>
    where
        P: FnMut(&T) -> bool,
    {
        self.entries
            .borrow()
            .iter()
            .find(|entry| {
                entry
                    .try_borrow()
                    .is_ok_and(|updatable| predicate(&updatable))
            })
            .map(Rc::clone)
    }

    /// Returns a lazy, restartable iterator over the live sequence in
    /// insertion order.
    ///
    /// The iterator is index-based and re-resolves the live sequence on
    /// every step, so append-only mutation during iteration is well-defined:
    /// entities appended past the cursor are visited. Callers must not
    /// remove during this enumeration; removal belongs to the pool's sweep.
    #[must_use]
    pub fn iter(&self) -> ViewIter<'_, T> {
        ViewIter {
            view: self,
            cursor: 0,
        }
    }
}

// A derived Clone would demand `T: Clone`; the view only clones handles.
impl<T> Clone for PoolView<T> {
    /// Clones the view handle. The clone shares the same backing sequence
    /// and capacity - it is another window onto the same pool, not a copy of
    /// its contents.
    fn clone(&self) -> Self {
        Self {
            entries: Rc::clone(&self.entries),
            capacity: self.capacity,
        }
    }
}

/// Index-based iterator over a view's live sequence.
///
/// Created by [`PoolView::iter`]. Each step performs a fresh bounds-checked
/// lookup, so the iterator tolerates appends while it is live and terminates
/// once the cursor passes the current end of the sequence.
pub struct ViewIter<'a, T> {
    /// The view being walked.
    view: &'a PoolView<T>,
    /// Next index to visit.
    cursor: usize,
}

impl<T> Iterator for ViewIter<'_, T> {
    type Item = SharedUpdatable<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.view.get_by_index(self.cursor)?;
        self.cursor += 1;
        Some(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::updatable::Updatable;

    struct Dummy {
        id: u32,
        destroyed: bool,
    }

    impl Dummy {
        fn new(id: u32) -> Self {
            Self {
                id,
                destroyed: false,
            }
        }
    }

    impl Updatable for Dummy {
        fn is_destroyed(&self) -> bool {
            self.destroyed
        }

        fn destroy(&mut self) {
            self.destroyed = true;
        }

        fn update(&mut self, _view: &PoolView<Self>) {}

        fn draw(&self) {}
    }

    fn empty_view(capacity: usize) -> PoolView<Dummy> {
        PoolView::new(Rc::new(RefCell::new(Vec::new())), capacity)
    }

    fn shared(id: u32) -> SharedUpdatable<Dummy> {
        Rc::new(RefCell::new(Dummy::new(id)))
    }

    #[test]
    fn test_insert_within_capacity() {
        let view = empty_view(4);
        for id in 0..4 {
            let _ = view.add_instance(shared(id));
        }
        assert_eq!(view.count(), 4);
        assert!(!view.is_empty());
    }

    #[test]
    fn test_insert_beyond_capacity_silently_drops() {
        let view = empty_view(2);
        let _ = view.add_instance(shared(0));
        let _ = view.add_instance(shared(1));

        let dropped = shared(2);
        let returned = view.add_instance(Rc::clone(&dropped));

        // Handle comes back unchanged even though nothing was inserted.
        assert!(Rc::ptr_eq(&dropped, &returned));
        assert_eq!(view.count(), 2);

        // The first `capacity` inserts are the ones retained, in order.
        assert_eq!(view.get_by_index(0).unwrap().borrow().id, 0);
        assert_eq!(view.get_by_index(1).unwrap().borrow().id, 1);
    }

    #[test]
    fn test_get_by_index_bounds() {
        let view = empty_view(4);
        let _ = view.add_instance(shared(7));

        assert_eq!(view.get_by_index(0).unwrap().borrow().id, 7);
        assert!(view.get_by_index(1).is_none());
        assert!(view.get_by_index(usize::MAX).is_none());
    }

    #[test]
    fn test_find_all_preserves_order() {
        let view = empty_view(8);
        for id in 0..6 {
            let _ = view.add_instance(shared(id));
        }

        let even: Vec<u32> = view
            .find_all(|d| d.id % 2 == 0)
            .iter()
            .map(|d| d.borrow().id)
            .collect();
        assert_eq!(even, vec![0, 2, 4]);

        assert!(view.find_all(|d| d.id > 100).is_empty());
    }

    #[test]
    fn test_find_first() {
        let view = empty_view(8);
        for id in 0..6 {
            let _ = view.add_instance(shared(id));
        }

        let first = view.find_first(|d| d.id >= 3).unwrap();
        assert_eq!(first.borrow().id, 3);
        assert!(view.find_first(|d| d.id > 100).is_none());
    }

    #[test]
    fn test_iter_is_restartable() {
        let view = empty_view(8);
        for id in 0..3 {
            let _ = view.add_instance(shared(id));
        }

        let pass_one: Vec<u32> = view.iter().map(|d| d.borrow().id).collect();
        let pass_two: Vec<u32> = view.iter().map(|d| d.borrow().id).collect();
        assert_eq!(pass_one, pass_two);
        assert_eq!(pass_one, vec![0, 1, 2]);
    }

    #[test]
    fn test_iter_sees_appends_past_cursor() {
        let view = empty_view(8);
        let _ = view.add_instance(shared(0));
        let _ = view.add_instance(shared(1));

        let mut seen = Vec::new();
        for entry in view.iter() {
            let id = entry.borrow().id;
            if id == 0 {
                // Append mid-iteration: must be visited before exhaustion.
                let _ = view.add_instance(shared(2));
            }
            seen.push(id);
        }
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_clone_shares_backing_sequence() {
        let view = empty_view(4);
        let twin = view.clone();

        let _ = twin.add_instance(shared(9));
        assert_eq!(view.count(), 1);
        assert_eq!(view.get_by_index(0).unwrap().borrow().id, 9);
        assert_eq!(twin.capacity(), view.capacity());
    }
}

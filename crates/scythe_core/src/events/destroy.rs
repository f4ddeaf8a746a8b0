//! # Destroy Listener List
//!
//! The ordered multicast list behind the pool's destroy notifications.

use crate::pool::SharedUpdatable;

/// Callback invoked once per destroyed entity, per subscription.
///
/// Handlers run synchronously during the cycle pass, before the entity's
/// index is marked for the sweep. A handler may call back into the pool
/// through a cloned view (appends are safe mid-pass) but must not attempt
/// removal - removal belongs to the sweep alone.
pub type DestroyHandler<T> = Box<dyn FnMut(&SharedUpdatable<T>)>;

/// Identity of one destroy subscription.
///
/// Rust closures carry no identity of their own, so the list assigns one at
/// registration. Registering the same closure twice yields two distinct
/// handles - and two invocations per destroyed entity - matching multicast
/// semantics. Handles are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(u64);

/// Ordered multicast subscription list.
///
/// Invocation order is registration order. The list is append-heavy and
/// notify-hot; removal is rare and linear.
pub struct DestroyListeners<T> {
    /// Subscriptions in registration order.
    entries: Vec<(ListenerHandle, DestroyHandler<T>)>,
    /// Next handle value. Monotonically increasing, never reused.
    next_handle: u64,
}

impl<T> DestroyListeners<T> {
    /// Creates an empty subscription list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_handle: 0,
        }
    }

    /// Returns the number of active subscriptions.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether any subscription is active.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers a handler and returns its subscription handle.
    pub fn add(&mut self, handler: DestroyHandler<T>) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push((handle, handler));
        handle
    }

    /// Removes the subscription identified by `handle`.
    ///
    /// Returns `true` if a subscription was removed. Unknown or
    /// already-removed handles return `false`; the call is otherwise a
    /// no-op.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(held, _)| *held != handle);
        self.entries.len() != before
    }

    /// Invokes every subscription with `entity`, in registration order.
    pub fn notify(&mut self, entity: &SharedUpdatable<T>) {
        for (_, handler) in &mut self.entries {
            handler(entity);
        }
    }
}

impl<T> Default for DestroyListeners<T> {
    fn default() -> Self {
        Self::new()
    }
}

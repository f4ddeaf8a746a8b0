//! # Destroy Notification
//!
//! Multicast notification for entities the pool observes as destroyed.
//!
//! ## Design Philosophy
//!
//! - Subscriptions are an explicit ordered list, not language-level sugar:
//!   registration order is invocation order
//! - Closures have no identity in Rust, so registration hands back a
//!   [`ListenerHandle`]; the same closure registered twice holds two
//!   independent subscriptions
//! - Removal by handle is idempotent - unknown handles are a no-op

mod destroy;

pub use destroy::{DestroyHandler, DestroyListeners, ListenerHandle};

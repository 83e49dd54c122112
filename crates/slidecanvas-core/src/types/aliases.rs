//! Type aliases for commonly used shared-state types.
//!
//! The editor runs on a single UI thread, so most shared state is
//! `Rc<RefCell<T>>`. The event bus is the exception and uses `Arc` with
//! `parking_lot` locks so that hosts may observe events from other threads.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slidecanvas_core::types::*;
//!
//! // Instead of: Rc<RefCell<DeckPager>>
//! let pager: Shared<DeckPager> = shared(DeckPager::new(3, Size::new(800.0, 500.0)));
//! ```

use parking_lot::RwLock;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::Arc;

/// A reference-counted, interior-mutable wrapper for single-threaded sharing.
///
/// Used for collaborators that more than one component needs to reach, such
/// as the slide pager (owned by the editor, resumed by a gesture guard).
pub type Shared<T> = Rc<RefCell<T>>;

/// A thread-safe read/write-locked map.
pub type ThreadSafeRwMap<K, V> = Arc<RwLock<HashMap<K, V>>>;

/// Create a new `Shared<T>` from a value.
#[inline]
pub fn shared<T>(value: T) -> Shared<T> {
    Rc::new(RefCell::new(value))
}

/// Create a new empty `ThreadSafeRwMap<K, V>`.
#[inline]
pub fn thread_safe_rw_map<K, V>() -> ThreadSafeRwMap<K, V> {
    Arc::new(RwLock::new(HashMap::new()))
}

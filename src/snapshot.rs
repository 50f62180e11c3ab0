//! Latest-value cell shared between background tasks and the render loop.
//!
//! Built on `critical-section`: one writer replaces the whole value,
//! readers clone whatever is current. A reader never sees a partially
//! written value, only the old one, the new one, or nothing yet.

use core::cell::RefCell;

use critical_section::Mutex;

/// A single-slot, thread-safe value cell
pub struct Snapshot<T> {
    inner: Mutex<RefCell<Option<T>>>,
}

impl<T> Snapshot<T> {
    /// Create an empty snapshot
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(None)),
        }
    }

    /// Create a snapshot that already holds a value
    pub const fn with_value(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Some(value))),
        }
    }

    /// Replace the current value, dropping the old one outside the critical section
    pub fn publish(&self, value: T) {
        let old = critical_section::with(|cs| self.inner.borrow(cs).replace(Some(value)));
        drop(old);
    }

    /// Forget the current value
    pub fn clear(&self) {
        let old = critical_section::with(|cs| self.inner.borrow(cs).take());
        drop(old);
    }

    /// Check if a value has been published
    pub fn is_available(&self) -> bool {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().is_some())
    }
}

impl<T: Clone> Snapshot<T> {
    /// Clone of the latest value, `None` until something is published
    pub fn latest(&self) -> Option<T> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().clone())
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> core::fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Snapshot")
            .field("available", &self.is_available())
            .finish()
    }
}


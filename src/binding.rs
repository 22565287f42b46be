//! Externally owned selection cell.
//!
//! The widget reads the cell on every layout pass and writes it at most
//! once per committed gesture; the host may write it at any time for
//! programmatic selection. Observers make the change flow explicit
//! instead of relying on bidirectional mutable aliasing.

use std::sync::Arc;

use parking_lot::RwLock;

/// Callback invoked after the stored selection changes.
pub type SelectionObserver<Id> = Box<dyn Fn(&Id) + Send + Sync>;

/// Shared read/write cell holding the selected item id.
///
/// Cloning hands out another handle to the same cell, so the host and the
/// pager can both keep one.
pub struct SelectionBinding<Id> {
    inner: Arc<Inner<Id>>,
}

struct Inner<Id> {
    cell: RwLock<Id>,
    observers: RwLock<Vec<SelectionObserver<Id>>>,
}

impl<Id> Clone for SelectionBinding<Id> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<Id: Clone + PartialEq> SelectionBinding<Id> {
    /// Creates a binding holding `initial`.
    pub fn new(initial: Id) -> Self {
        Self {
            inner: Arc::new(Inner {
                cell: RwLock::new(initial),
                observers: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Returns a clone of the current selection.
    pub fn get(&self) -> Id {
        self.inner.cell.read().clone()
    }

    /// Executes a closure with a shared reference to the current selection.
    pub fn with<R>(&self, f: impl FnOnce(&Id) -> R) -> R {
        f(&self.inner.cell.read())
    }

    /// Replaces the selection, notifying observers when the value changed.
    pub fn set(&self, id: Id) {
        let changed = {
            let mut cell = self.inner.cell.write();
            if *cell == id {
                false
            } else {
                *cell = id.clone();
                true
            }
        };
        if changed {
            for observer in self.inner.observers.read().iter() {
                observer(&id);
            }
        }
    }

    /// Registers a callback run after every selection change.
    pub fn observe(&self, observer: impl Fn(&Id) + Send + Sync + 'static) {
        self.inner.observers.write().push(Box::new(observer));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn set_replaces_and_notifies() {
        let binding = SelectionBinding::new("a");
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        binding.observe(move |id| {
            assert_eq!(*id, "b");
            counter.fetch_add(1, Ordering::SeqCst);
        });

        binding.set("b");
        assert_eq!(binding.get(), "b");
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn setting_the_same_value_is_silent() {
        let binding = SelectionBinding::new(7usize);
        let seen = Arc::new(AtomicUsize::new(0));
        let counter = seen.clone();
        binding.observe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        binding.set(7);
        assert_eq!(seen.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn handles_share_one_cell() {
        let binding = SelectionBinding::new(1usize);
        let other = binding.clone();
        other.set(2);
        assert_eq!(binding.get(), 2);
        assert_eq!(binding.with(|id| *id), 2);
    }
}

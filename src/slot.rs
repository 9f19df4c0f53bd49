//! State Slots
//!
//! The controllers' async flows run against "somewhere the state lives":
//! a signal or store in the UI, a `RefCell` in tests. Borrows never span
//! an `.await`.

use std::cell::RefCell;

use leptos::prelude::*;
use reactive_stores::Store;

pub trait StateSlot<T> {
    /// Run `f` on the state; `None` if the state is gone (owner disposed).
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;

    /// Read without notifying subscribers.
    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateSlot<T> for RwSignal<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T: Send + Sync + 'static> StateSlot<T> for Store<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.try_with_untracked(f)
    }
}

impl<T> StateSlot<T> for RefCell<T> {
    fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn peek<R>(&self, f: impl FnOnce(&T) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

//! State Store Seam
//!
//! Controllers mutate their state through this trait so the same code can
//! drive a reactive signal in the browser and a plain `RefCell` in tests.

use std::cell::RefCell;
use std::rc::Rc;

pub trait StateStore<T> {
    /// Run `f` against the state and notify observers.
    ///
    /// Returns `None` when the state no longer exists (its view was torn
    /// down while a request was in flight).
    fn update<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U>;
}

impl<T> StateStore<T> for RefCell<T> {
    fn update<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl<T, S: StateStore<T>> StateStore<T> for Rc<S> {
    fn update<U>(&self, f: impl FnOnce(&mut T) -> U) -> Option<U> {
        (**self).update(f)
    }
}

//! View store
//!
//! Where a front end keeps its [`ViewState`]. The browser build wraps a
//! reactive signal; native code and tests use `Rc<RefCell<ViewState>>`.
//! Closures never run across an await point.

use std::cell::RefCell;
use std::rc::Rc;

use super::ViewState;

/// Shared, single-threaded access to the view state
pub trait ViewStore {
    /// Mutate the state. `None` if the store has been torn down.
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R>;

    /// Read the state without signalling a change
    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R>;
}

impl ViewStore for Rc<RefCell<ViewState>> {
    fn update<R>(&self, f: impl FnOnce(&mut ViewState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> Option<R> {
        Some(f(&self.borrow()))
    }
}

/// Convenience constructor for a fresh local store
pub fn local_store() -> Rc<RefCell<ViewState>> {
    Rc::new(RefCell::new(ViewState::new()))
}

//! Shared open/close state for the command palette.
//!
//! One `PaletteStore` exists per mounted shell. Handles are cheap clones of the same
//! state, so the chord listener, the tap affordance and the dispatcher all converge on
//! a single flag. Everything runs on the UI thread, hence `Rc<RefCell<_>>`.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaletteSession {
    pub is_open: bool,
    pub query: String,
}

#[derive(Debug, Clone, Default)]
pub struct PaletteStore {
    inner: Rc<RefCell<PaletteSession>>,
}

impl PaletteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the palette. No-op when already open.
    pub fn open(&self) {
        let mut session = self.inner.borrow_mut();
        if !session.is_open {
            session.is_open = true;
            tracing::debug!("command palette opened");
        }
    }

    /// Close the palette and clear the query. The query is cleared even when the
    /// palette was already closed.
    pub fn close(&self) {
        let mut session = self.inner.borrow_mut();
        session.query.clear();
        if session.is_open {
            session.is_open = false;
            tracing::debug!("command palette closed");
        }
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().is_open
    }

    pub fn query(&self) -> String {
        self.inner.borrow().query.clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        self.inner.borrow_mut().query = query.into();
    }

    pub fn push_query_char(&self, c: char) {
        self.inner.borrow_mut().query.push(c);
    }

    pub fn pop_query_char(&self) {
        self.inner.borrow_mut().query.pop();
    }

    /// Snapshot of the whole session.
    pub fn session(&self) -> PaletteSession {
        self.inner.borrow().clone()
    }

    /// True when both handles point at the same state.
    pub fn same_store(&self, other: &PaletteStore) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

/// Provider boundary for the palette store.
///
/// Subtrees of the shell receive a `ShellContext` instead of reaching for a global.
/// A context built without a provider refuses to hand out a store.
#[derive(Debug, Clone, Default)]
pub struct ShellContext {
    palette: Option<PaletteStore>,
}

impl ShellContext {
    pub fn provide(store: PaletteStore) -> Self {
        Self {
            palette: Some(store),
        }
    }

    /// A context outside any palette provider.
    pub fn detached() -> Self {
        Self { palette: None }
    }

    pub fn command_palette(&self) -> Result<&PaletteStore> {
        self.palette
            .as_ref()
            .context("command palette used outside of its provider")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = PaletteStore::new();
        assert!(!store.is_open());
        assert_eq!(store.query(), "");
    }

    #[test]
    fn test_close_clears_query() {
        let store = PaletteStore::new();
        store.open();
        store.set_query("abc");
        store.close();
        assert!(!store.is_open());
        assert_eq!(store.query(), "");
    }

    #[test]
    fn test_close_on_closed_store_clears_query() {
        let store = PaletteStore::new();
        store.set_query("stale");
        store.close();
        assert!(!store.is_open());
        assert_eq!(store.query(), "");
    }

    #[test]
    fn test_repeated_open_close_are_noops() {
        let store = PaletteStore::new();
        store.close();
        assert!(!store.is_open());
        store.open();
        store.set_query("x");
        store.open();
        assert!(store.is_open());
        assert_eq!(store.query(), "x");
    }

    #[test]
    fn test_clones_share_state() {
        let a = PaletteStore::new();
        let b = a.clone();
        b.open();
        assert!(a.is_open());
        assert!(a.same_store(&b));
        assert!(!a.same_store(&PaletteStore::new()));
    }

    #[test]
    fn test_detached_context_errors() {
        let err = ShellContext::detached().command_palette().unwrap_err();
        assert!(err.to_string().contains("outside of its provider"));
    }
}

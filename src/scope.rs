//! Explicit scoped capability handles.
//!
//! A [`Scoped`] slot replaces ambient lookup: a provider installs a value for
//! a lexical region, and [`Scoped::acquire`] is the single guarded entry
//! point that hands out the handle, failing fast when no provider is active.
//! After acquiring, code passes the `Arc<T>` around explicitly.

use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScopeError {
    #[error("no active {0} provider; acquire the handle inside a provided scope")]
    MissingProvider(&'static str),
}

/// Named slot holding a capability while a [`ProvideGuard`] is alive.
pub struct Scoped<T> {
    name: &'static str,
    slot: Mutex<Option<Arc<T>>>,
}

impl<T> Scoped<T> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            slot: Mutex::new(None),
        }
    }

    /// Install `value` until the returned guard drops. Nested providers
    /// shadow the outer value and restore it on drop.
    #[must_use = "dropping the guard uninstalls the provider"]
    pub fn provide(&self, value: T) -> ProvideGuard<'_, T> {
        let prev = self.lock().replace(Arc::new(value));
        ProvideGuard { scoped: self, prev }
    }

    /// The one runtime-checked entry point.
    pub fn acquire(&self) -> Result<Arc<T>, ScopeError> {
        self.lock()
            .as_ref()
            .cloned()
            .ok_or(ScopeError::MissingProvider(self.name))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<Arc<T>>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct ProvideGuard<'a, T> {
    scoped: &'a Scoped<T>,
    prev: Option<Arc<T>>,
}

impl<T> Drop for ProvideGuard<'_, T> {
    fn drop(&mut self) {
        *self.scoped.lock() = self.prev.take();
    }
}

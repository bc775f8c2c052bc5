//! Scheme → factory registry.
//!
//! # Thread Safety
//!
//! The registry uses `RwLock` for its map, allowing many concurrent lookups
//! with exclusive access for registration and removal. Lookups clone the
//! `Arc` out and release the lock immediately, so no lock is held across an
//! `.await`.
//!
//! # Invariants
//!
//! - Each scheme maps to at most one factory.
//! - The map is only mutated by single insert/remove calls, so a poisoned
//!   lock still guards a consistent map and is recovered rather than
//!   reported.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, PoisonError, RwLock};

/// Mapping from scheme identifier to the factory that handles it.
///
/// Removing a factory models temporary unavailability of a recognized
/// scheme; it does not make the scheme unrecognized.
pub struct FactoryRegistry<S, F: ?Sized> {
    factories: RwLock<HashMap<S, Arc<F>>>,
}

impl<S, F> FactoryRegistry<S, F>
where
    S: Copy + Eq + Hash + Ord,
    F: ?Sized,
{
    #[must_use]
    pub fn new() -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
        }
    }

    /// Register `factory` for `scheme`, returning the factory it replaced.
    pub fn register(&self, scheme: S, factory: Arc<F>) -> Option<Arc<F>> {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(scheme, factory)
    }

    /// Remove the factory for `scheme`, returning it if one was registered.
    pub fn remove(&self, scheme: S) -> Option<Arc<F>> {
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&scheme)
    }

    /// Look up the factory for `scheme`.
    #[must_use]
    #[allow(clippy::disallowed_methods)] // Arc::clone is safe and expected
    pub fn get(&self, scheme: S) -> Option<Arc<F>> {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&scheme)
            .map(Arc::clone)
    }

    /// Registered schemes in sorted order.
    #[must_use]
    pub fn schemes(&self) -> Vec<S> {
        let mut schemes: Vec<S> = self
            .factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .copied()
            .collect();
        schemes.sort();
        schemes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S, F> Default for FactoryRegistry<S, F>
where
    S: Copy + Eq + Hash + Ord,
    F: ?Sized,
{
    fn default() -> Self {
        Self::new()
    }
}

//! Tracks which rendered forms currently have a submission in flight.
//!
//! Each rendered form carries an opaque instance id. A submission holds a
//! [`InFlightGuard`] for its id until the backend call completes, so a second
//! submission of the same form is refused instead of issuing a duplicate
//! request.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

/// Registry of form instance ids with a submission in flight.
#[derive(Debug, Clone, Default)]
pub struct InFlightRegistry {
    inner: Arc<Mutex<HashSet<String>>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `form_id` as in flight.
    ///
    /// Returns `None` if a submission for the same id has not completed yet.
    pub fn try_acquire(&self, form_id: &str) -> Option<InFlightGuard> {
        let mut set = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if !set.insert(form_id.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            registry: self.inner.clone(),
            form_id: form_id.to_string(),
        })
    }

    pub fn is_in_flight(&self, form_id: &str) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(form_id)
    }

    /// Number of submissions currently in flight.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Releases its form id when dropped, whether the submission succeeded or not.
#[derive(Debug)]
pub struct InFlightGuard {
    registry: Arc<Mutex<HashSet<String>>>,
    form_id: String,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.form_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_acquire_refused_until_release() {
        let registry = InFlightRegistry::new();

        let guard = registry.try_acquire("form-1").unwrap();
        assert!(registry.try_acquire("form-1").is_none());
        assert!(registry.is_in_flight("form-1"));

        drop(guard);
        assert!(!registry.is_in_flight("form-1"));
        assert!(registry.try_acquire("form-1").is_some());
    }

    #[test]
    fn test_distinct_forms_are_independent() {
        let registry = InFlightRegistry::new();

        let _a = registry.try_acquire("form-a").unwrap();
        let _b = registry.try_acquire("form-b").unwrap();

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clones_share_state() {
        let registry = InFlightRegistry::new();
        let clone = registry.clone();

        let _guard = registry.try_acquire("form-1").unwrap();
        assert!(clone.try_acquire("form-1").is_none());
    }

    #[test]
    fn test_empty_after_all_guards_dropped() {
        let registry = InFlightRegistry::new();
        {
            let _guard = registry.try_acquire("form-1").unwrap();
            assert!(!registry.is_empty());
        }
        assert!(registry.is_empty());
    }
}

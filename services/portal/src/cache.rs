//! Invalidation-driven cache for admin views.
//!
//! Mutation actions invalidate the tags their entity feeds; the next read
//! of an invalidated view re-fetches from the backend. Process-local, no
//! TTL — the views are small and strictly invalidation-driven.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

/// Tag identifying one cached view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewTag {
    Users,
    Mentors,
}

#[derive(Clone, Default)]
pub struct ViewCache {
    inner: Arc<RwLock<HashMap<ViewTag, Value>>>,
}

impl ViewCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, tag: ViewTag) -> Option<Value> {
        self.inner.read().unwrap().get(&tag).cloned()
    }

    pub fn put(&self, tag: ViewTag, value: Value) {
        self.inner.write().unwrap().insert(tag, value);
    }

    /// Remove the given tags so their next read re-fetches.
    pub fn invalidate(&self, tags: &[ViewTag]) {
        let mut inner = self.inner.write().unwrap();
        for tag in tags {
            inner.remove(tag);
        }
    }
}

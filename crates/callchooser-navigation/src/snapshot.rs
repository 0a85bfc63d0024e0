//! Published navigation state
//!
//! The navigator replaces its snapshot wholesale after each mutation, so a
//! reader holding a `BackStack` never sees a half-applied change.

use serde::{Deserialize, Serialize};
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, cheaply clonable view of the flattened back stack.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BackStack<R> {
    entries: Arc<[R]>,
}

impl<R> BackStack<R> {
    pub fn new(entries: Vec<R>) -> Self {
        Self {
            entries: entries.into(),
        }
    }

    /// The visible destination
    pub fn current(&self) -> Option<&R> {
        self.entries.last()
    }

    /// Whether two handles point at the same published snapshot
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<R> Clone for BackStack<R> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<R> Deref for BackStack<R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        &self.entries
    }
}

/// Back stack plus active top level route, for hosts that ship navigation
/// state across a boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationSnapshot<R> {
    pub back_stack: BackStack<R>,
    pub top_level_route: R,
}

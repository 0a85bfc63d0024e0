//! Route model
//!
//! Every destination reports one of three kinds:
//! - `TopLevel` — roots its own navigation stack (tab-like section)
//! - `Shared` — may move between top level stacks, one live copy at most
//! - `Plain` — pushed onto whichever stack is active

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    /// Roots an independent navigation stack
    TopLevel,
    /// Owned by one stack at a time, ownership can transfer
    Shared,
    /// Ordinary destination
    Plain,
}

impl RouteKind {
    pub fn is_top_level(&self) -> bool {
        matches!(self, RouteKind::TopLevel)
    }

    pub fn is_shared(&self) -> bool {
        matches!(self, RouteKind::Shared)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteKind::TopLevel => "top_level",
            RouteKind::Shared => "shared",
            RouteKind::Plain => "plain",
        }
    }
}

impl std::fmt::Display for RouteKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A navigable destination.
///
/// Routes are compared by value: two equal routes are the same destination,
/// and a top level route doubles as the key of the stack it roots.
pub trait Route: Clone + Eq + Hash + Debug {
    fn kind(&self) -> RouteKind;
}

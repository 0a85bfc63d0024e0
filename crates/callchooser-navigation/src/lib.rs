//! CallChooser Navigation
//!
//! Multi-stack back stack management:
//! - One independent history per top level route (tab-like sections)
//! - Shared routes that move between top level stacks
//! - A single flattened back stack published as an immutable snapshot
//!
//! Navigating to the start route collapses everything back to the start
//! stack. `go_back` pops the active stack and drops it once it is empty.

mod error;
mod host;
mod navigator;
mod route;
mod snapshot;
mod stack;

pub use error::NavigationError;
pub use host::NavigationHost;
pub use navigator::{Navigator, NavigatorOptions};
pub use route::{Route, RouteKind};
pub use snapshot::{BackStack, NavigationSnapshot};
pub use stack::{StackRegistry, TopLevelStack};

pub type Result<T> = std::result::Result<T, NavigationError>;

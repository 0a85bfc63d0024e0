//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Start route must be a top level route: {0}")]
    StartRouteNotTopLevel(String),
}

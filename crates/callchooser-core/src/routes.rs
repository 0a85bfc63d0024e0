//! Application routes
//!
//! ```text
//! Search   (top level, start)
//! CallLog  (top level)
//! Contact  (shared: opened from search or call log, lives in one of them)
//! Chooser  (plain: messenger buttons for a number)
//! Premium  (plain: purchase dialog)
//! ```

use serde::{Deserialize, Serialize};

use callchooser_navigation::{Route, RouteKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", rename_all = "snake_case")]
pub enum AppRoute {
    Search,
    CallLog,
    Contact { number: String },
    Chooser { number: String },
    Premium,
}

impl AppRoute {
    pub const START: AppRoute = AppRoute::Search;

    pub fn name(&self) -> &'static str {
        match self {
            AppRoute::Search => "search",
            AppRoute::CallLog => "call_log",
            AppRoute::Contact { .. } => "contact",
            AppRoute::Chooser { .. } => "chooser",
            AppRoute::Premium => "premium",
        }
    }
}

impl Route for AppRoute {
    fn kind(&self) -> RouteKind {
        match self {
            AppRoute::Search | AppRoute::CallLog => RouteKind::TopLevel,
            AppRoute::Contact { .. } => RouteKind::Shared,
            AppRoute::Chooser { .. } | AppRoute::Premium => RouteKind::Plain,
        }
    }
}

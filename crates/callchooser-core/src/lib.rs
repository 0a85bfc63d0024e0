//! CallChooser Core
//!
//! Application layer: routes, configuration, number normalization and
//! messenger deep links around the multi-stack navigator.

mod app;
mod config;
mod error;
mod messenger;
mod number;
mod routes;

pub use app::{CallChooser, Query};
pub use config::Config;
pub use error::CoreError;
pub use messenger::{ContactLink, Messenger};
pub use number::normalize_number;
pub use routes::AppRoute;

pub use callchooser_navigation::{
    BackStack, NavigationError, NavigationHost, NavigationSnapshot, Navigator, NavigatorOptions,
    Route, RouteKind,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging. `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(config: &Config) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    if fmt().with_env_filter(filter).with_target(true).try_init().is_err() {
        tracing::debug!("Logging already initialized");
    }
}

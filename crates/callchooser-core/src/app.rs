//! Main application state container
//!
//! Owns the navigation host and the search query. The UI renders the last
//! entry of the back stack and forwards button presses here.

use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;

use callchooser_navigation::{BackStack, NavigationHost, NavigationSnapshot};

use crate::config::Config;
use crate::error::CoreError;
use crate::messenger::{ContactLink, Messenger};
use crate::number::normalize_number;
use crate::routes::AppRoute;
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Query {
    /// Text as typed
    pub text: String,
    /// Digits extracted from the text
    pub number: String,
}

pub struct CallChooser {
    config: Config,
    navigation: NavigationHost<AppRoute>,
    query: Arc<RwLock<Query>>,
}

impl CallChooser {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let navigation = NavigationHost::new(AppRoute::START, config.navigator_options())?;

        tracing::info!(
            coexisting_top_levels = config.can_top_level_routes_exist_together,
            "CallChooser initialized"
        );

        Ok(Self {
            config,
            navigation,
            query: Arc::new(RwLock::new(Query::default())),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn navigation(&self) -> &NavigationHost<AppRoute> {
        &self.navigation
    }

    // === Query ===

    pub fn set_query(&self, text: &str) -> Query {
        let query = Query {
            text: text.to_string(),
            number: normalize_number(text),
        };
        *self.query.write() = query.clone();
        query
    }

    pub fn clear_query(&self) {
        *self.query.write() = Query::default();
    }

    pub fn query(&self) -> Query {
        self.query.read().clone()
    }

    /// Whether the current query is long enough to search contacts
    pub fn should_search(&self) -> bool {
        self.query.read().text.chars().count() >= self.config.min_query_len
    }

    // === Navigation ===

    pub fn open_call_log(&self) {
        self.navigation.navigate(AppRoute::CallLog);
    }

    /// Open a contact picked from search results or the call log.
    ///
    /// The query lock is held while navigating, so a `choose_messenger` on
    /// another handle sees either the old query and back stack or both new.
    pub fn open_contact(&self, number: &str) -> Result<()> {
        let number = self.require_number(number)?;

        let mut query = self.query.write();
        *query = Query {
            text: number.clone(),
            number: number.clone(),
        };
        self.navigation.navigate(AppRoute::Contact { number });
        Ok(())
    }

    /// Show messenger buttons for the current query's number
    pub fn choose_messenger(&self) -> Result<()> {
        let query = self.query.read();
        let number = self.require_number(&query.number)?;
        self.navigation.navigate(AppRoute::Chooser { number });
        Ok(())
    }

    pub fn open_premium(&self) {
        self.navigation.navigate(AppRoute::Premium);
    }

    pub fn go_home(&self) {
        self.navigation.navigate(AppRoute::START);
    }

    pub fn go_back(&self) -> bool {
        self.navigation.go_back()
    }

    pub fn current_route(&self) -> AppRoute {
        self.navigation.current()
    }

    pub fn back_stack(&self) -> BackStack<AppRoute> {
        self.navigation.back_stack()
    }

    pub fn snapshot(&self) -> NavigationSnapshot<AppRoute> {
        self.navigation.snapshot()
    }

    pub fn snapshot_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    // === Contact links ===

    /// Deep link for the current query's number
    pub fn contact_link(&self, messenger: Messenger) -> Result<ContactLink> {
        let number = self.query.read().number.clone();
        let link = ContactLink::new(messenger, &number)?;

        tracing::info!(messenger = %messenger, link = %link.primary, "Built contact link");

        Ok(link)
    }

    fn require_number(&self, input: &str) -> Result<String> {
        let number = normalize_number(input);
        if number.is_empty() {
            return Err(CoreError::EmptyNumber);
        }
        Ok(number)
    }
}

impl Clone for CallChooser {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            navigation: self.navigation.clone(),
            query: Arc::clone(&self.query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(number: &str) -> AppRoute {
        AppRoute::Contact {
            number: number.to_string(),
        }
    }

    #[test]
    fn test_query_normalization() {
        let app = CallChooser::new(Config::default()).unwrap();

        let query = app.set_query("067 123 45 67");
        assert_eq!(query.number, "380671234567");
        assert!(app.should_search());

        app.set_query("0");
        assert!(!app.should_search());

        app.clear_query();
        assert_eq!(app.query(), Query::default());
    }

    #[test]
    fn test_contact_flow() {
        let app = CallChooser::new(Config::default()).unwrap();

        app.open_contact("+380 67 123 45 67").unwrap();
        app.choose_messenger().unwrap();

        assert_eq!(
            app.current_route(),
            AppRoute::Chooser {
                number: "380671234567".to_string()
            }
        );
        assert_eq!(app.back_stack().len(), 3);

        assert!(app.go_back());
        assert_eq!(app.current_route(), contact("380671234567"));

        app.go_home();
        assert_eq!(app.current_route(), contact("380671234567"));
        assert!(app.go_back());
        assert_eq!(&*app.back_stack(), &[AppRoute::Search]);
        assert!(!app.go_back());
    }

    #[test]
    fn test_contact_moves_to_call_log() {
        let config = Config {
            can_top_level_routes_exist_together: true,
            ..Config::default()
        };
        let app = CallChooser::new(config).unwrap();

        app.open_contact("380671234567").unwrap();
        app.open_call_log();
        app.open_contact("380671234567").unwrap();

        assert_eq!(
            &*app.back_stack(),
            &[
                AppRoute::Search,
                AppRoute::CallLog,
                contact("380671234567")
            ]
        );
        assert_eq!(app.navigation().top_level_route(), AppRoute::CallLog);
    }

    #[test]
    fn test_missing_number_rejected() {
        let app = CallChooser::new(Config::default()).unwrap();

        assert!(matches!(app.open_contact("Mom"), Err(CoreError::EmptyNumber)));
        assert!(matches!(app.choose_messenger(), Err(CoreError::EmptyNumber)));
        assert!(matches!(
            app.contact_link(Messenger::Telegram),
            Err(CoreError::EmptyNumber)
        ));
        assert_eq!(&*app.back_stack(), &[AppRoute::Search]);
    }

    #[test]
    fn test_query_tracks_last_contact_across_handles() {
        let app = CallChooser::new(Config::default()).unwrap();

        let handles: Vec<_> = (0..4u32)
            .map(|t| {
                let app = app.clone();
                std::thread::spawn(move || {
                    for i in 0..25u32 {
                        let number = format!("38067{:07}", t * 100 + i);
                        app.open_contact(&number).unwrap();
                        app.choose_messenger().unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // The query always names the most recently opened contact
        let back_stack = app.back_stack();
        let last_contact = back_stack.iter().rev().find_map(|route| match route {
            AppRoute::Contact { number } => Some(number.clone()),
            _ => None,
        });
        assert_eq!(last_contact, Some(app.query().number));
    }

    #[test]
    fn test_contact_link_uses_query() {
        let app = CallChooser::new(Config::default()).unwrap();
        app.set_query("0671234567");

        let link = app.contact_link(Messenger::WhatsApp).unwrap();
        assert_eq!(link.primary.as_str(), "https://wa.me/380671234567");
    }

    #[test]
    fn test_snapshot_json() {
        let app = CallChooser::new(Config::default()).unwrap();
        app.open_call_log();
        app.open_premium();

        let json = app.snapshot_json().unwrap();
        assert_eq!(
            json,
            r#"{"back_stack":[{"route":"search"},{"route":"call_log"},{"route":"premium"}],"top_level_route":{"route":"call_log"}}"#
        );
    }
}

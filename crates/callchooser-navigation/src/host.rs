//! Thread-safe navigator handle
//!
//! Mutations run under the write lock from start to publish, so producers
//! on different threads are serialized and readers only ever see complete
//! snapshots.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::navigator::{Navigator, NavigatorOptions};
use crate::route::Route;
use crate::snapshot::{BackStack, NavigationSnapshot};
use crate::Result;

pub struct NavigationHost<R: Route> {
    navigator: Arc<RwLock<Navigator<R>>>,
}

impl<R: Route> NavigationHost<R> {
    pub fn new(start_route: R, options: NavigatorOptions) -> Result<Self> {
        Ok(Self::from_navigator(Navigator::with_options(
            start_route,
            options,
        )?))
    }

    pub fn from_navigator(navigator: Navigator<R>) -> Self {
        Self {
            navigator: Arc::new(RwLock::new(navigator)),
        }
    }

    pub fn navigate(&self, route: R) {
        self.navigator.write().navigate(route);
    }

    pub fn go_back(&self) -> bool {
        self.navigator.write().go_back()
    }

    pub fn back_stack(&self) -> BackStack<R> {
        self.navigator.read().back_stack()
    }

    pub fn current(&self) -> R {
        self.navigator.read().current().clone()
    }

    pub fn top_level_route(&self) -> R {
        self.navigator.read().top_level_route().clone()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.read().can_go_back()
    }

    pub fn snapshot(&self) -> NavigationSnapshot<R> {
        self.navigator.read().snapshot()
    }

    /// Run a read-only closure against the navigator
    pub fn with_navigator<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Navigator<R>) -> T,
    {
        f(&self.navigator.read())
    }
}

impl<R: Route> Clone for NavigationHost<R> {
    fn clone(&self) -> Self {
        Self {
            navigator: Arc::clone(&self.navigator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteKind;
    use std::thread;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum Screen {
        Home,
        Item(u32),
    }

    impl Route for Screen {
        fn kind(&self) -> RouteKind {
            match self {
                Screen::Home => RouteKind::TopLevel,
                Screen::Item(_) => RouteKind::Plain,
            }
        }
    }

    #[test]
    fn test_clones_share_state() {
        let host = NavigationHost::new(Screen::Home, NavigatorOptions::default()).unwrap();
        let other = host.clone();

        other.navigate(Screen::Item(1));

        assert_eq!(host.current(), Screen::Item(1));
        assert!(host.can_go_back());
        assert!(host.go_back());
        assert_eq!(&*other.back_stack(), &[Screen::Home]);
    }

    #[test]
    fn test_concurrent_producers_are_serialized() {
        let host = NavigationHost::new(Screen::Home, NavigatorOptions::default()).unwrap();

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let host = host.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        host.navigate(Screen::Item(t * 100 + i));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        let back_stack = host.back_stack();
        assert_eq!(back_stack.len(), 201);
        assert_eq!(back_stack.first(), Some(&Screen::Home));
        assert_eq!(host.top_level_route(), Screen::Home);
        assert_eq!(host.with_navigator(|nav| nav.top_level_routes().len()), 1);
    }
}

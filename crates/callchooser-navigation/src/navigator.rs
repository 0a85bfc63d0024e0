//! Navigator
//!
//! Keeps one history per top level route and flattens them, in registry
//! order, into the single back stack the rendering host displays.
//!
//! ```text
//! registry: Search   => [Search, Contact(1)]
//!           CallLog  => [CallLog, Chooser(1)]
//! back stack:          [Search, Contact(1), CallLog, Chooser(1)]
//! ```

use std::collections::HashMap;

use crate::error::NavigationError;
use crate::route::{Route, RouteKind};
use crate::snapshot::{BackStack, NavigationSnapshot};
use crate::stack::{StackRegistry, TopLevelStack};
use crate::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Keep several non-start top level stacks alive at once. When false,
    /// switching top level route drops every stack except the start stack.
    pub can_top_level_routes_exist_together: bool,
    /// Dump the stack registry after every mutation
    pub debug_logging: bool,
}

#[derive(Debug, Clone)]
pub struct Navigator<R: Route> {
    start_route: R,
    options: NavigatorOptions,
    stacks: StackRegistry<R>,
    /// Shared route => top level key of the stack holding it
    shared_routes: HashMap<R, R>,
    top_level_route: R,
    back_stack: BackStack<R>,
}

impl<R: Route> Navigator<R> {
    pub fn new(start_route: R) -> Result<Self> {
        Self::with_options(start_route, NavigatorOptions::default())
    }

    pub fn with_options(start_route: R, options: NavigatorOptions) -> Result<Self> {
        if !start_route.kind().is_top_level() {
            return Err(NavigationError::StartRouteNotTopLevel(format!(
                "{:?}",
                start_route
            )));
        }

        let stacks = StackRegistry::new(start_route.clone());
        let back_stack = BackStack::new(stacks.flatten());

        Ok(Self {
            top_level_route: start_route.clone(),
            start_route,
            options,
            stacks,
            shared_routes: HashMap::new(),
            back_stack,
        })
    }

    pub fn start_route(&self) -> &R {
        &self.start_route
    }

    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    /// Currently published back stack
    pub fn back_stack(&self) -> BackStack<R> {
        self.back_stack.clone()
    }

    /// The visible destination
    pub fn current(&self) -> &R {
        self.back_stack
            .current()
            .unwrap_or(&self.start_route)
    }

    /// Top level route whose stack receives new pushes
    pub fn top_level_route(&self) -> &R {
        &self.top_level_route
    }

    pub fn top_level_routes(&self) -> Vec<R> {
        self.stacks.keys().cloned().collect()
    }

    /// Entries of one top level stack, if it is registered
    pub fn stack(&self, key: &R) -> Option<&[R]> {
        self.stacks.get(key).map(|stack| stack.entries())
    }

    /// Top level key of the stack currently holding a shared route
    pub fn owner_of(&self, route: &R) -> Option<&R> {
        self.shared_routes.get(route)
    }

    pub fn can_go_back(&self) -> bool {
        self.back_stack.len() > 1
    }

    pub fn snapshot(&self) -> NavigationSnapshot<R> {
        NavigationSnapshot {
            back_stack: self.back_stack(),
            top_level_route: self.top_level_route.clone(),
        }
    }

    /// Navigate to the given route.
    pub fn navigate(&mut self, route: R) {
        tracing::debug!(route = ?route, kind = %route.kind(), "Navigating");
        self.add(route);
        self.publish();
    }

    /// Go back to the previous route.
    ///
    /// Returns false when the back stack is already at its root.
    pub fn go_back(&mut self) -> bool {
        if self.back_stack.len() <= 1 {
            return false;
        }

        let active = self.top_level_route.clone();
        let Some(stack) = self.stacks.get_mut(&active) else {
            debug_assert!(false, "active top level route {:?} is not registered", active);
            return false;
        };

        let removed = stack.pop();
        let exhausted = stack.is_empty();

        if let Some(removed) = &removed {
            if removed.kind().is_shared() {
                self.shared_routes.remove(removed);
            }
            tracing::debug!(route = ?removed, top_level = ?active, "Popped route");
        }

        if exhausted {
            self.stacks.detach(&active);
            tracing::debug!(top_level = ?active, "Removed exhausted top level stack");
        }

        if let Some(last) = self.stacks.last_key() {
            self.top_level_route = last.clone();
        }

        self.publish();
        removed.is_some()
    }

    fn add(&mut self, route: R) {
        match route.kind() {
            RouteKind::TopLevel => self.add_top_level(route),
            RouteKind::Shared => {
                if let Some(old_parent) = self.shared_routes.remove(&route) {
                    if let Some(stack) = self.stacks.get_mut(&old_parent) {
                        stack.remove(&route);
                    }
                }
                self.shared_routes
                    .insert(route.clone(), self.top_level_route.clone());
                self.push_active(route);
            }
            RouteKind::Plain => self.push_active(route),
        }
    }

    fn add_top_level(&mut self, route: R) {
        if route == self.start_route {
            self.clear_all_except_start_stack();
        } else {
            let stack = self
                .stacks
                .detach(&route)
                .unwrap_or_else(|| TopLevelStack::new(route.clone()));

            if !self.options.can_top_level_routes_exist_together {
                self.clear_all_except_start_stack();
            }

            self.stacks.insert_last(route.clone(), stack);
            tracing::debug!(route = ?route, "Added top level route");
        }

        self.top_level_route = route;
    }

    fn clear_all_except_start_stack(&mut self) {
        let dropped = self.stacks.retain_start(&self.start_route);
        if !dropped.is_empty() {
            self.shared_routes
                .retain(|_, owner| !dropped.contains(owner));
        }
    }

    fn push_active(&mut self, route: R) {
        let active = &self.top_level_route;
        match self.stacks.get_mut(active) {
            Some(stack) => {
                tracing::debug!(route = ?route, top_level = ?active, "Added route");
                stack.push(route);
            }
            None => {
                debug_assert!(false, "active top level route {:?} is not registered", active);
            }
        }
    }

    fn publish(&mut self) {
        self.back_stack = BackStack::new(self.stacks.flatten());
        self.check_invariants();

        if self.options.debug_logging {
            tracing::debug!("Back stack: {:?}", &*self.back_stack);
            tracing::debug!("{}", self.stacks);
        }
    }

    fn check_invariants(&self) {
        debug_assert!(!self.back_stack.is_empty(), "back stack is empty");
        debug_assert_eq!(
            self.back_stack.first(),
            Some(&self.start_route),
            "start route is not at the bottom of the back stack"
        );
        debug_assert!(
            self.stacks.contains_key(&self.top_level_route),
            "active top level route {:?} is not registered",
            self.top_level_route
        );
        debug_assert!(
            self.stacks.stacks().all(|(_, stack)| !stack.is_empty()),
            "registered stack is empty"
        );
        debug_assert!(
            self.shared_routes.iter().all(|(route, owner)| self
                .stacks
                .get(owner)
                .is_some_and(|stack| stack.contains(route))),
            "shared route ownership is out of date"
        );
    }
}

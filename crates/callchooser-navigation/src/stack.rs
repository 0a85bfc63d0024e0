//! Top level stacks and their ordered registry

use indexmap::IndexMap;
use std::fmt;

use crate::route::Route;

/// History of one top level section. The first entry is the root route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelStack<R> {
    entries: Vec<R>,
}

impl<R: Route> TopLevelStack<R> {
    pub fn new(root: R) -> Self {
        Self {
            entries: vec![root],
        }
    }

    pub fn entries(&self) -> &[R] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, route: R) {
        self.entries.push(route);
    }

    pub fn pop(&mut self) -> Option<R> {
        self.entries.pop()
    }

    /// Remove the first occurrence of `route`, returning whether it was present
    pub fn remove(&mut self, route: &R) -> bool {
        match self.entries.iter().position(|r| r == route) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, route: &R) -> bool {
        self.entries.contains(route)
    }
}

/// Insertion-ordered map from top level key to its stack.
///
/// Order decides both the flattening order of the back stack and which
/// stack becomes active after `go_back` pops one away.
#[derive(Debug, Clone)]
pub struct StackRegistry<R: Route> {
    stacks: IndexMap<R, TopLevelStack<R>>,
}

impl<R: Route> StackRegistry<R> {
    pub fn new(start: R) -> Self {
        let mut stacks = IndexMap::new();
        stacks.insert(start.clone(), TopLevelStack::new(start));
        Self { stacks }
    }

    /// Drop every stack except the start stack, keeping the start stack's
    /// history. Returns the keys of the dropped stacks.
    pub fn retain_start(&mut self, start: &R) -> Vec<R> {
        let start_stack = self
            .stacks
            .shift_remove(start)
            .unwrap_or_else(|| TopLevelStack::new(start.clone()));

        let dropped: Vec<R> = self.stacks.drain(..).map(|(key, _)| key).collect();
        self.stacks.insert(start.clone(), start_stack);

        dropped
    }

    /// Detach a stack from the registry, preserving the order of the rest
    pub fn detach(&mut self, key: &R) -> Option<TopLevelStack<R>> {
        self.stacks.shift_remove(key)
    }

    /// Register a stack as the last entry in iteration order
    pub fn insert_last(&mut self, key: R, stack: TopLevelStack<R>) {
        self.stacks.shift_remove(&key);
        self.stacks.insert(key, stack);
    }

    pub fn get(&self, key: &R) -> Option<&TopLevelStack<R>> {
        self.stacks.get(key)
    }

    pub fn get_mut(&mut self, key: &R) -> Option<&mut TopLevelStack<R>> {
        self.stacks.get_mut(key)
    }

    pub fn contains_key(&self, key: &R) -> bool {
        self.stacks.contains_key(key)
    }

    pub fn last_key(&self) -> Option<&R> {
        self.stacks.last().map(|(key, _)| key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &R> {
        self.stacks.keys()
    }

    pub fn stacks(&self) -> impl Iterator<Item = (&R, &TopLevelStack<R>)> {
        self.stacks.iter()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Concatenate every stack in registry order
    pub fn flatten(&self) -> Vec<R> {
        self.stacks
            .values()
            .flat_map(|stack| stack.entries().iter().cloned())
            .collect()
    }
}

impl<R: Route> fmt::Display for StackRegistry<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Top level stacks:")?;
        for (key, stack) in &self.stacks {
            writeln!(f, "  {:?} => {:?}", key, stack.entries())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RouteKind;

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    enum R {
        Home,
        Tab(u8),
        Page(u8),
    }

    impl Route for R {
        fn kind(&self) -> RouteKind {
            match self {
                R::Home | R::Tab(_) => RouteKind::TopLevel,
                R::Page(_) => RouteKind::Plain,
            }
        }
    }

    #[test]
    fn test_stack_remove_first_occurrence() {
        let mut stack = TopLevelStack::new(R::Tab(1));
        stack.push(R::Page(1));
        stack.push(R::Page(2));

        assert!(stack.remove(&R::Page(1)));
        assert!(!stack.remove(&R::Page(9)));
        assert_eq!(stack.entries(), &[R::Tab(1), R::Page(2)]);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_registry_flatten_follows_insertion_order() {
        let mut registry = StackRegistry::new(R::Home);
        registry.insert_last(R::Tab(2), TopLevelStack::new(R::Tab(2)));
        registry.insert_last(R::Tab(1), TopLevelStack::new(R::Tab(1)));
        registry.get_mut(&R::Tab(2)).unwrap().push(R::Page(7));

        assert_eq!(
            registry.flatten(),
            vec![R::Home, R::Tab(2), R::Page(7), R::Tab(1)]
        );
        assert_eq!(registry.last_key(), Some(&R::Tab(1)));
    }

    #[test]
    fn test_insert_last_moves_existing_key_to_end() {
        let mut registry = StackRegistry::new(R::Home);
        registry.insert_last(R::Tab(1), TopLevelStack::new(R::Tab(1)));
        registry.insert_last(R::Tab(2), TopLevelStack::new(R::Tab(2)));

        let stack = registry.detach(&R::Tab(1)).unwrap();
        registry.insert_last(R::Tab(1), stack);

        let keys: Vec<_> = registry.keys().cloned().collect();
        assert_eq!(keys, vec![R::Home, R::Tab(2), R::Tab(1)]);
    }

    #[test]
    fn test_retain_start_keeps_start_history() {
        let mut registry = StackRegistry::new(R::Home);
        registry.get_mut(&R::Home).unwrap().push(R::Page(1));
        registry.insert_last(R::Tab(1), TopLevelStack::new(R::Tab(1)));
        registry.insert_last(R::Tab(2), TopLevelStack::new(R::Tab(2)));

        let dropped = registry.retain_start(&R::Home);

        assert!(!registry.is_empty());
        assert_eq!(dropped, vec![R::Tab(1), R::Tab(2)]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.flatten(), vec![R::Home, R::Page(1)]);
    }

    #[test]
    fn test_display_lists_each_stack() {
        let mut registry = StackRegistry::new(R::Home);
        registry.insert_last(R::Tab(1), TopLevelStack::new(R::Tab(1)));

        let dump = registry.to_string();
        assert!(dump.starts_with("Top level stacks:"));
        assert!(dump.contains("Home => [Home]"));
        assert!(dump.contains("Tab(1) => [Tab(1)]"));
    }
}

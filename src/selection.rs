//! Per-session selection of products to compare side by side.

use crate::catalog::Product;
use std::collections::HashSet;

/// Actions accepted by [`Selection::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionAction {
    /// Add the id if absent, remove it if present.
    Toggle(String),
    /// Deselect everything.
    Clear,
}

/// The set of product ids a user has marked for comparison.
///
/// Held by the caller for the lifetime of a session and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: HashSet<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an action to the selection.
    pub fn apply(&mut self, action: SelectionAction) {
        match action {
            SelectionAction::Toggle(id) => self.toggle(id),
            SelectionAction::Clear => self.ids.clear(),
        }
    }

    /// Adds the id if absent, removes it if present.
    pub fn toggle(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns the selected products in catalog order.
    pub fn list(&self, catalog: &[Product]) -> Vec<Product> {
        catalog.iter().filter(|p| self.contains(&p.id)).cloned().collect()
    }

    /// Returns selected ids that do not exist in the catalog.
    pub fn unknown_ids(&self, catalog: &[Product]) -> Vec<String> {
        let known: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        let mut unknown: Vec<String> =
            self.ids.iter().filter(|id| !known.contains(id.as_str())).cloned().collect();
        unknown.sort();
        unknown
    }
}

use crate::domain::model::ItemId;
use std::collections::BTreeSet;

/// The dishes picked for a custom menu plus its free-text name and description.
///
/// Membership is only changed through [`crate::core::menu::Menu`], which keeps
/// every selected id present in the store.
#[derive(Debug, Clone, Default)]
pub struct Planner {
    selected: BTreeSet<ItemId>,
    name: String,
    description: String,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_selected(&self, id: ItemId) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.selected.iter().copied()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Flips membership and returns whether `id` is selected afterwards.
    pub(crate) fn toggle(&mut self, id: ItemId) -> bool {
        if self.selected.remove(&id) {
            false
        } else {
            self.selected.insert(id);
            true
        }
    }

    pub(crate) fn deselect(&mut self, id: ItemId) -> bool {
        self.selected.remove(&id)
    }

    pub(crate) fn replace(&mut self, ids: impl IntoIterator<Item = ItemId>) {
        self.selected = ids.into_iter().collect();
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Drops the selection and resets the name and description.
    pub(crate) fn reset(&mut self) {
        self.selected.clear();
        self.name.clear();
        self.description.clear();
    }
}

use crate::core::guest;
use crate::core::menu_store::MenuStore;
use crate::core::planner::Planner;
use crate::core::stats;
use crate::domain::model::{
    Course, CourseStats, GuestFilter, ItemId, MenuItem, Money, OverallStats, RemoveAllOutcome,
    SelectAllOutcome,
};
use crate::utils::error::{MenuError, Result};

/// The menu store together with the planner selection drawn from it.
///
/// All mutations go through here so that removing a dish also removes it from
/// the planner.
#[derive(Debug, Clone, Default)]
pub struct Menu {
    store: MenuStore,
    planner: Planner,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        name: &str,
        description: &str,
        course: Course,
        price: &str,
    ) -> Result<MenuItem> {
        let item = self.store.add(name, description, course, price)?.clone();
        tracing::info!("Added {} '{}' at {}", item.course, item.name, item.price);
        Ok(item)
    }

    /// Removes one dish. `None` means there was nothing with that id; the menu is unchanged.
    pub fn remove(&mut self, id: ItemId) -> Option<MenuItem> {
        let removed = self.store.remove(id);
        match &removed {
            Some(item) => {
                let was_selected = self.planner.deselect(id);
                tracing::info!(
                    "Removed item {} '{}' (planner updated: {})",
                    id,
                    item.name,
                    was_selected
                );
            }
            None => tracing::debug!("Remove requested for unknown item {}", id),
        }
        removed
    }

    pub fn remove_all(&mut self) -> RemoveAllOutcome {
        if self.store.is_empty() {
            return RemoveAllOutcome::NothingToRemove;
        }
        let removed = self.store.clear();
        self.planner.clear_selection();
        tracing::info!("Removed all {} menu items", removed);
        RemoveAllOutcome::Removed(removed)
    }

    /// Flips planner membership of a dish and returns whether it is now selected.
    pub fn toggle(&mut self, id: ItemId) -> Result<bool> {
        if !self.store.contains(id) {
            return Err(MenuError::NotFound { id: id.0 });
        }
        let selected = self.planner.toggle(id);
        tracing::debug!("Item {} selected: {}", id, selected);
        Ok(selected)
    }

    pub fn select_all(&mut self) -> SelectAllOutcome {
        if self.store.is_empty() {
            return SelectAllOutcome::NothingToAdd;
        }
        self.planner
            .replace(self.store.items().iter().map(|item| item.id));
        tracing::info!("Added all {} items to the planner", self.planner.len());
        SelectAllOutcome::Selected(self.planner.len())
    }

    pub fn clear_planner(&mut self) {
        self.planner.reset();
        tracing::debug!("Planner cleared");
    }

    pub fn set_planner_name(&mut self, name: impl Into<String>) {
        self.planner.set_name(name);
    }

    pub fn set_planner_description(&mut self, description: impl Into<String>) {
        self.planner.set_description(description);
    }

    /// Selected dishes in menu order.
    pub fn selected_items(&self) -> Vec<&MenuItem> {
        self.store
            .items()
            .iter()
            .filter(|item| self.planner.is_selected(item.id))
            .collect()
    }

    pub fn planner_total(&self) -> Money {
        stats::total_price(self.selected_items().into_iter())
    }

    pub fn per_course_stats(&self) -> Vec<CourseStats> {
        stats::per_course_stats(self.store.items())
    }

    pub fn overall_stats(&self) -> OverallStats {
        stats::overall_stats(self.store.items())
    }

    pub fn most_expensive(&self) -> Option<&MenuItem> {
        stats::most_expensive(self.store.items())
    }

    pub fn filtered(&self, filter: GuestFilter) -> Vec<&MenuItem> {
        guest::filtered(self.store.items(), filter)
    }

    pub fn items(&self) -> &[MenuItem] {
        self.store.items()
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.store.get(id)
    }

    pub fn planner(&self) -> &Planner {
        &self.planner
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

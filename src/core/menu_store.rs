use crate::domain::model::{Course, ItemId, MenuItem};
use crate::utils::error::Result;
use crate::utils::validation::{
    parse_price, required_field, MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH,
};

/// Ordered collection of dishes. Insertion order is display order.
#[derive(Debug, Clone)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Validates the raw form input and appends a new item. Nothing changes on error.
    pub fn add(
        &mut self,
        name: &str,
        description: &str,
        course: Course,
        price: &str,
    ) -> Result<&MenuItem> {
        let name = required_field("name", name, MAX_NAME_LENGTH)?;
        let description = required_field("description", description, MAX_DESCRIPTION_LENGTH)?;
        let price = parse_price(price)?;

        let id = ItemId(self.next_id);
        self.next_id += 1;

        tracing::debug!("Adding item {} '{}' ({}, {})", id, name, course, price);
        self.items.push(MenuItem {
            id,
            name: name.to_string(),
            description: description.to_string(),
            course,
            price,
        });

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    pub fn remove(&mut self, id: ItemId) -> Option<MenuItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Empties the store and returns how many items were dropped. Ids are never reused.
    pub fn clear(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

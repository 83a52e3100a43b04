use crate::app::views;
use crate::config::restaurant::RestaurantConfig;
use crate::core::contact::ContactIntent;
use crate::core::export::{export_items, ExportFormat};
use crate::core::menu::Menu;
use crate::domain::model::{
    Course, GuestFilter, ItemId, MenuItem, RemoveAllOutcome, ViewMode,
};
use crate::domain::ports::{Confirm, ContactLauncher};
use crate::utils::error::Result;
use url::Url;

/// What happened to a single removal request.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveOutcome {
    Removed(MenuItem),
    NotFound,
    Cancelled,
}

/// What happened to a remove-all request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveAllResult {
    NothingToRemove,
    Cancelled,
    Removed(usize),
}

pub const REMOVE_PROMPT: &str = "Are you sure you want to remove this item from the menu?";
pub const REMOVE_ALL_PROMPT: &str =
    "Are you sure you want to remove ALL menu items? This action cannot be undone.";

/// One chef's session: the menu, which view is showing and the guest filter.
pub struct ChefSession<L: ContactLauncher> {
    menu: Menu,
    view: ViewMode,
    guest_filter: GuestFilter,
    restaurant: RestaurantConfig,
    launcher: L,
}

impl<L: ContactLauncher> ChefSession<L> {
    pub fn new(restaurant: RestaurantConfig, launcher: L) -> Self {
        Self {
            menu: Menu::new(),
            view: ViewMode::default(),
            guest_filter: GuestFilter::default(),
            restaurant,
            launcher,
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut Menu {
        &mut self.menu
    }

    pub fn restaurant(&self) -> &RestaurantConfig {
        &self.restaurant
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn set_view(&mut self, view: ViewMode) {
        tracing::debug!("View changed: {} -> {}", self.view, view);
        self.view = view;
    }

    pub fn guest_filter(&self) -> GuestFilter {
        self.guest_filter
    }

    pub fn set_guest_filter(&mut self, filter: GuestFilter) {
        self.guest_filter = filter;
    }

    pub fn add(
        &mut self,
        name: &str,
        description: &str,
        course: Course,
        price: &str,
    ) -> Result<MenuItem> {
        self.menu.add(name, description, course, price)
    }

    /// Asks for confirmation only when the item exists.
    pub fn remove(&mut self, id: ItemId, confirm: &mut dyn Confirm) -> RemoveOutcome {
        if self.menu.get(id).is_none() {
            return RemoveOutcome::NotFound;
        }
        if !confirm.confirm(REMOVE_PROMPT) {
            tracing::debug!("Removal of item {} cancelled", id);
            return RemoveOutcome::Cancelled;
        }
        match self.menu.remove(id) {
            Some(item) => RemoveOutcome::Removed(item),
            None => RemoveOutcome::NotFound,
        }
    }

    /// An empty menu is reported before any prompt is shown.
    pub fn remove_all(&mut self, confirm: &mut dyn Confirm) -> RemoveAllResult {
        if self.menu.is_empty() {
            return RemoveAllResult::NothingToRemove;
        }
        if !confirm.confirm(REMOVE_ALL_PROMPT) {
            tracing::debug!("Remove all cancelled");
            return RemoveAllResult::Cancelled;
        }
        match self.menu.remove_all() {
            RemoveAllOutcome::Removed(count) => RemoveAllResult::Removed(count),
            RemoveAllOutcome::NothingToRemove => RemoveAllResult::NothingToRemove,
        }
    }

    pub fn call(&mut self) -> Result<Url> {
        let intent = ContactIntent::Phone(self.restaurant.restaurant.phone.clone());
        self.launch(intent)
    }

    pub fn email(&mut self) -> Result<Url> {
        let intent = ContactIntent::Email(self.restaurant.restaurant.email.clone());
        self.launch(intent)
    }

    pub fn directions(&mut self) -> Result<Url> {
        let intent = ContactIntent::Map(self.restaurant.restaurant.address.clone());
        self.launch(intent)
    }

    fn launch(&mut self, intent: ContactIntent) -> Result<Url> {
        let url = intent.to_url(&self.restaurant.restaurant.maps_base_url)?;
        self.launcher.launch(&intent, &url);
        Ok(url)
    }

    /// Whole menu, or only the planner selection, as export text.
    pub fn export(&self, format: ExportFormat, selected_only: bool) -> Result<String> {
        let items: Vec<&MenuItem> = if selected_only {
            self.menu.selected_items()
        } else {
            self.menu.items().iter().collect()
        };
        export_items(&items, format)
    }

    /// Text for the current view.
    pub fn render(&self) -> String {
        views::render(self.view, &self.menu, self.guest_filter, &self.restaurant)
    }
}

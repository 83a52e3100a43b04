pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use app::repl::Repl;
#[cfg(feature = "cli")]
pub use config::{cli::PrintLauncher, CliConfig};

pub use app::session::ChefSession;
pub use config::restaurant::RestaurantConfig;
pub use core::menu::Menu;
pub use domain::model::{Course, GuestFilter, ItemId, MenuItem, Money, ViewMode};
pub use utils::error::{MenuError, Result};

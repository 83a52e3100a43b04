pub mod contact;
pub mod export;
pub mod guest;
pub mod menu;
pub mod menu_store;
pub mod planner;
pub mod stats;

pub use crate::domain::model::{
    Course, CourseStats, GuestFilter, ItemId, MenuItem, Money, OverallStats, ViewMode,
};
pub use crate::domain::ports::{Confirm, ContactLauncher};
pub use crate::utils::error::Result;

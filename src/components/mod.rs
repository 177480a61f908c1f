//! UI Components
//!
//! Reusable Leptos components.

mod cart_panel;
mod category_sidebar;
mod detail_modal;
mod plant_card;
mod plant_grid;

pub use cart_panel::CartPanel;
pub use category_sidebar::CategorySidebar;
pub use detail_modal::DetailModal;
pub use plant_card::PlantCard;
pub use plant_grid::PlantGrid;

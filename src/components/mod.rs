//! UI Components
//!
//! Leptos components for the catalog and the booking cart.

mod booked_items;
mod category_nav;
mod item_row;
mod item_table;
mod search_box;

pub use booked_items::BookedItems;
pub use category_nav::CategoryNav;
pub use item_row::ItemRow;
pub use item_table::ItemTable;
pub use search_box::SearchBox;

//! UI Components
//!
//! Leptos components for the shopping screen.

mod theme_toggle;
mod search_bar;
mod new_item_form;
mod item_row;
mod item_list;
mod total_bar;
mod clear_all_button;
mod shopping_screen;

pub use theme_toggle::ThemeToggle;
pub use search_bar::SearchBar;
pub use new_item_form::NewItemForm;
pub use item_row::ItemRow;
pub use item_list::ItemList;
pub use total_bar::TotalBar;
pub use clear_all_button::ClearAllButton;
pub use shopping_screen::ShoppingScreen;

//! UI Components
//!
//! Leptos components for the list widget.

mod list_row;
mod list_view;
mod search_bar;
mod virtual_list;

pub use list_row::ListRow;
pub use list_view::ListView;
pub use search_bar::SearchBar;
pub use virtual_list::VirtualList;

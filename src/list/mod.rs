//! List Logic
//!
//! DOM-free state for the list container: loaded pages, selection,
//! reordering, paging guard, debounce and windowing.

mod page;
mod selection;
mod loader;
mod debounce;
mod viewport;

pub use page::{PageState, ReorderUndo};
pub use selection::SelectionSet;
pub use loader::{needs_more, LoadGuard};
pub use debounce::{Debouncer, LatestOnly};
pub use viewport::Viewport;

//! List Row Component
//!
//! One row of the list: drag source, drop target and selection checkbox.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::list::Viewport;
use crate::models::ListItem;
use crate::store::{use_list_store, ListViewStateStoreFields};

/// A single absolutely positioned row inside the virtual list
#[component]
pub fn ListRow(
    /// Visual index in the loaded records
    index: usize,
    item: ListItem,
    viewport: Viewport,
    dnd: DndSignals,
    on_toggle: Callback<u32>,
) -> impl IntoView {
    let store = use_list_store();

    let id = item.id;
    let row = RowRef::new(index, id);
    let is_selected = move || store.selected().read().contains(id);

    // DnD handlers
    let on_mousedown = make_on_mousedown(dnd, row);
    let on_mouseenter = make_on_row_mouseenter(dnd, row);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let is_dragging = move || dnd.dragging_read.get().map(|r| r.index) == Some(index);
    let is_drop_target = move || dnd.drop_target_read.get().map(|r| r.index) == Some(index);

    let row_class = move || {
        let mut c = String::from("list-row");
        if is_selected() { c.push_str(" selected"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };
    let row_style = move || {
        format!(
            "position: absolute; left: 0; right: 0; top: {}px; height: {}px; opacity: {};",
            viewport.row_top(index),
            viewport.row_height,
            if is_dragging() { 0.5 } else { 1.0 },
        )
    };

    view! {
        <div
            class=row_class
            style=row_style
            on:mousedown=on_mousedown
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        >
            <input
                type="checkbox"
                prop:checked=is_selected
                on:change=move |_| on_toggle.run(id)
            />
            <span class="list-row-name">{item.name}</span>
        </div>
    }
}

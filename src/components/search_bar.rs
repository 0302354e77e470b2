//! Search Bar Component
//!
//! Debounced search input and sort direction toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_list_context;
use crate::store::{use_list_store, ListViewStateStoreFields};

#[component]
pub fn SearchBar(on_toggle_sort: Callback<()>) -> impl IntoView {
    let ctx = use_list_context();
    let store = use_list_store();

    // Raw input; the store only sees it once typing pauses
    let (input_value, set_input_value) = signal(String::new());

    let on_input = move |ev: web_sys::Event| {
        let text = event_target_value(&ev);
        set_input_value.set(text.clone());
        let debouncer = ctx.search_debounce.get_value();
        spawn_local(async move {
            if debouncer.settle().await {
                log::debug!("[LIST] search committed: {:?}", text);
                store.search().set(text);
            }
        });
    };

    view! {
        <div class="list-toolbar">
            <input
                type="text"
                class="list-search"
                placeholder="Search items"
                prop:value=move || input_value.get()
                on:input=on_input
            />
            <button
                class="sort-btn"
                title=move || format!("Sort order: {}", store.sort_order().get())
                on:click=move |_| on_toggle_sort.run(())
            >
                {move || format!("({})", store.sort_order().get().arrow())}
            </button>
        </div>
    }
}

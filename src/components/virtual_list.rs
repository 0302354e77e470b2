//! Virtual List Component
//!
//! Fixed-height scroll viewport that renders only the rows in view.

use leptos::html;
use leptos::prelude::*;

use crate::list::{needs_more, Viewport};
use crate::models::ListItem;

#[component]
pub fn VirtualList(
    viewport: Viewport,
    #[prop(into)] rows: Signal<Vec<ListItem>>,
    /// Total records on the server for the current query
    #[prop(into)] total: Signal<usize>,
    /// Scroll back to the top whenever this changes
    #[prop(into)] reset_key: Signal<u64>,
    /// Called when the last loaded row comes into view
    on_reach_end: Callback<()>,
    render_row: Callback<(usize, ListItem), AnyView>,
) -> impl IntoView {
    let container = NodeRef::<html::Div>::new();
    let (scroll_top, set_scroll_top) = signal(0.0f64);

    Effect::new(move |_| {
        reset_key.track();
        if let Some(el) = container.get_untracked() {
            el.set_scroll_top(0);
        }
        set_scroll_top.set(0.0);
    });

    Effect::new(move |_| {
        let len = rows.with(|r| r.len());
        let stop = viewport.visible_stop(scroll_top.get(), len);
        if needs_more(stop, len, total.get()) {
            on_reach_end.run(());
        }
    });

    let visible_rows = move || {
        let top = scroll_top.get();
        rows.with(|rows| {
            viewport
                .visible_range(top, rows.len())
                .map(|i| (i, rows[i].clone()))
                .collect::<Vec<_>>()
        })
    };

    let on_scroll = move |ev: web_sys::Event| {
        let el = event_target::<web_sys::HtmlElement>(&ev);
        set_scroll_top.set(el.scroll_top() as f64);
    };

    view! {
        <div
            class="virtual-list"
            node_ref=container
            style=format!("height: {}px; overflow-y: auto; position: relative;", viewport.height)
            on:scroll=on_scroll
        >
            <div style=move || format!("height: {}px; position: relative;", viewport.total_height(rows.with(|r| r.len())))>
                <For
                    each=visible_rows
                    key=|(index, item)| (*index, item.id)
                    children=move |row| render_row.run(row)
                />
            </div>
        </div>
    }
}

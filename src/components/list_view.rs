//! List View Component
//!
//! Owns the list state flow: first-page fetch on search/sort change,
//! incremental paging, selection, sort toggling and drag reordering.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ListRow, SearchBar, VirtualList};
use crate::context::use_list_context;
use crate::list::SelectionSet;
use crate::models::ListItem;
use crate::storage::{save_list_state, BrowserStorage};
use crate::store::{
    apply_seed, store_append_page, store_persisted, store_plan_drop, store_replace_page,
    store_toggle_selected, store_toggle_sort, store_undo_move, use_list_store, ListViewStateStoreFields,
};

use leptos_dragdrop::*;

/// List container
///
/// `seed_from_server` pulls sort order and checked rows from the backend
/// when nothing was persisted locally.
#[component]
pub fn ListView(seed_from_server: bool) -> impl IntoView {
    let ctx = use_list_context();
    let store = use_list_store();
    let viewport = ctx.viewport();

    let persist = move || save_list_state(&BrowserStorage, &store_persisted(&store));

    if seed_from_server {
        let api = ctx.api();
        spawn_local(async move {
            let sort_order = api.get_sort_order().await;
            let checked = api.get_list_checked().await;
            let Some(seeded) = apply_seed(&BrowserStorage, store_persisted(&store), sort_order, checked) else {
                return;
            };
            if seeded.sort_order != store.sort_order().get_untracked() {
                log::info!("[LIST] using server sort order {}", seeded.sort_order);
                store.sort_order().set(seeded.sort_order);
            }
            store.selected().set(SelectionSet::from(seeded.selected_ids));
        });
    }

    // Load first page when search or sort changes
    Effect::new(move |_| {
        let search = store.search().get();
        let sort_order = store.sort_order().get();
        let ticket = ctx.first_page_seq.with_value(|seq| seq.issue());
        let api = ctx.api();
        let limit = ctx.batch_size();
        spawn_local(async move {
            match api.get_list(0, limit, &search, sort_order).await {
                Ok(page) => {
                    if ctx.first_page_seq.with_value(|seq| seq.is_latest(ticket)) {
                        log::info!("[LIST] loaded {} of {} records", page.records.len(), page.total_records);
                        store_replace_page(&store, page);
                    } else {
                        log::debug!("[LIST] dropping stale first page #{}", ticket);
                    }
                }
                Err(e) => log::error!("[LIST] failed to load list: {}", e),
            }
        });
    });

    let load_more = Callback::new(move |_: ()| {
        let Some(ticket) = ctx.load_guard.with_value(|guard| guard.try_acquire()) else {
            log::debug!("[LIST] page fetch already pending");
            return;
        };
        let (start, generation, has_more) = {
            let page = store.page().read_untracked();
            (page.next_start(), page.generation(), page.has_more())
        };
        if !has_more {
            return;
        }
        let search = store.search().get_untracked();
        let sort_order = store.sort_order().get_untracked();
        let api = ctx.api();
        let limit = ctx.batch_size();
        spawn_local(async move {
            let _ticket = ticket;
            match api.get_list(start, limit, &search, sort_order).await {
                Ok(page) => {
                    let count = page.records.len();
                    if store_append_page(&store, generation, page) {
                        log::debug!("[LIST] appended {} records at {}", count, start);
                    } else {
                        log::debug!("[LIST] dropping page for replaced list");
                    }
                }
                Err(e) => log::error!("[LIST] failed to load more records: {}", e),
            }
        });
    });

    let toggle_select = Callback::new(move |id: u32| {
        let selected = store_toggle_selected(&store, id);
        persist();
        log::debug!("[LIST] row {} selected={}", id, selected);
        let api = ctx.api();
        spawn_local(async move {
            match api.check_row(id).await {
                Ok(checked) => log::debug!("[LIST] server has {} checked rows", checked.len()),
                Err(e) => log::error!("[LIST] failed to sync check of row {}: {}", id, e),
            }
        });
    });

    let toggle_sort = Callback::new(move |_: ()| {
        let next = store_toggle_sort(&store);
        persist();
        log::info!("[LIST] sort order -> {}", next);
        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.update_sort_order(next).await {
                log::error!("[LIST] failed to save sort order: {}", e);
            }
        });
    });

    // DnD: optimistic move, then tell the server
    let dnd = create_dnd_signals();
    bind_global_mouseup(dnd, move |source: RowRef, target: RowRef| {
        let Some((undo, target_order)) = store_plan_drop(&store, source.index, source.id, target.index) else {
            log::warn!("[DND] ignoring drop of row {} at {}", source.id, target.index);
            return;
        };
        log::info!(
            "[DND] row {} moved {} -> {} (server position {})",
            source.id, source.index, target.index, target_order
        );

        let api = ctx.api();
        spawn_local(async move {
            if let Err(e) = api.update_sort_row(undo.id(), target_order).await {
                log::error!("[DND] failed to reorder row {}: {}", undo.id(), e);
                if store_undo_move(&store, undo) {
                    log::warn!("[DND] rolled back move of row {}", undo.id());
                }
            }
        });
    });

    let render_row = Callback::new(move |(index, item): (usize, ListItem)| {
        view! {
            <ListRow
                index=index
                item=item
                viewport=viewport
                dnd=dnd
                on_toggle=toggle_select
            />
        }
        .into_any()
    });

    let rows = Signal::derive(move || store.page().read().records.clone());
    let total = Signal::derive(move || store.page().read().total_records);
    let generation = Signal::derive(move || store.page().read().generation());

    view! {
        <div class="list-view">
            <SearchBar on_toggle_sort=toggle_sort />

            <VirtualList
                viewport=viewport
                rows=rows
                total=total
                reset_key=generation
                on_reach_end=load_more
                render_row=render_row
            />

            <p class="list-count">
                {move || format!(
                    "{} of {} loaded, {} selected",
                    rows.with(|r| r.len()),
                    total.get(),
                    store.selected().read().len(),
                )}
            </p>
        </div>
    }
}

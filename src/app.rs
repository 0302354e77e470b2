//! Virtual List Frontend App
//!
//! Root component: wires config, persisted state and context.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::ListView;
use crate::config::AppConfig;
use crate::context::ListContext;
use crate::storage::{load_list_state, BrowserStorage};
use crate::store::ListViewState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Read once at mount
    let persisted = load_list_state(&BrowserStorage);
    let seed_from_server = persisted.is_none();
    log::debug!("[APP] persisted list state: {:?}", persisted);

    // Provide context to all children
    provide_context(ListContext::new(config));
    provide_context(Store::new(ListViewState::from_persisted(persisted)));

    view! {
        <div class="list-app">
            <h1 class="list-title">"Items"</h1>
            <ListView seed_from_server=seed_from_server />
        </div>
    }
}

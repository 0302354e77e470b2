//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::AppConfig;
use crate::list::{Debouncer, LatestOnly, LoadGuard, Viewport};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    pub config: StoredValue<AppConfig>,
    pub api: StoredValue<ApiClient>,
    /// Pagination guard
    pub load_guard: StoredValue<LoadGuard>,
    /// First-page request sequence
    pub first_page_seq: StoredValue<LatestOnly>,
    pub search_debounce: StoredValue<Debouncer>,
}

impl ListContext {
    pub fn new(config: AppConfig) -> Self {
        let api = ApiClient::new(&config);
        let search_debounce = Debouncer::new(config.search_debounce);
        Self {
            config: StoredValue::new(config),
            api: StoredValue::new(api),
            load_guard: StoredValue::new(LoadGuard::default()),
            first_page_seq: StoredValue::new(LatestOnly::default()),
            search_debounce: StoredValue::new(search_debounce),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn batch_size(&self) -> usize {
        self.config.with_value(|c| c.batch_size)
    }

    pub fn viewport(&self) -> Viewport {
        self.config.with_value(Viewport::from_config)
    }
}

pub fn use_list_context() -> ListContext {
    use_context::<ListContext>().expect("ListContext should be provided")
}

//! Global Application State Store
//!
//! Uses Leptos reactive_stores; the catalog controller is the only state.

use leptos::prelude::*;
use reactive_stores::Store;
use rental_catalog::{BookingError, CatalogController, CategoryFilter, Item, LoadError, LoadOutcome, LoadTicket, RowEvent, RowOutcome};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items, filter, row inputs and cart
    pub catalog: CatalogController,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_begin_load(store: &AppStore) -> LoadTicket {
    store.catalog().write().begin_load()
}

pub fn store_finish_load(store: &AppStore, ticket: LoadTicket, result: Result<Vec<Item>, LoadError>) -> LoadOutcome {
    store.catalog().write().finish_load(ticket, result)
}

pub fn store_select_category(store: &AppStore, category: CategoryFilter) {
    store.catalog().write().select_category(category);
}

pub fn store_set_search(store: &AppStore, text: String) {
    store.catalog().write().set_search(text);
}

pub fn store_handle_row_event(store: &AppStore, event: RowEvent) -> Result<RowOutcome, BookingError> {
    store.catalog().write().handle(event)
}

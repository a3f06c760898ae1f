//! Application Context
//!
//! Shared callbacks provided via Leptos Context API.

use leptos::prelude::*;
use rental_catalog::RowEvent;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Single handler for every row input in the item table
    on_row_event: Callback<RowEvent>,
}

impl AppContext {
    pub fn new(on_row_event: Callback<RowEvent>) -> Self {
        Self { on_row_event }
    }

    /// Route a row input to the catalog
    pub fn dispatch(&self, event: RowEvent) {
        self.on_row_event.run(event);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

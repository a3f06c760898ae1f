//! Party Rental App
//!
//! Item catalog on the left, booked items and running total on the right.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use rental_catalog::{LoadOutcome, RowEvent, RowOutcome};

use crate::api;
use crate::components::{BookedItems, CategoryNav, ItemTable, SearchBox};
use crate::config::WidgetConfig;
use crate::context::AppContext;
use crate::store::{store_begin_load, store_finish_load, store_handle_row_event, AppState};

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    // One delegated handler for all rows
    let on_row_event = Callback::new(move |event: RowEvent| match store_handle_row_event(&store, event) {
        Ok(RowOutcome::Booked(entry)) => {
            log::debug!("Cart now has a line for {}", entry.description());
        }
        Ok(RowOutcome::Updated(_)) => {}
        Err(err) if err.is_user_visible() => {
            let _ = window().alert_with_message(&err.to_string());
        }
        Err(err) => log::debug!("Ignored row event: {}", err),
    });
    provide_context(AppContext::new(on_row_event));

    // Load items on mount
    let items_url = config.items_url;
    Effect::new(move |_| {
        let url = items_url.clone();
        let ticket = store_begin_load(&store);
        spawn_local(async move {
            let result = api::fetch_items(&url).await;
            if store_finish_load(&store, ticket, result) == LoadOutcome::Superseded {
                log::warn!("Discarded a late item list from {}", url);
            }
        });
    });

    view! {
        <div class="rental-layout">
            <section id="items" class="items-section">
                <div class="items-toolbar">
                    <CategoryNav />
                    <SearchBox />
                </div>
                <ItemTable />
            </section>

            <section id="booked" class="booked-section">
                <BookedItems />
            </section>
        </div>
    }
}

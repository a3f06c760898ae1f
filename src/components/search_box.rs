//! Search Box Component

use leptos::prelude::*;

use crate::store::{store_set_search, use_app_store, AppStateStoreFields};

/// Free-text filter on item names; filters the loaded list, never refetches
#[component]
pub fn SearchBox() -> impl IntoView {
    let store = use_app_store();

    view! {
        <input
            id="search"
            type="search"
            placeholder="Search items..."
            prop:value=move || store.catalog().read().filter().search_text.clone()
            on:input=move |ev| store_set_search(&store, event_target_value(&ev))
        />
    }
}

//! Category Navigation Component
//!
//! "All" plus one entry per category of the loaded items.

use leptos::prelude::*;
use rental_catalog::CategoryEntry;

use crate::store::{store_select_category, use_app_store, AppStateStoreFields};

#[component]
pub fn CategoryNav() -> impl IntoView {
    let store = use_app_store();
    let entries = move || store.catalog().read().categories();

    view! {
        <ul id="items-sort-nav" class="items-sort-nav">
            <For
                each=entries
                key=|entry: &CategoryEntry| entry.filter.clone()
                children=move |entry: CategoryEntry| {
                    let label = entry.label().to_string();
                    let filter = entry.filter.clone();
                    let is_active = {
                        let filter = filter.clone();
                        move || store.catalog().read().filter().category == filter
                    };
                    view! {
                        <li
                            class:active=is_active
                            on:click=move |_| store_select_category(&store, filter.clone())
                        >
                            {label}
                        </li>
                    }
                }
            />
        </ul>
    }
}


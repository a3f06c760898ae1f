//! Booked Items Component
//!
//! Append-only list of bookings and the running total.

use leptos::prelude::*;
use rental_catalog::CartEntry;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BookedItems() -> impl IntoView {
    let store = use_app_store();

    // Entries are never removed, so the position is a stable key
    let entries = move || {
        store
            .catalog()
            .read()
            .cart()
            .entries()
            .iter()
            .cloned()
            .enumerate()
            .collect::<Vec<_>>()
    };
    let total = move || store.catalog().read().cart().formatted_total();

    view! {
        <table class="items-booked">
            <thead>
                <tr>
                    <th>"Item"</th>
                    <th>"Date"</th>
                    <th>"Cost"</th>
                </tr>
            </thead>
            <tbody id="items-booked-tbody">
                <For
                    each=entries
                    key=|line: &(usize, CartEntry)| line.0
                    children=move |(_, entry): (usize, CartEntry)| view! {
                        <tr>
                            <td>{entry.description()}</td>
                            <td>{entry.date.clone()}</td>
                            <td>{entry.formatted_cost()}</td>
                        </tr>
                    }
                />
            </tbody>
        </table>
        <p class="booked-total">
            "Total: " <span id="total-cost">{total}</span>
        </p>
    }
}

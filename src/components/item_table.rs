//! Item Table Component
//!
//! Table body is either nothing (before the first load), one placeholder
//! row, or one keyed row per visible item.

use leptos::prelude::*;
use rental_catalog::{ItemId, TableBody};

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// Columns of the item table; placeholder rows span all of them
const COLUMNS: u32 = 5;

#[component]
pub fn ItemTable() -> impl IntoView {
    let store = use_app_store();
    let body = Memo::new(move |_| store.catalog().read().table_body());

    let placeholder = move || match body.get() {
        TableBody::Placeholder(message) => Some(message),
        TableBody::Blank | TableBody::Rows(_) => None,
    };
    let rows = move || match body.get() {
        TableBody::Rows(ids) => ids,
        TableBody::Blank | TableBody::Placeholder(_) => Vec::new(),
    };

    view! {
        <table class="item-list">
            <thead>
                <tr>
                    <th>"Item"</th>
                    <th>"In Stock"</th>
                    <th>"Date / Quantity"</th>
                    <th>"Available"</th>
                    <th></th>
                </tr>
            </thead>
            <tbody id="item-list-tbody">
                {move || placeholder().map(|message| view! {
                    <tr class="placeholder-row">
                        <td colspan=COLUMNS.to_string()>{message}</td>
                    </tr>
                })}
                // ItemId carries the load generation, so a reload replaces every row
                <For
                    each=rows
                    key=|id: &ItemId| *id
                    children=move |id: ItemId| view! { <ItemRow id=id /> }
                />
            </tbody>
        </table>
    }
}

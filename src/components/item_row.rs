//! Item Row Component
//!
//! Date and quantity inputs, availability label and book button for one
//! item. Inputs are dispatched through the shared row handler.

use leptos::prelude::*;
use rental_catalog::{Availability, ItemId, RowEvent};

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemRow(id: ItemId) -> impl IntoView {
    let store = use_app_store();
    let ctx = use_app_context();

    // Name and stock never change within a generation
    let (name, stock) = store
        .catalog()
        .read_untracked()
        .item(id)
        .map(|item| (item.item_name.clone(), item.quantity_available))
        .unwrap_or_default();

    let row = Memo::new(move |_| store.catalog().read().row(id));
    let date = move || row.get().map(|r| r.date).unwrap_or_default();
    let quantity = move || row.get().map(|r| r.quantity_input).unwrap_or_default();
    let availability = move || row.get().map(|r| r.availability).unwrap_or(Availability::NeedsDate);

    view! {
        <tr data-index=id.index.to_string()>
            <td>{name}</td>
            <td class="stock">{stock}</td>
            <td>
                <input
                    type="date"
                    class="req-date"
                    prop:value=date
                    on:change=move |ev| ctx.dispatch(RowEvent::DateChanged(id, event_target_value(&ev)))
                />
                <input
                    type="number"
                    class="req-qty"
                    min="1"
                    prop:value=quantity
                    on:input=move |ev| ctx.dispatch(RowEvent::QuantityChanged(id, event_target_value(&ev)))
                />
            </td>
            <td>
                <span class=move || format!("available {}", availability().tone().css_class())>
                    {move || availability().label()}
                </span>
            </td>
            <td class="book-btn">
                <Show when=move || availability().can_book()>
                    <button class="book-button" on:click=move |_| ctx.dispatch(RowEvent::Book(id))>
                        "Book"
                    </button>
                </Show>
            </td>
        </tr>
    }
}

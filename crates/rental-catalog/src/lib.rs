//! Rental Catalog
//!
//! The filter/availability/booking state machine behind the party rental
//! widget. Everything here is plain Rust so it can be driven from Leptos
//! components and from native tests alike.

mod availability;
mod cart;
mod controller;
mod error;
mod filter;
mod item;
mod response;


pub use availability::{evaluate, parse_leading_int, Availability, AvailabilityTone, RowState};
pub use cart::{format_currency, Cart, CartEntry};
pub use controller::{CatalogController, LoadOutcome, LoadTicket, RowEvent, RowOutcome, RowView, TableBody};
pub use error::{BookingError, LoadError};
pub use filter::{apply_filters, build_categories, CategoryEntry, CategoryFilter, FilterState};
pub use item::{Item, ItemId};
pub use response::ItemsResponse;

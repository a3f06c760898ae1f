//! Catalog Controller
//!
//! Owns the loaded items, the filter, every row's inputs and the cart.
//! All mutation goes through the methods below; rendering only reads.

use log::{debug, info, warn};

use crate::availability::{Availability, RowState};
use crate::cart::{Cart, CartEntry};
use crate::error::{BookingError, LoadError};
use crate::filter::{apply_filters, build_categories, CategoryEntry, CategoryFilter, FilterState};
use crate::item::{Item, ItemId};

/// Placeholder text when no item passes the filters
pub const NO_ITEMS_MESSAGE: &str = "No items found.";

/// Token for one load request. Only the most recently issued ticket may
/// apply its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Items replaced and rows rebuilt
    Applied,
    /// Error placeholder shown, previous state kept
    Failed,
    /// A newer request was issued in the meantime; result dropped
    Superseded,
}

/// What the item table body should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Nothing loaded yet
    Blank,
    /// A single full-width message row
    Placeholder(String),
    Rows(Vec<ItemId>),
}

/// Input on one row, routed through [`CatalogController::handle`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowEvent {
    DateChanged(ItemId, String),
    QuantityChanged(ItemId, String),
    Book(ItemId),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Updated(Availability),
    Booked(CartEntry),
}

/// Everything needed to render one item row
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub id: ItemId,
    pub date: String,
    pub quantity_input: String,
    pub availability: Availability,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogController {
    items: Vec<Item>,
    /// Parallel to `items`; rebuilt together on every successful load
    rows: Vec<RowState>,
    categories: Vec<String>,
    filter: FilterState,
    cart: Cart,
    /// Bumped on every successful load, part of each ItemId
    generation: u64,
    last_ticket: u64,
    /// Some load has finished, successfully or not
    settled: bool,
    load_error: Option<String>,
}

impl CatalogController {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Loading
    // ========================

    /// Start a load. Any ticket issued earlier becomes stale.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.last_ticket += 1;
        debug!("load #{} started", self.last_ticket);
        LoadTicket(self.last_ticket)
    }

    /// Apply the result of the load identified by `ticket`.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<Item>, LoadError>) -> LoadOutcome {
        if ticket.0 != self.last_ticket {
            warn!("dropping result of load #{}, #{} is newer", ticket.0, self.last_ticket);
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(items) => {
                self.generation += 1;
                self.rows = vec![RowState::default(); items.len()];
                self.categories = build_categories(&items);
                self.items = items;
                self.filter.category = CategoryFilter::All;
                self.settled = true;
                self.load_error = None;
                info!(
                    "loaded {} items in {} categories (generation {})",
                    self.items.len(),
                    self.categories.len(),
                    self.generation
                );
                LoadOutcome::Applied
            }
            Err(err) => {
                warn!("failed to load items: {}", err);
                self.settled = true;
                self.load_error = Some(err.placeholder_message());
                LoadOutcome::Failed
            }
        }
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    // ========================
    // Filtering
    // ========================

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    /// Navigation entries: "All" first, then each category; one is active.
    pub fn categories(&self) -> Vec<CategoryEntry> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().cloned().map(CategoryFilter::Named))
            .map(|filter| CategoryEntry {
                active: filter == self.filter.category,
                filter,
            })
            .collect()
    }

    /// Filter changes re-render the table, so every row starts over from
    /// its default inputs.
    pub fn select_category(&mut self, category: CategoryFilter) {
        debug!("category -> {:?}", category);
        self.filter.category = category;
        self.reset_rows();
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.search_text = text.into();
        debug!("search -> {:?}", self.filter.search_text);
        self.reset_rows();
    }

    fn reset_rows(&mut self) {
        self.rows.iter_mut().for_each(|row| *row = RowState::default());
        self.load_error = None;
    }

    pub fn visible_ids(&self) -> Vec<ItemId> {
        apply_filters(&self.items, &self.filter)
            .into_iter()
            .map(|index| self.id_at(index))
            .collect()
    }

    pub fn table_body(&self) -> TableBody {
        if let Some(message) = &self.load_error {
            return TableBody::Placeholder(message.clone());
        }
        if !self.settled {
            return TableBody::Blank;
        }
        let ids = self.visible_ids();
        if ids.is_empty() {
            TableBody::Placeholder(NO_ITEMS_MESSAGE.to_string())
        } else {
            TableBody::Rows(ids)
        }
    }

    // ========================
    // Rows
    // ========================

    fn id_at(&self, index: usize) -> ItemId {
        ItemId {
            generation: self.generation,
            index,
        }
    }

    fn resolve(&self, id: ItemId) -> Result<usize, BookingError> {
        if id.generation == self.generation && id.index < self.items.len() {
            Ok(id.index)
        } else {
            Err(BookingError::StaleRow(id))
        }
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.resolve(id).ok().map(|index| &self.items[index])
    }

    pub fn row(&self, id: ItemId) -> Option<RowView> {
        let index = self.resolve(id).ok()?;
        let row = &self.rows[index];
        Some(RowView {
            id,
            date: row.date.clone(),
            quantity_input: row.quantity_input.clone(),
            availability: row.availability(self.items[index].quantity_available),
        })
    }

    pub fn availability(&self, id: ItemId) -> Option<Availability> {
        let index = self.resolve(id).ok()?;
        Some(self.rows[index].availability(self.items[index].quantity_available))
    }

    pub fn set_date(&mut self, id: ItemId, date: impl Into<String>) -> Result<Availability, BookingError> {
        let index = self.resolve(id)?;
        self.rows[index].date = date.into();
        let availability = self.rows[index].availability(self.items[index].quantity_available);
        debug!("row {} date -> {:?}: {:?}", index, self.rows[index].date, availability);
        Ok(availability)
    }

    pub fn set_quantity(&mut self, id: ItemId, input: impl Into<String>) -> Result<Availability, BookingError> {
        let index = self.resolve(id)?;
        self.rows[index].quantity_input = input.into();
        let availability = self.rows[index].availability(self.items[index].quantity_available);
        debug!("row {} quantity -> {:?}: {:?}", index, self.rows[index].quantity_input, availability);
        Ok(availability)
    }

    /// Book the row's current date and quantity.
    ///
    /// Re-validates against stock regardless of what the row displayed.
    /// Row inputs stay as they are, so the same line can be booked again.
    pub fn book(&mut self, id: ItemId) -> Result<CartEntry, BookingError> {
        let index = self.resolve(id)?;
        let item = &self.items[index];
        let row = &self.rows[index];

        if row.date.is_empty() {
            return Err(BookingError::MissingDate);
        }
        let quantity = row.quantity();
        if quantity <= 0 {
            return Err(BookingError::NonPositiveQuantity);
        }
        let stock = item.quantity_available;
        if quantity > stock {
            return Err(BookingError::ExceedsStock {
                requested: quantity,
                available: stock,
            });
        }

        let entry = CartEntry {
            quantity,
            item_name: item.item_name.clone(),
            date: row.date.clone(),
            cost: quantity as f64 * item.unit_price(),
        };
        self.cart.push(entry.clone());
        info!(
            "booked {} on {} for {} (total {})",
            entry.description(),
            entry.date,
            entry.formatted_cost(),
            self.cart.formatted_total()
        );
        Ok(entry)
    }

    /// Single entry point for every row input.
    pub fn handle(&mut self, event: RowEvent) -> Result<RowOutcome, BookingError> {
        match event {
            RowEvent::DateChanged(id, date) => self.set_date(id, date).map(RowOutcome::Updated),
            RowEvent::QuantityChanged(id, input) => self.set_quantity(id, input).map(RowOutcome::Updated),
            RowEvent::Book(id) => self.book(id).map(RowOutcome::Booked),
        }
    }

    // ========================
    // Cart
    // ========================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

//! Booking Cart
//!
//! Append-only list of booked lines with a running total.

#[derive(Debug, Clone, PartialEq)]
pub struct CartEntry {
    pub quantity: i64,
    pub item_name: String,
    pub date: String,
    pub cost: f64,
}

impl CartEntry {
    /// "3 Tent"
    pub fn description(&self) -> String {
        format!("{} {}", self.quantity, self.item_name)
    }

    pub fn formatted_cost(&self) -> String {
        format_currency(self.cost)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
    total: f64,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and fold its cost into the total.
    pub fn push(&mut self, entry: CartEntry) {
        self.total += entry.cost;
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn formatted_total(&self) -> String {
        format_currency(self.total)
    }
}

/// `$` followed by the amount with two decimals, e.g. `$300.00`.
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(quantity: i64, name: &str, cost: f64) -> CartEntry {
        CartEntry {
            quantity,
            item_name: name.to_string(),
            date: "2024-05-01".to_string(),
            cost,
        }
    }

    #[test]
    fn test_total_accumulates() {
        let mut cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.formatted_total(), "$0.00");

        cart.push(entry(3, "Tent", 300.0));
        cart.push(entry(2, "Chair", 301.0));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(), 601.0);
        assert_eq!(cart.formatted_total(), "$601.00");
        assert_eq!(cart.entries()[0].description(), "3 Tent");
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(300.0), "$300.00");
        assert_eq!(format_currency(1234.5), "$1234.50");
        assert_eq!(format_currency(0.125 * 2.0), "$0.25");
    }
}

//! Item Entity
//!
//! A rentable item as delivered by the items endpoint.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::availability::parse_leading_int;

/// Identity of an item within one loaded list.
///
/// The endpoint provides no stable key, so an item is known by its position
/// in the fetched list. The generation ties that position to the load that
/// produced it; ids from an older generation never match the current list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId {
    pub generation: u64,
    pub index: usize,
}

/// A rentable item. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Display name, also the search target
    #[serde(default, deserialize_with = "lenient_text")]
    pub item_name: String,
    /// Units in stock
    #[serde(default, deserialize_with = "lenient_stock")]
    pub quantity_available: i64,
    /// Price per unit in JMD; anything non-numeric becomes 0
    #[serde(default, deserialize_with = "lenient_price")]
    pub rental_cost_jmd: f64,
    /// Numbers are kept as their text; anything else counts as no category
    #[serde(default, deserialize_with = "lenient_opt_text")]
    pub category: Option<String>,
}

impl Item {
    pub fn new(item_name: impl Into<String>, quantity_available: i64, rental_cost_jmd: f64, category: Option<&str>) -> Self {
        Self {
            item_name: item_name.into(),
            quantity_available,
            rental_cost_jmd,
            category: category.map(str::to_string),
        }
    }

    /// Category usable as a navigation entry; empty strings count as none.
    pub fn category_label(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Price used for booking. Negative prices are treated like missing ones
    /// so the cart total can only grow.
    pub fn unit_price(&self) -> f64 {
        if self.rental_cost_jmd.is_finite() && self.rental_cost_jmd > 0.0 {
            self.rental_cost_jmd
        } else {
            0.0
        }
    }
}

/// Scalar field as it may appear on the wire
#[derive(Deserialize)]
#[serde(untagged)]
enum Numeric {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_opt_text(deserializer)?.unwrap_or_default())
}

fn lenient_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Numeric>::deserialize(deserializer)?;
    Ok(match value {
        Some(Numeric::Text(s)) => Some(s),
        Some(Numeric::Int(n)) => Some(n.to_string()),
        Some(Numeric::Float(f)) if f.is_finite() => Some(f.to_string()),
        _ => None,
    })
}

fn lenient_stock<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Numeric>::deserialize(deserializer)?;
    Ok(match value {
        Some(Numeric::Int(n)) => n,
        Some(Numeric::Float(f)) if f.is_finite() => f.trunc() as i64,
        Some(Numeric::Text(s)) => parse_leading_int(&s),
        _ => 0,
    })
}

fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Numeric>::deserialize(deserializer)?;
    Ok(match value {
        Some(Numeric::Int(n)) => n as f64,
        Some(Numeric::Float(f)) if f.is_finite() => f,
        Some(Numeric::Text(s)) => parse_leading_float(&s).unwrap_or(0.0),
        _ => 0.0,
    })
}

/// Parse the longest numeric prefix of `s`, e.g. `"1500.50 JMD"` -> 1500.5.
fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        let frac_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        mantissa_digits += end - frac_start;
    }
    if mantissa_digits == 0 {
        return None;
    }
    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }
    s[..end].parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_numbers_and_numeric_strings() {
        let json = r#"[
            {"item_name": "Tent", "quantity_available": 5, "rental_cost_jmd": 100, "category": "Outdoor"},
            {"item_name": "Chair", "quantity_available": "40", "rental_cost_jmd": "150.50", "category": "Seating"}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].quantity_available, 5);
        assert_eq!(items[0].rental_cost_jmd, 100.0);
        assert_eq!(items[1].quantity_available, 40);
        assert_eq!(items[1].rental_cost_jmd, 150.5);
        assert_eq!(items[1].category_label(), Some("Seating"));
    }

    #[test]
    fn test_missing_or_garbage_numbers_become_zero() {
        let json = r#"[
            {"item_name": "Speaker"},
            {"item_name": "Lights", "quantity_available": null, "rental_cost_jmd": "call us"},
            {"item_name": "Table", "quantity_available": "7.9", "rental_cost_jmd": true, "category": ""}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items[0].quantity_available, 0);
        assert_eq!(items[0].unit_price(), 0.0);
        assert_eq!(items[0].category_label(), None);
        assert_eq!(items[1].quantity_available, 0);
        assert_eq!(items[1].unit_price(), 0.0);
        assert_eq!(items[2].quantity_available, 7);
        assert_eq!(items[2].unit_price(), 0.0);
        assert_eq!(items[2].category_label(), None);
    }

    #[test]
    fn test_odd_names_and_categories_do_not_reject_the_list() {
        let json = r#"[
            {"quantity_available": 2, "rental_cost_jmd": 50, "category": "Decor"},
            {"item_name": "Cooler", "quantity_available": 3, "category": 7},
            {"item_name": "Tarp", "category": {"id": 1}},
            {"item_name": 42, "category": null}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].item_name, "");
        assert_eq!(items[0].category_label(), Some("Decor"));
        assert_eq!(items[1].category_label(), Some("7"));
        assert_eq!(items[2].category, None);
        assert_eq!(items[3].item_name, "42");
    }

    #[test]
    fn test_leading_float_prefix() {
        assert_eq!(parse_leading_float("1500.50 JMD"), Some(1500.5));
        assert_eq!(parse_leading_float("  .5"), Some(0.5));
        assert_eq!(parse_leading_float("2e3x"), Some(2000.0));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("-"), None);
        assert_eq!(parse_leading_float("abc"), None);
    }

    #[test]
    fn test_negative_price_counts_as_free() {
        let item = Item::new("Refund", 1, -20.0, None);
        assert_eq!(item.unit_price(), 0.0);
    }
}

//! Row Availability
//!
//! Derives a row's booking state from its date and quantity inputs.

/// Booking state of a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// No date picked yet
    NeedsDate,
    /// Date picked, quantity missing or not positive
    NeedsQuantity,
    /// Bookable
    Available,
    /// More requested than in stock, or nothing in stock
    Unavailable,
}

/// Visual state of the availability label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityTone {
    Neutral,
    No,
    Yes,
}

impl AvailabilityTone {
    pub fn css_class(&self) -> &'static str {
        match self {
            AvailabilityTone::Neutral => "avail--neutral",
            AvailabilityTone::No => "avail--no",
            AvailabilityTone::Yes => "avail--yes",
        }
    }
}

impl Availability {
    pub fn label(&self) -> &'static str {
        match self {
            Availability::NeedsDate => "Select Date",
            Availability::NeedsQuantity => "Enter quantity",
            Availability::Available => "Yes",
            Availability::Unavailable => "No",
        }
    }

    pub fn tone(&self) -> AvailabilityTone {
        match self {
            Availability::NeedsDate | Availability::NeedsQuantity => AvailabilityTone::Neutral,
            Availability::Available => AvailabilityTone::Yes,
            Availability::Unavailable => AvailabilityTone::No,
        }
    }

    /// The book control is only shown for bookable rows
    pub fn can_book(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

/// Evaluate a row. Checks run in order: date, then quantity, then stock.
pub fn evaluate(date: &str, quantity: i64, stock: i64) -> Availability {
    if date.is_empty() {
        Availability::NeedsDate
    } else if quantity <= 0 {
        Availability::NeedsQuantity
    } else if quantity <= stock && stock > 0 {
        Availability::Available
    } else {
        Availability::Unavailable
    }
}

/// Integer from the start of `s`, 0 when there is none.
///
/// Matches what a number input hands back: `"3"`, `"3.5"` and `" 3abc"`
/// all read as 3, an empty field reads as 0.
pub fn parse_leading_int(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = match rest.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    if digits.is_empty() {
        return 0;
    }
    // too long to fit: saturate so an absurd quantity still exceeds stock
    match digits.parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Inputs of one item row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowState {
    pub date: String,
    /// Raw text of the quantity field, kept verbatim so the input is not
    /// rewritten while the user types
    pub quantity_input: String,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            date: String::new(),
            quantity_input: "1".to_string(),
        }
    }
}

impl RowState {
    pub fn quantity(&self) -> i64 {
        parse_leading_int(&self.quantity_input)
    }

    pub fn availability(&self, stock: i64) -> Availability {
        evaluate(&self.date, self.quantity(), stock)
    }
}

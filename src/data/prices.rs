//! Organic price premium table
//!
//! Premiums are percentages over the conventional price, in selector order.

use super::PriceEntry;

pub const PRICE_TABLE: &[PriceEntry] = &[
    PriceEntry::new("Dairy/Cereal", 40),
    PriceEntry::new("Tomato Passata", 35),
    PriceEntry::new("Eggs/Olive Oil", 50),
    PriceEntry::new("Chocolate", 180),
    PriceEntry::new("Tea", 200),
    PriceEntry::new("Juices", 160),
    PriceEntry::new("Chicken", 150),
];

/// Price of a conventional product used by the home page example
pub const DEFAULT_BASE_PRICE: f64 = 10.0;

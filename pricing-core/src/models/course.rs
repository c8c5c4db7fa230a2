use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog entry with its listed price in major currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: String,
    pub title: String,
    pub base_price: Decimal,
}

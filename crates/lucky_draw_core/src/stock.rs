use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::contract::ValidationError;

/// One named giveaway item and its remaining unit count.
///
/// Field names match the persisted JSON document exactly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockItem {
    pub name: String,
    pub remain: u32,
}

/// Order-significant sequence of stock items.
///
/// An item's index is its identity within one snapshot; names need not be
/// unique. The persisted snapshot is the sole source of truth between
/// invocations.
pub type StockSnapshot = Vec<StockItem>;

const INITIAL_REMAIN: u32 = 348;

const INITIAL_ITEM_NAMES: [&str; 10] = [
    "cleansing water mini",
    "foaming cleanser mini",
    "softening lotion mini",
    "vitamin mist mini",
    "treatment mini",
    "body wash mini",
    "body lotion mini",
    "uv protect mini",
    "moisture shampoo mini",
    "repair shampoo mini",
];

/// Built-in default snapshot, used whenever no valid persisted state exists.
///
/// Constructs a fresh vector on every call so no two consumers share one
/// allocation; the template itself never changes.
pub fn initial_stock() -> StockSnapshot {
    INITIAL_ITEM_NAMES
        .iter()
        .map(|name| StockItem {
            name: (*name).to_string(),
            remain: INITIAL_REMAIN,
        })
        .collect()
}

pub fn total_remaining(stock: &[StockItem]) -> u64 {
    stock.iter().map(|item| u64::from(item.remain)).sum()
}

/// Coerces an admin replacement payload into a snapshot.
///
/// The payload must be a JSON array; each entry may carry missing, extra, or
/// loosely typed fields. `name` defaults to an empty string, `remain` to 0,
/// and negative or fractional counts floor at whole non-negative units.
pub fn coerce_replacement_items(payload: &Value) -> Result<StockSnapshot, ValidationError> {
    let Some(entries) = payload.as_array() else {
        return Err(ValidationError::new(
            "replacement payload must be a JSON array",
        ));
    };

    Ok(entries
        .iter()
        .map(|entry| StockItem {
            name: coerce_name(entry.get("name")),
            remain: coerce_remain(entry.get("remain")),
        })
        .collect())
}

fn coerce_name(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        _ => String::new(),
    }
}

fn coerce_remain(value: Option<&Value>) -> u32 {
    let numeric = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match numeric {
        Some(count) if count.is_finite() && count > 0.0 => {
            count.floor().min(f64::from(u32::MAX)) as u32
        }
        _ => 0,
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::stock::StockSnapshot;

pub const MIN_DRAW_COUNT: u32 = 1;
pub const MAX_DRAW_COUNT: u32 = 50;

/// Clamps an externally supplied draw count into
/// `[MIN_DRAW_COUNT, MAX_DRAW_COUNT]`.
///
/// Coercion is lenient: JSON numbers and numeric strings count; missing,
/// non-numeric, or non-finite input falls to the minimum.
pub fn clamp_draw_count(value: Option<&Value>) -> u32 {
    let numeric = match value {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };

    match numeric {
        Some(count) if count.is_finite() => {
            let floored = count.floor();
            if floored < f64::from(MIN_DRAW_COUNT) {
                MIN_DRAW_COUNT
            } else if floored > f64::from(MAX_DRAW_COUNT) {
                MAX_DRAW_COUNT
            } else {
                floored as u32
            }
        }
        _ => MIN_DRAW_COUNT,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockResponse {
    pub stock: StockSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DrawAccepted {
    pub ok: bool,
    pub results: Vec<String>,
    pub stock: StockSnapshot,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NoStockRejection {
    pub ok: bool,
    pub reason: String,
}

impl Default for NoStockRejection {
    fn default() -> Self {
        Self {
            ok: false,
            reason: "no_stock".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateAccepted {
    pub ok: bool,
    pub stock: StockSnapshot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

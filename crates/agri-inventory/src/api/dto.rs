//! Request bodies and their coercion rules.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Product;
use crate::reconcile::StockUpdateReport;

#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct StockRequest {
    pub stock: Value,
}

#[derive(Debug, Serialize)]
pub struct StockResponse {
    pub message: String,
    #[serde(flatten)]
    pub report: StockUpdateReport,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: Product,
}

/// Coerces a submitted stock value to a non-negative whole number.
///
/// Negative values become 0, fractions are truncated, numeric strings are accepted and
/// values beyond `u32::MAX` saturate. Anything else is rejected.
pub fn coerce_stock(value: &Value) -> Result<u32, String> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match number {
        Some(n) if n.is_finite() => Ok(if n <= 0.0 {
            0
        } else {
            // float-to-int casts saturate
            n.trunc() as u32
        }),
        _ => Err(format!("stock must be a number, got {value}")),
    }
}

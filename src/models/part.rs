//! Modelo de Part (repuesto)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Part principal - mapea exactamente a la tabla car_parts
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Part {
    pub id: i64,
    pub name: String,
    pub car_model: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

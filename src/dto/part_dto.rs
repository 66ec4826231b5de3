//! DTOs de Part (repuestos)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::part::Part;

/// Payload de creación/actualización de un repuesto.
///
/// Igual que con los coches, los campos son opcionales para poder
/// acumular todos los errores de validación en una sola pasada.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartPayload {
    pub name: Option<String>,
    pub car_model: Option<String>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
}

/// Resultado de validar un PartPayload
#[derive(Debug, Clone, PartialEq)]
pub struct NewPart {
    pub name: String,
    pub car_model: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
}

/// Response de repuesto para la API
#[derive(Debug, Clone, Serialize)]
pub struct PartResponse {
    pub id: i64,
    pub name: String,
    pub car_model: String,
    pub price: Decimal,
    pub description: Option<String>,
    pub stock_quantity: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Part> for PartResponse {
    fn from(part: Part) -> Self {
        Self {
            id: part.id,
            name: part.name,
            car_model: part.car_model,
            price: part.price,
            description: part.description,
            stock_quantity: part.stock_quantity,
            created_at: part.created_at,
            updated_at: part.updated_at,
        }
    }
}

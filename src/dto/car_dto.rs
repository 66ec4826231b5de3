//! DTOs de Car
//!
//! El mismo payload se usa para crear y para actualizar: ambas
//! transiciones pasan por el mismo conjunto de reglas de validación.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::car::{Car, CarStatus, CarWithBrand, FuelType, Transmission};

/// Payload de creación/actualización de un coche.
///
/// Todos los campos son opcionales a nivel de deserialización para que
/// la validación pueda enumerar TODOS los campos ausentes o inválidos
/// en una sola respuesta, en lugar de abortar en el primero.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarPayload {
    pub brand_id: Option<i64>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub price: Option<Decimal>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub transmission: Option<String>,
    pub fuel_type: Option<String>,
    pub status: Option<String>,
    pub doors: Option<i32>,
    pub total_weight: Option<i32>,
    pub trunk_capacity: Option<i32>,
    pub power: Option<i32>,
}

/// Resultado de validar un CarPayload: campos ya tipados y completos.
/// `status` queda en None cuando el caller no lo envió.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCar {
    pub brand_id: i64,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub color: String,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub status: Option<CarStatus>,
    pub doors: i32,
    pub total_weight: i32,
    pub trunk_capacity: i32,
    pub power: i32,
}

/// Filtros del listado de coches
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarListQuery {
    pub brand_id: Option<i64>,
    pub status: Option<String>,
}

/// Response de coche para la API
#[derive(Debug, Clone, Serialize)]
pub struct CarResponse {
    pub id: i64,
    pub brand_id: i64,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub color: String,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub status: CarStatus,
    pub doors: i32,
    pub total_weight: i32,
    pub trunk_capacity: i32,
    pub power: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Response de coche para listados, con el label de la marca
/// incorporado (lectura desnormalizada)
#[derive(Debug, Clone, Serialize)]
pub struct CarListItem {
    pub id: i64,
    pub brand_id: i64,
    pub brand_label: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub description: Option<String>,
    pub color: String,
    pub transmission: Transmission,
    pub fuel_type: FuelType,
    pub status: CarStatus,
    pub doors: i32,
    pub total_weight: i32,
    pub trunk_capacity: i32,
    pub power: i32,
    pub created_at: DateTime<Utc>,
}

/// Proyección de un coche pendiente de moderación.
///
/// No es una entidad almacenada: se deriva en lectura de los coches
/// con status `not approved`. La fecha de envío es sintética (la fecha
/// actual en el momento de la consulta).
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionResponse {
    pub id: i64,
    pub brand_id: i64,
    pub brand_label: String,
    pub model: String,
    pub year: i32,
    pub price: Decimal,
    pub color: String,
    pub status_label: &'static str,
    pub submitted_at: NaiveDate,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand_id: car.brand_id,
            model: car.model,
            year: car.year,
            price: car.price,
            description: car.description,
            color: car.color,
            transmission: car.transmission,
            fuel_type: car.fuel_type,
            status: car.status,
            doors: car.doors,
            total_weight: car.total_weight,
            trunk_capacity: car.trunk_capacity,
            power: car.power,
            created_at: car.created_at,
            updated_at: car.updated_at,
        }
    }
}

impl From<CarWithBrand> for CarListItem {
    fn from(car: CarWithBrand) -> Self {
        Self {
            id: car.id,
            brand_id: car.brand_id,
            brand_label: car.brand_label,
            model: car.model,
            year: car.year,
            price: car.price,
            description: car.description,
            color: car.color,
            transmission: car.transmission,
            fuel_type: car.fuel_type,
            status: car.status,
            doors: car.doors,
            total_weight: car.total_weight,
            trunk_capacity: car.trunk_capacity,
            power: car.power,
            created_at: car.created_at,
        }
    }
}

//! Modelo de Car
//!
//! Este módulo contiene el struct Car y los enums de su ciclo de vida.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use std::fmt;
use std::str::FromStr;

/// Estado de moderación del coche - mapea al ENUM car_status
///
/// Todo coche se crea como `NotApproved` y solo un administrador
/// puede pasarlo a `Approved`. No existe estado "rechazado": el
/// rechazo es un borrado definitivo.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "car_status")]
pub enum CarStatus {
    #[sqlx(rename = "approved")]
    #[serde(rename = "approved")]
    Approved,
    #[sqlx(rename = "not approved")]
    #[serde(rename = "not approved")]
    NotApproved,
}

impl Default for CarStatus {
    fn default() -> Self {
        CarStatus::NotApproved
    }
}

impl CarStatus {
    pub const ALLOWED: [&'static str; 2] = ["approved", "not approved"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CarStatus::Approved => "approved",
            CarStatus::NotApproved => "not approved",
        }
    }
}

impl FromStr for CarStatus {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "approved" => Ok(CarStatus::Approved),
            "not approved" => Ok(CarStatus::NotApproved),
            _ => Err(()),
        }
    }
}

impl fmt::Display for CarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de transmisión - mapea al ENUM transmission
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "transmission", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Manual,
    Automatic,
}

impl Transmission {
    pub const ALLOWED: [&'static str; 2] = ["manual", "automatic"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Transmission::Manual => "manual",
            Transmission::Automatic => "automatic",
        }
    }
}

impl FromStr for Transmission {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "manual" => Ok(Transmission::Manual),
            "automatic" => Ok(Transmission::Automatic),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tipo de combustible - mapea al ENUM fuel_type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "fuel_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Gasoline,
    Diesel,
    Electric,
    Hybrid,
}

impl FuelType {
    pub const ALLOWED: [&'static str; 4] = ["gasoline", "diesel", "electric", "hybrid"];

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Gasoline => "gasoline",
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
        }
    }
}

impl FromStr for FuelType {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "gasoline" => Ok(FuelType::Gasoline),
            "diesel" => Ok(FuelType::Diesel),
            "electric" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            _ => Err(()),
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Car principal - mapea exactamente a la tabla cars
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Car {
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

/// Fila de listado: coche junto con el label de su marca (lectura
/// desnormalizada, el label nunca se almacena en la tabla cars)
#[derive(Debug, Clone, FromRow)]
pub struct CarWithBrand {
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
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_not_approved() {
        assert_eq!(CarStatus::default(), CarStatus::NotApproved);
    }

    #[test]
    fn test_status_round_trip() {
        assert_eq!("approved".parse::<CarStatus>(), Ok(CarStatus::Approved));
        assert_eq!("not approved".parse::<CarStatus>(), Ok(CarStatus::NotApproved));
        assert!("rejected".parse::<CarStatus>().is_err());
        assert_eq!(CarStatus::NotApproved.to_string(), "not approved");
    }

    #[test]
    fn test_transmission_rejects_fuel_values() {
        assert!("hybrid".parse::<Transmission>().is_err());
        assert_eq!("manual".parse::<Transmission>(), Ok(Transmission::Manual));
    }

    #[test]
    fn test_fuel_type_accepts_hybrid() {
        assert_eq!("hybrid".parse::<FuelType>(), Ok(FuelType::Hybrid));
        assert!("petrol".parse::<FuelType>().is_err());
    }

    #[test]
    fn test_status_serde_uses_space_variant() {
        let json = serde_json::to_string(&CarStatus::NotApproved).unwrap();
        assert_eq!(json, "\"not approved\"");
        let parsed: CarStatus = serde_json::from_str("\"approved\"").unwrap();
        assert_eq!(parsed, CarStatus::Approved);
    }
}

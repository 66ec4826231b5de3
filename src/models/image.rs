//! Modelos de imágenes de coches y repuestos

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Imagen de un coche - mapea a la tabla car_images
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CarImage {
    pub id: i64,
    pub car_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

/// Imagen de un repuesto - mapea a la tabla car_part_images
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PartImage {
    pub id: i64,
    pub car_part_id: i64,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

//! DTOs de Brand

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::brand::Brand;

/// Payload de creación/actualización de una marca
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrandPayload {
    pub label: Option<String>,
}

/// Response de marca para la API
#[derive(Debug, Clone, Serialize)]
pub struct BrandResponse {
    pub id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
}

impl From<Brand> for BrandResponse {
    fn from(brand: Brand) -> Self {
        Self {
            id: brand.id,
            label: brand.label,
            created_at: brand.created_at,
        }
    }
}

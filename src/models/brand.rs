//! Modelo de Brand
//!
//! Una marca posee cero o más coches. Borrar una marca elimina
//! en cascada todos sus coches (irreversible).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Brand principal - mapea exactamente a la tabla brands
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Brand {
    pub id: i64,
    pub label: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

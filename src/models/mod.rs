//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod brand;
pub mod car;
pub mod image;
pub mod part;
pub mod user;

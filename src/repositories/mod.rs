//! Repositorios de acceso a datos

pub mod brand_repository;
pub mod car_repository;
pub mod image_repository;
pub mod part_repository;
pub mod user_repository;

//! Controller de marcas
//!
//! Borrar una marca arrastra todos sus coches. No hay papelera.

use sqlx::PgPool;

use crate::dto::brand_dto::{BrandPayload, BrandResponse};
use crate::dto::ApiResponse;
use crate::repositories::brand_repository::BrandRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::validate_brand_label;

pub struct BrandController {
    repository: BrandRepository,
}

impl BrandController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: BrandRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<BrandResponse>, AppError> {
        let brands = self.repository.list().await?;

        Ok(brands.into_iter().map(BrandResponse::from).collect())
    }

    pub async fn create(
        &self,
        payload: BrandPayload,
    ) -> Result<ApiResponse<BrandResponse>, AppError> {
        let label = validate_brand_label(payload.label.as_deref())?;

        if self.repository.label_exists(&label).await? {
            return Err(conflict_error("Brand", "label", &label));
        }

        let brand = self.repository.create(&label).await?;

        Ok(ApiResponse::success_with_message(
            BrandResponse::from(brand),
            "Marca creada exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: i64,
        payload: BrandPayload,
    ) -> Result<ApiResponse<BrandResponse>, AppError> {
        let label = validate_brand_label(payload.label.as_deref())?;

        let brand = self.repository.update(id, &label).await?;

        Ok(ApiResponse::success_with_message(
            BrandResponse::from(brand),
            "Marca actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete_cascade(id).await
    }
}

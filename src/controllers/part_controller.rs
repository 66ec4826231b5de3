//! Controller de repuestos

use sqlx::PgPool;

use crate::dto::part_dto::{PartPayload, PartResponse};
use crate::dto::ApiResponse;
use crate::repositories::part_repository::PartRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_part_payload;

pub struct PartController {
    repository: PartRepository,
}

impl PartController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PartRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<PartResponse>, AppError> {
        let parts = self.repository.list().await?;

        Ok(parts.into_iter().map(PartResponse::from).collect())
    }

    pub async fn create(
        &self,
        payload: PartPayload,
    ) -> Result<ApiResponse<PartResponse>, AppError> {
        let new_part = validate_part_payload(&payload)?;

        let part = self.repository.create(&new_part).await?;

        Ok(ApiResponse::success_with_message(
            PartResponse::from(part),
            "Repuesto creado exitosamente".to_string(),
        ))
    }

    /// Mismas reglas de validación que la creación
    pub async fn update(
        &self,
        id: i64,
        payload: PartPayload,
    ) -> Result<ApiResponse<PartResponse>, AppError> {
        let new_part = validate_part_payload(&payload)?;

        let part = self.repository.update(id, &new_part).await?;

        Ok(ApiResponse::success_with_message(
            PartResponse::from(part),
            "Repuesto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

//! Controller de coches: ciclo de vida y moderación
//!
//! Todo coche nace `not approved`. La aprobación es una actualización
//! con status = approved hecha por un administrador; el rechazo es el
//! borrado del coche (no existe estado "rechazado" persistido). La
//! visibilidad pública depende únicamente del status.

use chrono::Utc;
use sqlx::PgPool;

use crate::dto::car_dto::{
    CarListItem, CarListQuery, CarPayload, CarResponse, SubmissionResponse,
};
use crate::dto::ApiResponse;
use crate::models::car::CarStatus;
use crate::models::user::UserRole;
use crate::repositories::car_repository::CarRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_car_payload;

/// Resolver el status con el que se persiste un coche nuevo.
///
/// Solo un administrador puede fijar el status explícitamente; la vía
/// de envío pública entra siempre en moderación, ignore lo que mande.
pub fn resolve_submitted_status(requested: Option<CarStatus>, actor_role: UserRole) -> CarStatus {
    match actor_role {
        UserRole::Admin => requested.unwrap_or_default(),
        UserRole::User => CarStatus::default(),
    }
}

/// Resolver el filtro de status de un listado.
///
/// Un caller sin privilegios recibe únicamente coches aprobados,
/// pida lo que pida; un administrador puede filtrar por cualquier
/// estado o no filtrar.
pub fn resolve_list_status(
    requested: Option<&str>,
    privileged: bool,
) -> Result<Option<CarStatus>, AppError> {
    if !privileged {
        return Ok(Some(CarStatus::Approved));
    }

    match requested {
        None => Ok(None),
        Some(value) => value
            .parse::<CarStatus>()
            .map(Some)
            .map_err(|()| AppError::BadRequest(format!("Invalid status filter '{}'", value))),
    }
}

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn list(
        &self,
        query: CarListQuery,
        privileged: bool,
    ) -> Result<Vec<CarListItem>, AppError> {
        let status = resolve_list_status(query.status.as_deref(), privileged)?;
        let cars = self.repository.list(query.brand_id, status).await?;

        Ok(cars.into_iter().map(CarListItem::from).collect())
    }

    pub async fn create(
        &self,
        actor_role: UserRole,
        payload: CarPayload,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        let new_car = validate_car_payload(&payload)?;
        let status = resolve_submitted_status(new_car.status, actor_role);

        let car = self.repository.create(&new_car, status).await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Coche creado exitosamente".to_string(),
        ))
    }

    /// Mismas reglas de validación que la creación. La aprobación de
    /// una submission llega por aquí como una actualización con
    /// status = approved; reaprobarla es una sobrescritura idempotente.
    pub async fn update(
        &self,
        id: i64,
        payload: CarPayload,
    ) -> Result<ApiResponse<CarResponse>, AppError> {
        let new_car = validate_car_payload(&payload)?;

        let car = self.repository.update(id, &new_car).await?;

        Ok(ApiResponse::success_with_message(
            CarResponse::from(car),
            "Coche actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }

    /// Proyección de submissions pendientes: coches `not approved`
    /// con label "pending" y fecha sintética (hoy). No se almacena.
    pub async fn submissions(&self) -> Result<Vec<SubmissionResponse>, AppError> {
        let cars = self
            .repository
            .list(None, Some(CarStatus::NotApproved))
            .await?;

        let today = Utc::now().date_naive();

        Ok(cars
            .into_iter()
            .map(|car| SubmissionResponse {
                id: car.id,
                brand_id: car.brand_id,
                brand_label: car.brand_label,
                model: car.model,
                year: car.year,
                price: car.price,
                color: car.color,
                status_label: "pending",
                submitted_at: today,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_submission_always_enters_moderation() {
        assert_eq!(
            resolve_submitted_status(None, UserRole::User),
            CarStatus::NotApproved
        );
        // aunque el caller mande approved, la vía pública no salta moderación
        assert_eq!(
            resolve_submitted_status(Some(CarStatus::Approved), UserRole::User),
            CarStatus::NotApproved
        );
    }

    #[test]
    fn test_admin_can_bypass_moderation_only_explicitly() {
        assert_eq!(
            resolve_submitted_status(None, UserRole::Admin),
            CarStatus::NotApproved
        );
        assert_eq!(
            resolve_submitted_status(Some(CarStatus::Approved), UserRole::Admin),
            CarStatus::Approved
        );
        assert_eq!(
            resolve_submitted_status(Some(CarStatus::NotApproved), UserRole::Admin),
            CarStatus::NotApproved
        );
    }

    #[test]
    fn test_unprivileged_listing_is_forced_to_approved() {
        assert_eq!(
            resolve_list_status(None, false).unwrap(),
            Some(CarStatus::Approved)
        );
        assert_eq!(
            resolve_list_status(Some("not approved"), false).unwrap(),
            Some(CarStatus::Approved)
        );
    }

    #[test]
    fn test_privileged_listing_filters() {
        assert_eq!(resolve_list_status(None, true).unwrap(), None);
        assert_eq!(
            resolve_list_status(Some("not approved"), true).unwrap(),
            Some(CarStatus::NotApproved)
        );
        assert_eq!(
            resolve_list_status(Some("approved"), true).unwrap(),
            Some(CarStatus::Approved)
        );
        assert!(resolve_list_status(Some("pending"), true).is_err());
    }
}

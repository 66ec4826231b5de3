//! Controller de usuarios: registro, login y administración
//!
//! El registro valida en cadena como el alta original: email,
//! nombre completo, confirmación y fortaleza de contraseña, y
//! finalmente la unicidad del email.

use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::PgPool;
use validator::ValidationErrors;

use crate::dto::auth_dto::{AuthResponse, LoginRequest};
use crate::dto::user_dto::{RegisterRequest, UpdateUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::models::user::UserRole;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::jwt::{generate_token, JwtConfig};
use crate::utils::validation::{
    validate_email, validate_full_name, validate_password_strength,
};

pub struct UserController {
    repository: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: UserRepository::new(pool),
        }
    }

    pub async fn register(
        &self,
        request: RegisterRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        if let Err(e) = validate_email(&request.email) {
            let mut errors = ValidationErrors::new();
            errors.add("email", e);
            return Err(AppError::Validation(errors));
        }

        if let Err(e) = validate_full_name(&request.name) {
            let mut errors = ValidationErrors::new();
            errors.add("name", e);
            return Err(AppError::Validation(errors));
        }

        if request.password != request.password_confirmation {
            let mut errors = ValidationErrors::new();
            errors.add(
                "password_confirmation",
                validator::ValidationError::new("confirmation"),
            );
            return Err(AppError::Validation(errors));
        }

        if let Err(e) = validate_password_strength(&request.password) {
            let mut errors = ValidationErrors::new();
            errors.add("password", e);
            return Err(AppError::Validation(errors));
        }

        if self.repository.email_exists(&request.email).await? {
            return Err(conflict_error("User", "email", &request.email));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))?;

        // Todo registro público entra con rol user
        let user = self
            .repository
            .create(&request.name, &request.email, &password_hash, UserRole::User)
            .await?;

        let token = generate_token(user.id, user.role, jwt_config)?;

        Ok(AuthResponse::success(token, UserResponse::from(user)))
    }

    pub async fn login(
        &self,
        request: LoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<AuthResponse, AppError> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("Credenciales inválidas".to_string()))?;

        let valid = verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::Hash(format!("Error verifying password: {}", e)))?;

        if !valid {
            return Err(AppError::Unauthorized("Credenciales inválidas".to_string()));
        }

        let token = generate_token(user.id, user.role, jwt_config)?;

        Ok(AuthResponse::success(token, UserResponse::from(user)))
    }

    pub async fn get_by_id(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(UserResponse::from(user))
    }

    pub async fn list(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.repository.list().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Actualización administrativa de nombre y rol. Los dos campos se
    /// validan juntos y los errores se acumulan.
    pub async fn update(
        &self,
        id: i64,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        let mut errors = ValidationErrors::new();

        let name = match request.name.as_deref() {
            Some(value) => match validate_full_name(value) {
                Ok(()) => Some(value.to_string()),
                Err(e) => {
                    errors.add("name", e);
                    None
                }
            },
            None => {
                errors.add("name", validator::ValidationError::new("required"));
                None
            }
        };

        let role = match request.role.as_deref() {
            Some(value) => match value.parse::<UserRole>() {
                Ok(role) => Some(role),
                Err(()) => {
                    let mut e = validator::ValidationError::new("enum");
                    e.add_param("value".into(), &value.to_string());
                    e.add_param("allowed_values".into(), &UserRole::ALLOWED.join(", "));
                    errors.add("role", e);
                    None
                }
            },
            None => {
                errors.add("role", validator::ValidationError::new("required"));
                None
            }
        };

        let (name, role) = match (name, role) {
            (Some(name), Some(role)) if errors.is_empty() => (name, role),
            _ => return Err(AppError::Validation(errors)),
        };

        let user = self.repository.update(id, &name, role).await?;

        Ok(ApiResponse::success_with_message(
            UserResponse::from(user),
            "Usuario actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await
    }
}

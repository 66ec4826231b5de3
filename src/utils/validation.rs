//! Utilidades de validación
//!
//! Este módulo contiene los helpers genéricos de validación y el
//! conjunto único de reglas para coches, repuestos y marcas. Crear y
//! actualizar pasan por exactamente las mismas funciones: o todos los
//! campos son aceptados o no se persiste ninguno, y la respuesta
//! enumera todos los campos que fallaron, no solo el primero.

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use validator::{ValidationError, ValidationErrors};

use crate::dto::car_dto::{CarPayload, NewCar};
use crate::dto::part_dto::{NewPart, PartPayload};
use crate::models::car::{CarStatus, FuelType, Transmission};

/// Año mínimo aceptado para un coche; el máximo es el año en curso
pub const MIN_CAR_YEAR: i32 = 1900;

/// Longitud máxima de los campos de texto cortos
pub const MAX_TEXT_LENGTH: usize = 255;

lazy_static! {
    // Nombre completo: cada palabra capitalizada, letras húngaras incluidas,
    // al menos dos palabras
    static ref FULL_NAME_RE: Regex = Regex::new(
        r"^([A-ZÁÉÍÓÖŐÚÜŰ][a-záéíóöőúüű]+)(\s[A-ZÁÉÍÓÖŐÚÜŰ][a-záéíóöőúüű]+)+$"
    )
    .expect("invalid full name regex");
}

/// Error para un campo requerido ausente
fn required_error() -> ValidationError {
    ValidationError::new("required")
}

/// Error para un valor fuera de una lista de valores permitidos
fn enum_error(value: &str, allowed: &[&str]) -> ValidationError {
    let mut error = ValidationError::new("enum");
    error.add_param("value".into(), &value.to_string());
    error.add_param("allowed_values".into(), &allowed.join(", "));
    error
}

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar longitud mínima y máxima
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en un rango específico
pub fn validate_range<T: PartialOrd + std::fmt::Display + serde::Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if value < min || value > max {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de email
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if !value.contains('@') || !value.contains('.') {
        let mut error = ValidationError::new("email");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<
    T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize,
>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar formato de nombre completo (palabras capitalizadas)
pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > MAX_TEXT_LENGTH || !FULL_NAME_RE.is_match(value) {
        let mut error = ValidationError::new("full_name");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar fortaleza de contraseña: mínimo 8 caracteres, al menos una
/// minúscula, una mayúscula y un dígito
pub fn validate_password_strength(value: &str) -> Result<(), ValidationError> {
    let long_enough = value.chars().count() >= 8;
    let has_lowercase = value.chars().any(|c| c.is_ascii_lowercase());
    let has_uppercase = value.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());

    if !(long_enough && has_lowercase && has_uppercase && has_digit) {
        let mut error = ValidationError::new("password_strength");
        error.add_param("min_length".into(), &8);
        error.add_param(
            "requirements".into(),
            &"lowercase, uppercase, digit".to_string(),
        );
        return Err(error);
    }
    Ok(())
}

/// Conjunto único de reglas para coches: lo usan tanto la creación
/// como la actualización. Devuelve el payload tipado solo si todos
/// los campos pasan; si no, el ValidationErrors acumulado.
///
/// La existencia de la marca NO se comprueba aquí: eso es una consulta
/// al almacén y la hace el repositorio dentro de la misma transacción
/// que la escritura.
pub fn validate_car_payload(payload: &CarPayload) -> Result<NewCar, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let brand_id = match payload.brand_id {
        Some(id) => match validate_positive(id) {
            Ok(()) => Some(id),
            Err(e) => {
                errors.add("brand_id", e);
                None
            }
        },
        None => {
            errors.add("brand_id", required_error());
            None
        }
    };

    let model = match payload.model.as_deref() {
        Some(value) => match validate_not_empty(value)
            .and_then(|_| validate_length(value, 1, MAX_TEXT_LENGTH))
        {
            Ok(()) => Some(value.to_string()),
            Err(e) => {
                errors.add("model", e);
                None
            }
        },
        None => {
            errors.add("model", required_error());
            None
        }
    };

    let year = match payload.year {
        Some(value) => {
            let current_year = Utc::now().year();
            match validate_range(value, MIN_CAR_YEAR, current_year) {
                Ok(()) => Some(value),
                Err(e) => {
                    errors.add("year", e);
                    None
                }
            }
        }
        None => {
            errors.add("year", required_error());
            None
        }
    };

    let price = match payload.price {
        Some(value) => {
            if value < Decimal::ZERO {
                let mut error = ValidationError::new("non_negative");
                error.add_param("value".into(), &value);
                errors.add("price", error);
                None
            } else {
                Some(value)
            }
        }
        None => {
            errors.add("price", required_error());
            None
        }
    };

    let color = match payload.color.as_deref() {
        Some(value) => match validate_not_empty(value)
            .and_then(|_| validate_length(value, 1, MAX_TEXT_LENGTH))
        {
            Ok(()) => Some(value.to_string()),
            Err(e) => {
                errors.add("color", e);
                None
            }
        },
        None => {
            errors.add("color", required_error());
            None
        }
    };

    let transmission = match payload.transmission.as_deref() {
        Some(value) => match value.parse::<Transmission>() {
            Ok(t) => Some(t),
            Err(()) => {
                errors.add("transmission", enum_error(value, &Transmission::ALLOWED));
                None
            }
        },
        None => {
            errors.add("transmission", required_error());
            None
        }
    };

    let fuel_type = match payload.fuel_type.as_deref() {
        Some(value) => match value.parse::<FuelType>() {
            Ok(f) => Some(f),
            Err(()) => {
                errors.add("fuel_type", enum_error(value, &FuelType::ALLOWED));
                None
            }
        },
        None => {
            errors.add("fuel_type", required_error());
            None
        }
    };

    // status es opcional; si viene, tiene que ser un valor permitido
    let mut status: Option<CarStatus> = None;
    if let Some(value) = payload.status.as_deref() {
        match value.parse::<CarStatus>() {
            Ok(s) => status = Some(s),
            Err(()) => errors.add("status", enum_error(value, &CarStatus::ALLOWED)),
        }
    }

    let doors = match payload.doors {
        Some(value) => match validate_positive(value) {
            Ok(()) => Some(value),
            Err(e) => {
                errors.add("doors", e);
                None
            }
        },
        None => {
            errors.add("doors", required_error());
            None
        }
    };

    let total_weight = match payload.total_weight {
        Some(value) => match validate_non_negative(value) {
            Ok(()) => Some(value),
            Err(e) => {
                errors.add("total_weight", e);
                None
            }
        },
        None => {
            errors.add("total_weight", required_error());
            None
        }
    };

    let trunk_capacity = match payload.trunk_capacity {
        Some(value) => match validate_non_negative(value) {
            Ok(()) => Some(value),
            Err(e) => {
                errors.add("trunk_capacity", e);
                None
            }
        },
        None => {
            errors.add("trunk_capacity", required_error());
            None
        }
    };

    let power = match payload.power {
        Some(value) => match validate_non_negative(value) {
            Ok(()) => Some(value),
            Err(e) => {
                errors.add("power", e);
                None
            }
        },
        None => {
            errors.add("power", required_error());
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    if let (
        Some(brand_id),
        Some(model),
        Some(year),
        Some(price),
        Some(color),
        Some(transmission),
        Some(fuel_type),
        Some(doors),
        Some(total_weight),
        Some(trunk_capacity),
        Some(power),
    ) = (
        brand_id,
        model,
        year,
        price,
        color,
        transmission,
        fuel_type,
        doors,
        total_weight,
        trunk_capacity,
        power,
    ) {
        Ok(NewCar {
            brand_id,
            model,
            year,
            price,
            description: payload.description.clone(),
            color,
            transmission,
            fuel_type,
            status,
            doors,
            total_weight,
            trunk_capacity,
            power,
        })
    } else {
        Err(errors)
    }
}

/// Reglas de repuestos, mismas para crear y actualizar
pub fn validate_part_payload(payload: &PartPayload) -> Result<NewPart, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = match payload.name.as_deref() {
        Some(value) => match validate_not_empty(value)
            .and_then(|_| validate_length(value, 1, MAX_TEXT_LENGTH))
        {
            Ok(()) => Some(value.to_string()),
            Err(e) => {
                errors.add("name", e);
                None
            }
        },
        None => {
            errors.add("name", required_error());
            None
        }
    };

    let car_model = match payload.car_model.as_deref() {
        Some(value) => match validate_not_empty(value)
            .and_then(|_| validate_length(value, 1, MAX_TEXT_LENGTH))
        {
            Ok(()) => Some(value.to_string()),
            Err(e) => {
                errors.add("car_model", e);
                None
            }
        },
        None => {
            errors.add("car_model", required_error());
            None
        }
    };

    let price = match payload.price {
        Some(value) => {
            if value < Decimal::ZERO {
                let mut error = ValidationError::new("non_negative");
                error.add_param("value".into(), &value);
                errors.add("price", error);
                None
            } else {
                Some(value)
            }
        }
        None => {
            errors.add("price", required_error());
            None
        }
    };

    if let Some(stock) = payload.stock_quantity {
        if let Err(e) = validate_non_negative(stock) {
            errors.add("stock_quantity", e);
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    if let (Some(name), Some(car_model), Some(price)) = (name, car_model, price) {
        Ok(NewPart {
            name,
            car_model,
            price,
            description: payload.description.clone(),
            stock_quantity: payload.stock_quantity,
        })
    } else {
        Err(errors)
    }
}

/// Reglas de marcas: el label es requerido y acotado
pub fn validate_brand_label(label: Option<&str>) -> Result<String, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    match label {
        Some(value) => {
            match validate_not_empty(value).and_then(|_| validate_length(value, 1, MAX_TEXT_LENGTH))
            {
                Ok(()) => return Ok(value.to_string()),
                Err(e) => errors.add("label", e),
            }
        }
        None => errors.add("label", required_error()),
    }

    Err(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CarPayload {
        CarPayload {
            brand_id: Some(3),
            model: Some("Civic".to_string()),
            year: Some(2022),
            price: Some(Decimal::from(18000)),
            description: None,
            color: Some("Red".to_string()),
            transmission: Some("manual".to_string()),
            fuel_type: Some("gasoline".to_string()),
            status: None,
            doors: Some(4),
            total_weight: Some(1200),
            trunk_capacity: Some(400),
            power: Some(150),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let new_car = validate_car_payload(&valid_payload()).unwrap();
        assert_eq!(new_car.brand_id, 3);
        assert_eq!(new_car.model, "Civic");
        assert_eq!(new_car.transmission, Transmission::Manual);
        assert_eq!(new_car.fuel_type, FuelType::Gasoline);
        assert_eq!(new_car.status, None);
    }

    #[test]
    fn test_year_1899_fails() {
        let mut payload = valid_payload();
        payload.year = Some(1899);
        let errors = validate_car_payload(&payload).unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_year_current_succeeds_and_next_fails() {
        let current_year = Utc::now().year();

        let mut payload = valid_payload();
        payload.year = Some(current_year);
        assert!(validate_car_payload(&payload).is_ok());

        payload.year = Some(current_year + 1);
        let errors = validate_car_payload(&payload).unwrap_err();
        assert!(errors.field_errors().contains_key("year"));
    }

    #[test]
    fn test_transmission_hybrid_fails_but_fuel_hybrid_succeeds() {
        let mut payload = valid_payload();
        payload.transmission = Some("hybrid".to_string());
        let errors = validate_car_payload(&payload).unwrap_err();
        assert!(errors.field_errors().contains_key("transmission"));

        let mut payload = valid_payload();
        payload.fuel_type = Some("hybrid".to_string());
        let new_car = validate_car_payload(&payload).unwrap();
        assert_eq!(new_car.fuel_type, FuelType::Hybrid);
    }

    #[test]
    fn test_all_failing_fields_are_enumerated() {
        let errors = validate_car_payload(&CarPayload::default()).unwrap_err();
        let fields = errors.field_errors();
        for field in [
            "brand_id",
            "model",
            "year",
            "price",
            "color",
            "transmission",
            "fuel_type",
            "doors",
            "total_weight",
            "trunk_capacity",
            "power",
        ] {
            assert!(fields.contains_key(field), "missing error for {}", field);
        }
        // description y status son opcionales
        assert!(!fields.contains_key("description"));
        assert!(!fields.contains_key("status"));
    }

    #[test]
    fn test_invalid_status_fails_valid_status_parses() {
        let mut payload = valid_payload();
        payload.status = Some("pending".to_string());
        let errors = validate_car_payload(&payload).unwrap_err();
        assert!(errors.field_errors().contains_key("status"));

        payload.status = Some("approved".to_string());
        let new_car = validate_car_payload(&payload).unwrap();
        assert_eq!(new_car.status, Some(CarStatus::Approved));
    }

    #[test]
    fn test_negative_price_and_zero_doors_fail() {
        let mut payload = valid_payload();
        payload.price = Some(Decimal::from(-1));
        payload.doors = Some(0);
        let errors = validate_car_payload(&payload).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("doors"));
    }

    #[test]
    fn test_model_too_long_fails() {
        let mut payload = valid_payload();
        payload.model = Some("x".repeat(256));
        let errors = validate_car_payload(&payload).unwrap_err();
        assert!(errors.field_errors().contains_key("model"));
    }

    #[test]
    fn test_validate_length() {
        assert!(validate_length("test", 1, 10).is_ok());
        assert!(validate_length("test", 5, 10).is_err());
        assert!(validate_length("test", 1, 3).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range(5, 1, 10).is_ok());
        assert!(validate_range(0, 1, 10).is_err());
        assert!(validate_range(15, 1, 10).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("invalid-email").is_err());
        assert!(validate_email("test@").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0).is_ok());
        assert!(validate_non_negative(-1).is_err());
    }

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Kovács Péter").is_ok());
        assert!(validate_full_name("Anna Szabó").is_ok());
        assert!(validate_full_name("lowercase name").is_err());
        assert!(validate_full_name("Single").is_err());
        assert!(validate_full_name("").is_err());
    }

    #[test]
    fn test_validate_password_strength() {
        assert!(validate_password_strength("Abcdef12").is_ok());
        assert!(validate_password_strength("short1A").is_err());
        assert!(validate_password_strength("alllowercase1").is_err());
        assert!(validate_password_strength("ALLUPPERCASE1").is_err());
        assert!(validate_password_strength("NoDigitsHere").is_err());
    }

    #[test]
    fn test_validate_part_payload() {
        let payload = PartPayload {
            name: Some("Brake pad".to_string()),
            car_model: Some("Civic".to_string()),
            price: Some(Decimal::from(120)),
            description: None,
            stock_quantity: Some(10),
        };
        let part = validate_part_payload(&payload).unwrap();
        assert_eq!(part.name, "Brake pad");

        let errors = validate_part_payload(&PartPayload::default()).unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("car_model"));
        assert!(fields.contains_key("price"));
    }

    #[test]
    fn test_validate_brand_label() {
        assert_eq!(validate_brand_label(Some("Honda")).unwrap(), "Honda");
        assert!(validate_brand_label(Some("")).is_err());
        assert!(validate_brand_label(None).is_err());
    }
}

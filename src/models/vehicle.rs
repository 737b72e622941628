//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle tal como lo entrega el backend
//! y el payload de create/update. El id lo asigna el servidor; la consola
//! solo mantiene una copia transitoria durante la edición.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Vehículo de la flota, propiedad del backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub brand: String,
    pub year: i32,
    pub renavam: String,
}

/// Payload para crear o actualizar un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct VehicleData {
    #[validate(length(min = 1))]
    pub plate: String,

    #[validate(length(min = 1))]
    pub model: String,

    #[validate(length(min = 1))]
    pub brand: String,

    #[validate(range(min = 1900, max = 2100))]
    pub year: i32,

    #[validate(length(min = 1))]
    pub renavam: String,
}

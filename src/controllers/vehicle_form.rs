//! Formulario modal de vehículo
//!
//! Modo binario: crear (sin vehículo existente) o editar (con vehículo).
//! El submit solo emite los datos; quien lo llama hace el create-or-update
//! real y cierra el modal únicamente si la API respondió con éxito.

use chrono::{Datelike, Utc};
use validator::{Validate, ValidationErrors};

use crate::models::{Vehicle, VehicleData};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::{validate_not_empty, validate_year};

/// Estado del formulario de crear/editar vehículo
#[derive(Debug, Clone)]
pub struct VehicleForm {
    editing_id: Option<i64>,
    pub plate: String,
    pub model: String,
    pub brand: String,
    pub year: String,
    pub renavam: String,
}

impl VehicleForm {
    /// Abrir en modo creación: campos vacíos, año por defecto el actual
    pub fn create() -> Self {
        Self {
            editing_id: None,
            plate: String::new(),
            model: String::new(),
            brand: String::new(),
            year: Utc::now().year().to_string(),
            renavam: String::new(),
        }
    }

    /// Abrir en modo edición: campos pre-poblados desde el vehículo
    pub fn edit(vehicle: &Vehicle) -> Self {
        Self {
            editing_id: Some(vehicle.id),
            plate: vehicle.plate.clone(),
            model: vehicle.model.clone(),
            brand: vehicle.brand.clone(),
            year: vehicle.year.to_string(),
            renavam: vehicle.renavam.clone(),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.editing_id.is_some()
    }

    /// Id del vehículo en edición, si lo hay
    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    /// Compuerta de validación: placa, modelo, marca y RENAVAM no vacíos,
    /// año parseable como entero. Sin datos válidos no hay llamada a la API.
    pub fn submit(&self) -> AppResult<VehicleData> {
        let mut errors = ValidationErrors::new();

        for (field, value) in [
            ("plate", &self.plate),
            ("model", &self.model),
            ("brand", &self.brand),
            ("renavam", &self.renavam),
        ] {
            if let Err(error) = validate_not_empty(value) {
                errors.add(field, error);
            }
        }

        let year = match validate_year(&self.year) {
            Ok(year) => year,
            Err(error) => {
                errors.add("year", error);
                0
            }
        };

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let data = VehicleData {
            plate: self.plate.trim().to_string(),
            model: self.model.trim().to_string(),
            brand: self.brand.trim().to_string(),
            year,
            renavam: self.renavam.trim().to_string(),
        };
        data.validate()?;
        Ok(data)
    }
}

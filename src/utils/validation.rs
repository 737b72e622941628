//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! de formularios y de archivos de upload.

use validator::ValidationError;

use crate::utils::errors::{invalid_upload_error, AppError};

/// Tamaño máximo aceptado para archivos de rutas: 10 MiB
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Extensiones de datos estructurados aceptadas por el backend
pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &["json"];

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar y convertir string a año (entero)
pub fn validate_year(value: &str) -> Result<i32, ValidationError> {
    value.trim().parse::<i32>().map_err(|_| {
        let mut error = ValidationError::new("year");
        error.add_param("value".into(), &value.to_string());
        error
    })
}

/// Validar nombre y tamaño de un archivo de rutas antes de cualquier request.
///
/// El chequeo es puramente local: extensión permitida y límite de 10 MiB.
/// Los mensajes son los que ve el usuario final, por eso en portugués.
pub fn validate_upload_file(file_name: &str, size_bytes: u64) -> Result<(), AppError> {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ALLOWED_UPLOAD_EXTENSIONS.contains(&extension.as_str()) {
        return Err(invalid_upload_error("Apenas arquivos JSON são permitidos"));
    }

    if size_bytes > MAX_UPLOAD_BYTES {
        let size_mb = size_bytes as f64 / 1024.0 / 1024.0;
        return Err(invalid_upload_error(format!(
            "Arquivo muito grande ({:.2}MB). Máximo: 10MB",
            size_mb
        )));
    }

    Ok(())
}

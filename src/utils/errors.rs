//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores de la consola.
//! Los errores de validación nunca llegan a la red; los errores de red/API
//! se muestran al usuario sin reintentos.

use thiserror::Error;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Archivo de upload rechazado antes de cualquier request (tipo/tamaño)
    #[error("{0}")]
    InvalidUpload(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Respuesta no exitosa del backend, con el mensaje del body si existe
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Verificar si el error es de validación local (nunca tocó la red)
    pub fn is_validation(&self) -> bool {
        matches!(self, AppError::Validation(_) | AppError::InvalidUpload(_))
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de upload rechazado
pub fn invalid_upload_error(message: impl Into<String>) -> AppError {
    AppError::InvalidUpload(message.into())
}

/// Función helper para crear errores de API a partir del status y mensaje
pub fn api_error(status: u16, message: impl Into<String>) -> AppError {
    AppError::Api {
        status,
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_no_es_de_validacion() {
        let err = api_error(404, "Veículo não encontrado");
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "API error (404): Veículo não encontrado");
    }

    #[test]
    fn test_upload_rechazado_es_de_validacion() {
        assert!(invalid_upload_error("Apenas arquivos JSON são permitidos").is_validation());
    }
}

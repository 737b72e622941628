//! DTOs del contrato con el backend
//!
//! El backend expone query params en PascalCase y bodies en camelCase
//! (estilo .NET). Los renames explícitos fijan el contrato canónico.

use serde::{Deserialize, Serialize};

use crate::models::{RoutePosition, Vehicle};

/// Parámetros de listado: filtros + paginación
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct VehicleQuery {
    #[serde(rename = "Renavam")]
    pub renavam: String,
    #[serde(rename = "Plate")]
    pub plate: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Brand")]
    pub brand: String,
    #[serde(rename = "Limit")]
    pub limit: u32,
    #[serde(rename = "Offset")]
    pub offset: u64,
}

/// Página de resultados del listado
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct VehiclePage {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(rename = "totalRecords", default)]
    pub total_records: u64,
    #[serde(rename = "currentPage", default)]
    pub current_page: u32,
    #[serde(rename = "pageItens", default)]
    pub page_itens: u32,
}

/// Detalle de vehículo con su historial de posiciones
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleDetail {
    #[serde(flatten)]
    pub vehicle: Vehicle,
    #[serde(default)]
    pub locations: Vec<RoutePosition>,
}

/// Resultado del upload de rutas
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UploadResult {
    #[serde(default)]
    pub imported: u64,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body de error del backend: `{ "error": "<mensaje>" }`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: String,
}

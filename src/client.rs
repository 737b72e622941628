//! Cliente HTTP del backend GeoTruck
//!
//! Este módulo contiene el cliente tipado de la API de vehículos:
//! una operación por acción del recurso, sin reintentos y sin cache.
//! Las respuestas no exitosas se normalizan a `AppError::Api` con el
//! mensaje legible del body cuando existe.

use std::path::Path;

use reqwest::{multipart, Client, Response, StatusCode};
use tracing::debug;

use crate::config::environment::EnvironmentConfig;
use crate::dto::{ApiErrorBody, UploadResult, VehicleDetail, VehiclePage, VehicleQuery};
use crate::models::{Vehicle, VehicleData};
use crate::utils::errors::{api_error, invalid_upload_error, AppResult};
use crate::utils::validation::validate_upload_file;

/// Cliente HTTP de la API de vehículos, con URL base inyectada
pub struct VehicleApiClient {
    client: Client,
    base_url: String,
}

impl VehicleApiClient {
    /// Crear nuevo cliente con URL base y timeout explícitos
    pub fn new(base_url: impl Into<String>, timeout: std::time::Duration) -> AppResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Crear cliente a partir de la configuración del entorno
    pub fn from_config(config: &EnvironmentConfig) -> AppResult<Self> {
        Self::new(config.api_base_url.clone(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Listar vehículos con filtros y paginación
    pub async fn get_vehicles(&self, query: &VehicleQuery) -> AppResult<VehiclePage> {
        debug!(
            limit = query.limit,
            offset = query.offset,
            "GET /Vehicles"
        );
        let response = self
            .client
            .get(format!("{}/Vehicles", self.base_url))
            .query(query)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Obtener un vehículo por id, con su historial de posiciones
    pub async fn get_vehicle_by_id(&self, id: i64) -> AppResult<VehicleDetail> {
        let response = self
            .client
            .get(format!("{}/Vehicles/{}", self.base_url, id))
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Crear un nuevo vehículo
    pub async fn create_vehicle(&self, data: &VehicleData) -> AppResult<Vehicle> {
        let response = self
            .client
            .post(format!("{}/Vehicles", self.base_url))
            .json(data)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Actualizar un vehículo existente
    pub async fn update_vehicle(&self, id: i64, data: &VehicleData) -> AppResult<Vehicle> {
        let response = self
            .client
            .put(format!("{}/Vehicles/{}", self.base_url, id))
            .json(data)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Eliminar un vehículo. Éxito → `true`; cualquier otra cosa es error.
    pub async fn delete_vehicle(&self, id: i64) -> AppResult<bool> {
        let response = self
            .client
            .delete(format!("{}/Vehicles/{}", self.base_url, id))
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(true)
    }

    /// Subir un archivo de posiciones de ruta (multipart).
    ///
    /// La extensión y el tamaño se validan localmente antes de cualquier
    /// request; una violación nunca llega a la red.
    pub async fn upload_route_positions(&self, path: &Path) -> AppResult<UploadResult> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| invalid_upload_error("Nenhum arquivo selecionado"))?
            .to_string();

        let metadata = tokio::fs::metadata(path).await?;
        validate_upload_file(&file_name, metadata.len())?;

        let bytes = tokio::fs::read(path).await?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/json")?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(format!(
                "{}/Vehicles/upload-vehicles-route-positions",
                self.base_url
            ))
            .multipart(form)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Normalizar respuestas no exitosas a `AppError::Api`
    async fn ensure_success(response: Response) -> AppResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) if !body.error.is_empty() => body.error,
            _ => Self::status_message(status),
        };

        Err(api_error(status.as_u16(), message))
    }

    fn status_message(status: StatusCode) -> String {
        status
            .canonical_reason()
            .unwrap_or("erro desconhecido")
            .to_string()
    }
}

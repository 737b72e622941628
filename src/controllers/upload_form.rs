//! Modal de upload de rutas
//!
//! Mantiene una única referencia de archivo seleccionado. El modal no hace
//! ningún chequeo de formato: extensión y tamaño los valida el cliente HTTP
//! antes de enviar.

use std::path::{Path, PathBuf};

use crate::client::VehicleApiClient;
use crate::dto::UploadResult;
use crate::utils::errors::{invalid_upload_error, AppResult};

/// Estado del modal de upload
#[derive(Debug, Default)]
pub struct UploadForm {
    selected: Option<PathBuf>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seleccionar un archivo
    pub fn choose(&mut self, path: impl Into<PathBuf>) {
        self.selected = Some(path.into());
    }

    pub fn selected(&self) -> Option<&Path> {
        self.selected.as_deref()
    }

    /// El envío solo es posible con un archivo elegido
    pub fn can_submit(&self) -> bool {
        self.selected.is_some()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Delegar el envío al cliente. La selección se limpia tras un envío
    /// exitoso.
    pub async fn submit(&mut self, client: &VehicleApiClient) -> AppResult<UploadResult> {
        let path = self
            .selected
            .clone()
            .ok_or_else(|| invalid_upload_error("Nenhum arquivo selecionado"))?;

        let result = client.upload_route_positions(&path).await?;
        self.selected = None;
        Ok(result)
    }
}

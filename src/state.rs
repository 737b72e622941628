//! Estado compartido de la consola
//!
//! Este módulo agrupa la configuración, el cliente HTTP y el estado de los
//! componentes abiertos, y ofrece el dispatch que conecta el reducer del
//! listado con la ejecución real de sus efectos.

use crate::client::VehicleApiClient;
use crate::config::environment::EnvironmentConfig;
use crate::controllers::{ListEvent, RouteMapView, UploadForm, VehicleForm, VehicleListController};
use crate::utils::errors::AppResult;

/// Una baja solo procede con un "s" explícito del usuario
pub fn confirms_deletion(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("s")
}

pub struct ConsoleState {
    pub config: EnvironmentConfig,
    pub client: VehicleApiClient,
    pub list: VehicleListController,
    pub form: Option<VehicleForm>,
    pub upload: UploadForm,
    pub map: Option<RouteMapView>,
}

impl ConsoleState {
    pub fn new(config: EnvironmentConfig) -> AppResult<Self> {
        let client = VehicleApiClient::from_config(&config)?;
        let list = VehicleListController::new(config.page_size);

        Ok(Self {
            config,
            client,
            list,
            form: None,
            upload: UploadForm::new(),
            map: None,
        })
    }

    /// Despachar un evento del listado y ejecutar el efecto que produzca.
    /// El efecto siempre se asienta de vuelta en el reducer, con lo que el
    /// loading queda limpio tanto en éxito como en fallo.
    pub async fn dispatch_list(&mut self, event: ListEvent) {
        if let Some(effect) = self.list.update(event) {
            let settled = effect.run(&self.client).await;
            self.list.update(settled);
        }
    }

    /// Excluir un vehículo. Sin confirmación no se emite ninguna llamada y
    /// el listado queda intacto; con confirmación, la baja exitosa recarga
    /// la página actual. Devuelve si la baja efectivamente ocurrió.
    pub async fn delete_vehicle(&mut self, id: i64, confirmed: bool) -> AppResult<bool> {
        if !confirmed {
            return Ok(false);
        }

        self.client.delete_vehicle(id).await?;
        self.dispatch_list(ListEvent::RefreshRequested).await;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmacion_solo_con_s() {
        assert!(confirms_deletion("s"));
        assert!(confirms_deletion("S"));
        assert!(confirms_deletion(" s "));
        assert!(!confirms_deletion("n"));
        assert!(!confirms_deletion("sim"));
        assert!(!confirms_deletion(""));
    }
}

//! Vista de mapa de ruta
//!
//! Dado un vehículo, carga su detalle (con el historial de posiciones) y lo
//! transforma en el modelo de render del mapa: centro, polyline y marcadores
//! de inicio/fin. Sin posiciones, el mapa se centra en la coordenada de
//! fallback sin trazar camino. Cerrar la vista descarta todo (drop).

use tracing::info;

use crate::client::VehicleApiClient;
use crate::models::{LatLng, Vehicle};
use crate::utils::errors::AppResult;

/// Centro por defecto cuando no hay posiciones (São Paulo)
pub const FALLBACK_CENTER: LatLng = LatLng {
    latitude: -23.550520,
    longitude: -46.633308,
};

/// Zoom inicial del mapa
pub const DEFAULT_ZOOM: u8 = 14;

/// Estado de la vista de ruta de un vehículo
#[derive(Debug)]
pub struct RouteMapView {
    vehicle: Vehicle,
    track: Vec<LatLng>,
}

impl RouteMapView {
    /// Abrir la vista para un vehículo; el track se carga con `load`
    pub fn open(vehicle: Vehicle) -> Self {
        Self {
            vehicle,
            track: Vec::new(),
        }
    }

    /// Cambiar el vehículo mostrado descarta el track anterior;
    /// el caller debe volver a llamar `load`.
    pub fn show_vehicle(&mut self, vehicle: Vehicle) {
        if vehicle.id != self.vehicle.id {
            self.track.clear();
        }
        self.vehicle = vehicle;
    }

    /// Cargar el historial de posiciones desde el backend
    pub async fn load(&mut self, client: &VehicleApiClient) -> AppResult<()> {
        let detail = client.get_vehicle_by_id(self.vehicle.id).await?;
        self.track = detail.locations.iter().map(LatLng::from).collect();
        info!(
            vehicle_id = self.vehicle.id,
            positions = self.track.len(),
            "ruta cargada"
        );
        Ok(())
    }

    pub fn vehicle(&self) -> &Vehicle {
        &self.vehicle
    }

    /// Centro del mapa: primera posición, o el fallback si no hay ninguna
    pub fn center(&self) -> LatLng {
        self.track.first().copied().unwrap_or(FALLBACK_CENTER)
    }

    pub fn zoom(&self) -> u8 {
        DEFAULT_ZOOM
    }

    /// Polyline a trazar; vacía cuando no hay posiciones
    pub fn path(&self) -> &[LatLng] {
        &self.track
    }

    pub fn start_marker(&self) -> Option<LatLng> {
        self.track.first().copied()
    }

    pub fn end_marker(&self) -> Option<LatLng> {
        self.track.last().copied()
    }
}

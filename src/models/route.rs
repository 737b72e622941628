//! Modelo de posiciones de ruta
//!
//! Las posiciones las calcula y posee el backend; la consola las trata
//! como datos de solo lectura mientras el mapa está abierto.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Posición registrada de un vehículo
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoutePosition {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: i64,
}

/// Par latitud/longitud para el render del mapa
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&RoutePosition> for LatLng {
    fn from(position: &RoutePosition) -> Self {
        Self {
            latitude: position.latitude,
            longitude: position.longitude,
        }
    }
}

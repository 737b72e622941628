//! GeoTruck Console
//!
//! Consola administrativa para la flota de vehículos GeoTruck. Toda la
//! lógica de negocio (persistencia, cálculo de rutas, parsing de archivos)
//! vive en el backend HTTP; este crate es el cliente tipado de esa API más
//! el estado de UI por componente (listado/paginación, formularios, mapa).

pub mod client;
pub mod config;
pub mod controllers;
pub mod dto;
pub mod models;
pub mod state;
pub mod utils;

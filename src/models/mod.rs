pub mod route;
pub mod vehicle;

pub use route::{LatLng, RoutePosition};
pub use vehicle::{Vehicle, VehicleData};

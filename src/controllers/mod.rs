pub mod route_map;
pub mod upload_form;
pub mod vehicle_form;
pub mod vehicle_list;

pub use route_map::RouteMapView;
pub use upload_form::UploadForm;
pub use vehicle_form::VehicleForm;
pub use vehicle_list::{FilterField, ListEffect, ListEvent, VehicleFilters, VehicleListController};

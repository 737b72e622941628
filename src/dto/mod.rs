pub mod vehicle_dto;

pub use vehicle_dto::{ApiErrorBody, UploadResult, VehicleDetail, VehiclePage, VehicleQuery};

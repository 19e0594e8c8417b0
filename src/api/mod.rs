pub mod fare_service;
pub mod geo_service;
pub mod service;

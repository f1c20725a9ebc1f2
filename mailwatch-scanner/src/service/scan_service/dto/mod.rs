mod scan_service_config;

pub use scan_service_config::*;

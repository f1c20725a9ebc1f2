mod dto;
mod scan_service;
mod scan_service_impl;

pub use dto::ScanServiceConfig;
pub use scan_service::*;
pub use scan_service_impl::*;

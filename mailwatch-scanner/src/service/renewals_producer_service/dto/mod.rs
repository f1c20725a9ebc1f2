mod renewals_producer_service_config;

pub use renewals_producer_service_config::*;

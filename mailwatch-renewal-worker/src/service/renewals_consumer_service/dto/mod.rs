mod renewals_consumer_service_config;

pub use renewals_consumer_service_config::*;

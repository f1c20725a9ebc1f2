mod dto;
mod renewals_consumer_service;

pub use dto::RenewalsConsumerServiceConfig;
pub use renewals_consumer_service::*;

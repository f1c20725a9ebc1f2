mod dto;
mod rabbitmq_renewals_producer_service;
mod renewals_producer_service;

pub use dto::RenewalsProducerServiceConfig;
pub use rabbitmq_renewals_producer_service::*;
pub use renewals_producer_service::*;

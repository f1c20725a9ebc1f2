pub mod gmail_service;
pub mod renewal_service;
pub mod renewals_consumer_service;

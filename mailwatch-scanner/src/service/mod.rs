pub mod renewals_producer_service;
pub mod scan_scheduler;
pub mod scan_service;

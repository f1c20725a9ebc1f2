mod scan_scheduler_config;

pub use scan_scheduler_config::*;

mod dto;
mod scan_scheduler;

pub use dto::ScanSchedulerConfig;
pub use scan_scheduler::*;

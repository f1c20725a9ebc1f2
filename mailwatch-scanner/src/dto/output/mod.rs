mod renewal_request;
mod scan_summary;

pub use renewal_request::*;
pub use scan_summary::*;

mod gmail_service_config;
mod watch_renewal;

pub use gmail_service_config::*;
pub use watch_renewal::*;

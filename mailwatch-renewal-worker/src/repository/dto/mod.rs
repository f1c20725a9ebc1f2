mod credentials;
mod watch;

pub use credentials::*;
pub use watch::*;

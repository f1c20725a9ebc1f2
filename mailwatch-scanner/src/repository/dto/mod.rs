mod expiring_watch;

pub use expiring_watch::*;

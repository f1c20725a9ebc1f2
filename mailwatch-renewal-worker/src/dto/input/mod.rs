mod renewal_request;

pub use renewal_request::*;

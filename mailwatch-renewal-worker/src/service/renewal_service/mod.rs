mod renewal_service;
mod renewal_service_impl;

pub use renewal_service::*;
pub use renewal_service_impl::*;

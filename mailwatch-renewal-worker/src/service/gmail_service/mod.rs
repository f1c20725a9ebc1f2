mod dto;
mod error;
mod gmail_service;
mod gmail_service_impl;

pub use dto::{GmailServiceConfig, WatchRenewal};
pub use error::*;
pub use gmail_service::*;
pub use gmail_service_impl::*;

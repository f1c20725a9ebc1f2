mod dto;
mod error;
mod watches_repository;
mod watches_repository_impl;

pub use dto::*;
pub use error::*;
pub use watches_repository::*;
pub use watches_repository_impl::*;

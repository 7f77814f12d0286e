//! Catalog query façade for the DSF vehicle financing catalog.
//!
//! Inbound parameter objects live in [`requests`], the repository abstraction
//! and its query values in [`repository`], response payloads in [`dto`] and
//! the validating façade itself in [`services`].

pub mod dto;
#[cfg(feature = "settings")]
pub mod models;
pub mod repository;
pub mod requests;
pub mod services;

pub use repository::CatalogRepository;
pub use services::{CatalogService, ServiceError, ServiceResult};

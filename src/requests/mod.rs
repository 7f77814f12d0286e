//! Inbound parameter objects accepted by the catalog services.
//!
//! Every type carries its own `validator` rules and converts into the matching
//! repository query by copying each field explicitly.

pub mod headers;
pub mod insurance;
pub mod packages;
pub mod regions;
pub mod vehicles;

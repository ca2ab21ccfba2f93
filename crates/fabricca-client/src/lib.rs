//! Fabric CA identity services.
//!
//! This crate provides [`FabricCaServices`], which enrolls, registers and
//! revokes identities through a configured Fabric CA client.

#![doc(html_root_url = "https://docs.rs/fabricca-client/0.1.0")]

mod config;
mod services;
mod translate;

#[cfg(test)]
mod test_support;

pub use config::*;
pub use fabricca_core::{FabricCaError, Result};
pub use services::{FabricCaServices, Services};

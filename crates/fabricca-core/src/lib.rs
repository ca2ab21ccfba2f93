//! Core types and traits for the Fabric CA identity services.
//!
//! This crate provides the foundations shared by the services and their callers:
//!
//! - **Types**: local request shapes and the CA client's request shapes ([`api`])
//! - **Traits**: capabilities consumed from the CA client, signing identities and users
//! - **Errors**: the error taxonomy in [`FabricCaError`]
//!
//! # Example
//!
//! ```rust,ignore
//! use fabricca_core::{RegistrationRequest, RevocationReason, RevocationRequest};
//!
//! let register = RegistrationRequest::new("peer1")
//!     .identity_type("peer")
//!     .affiliation("org1.department1")
//!     .attribute("hf.Revoker", "true");
//!
//! let revoke = RevocationRequest::by_name("peer1").reason(RevocationReason::Superseded);
//! ```

#![doc(html_root_url = "https://docs.rs/fabricca-core/0.1.0")]

mod error;
pub mod traits;
pub mod types;

pub use error::{CaClientError, FabricCaError, Operation, Result};
pub use traits::*;
pub use types::*;

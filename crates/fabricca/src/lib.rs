//! Fabric CA identity services: enroll, register and revoke X.509 identities.
//!
//! The CA protocol, certificate cryptography and key storage belong to the
//! CA client plugged in through [`CaClient`]; this crate validates requests,
//! translates them for the client and signs them as the registrar.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use fabricca::{EnrolledUser, FabricCaServices, KeyHandle, RegistrationRequest, SdkConfig};
//!
//! # async fn run(factory: &dyn fabricca::CaClientFactory) -> fabricca::Result<()> {
//! let config = SdkConfig::discover()?;
//! let services = FabricCaServices::from_config(&config, factory)?;
//!
//! // Enroll the bootstrap admin
//! let (key, cert) = services.enroll("admin", "adminpw").await?.into_parts();
//!
//! // Register a new peer as that admin
//! let admin = EnrolledUser::new("admin", "Org1MSP")
//!     .with_certificate(cert)
//!     .with_private_key(KeyHandle::new(ski_of(&key)));
//! let request = RegistrationRequest::new("peer1")
//!     .identity_type("peer")
//!     .affiliation("org1.department1");
//! let secret = services.register(Some(&admin), Some(&request)).await?;
//! # Ok(())
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/fabricca/0.1.0")]

// Re-export core types
pub use fabricca_core::*;

// Re-export services and configuration
pub use fabricca_client::{
    ConfigArtifact, FabricCaConfig, FabricCaServices, SdkConfig, Services, TlsClientConfig,
    TlsConfig, CONFIG_ENV,
};

pub use async_trait::async_trait;

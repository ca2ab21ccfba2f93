//! Capabilities the services consume from their collaborators.
//!
//! The CA protocol, certificate cryptography and key storage all live behind
//! these traits. Test doubles implement them directly.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{
    EnrollmentRequest, IssuedIdentity, RegistrationRequest, RegistrationResponse,
    RevocationRequest,
};
use crate::{CaClientError, Result};

/// A configured client for one Fabric CA server
#[async_trait]
pub trait CaClient: Send + Sync {
    /// Enroll an identity and receive its enrollment certificate
    async fn enroll(
        &self,
        request: &EnrollmentRequest,
    ) -> std::result::Result<IssuedIdentity, CaClientError>;

    /// Build an identity that signs CA requests with the key named by `ski`
    /// and presents `cert`
    fn new_identity(
        &self,
        ski: &[u8],
        cert: &[u8],
    ) -> std::result::Result<Box<dyn SigningIdentity>, CaClientError>;
}

/// An identity able to authenticate requests to the CA
#[async_trait]
pub trait SigningIdentity: Send + Sync {
    /// Register a new identity
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> std::result::Result<RegistrationResponse, CaClientError>;

    /// Revoke an identity or certificate
    async fn revoke(&self, request: &RevocationRequest) -> std::result::Result<(), CaClientError>;
}

/// Handle to a private key held by a key store
pub trait PrivateKey: Send + Sync {
    /// Subject key identifier, if the key store can produce one
    fn ski(&self) -> Option<&[u8]>;
}

/// A network member holding enrollment credentials
pub trait User: Send + Sync {
    /// Enrollment ID of the user; recorded on service spans
    fn name(&self) -> &str;

    /// Roles held in the network, for callers deciding who may act as a
    /// registrar. The services themselves never consult them.
    fn roles(&self) -> &[String];

    /// Enrollment certificate, if the user has enrolled
    fn enrollment_certificate(&self) -> Option<&[u8]>;

    /// Private key matching the enrollment certificate
    fn private_key(&self) -> Option<&dyn PrivateKey>;
}

/// Builds CA clients from a configuration file
pub trait CaClientFactory: Send + Sync {
    /// Create a client from the configuration at `path`.
    ///
    /// The file may be deleted as soon as this returns.
    fn client_from_config(&self, path: &Path)
        -> std::result::Result<Arc<dyn CaClient>, CaClientError>;
}

/// Produces the configuration file a CA client is built from
pub trait ConfigProvider: Send + Sync {
    /// Write or locate the CA client configuration and return its path.
    ///
    /// The caller owns the file and removes it once the client is built.
    fn ca_client_config_path(&self) -> Result<PathBuf>;
}

impl<F> CaClientFactory for F
where
    F: Fn(&Path) -> std::result::Result<Arc<dyn CaClient>, CaClientError> + Send + Sync,
{
    fn client_from_config(
        &self,
        path: &Path,
    ) -> std::result::Result<Arc<dyn CaClient>, CaClientError> {
        self(path)
    }
}

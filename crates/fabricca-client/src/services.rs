//! Enroll, register and revoke identities through a Fabric CA client.

use std::sync::Arc;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use fabricca_core::{
    CaClient, CaClientFactory, ConfigProvider, Enrollment, EnrollmentRequest, FabricCaError,
    Operation, RegistrationRequest, Result, RevocationRequest, SigningIdentity, User,
};
use tracing::{debug, info, instrument};

use crate::config::ConfigArtifact;
use crate::translate;

/// Identity operations offered by the Fabric CA.
///
/// Implemented by [`FabricCaServices`]; depend on this trait to substitute a
/// test double.
#[async_trait]
pub trait Services: Send + Sync {
    /// Enroll a registered identity, returning its private key and certificate
    async fn enroll(&self, enrollment_id: &str, enrollment_secret: &str) -> Result<Enrollment>;

    /// Register a new identity on behalf of `registrar`, returning its enrollment secret
    async fn register(
        &self,
        registrar: Option<&dyn User>,
        request: Option<&RegistrationRequest>,
    ) -> Result<String>;

    /// Revoke an identity or certificate on behalf of `registrar`
    async fn revoke(
        &self,
        registrar: Option<&dyn User>,
        request: Option<&RevocationRequest>,
    ) -> Result<()>;
}

/// Fabric CA identity services.
///
/// Cheap to clone; clones share one CA client. Every call is a single attempt
/// with no retry, and no state is kept between calls.
#[derive(Clone)]
pub struct FabricCaServices {
    client: Arc<dyn CaClient>,
}

impl FabricCaServices {
    /// Wrap an already configured CA client
    #[must_use]
    pub fn new(client: Arc<dyn CaClient>) -> Self {
        Self { client }
    }

    /// Build the CA client from the configuration `provider` resolves.
    ///
    /// The configuration file is removed once construction finishes, whether
    /// or not it succeeded.
    pub fn from_config(
        provider: &dyn ConfigProvider,
        factory: &dyn CaClientFactory,
    ) -> Result<Self> {
        let path = provider.ca_client_config_path().map_err(|e| match e {
            config @ FabricCaError::Configuration(_) => config,
            other => FabricCaError::Configuration(format!(
                "error setting up fabric-ca configurations: {other}"
            )),
        })?;
        let artifact = ConfigArtifact::new(path);

        let client = factory.client_from_config(artifact.path()).map_err(|e| {
            FabricCaError::Configuration(format!("failed to create fabric CA client: {e}"))
        })?;
        drop(artifact);

        let services = Self::new(client);
        info!(services = ?services, "constructed fabric CA client");
        Ok(services)
    }

    /// Enroll a registered identity to receive a signed X.509 certificate.
    ///
    /// Returns the raw private key and certificate of the issued enrollment
    /// certificate. CA failures are reported as [`FabricCaError::Protocol`].
    #[instrument(skip(self, enrollment_secret))]
    pub async fn enroll(&self, enrollment_id: &str, enrollment_secret: &str) -> Result<Enrollment> {
        if enrollment_id.is_empty() {
            return Err(FabricCaError::Validation("enrollment ID is empty".to_string()));
        }
        if enrollment_secret.is_empty() {
            return Err(FabricCaError::Validation(
                "enrollment secret is empty".to_string(),
            ));
        }

        let request =
            translate::enrollment_request(&EnrollmentRequest::new(enrollment_id, enrollment_secret));
        debug!("sending enrollment request");

        let identity = self
            .client
            .enroll(&request)
            .await
            .map_err(|e| FabricCaError::protocol(Operation::Enroll, e))?;

        let ecert = identity.into_ecert();
        Ok(Enrollment {
            private_key: ecert.key().to_vec(),
            certificate: ecert.cert().to_vec(),
        })
    }

    /// Register a new identity with the CA.
    ///
    /// The CA returns the enrollment secret base64-encoded; the decoded secret
    /// is returned.
    #[instrument(skip_all, fields(registrar = registrar.map(|u| u.name())))]
    pub async fn register(
        &self,
        registrar: Option<&dyn User>,
        request: Option<&RegistrationRequest>,
    ) -> Result<String> {
        let request = request.ok_or_else(|| {
            FabricCaError::Validation("registration request is required".to_string())
        })?;

        let identity = self
            .create_signing_identity(registrar)
            .map_err(|e| FabricCaError::IdentityDerivation(Box::new(e)))?;

        let request = translate::registration_request(request);
        debug!(name = %request.name, "sending registration request");

        let response = identity
            .register(&request)
            .await
            .map_err(|e| FabricCaError::protocol(Operation::Register, e))?;

        decode_secret(&response.secret)
    }

    /// Revoke an identity or a single certificate.
    ///
    /// Unlike [`enroll`](Self::enroll) and [`register`](Self::register), a CA
    /// failure is returned as-is in [`FabricCaError::Ca`], without naming the
    /// operation.
    #[instrument(skip_all, fields(registrar = registrar.map(|u| u.name())))]
    pub async fn revoke(
        &self,
        registrar: Option<&dyn User>,
        request: Option<&RevocationRequest>,
    ) -> Result<()> {
        let request = request.ok_or_else(|| {
            FabricCaError::Validation("revocation request is required".to_string())
        })?;

        let identity = self
            .create_signing_identity(registrar)
            .map_err(|e| FabricCaError::IdentityDerivation(Box::new(e)))?;

        let request = translate::revocation_request(request);
        debug!(reason = request.reason, "sending revocation request");

        identity.revoke(&request).await.map_err(FabricCaError::Ca)
    }

    /// Create an identity to sign CA requests with, from `user`'s enrollment
    /// certificate and private key.
    ///
    /// A new identity is built on every call.
    pub fn create_signing_identity(
        &self,
        user: Option<&dyn User>,
    ) -> Result<Box<dyn SigningIdentity>> {
        let user = user.ok_or_else(|| {
            FabricCaError::Validation("a user is required to create a signing identity".to_string())
        })?;

        let (Some(cert), Some(key)) = (user.enrollment_certificate(), user.private_key()) else {
            return Err(FabricCaError::Credential(format!(
                "unable to read enrollment information for user {}",
                user.name()
            )));
        };

        let ski = key.ski().ok_or_else(|| {
            FabricCaError::Credential(format!(
                "unable to read private key SKI for user {}",
                user.name()
            ))
        })?;

        Ok(self.client.new_identity(ski, cert)?)
    }
}

impl std::fmt::Debug for FabricCaServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FabricCaServices").finish_non_exhaustive()
    }
}

#[async_trait]
impl Services for FabricCaServices {
    async fn enroll(&self, enrollment_id: &str, enrollment_secret: &str) -> Result<Enrollment> {
        Self::enroll(self, enrollment_id, enrollment_secret).await
    }

    async fn register(
        &self,
        registrar: Option<&dyn User>,
        request: Option<&RegistrationRequest>,
    ) -> Result<String> {
        Self::register(self, registrar, request).await
    }

    async fn revoke(
        &self,
        registrar: Option<&dyn User>,
        request: Option<&RevocationRequest>,
    ) -> Result<()> {
        Self::revoke(self, registrar, request).await
    }
}

/// Decode the base64 enrollment secret returned by the CA
fn decode_secret(encoded: &str) -> Result<String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| FabricCaError::Encoding(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| FabricCaError::Encoding(e.to_string()))
}

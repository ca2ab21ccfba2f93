//! Recording stand-ins for the CA client and its signing identities.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use fabricca_core::api::{
    EnrollmentCertificate, EnrollmentRequest, IssuedIdentity, RegistrationRequest,
    RegistrationResponse, RevocationRequest,
};
use fabricca_core::{
    CaClient, CaClientError, CaClientFactory, EnrolledUser, KeyHandle, SigningIdentity,
};

/// Everything the stub CA saw
#[derive(Debug, Default)]
pub struct Recorded {
    pub enrollments: Mutex<Vec<EnrollmentRequest>>,
    pub identities: Mutex<Vec<(Vec<u8>, Vec<u8>)>>,
    pub registrations: Mutex<Vec<RegistrationRequest>>,
    pub revocations: Mutex<Vec<RevocationRequest>>,
}

impl Recorded {
    pub fn enrollments(&self) -> Vec<EnrollmentRequest> {
        self.enrollments.lock().unwrap().clone()
    }

    pub fn identities(&self) -> Vec<(Vec<u8>, Vec<u8>)> {
        self.identities.lock().unwrap().clone()
    }

    pub fn registrations(&self) -> Vec<RegistrationRequest> {
        self.registrations.lock().unwrap().clone()
    }

    pub fn revocations(&self) -> Vec<RevocationRequest> {
        self.revocations.lock().unwrap().clone()
    }

    pub fn network_calls(&self) -> usize {
        self.enrollments.lock().unwrap().len()
            + self.registrations.lock().unwrap().len()
            + self.revocations.lock().unwrap().len()
    }
}

/// CA client returning canned responses
#[derive(Debug, Clone)]
pub struct StubCaClient {
    pub recorded: Arc<Recorded>,
    pub enroll_result: Result<(Vec<u8>, Vec<u8>), CaClientError>,
    pub identity_error: Option<CaClientError>,
    pub register_result: Result<String, CaClientError>,
    pub revoke_error: Option<CaClientError>,
}

impl Default for StubCaClient {
    fn default() -> Self {
        Self {
            recorded: Arc::default(),
            enroll_result: Ok((vec![0x01], vec![0x02])),
            identity_error: None,
            register_result: Ok("c2VjcmV0".to_string()),
            revoke_error: None,
        }
    }
}

impl StubCaClient {
    pub fn into_client(self) -> (Arc<dyn CaClient>, Arc<Recorded>) {
        let recorded = Arc::clone(&self.recorded);
        (Arc::new(self), recorded)
    }
}

#[async_trait]
impl CaClient for StubCaClient {
    async fn enroll(&self, request: &EnrollmentRequest) -> Result<IssuedIdentity, CaClientError> {
        self.recorded.enrollments.lock().unwrap().push(request.clone());
        let (key, cert) = self.enroll_result.clone()?;
        Ok(IssuedIdentity::new(
            request.name.clone(),
            EnrollmentCertificate::new(key, cert),
        ))
    }

    fn new_identity(
        &self,
        ski: &[u8],
        cert: &[u8],
    ) -> Result<Box<dyn SigningIdentity>, CaClientError> {
        self.recorded
            .identities
            .lock()
            .unwrap()
            .push((ski.to_vec(), cert.to_vec()));
        if let Some(err) = &self.identity_error {
            return Err(err.clone());
        }
        Ok(Box::new(StubIdentity {
            recorded: Arc::clone(&self.recorded),
            register_result: self.register_result.clone(),
            revoke_error: self.revoke_error.clone(),
        }))
    }
}

struct StubIdentity {
    recorded: Arc<Recorded>,
    register_result: Result<String, CaClientError>,
    revoke_error: Option<CaClientError>,
}

#[async_trait]
impl SigningIdentity for StubIdentity {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, CaClientError> {
        self.recorded.registrations.lock().unwrap().push(request.clone());
        self.register_result
            .clone()
            .map(|secret| RegistrationResponse { secret })
    }

    async fn revoke(&self, request: &RevocationRequest) -> Result<(), CaClientError> {
        self.recorded.revocations.lock().unwrap().push(request.clone());
        match &self.revoke_error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Factory that checks the config file exists while the client is built
#[derive(Debug, Default)]
pub struct StubFactory {
    pub fail_with: Option<CaClientError>,
    pub seen: Mutex<Option<(PathBuf, bool)>>,
}

impl StubFactory {
    pub fn seen(&self) -> Option<(PathBuf, bool)> {
        self.seen.lock().unwrap().clone()
    }
}

impl CaClientFactory for StubFactory {
    fn client_from_config(&self, path: &Path) -> Result<Arc<dyn CaClient>, CaClientError> {
        *self.seen.lock().unwrap() = Some((path.to_path_buf(), path.exists()));
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(Arc::new(StubCaClient::default())),
        }
    }
}

/// Registrar with a certificate and a key that has an SKI
pub fn registrar() -> EnrolledUser {
    EnrolledUser::new("admin", "Org1MSP")
        .with_role("registrar")
        .with_certificate(b"admin-cert".to_vec())
        .with_private_key(KeyHandle::new(vec![0xaa, 0xbb]))
}

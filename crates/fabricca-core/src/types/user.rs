use crate::traits::{PrivateKey, User};

/// Reference to a key in a key store, identified by its SKI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyHandle {
    ski: Option<Vec<u8>>,
}

impl KeyHandle {
    /// Handle to the key with this subject key identifier
    #[must_use]
    pub fn new(ski: impl Into<Vec<u8>>) -> Self {
        Self {
            ski: Some(ski.into()),
        }
    }

    /// Handle whose key store could not produce an identifier
    #[must_use]
    pub const fn without_ski() -> Self {
        Self { ski: None }
    }
}

impl PrivateKey for KeyHandle {
    fn ski(&self) -> Option<&[u8]> {
        self.ski.as_deref()
    }
}

/// In-memory user with optional enrollment credentials
#[derive(Debug, Clone, Default)]
pub struct EnrolledUser {
    name: String,
    msp_id: String,
    roles: Vec<String>,
    enrollment_certificate: Option<Vec<u8>>,
    private_key: Option<KeyHandle>,
}

impl EnrolledUser {
    /// Create a user with no credentials
    #[must_use]
    pub fn new(name: impl Into<String>, msp_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            msp_id: msp_id.into(),
            ..Self::default()
        }
    }

    /// Set the enrollment certificate
    #[must_use]
    pub fn with_certificate(mut self, cert: impl Into<Vec<u8>>) -> Self {
        self.enrollment_certificate = Some(cert.into());
        self
    }

    /// Set the private key
    #[must_use]
    pub fn with_private_key(mut self, key: KeyHandle) -> Self {
        self.private_key = Some(key);
        self
    }

    /// Add a role
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    /// Membership service provider the user belongs to
    #[must_use]
    pub fn msp_id(&self) -> &str {
        &self.msp_id
    }
}

impl User for EnrolledUser {
    fn name(&self) -> &str {
        &self.name
    }

    fn roles(&self) -> &[String] {
        &self.roles
    }

    fn enrollment_certificate(&self) -> Option<&[u8]> {
        self.enrollment_certificate.as_deref()
    }

    fn private_key(&self) -> Option<&dyn PrivateKey> {
        self.private_key.as_ref().map(|k| k as &dyn PrivateKey)
    }
}

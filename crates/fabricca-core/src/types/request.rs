use serde::{Deserialize, Serialize};

use super::RevocationReason;

/// Credentials used to enroll a registered identity
#[derive(Clone, PartialEq, Eq)]
pub struct EnrollmentRequest {
    /// The registered ID to enroll
    pub name: String,

    /// The secret issued when the ID was registered
    pub secret: String,
}

impl EnrollmentRequest {
    /// Create an enrollment request
    #[must_use]
    pub fn new(name: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secret: secret.into(),
        }
    }
}

// Keeps the secret out of logs and panic messages.
impl std::fmt::Debug for EnrollmentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentRequest")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Name/value attribute attached to a registered identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub key: String,
    pub value: String,
}

impl Attribute {
    /// Create a new attribute
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Request to register a new identity with the CA
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Unique name of the identity
    pub name: String,

    /// Type of identity being registered (e.g. "peer", "app", "user")
    #[serde(rename = "type", default)]
    pub identity_type: String,

    /// Number of times the secret can be used to enroll.
    /// Zero leaves the choice to the server's configured maximum.
    #[serde(default)]
    pub max_enrollments: i32,

    /// Affiliation of the identity, e.g. `org1.department1`
    #[serde(default)]
    pub affiliation: String,

    /// Attributes in the order they were added; duplicates are kept
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

impl RegistrationRequest {
    /// Create a registration request for the named identity
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the identity type
    #[must_use]
    pub fn identity_type(mut self, identity_type: impl Into<String>) -> Self {
        self.identity_type = identity_type.into();
        self
    }

    /// Set the maximum number of enrollments
    #[must_use]
    pub const fn max_enrollments(mut self, max: i32) -> Self {
        self.max_enrollments = max;
        self
    }

    /// Set the affiliation
    #[must_use]
    pub fn affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    /// Append an attribute
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(key, value));
        self
    }
}

/// Request to revoke an identity or one of its certificates.
///
/// Either `name` or both `serial` and `aki` should be set. The CA decides
/// whether the request identifies anything; nothing is checked locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRequest {
    /// Identity whose certificates should all be revoked
    #[serde(default)]
    pub name: Option<String>,

    /// Serial number of a single certificate
    #[serde(default)]
    pub serial: Option<String>,

    /// Authority key identifier of that certificate
    #[serde(default)]
    pub aki: Option<String>,

    #[serde(default)]
    pub reason: RevocationReason,
}

impl RevocationRequest {
    /// Revoke every certificate issued to the named identity
    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Revoke the certificate with this serial number and AKI
    #[must_use]
    pub fn by_serial(serial: impl Into<String>, aki: impl Into<String>) -> Self {
        Self {
            serial: Some(serial.into()),
            aki: Some(aki.into()),
            ..Self::default()
        }
    }

    /// Set the revocation reason
    #[must_use]
    pub const fn reason(mut self, reason: RevocationReason) -> Self {
        self.reason = reason;
        self
    }
}

/// Key material issued by a successful enrollment
#[derive(Clone, PartialEq, Eq)]
pub struct Enrollment {
    /// Raw private key bytes
    pub private_key: Vec<u8>,

    /// Raw certificate bytes
    pub certificate: Vec<u8>,
}

impl Enrollment {
    /// Split into `(private_key, certificate)`
    #[must_use]
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.private_key, self.certificate)
    }
}

impl std::fmt::Debug for Enrollment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enrollment")
            .field("private_key", &format_args!("<{} bytes>", self.private_key.len()))
            .field("certificate", &format_args!("<{} bytes>", self.certificate.len()))
            .finish()
    }
}

//! Request and response shapes understood by the wrapped CA client library.
//!
//! Field names follow the CA server's JSON API.

use serde::{Deserialize, Serialize};

/// Enrollment request as sent by the CA client.
///
/// The ID and secret travel as basic-auth credentials, not in the body.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRequest {
    #[serde(skip)]
    pub name: String,

    #[serde(skip)]
    pub secret: String,

    /// Signing profile to use on the CA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// HSM label of the signing key on the CA
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl std::fmt::Debug for EnrollmentRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentRequest")
            .field("name", &self.name)
            .field("secret", &"<redacted>")
            .field("profile", &self.profile)
            .field("label", &self.label)
            .finish()
    }
}

/// Attribute of a registered identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Registration request as sent by a signing identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(rename = "id")]
    pub name: String,

    #[serde(rename = "type")]
    pub identity_type: String,

    pub max_enrollments: i32,

    pub affiliation: String,

    /// `None` and an empty list are different on the wire: `None` omits the field.
    #[serde(rename = "attrs", default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Attribute>>,
}

/// Response to a registration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Base64-encoded enrollment secret
    pub secret: String,
}

/// Revocation request as sent by a signing identity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevocationRequest {
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aki: Option<String>,

    /// RFC 5280 reason code
    #[serde(default)]
    pub reason: i32,
}

/// Enrollment certificate and its private key
#[derive(Clone, PartialEq, Eq)]
pub struct EnrollmentCertificate {
    key: Vec<u8>,
    cert: Vec<u8>,
}

impl EnrollmentCertificate {
    /// Create from raw key and certificate bytes
    #[must_use]
    pub const fn new(key: Vec<u8>, cert: Vec<u8>) -> Self {
        Self { key, cert }
    }

    /// Raw private key bytes
    #[must_use]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Raw certificate bytes
    #[must_use]
    pub fn cert(&self) -> &[u8] {
        &self.cert
    }
}

impl std::fmt::Debug for EnrollmentCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrollmentCertificate")
            .field("key", &"<redacted>")
            .field("cert", &format_args!("<{} bytes>", self.cert.len()))
            .finish()
    }
}

/// Identity issued by the CA on enrollment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedIdentity {
    /// Enrollment ID the identity was issued for
    pub name: String,

    ecert: EnrollmentCertificate,
}

impl IssuedIdentity {
    /// Create an issued identity
    #[must_use]
    pub fn new(name: impl Into<String>, ecert: EnrollmentCertificate) -> Self {
        Self {
            name: name.into(),
            ecert,
        }
    }

    /// The enrollment certificate and key
    #[must_use]
    pub const fn ecert(&self) -> &EnrollmentCertificate {
        &self.ecert
    }

    /// Take ownership of the enrollment certificate and key
    #[must_use]
    pub fn into_ecert(self) -> EnrollmentCertificate {
        self.ecert
    }
}

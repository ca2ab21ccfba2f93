use serde::{Deserialize, Serialize};

use crate::FabricCaError;

/// Reason a certificate is being revoked.
///
/// Codes follow the CRL reason codes of RFC 5280 (also used by OCSP).
/// Code 7 is unassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RevocationReason {
    #[default]
    Unspecified,
    KeyCompromise,
    CaCompromise,
    AffiliationChanged,
    Superseded,
    CessationOfOperation,
    CertificateHold,
    RemoveFromCrl,
    PrivilegeWithdrawn,
    AaCompromise,
}

impl RevocationReason {
    /// Numeric reason code sent to the CA
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Unspecified => 0,
            Self::KeyCompromise => 1,
            Self::CaCompromise => 2,
            Self::AffiliationChanged => 3,
            Self::Superseded => 4,
            Self::CessationOfOperation => 5,
            Self::CertificateHold => 6,
            Self::RemoveFromCrl => 8,
            Self::PrivilegeWithdrawn => 9,
            Self::AaCompromise => 10,
        }
    }
}

impl TryFrom<i32> for RevocationReason {
    type Error = FabricCaError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Unspecified),
            1 => Ok(Self::KeyCompromise),
            2 => Ok(Self::CaCompromise),
            3 => Ok(Self::AffiliationChanged),
            4 => Ok(Self::Superseded),
            5 => Ok(Self::CessationOfOperation),
            6 => Ok(Self::CertificateHold),
            8 => Ok(Self::RemoveFromCrl),
            9 => Ok(Self::PrivilegeWithdrawn),
            10 => Ok(Self::AaCompromise),
            other => Err(FabricCaError::Validation(format!(
                "unknown revocation reason code: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for RevocationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unspecified => "unspecified",
            Self::KeyCompromise => "keycompromise",
            Self::CaCompromise => "cacompromise",
            Self::AffiliationChanged => "affiliationchanged",
            Self::Superseded => "superseded",
            Self::CessationOfOperation => "cessationofoperation",
            Self::CertificateHold => "certificatehold",
            Self::RemoveFromCrl => "removefromcrl",
            Self::PrivilegeWithdrawn => "privilegewithdrawn",
            Self::AaCompromise => "aacompromise",
        };
        f.write_str(name)
    }
}

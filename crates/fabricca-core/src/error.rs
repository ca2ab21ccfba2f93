use thiserror::Error;

/// Result type alias for Fabric CA operations
pub type Result<T> = std::result::Result<T, FabricCaError>;

/// Error reported by a CA client collaborator or a signing identity.
///
/// This is what the wrapped CA library hands back; the facade either wraps it
/// in [`FabricCaError::Protocol`] or passes it through as [`FabricCaError::Ca`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct CaClientError {
    /// CA server error code, when the server reported one
    pub code: Option<u32>,
    /// Error message
    pub message: String,
}

impl CaClientError {
    /// Create an error without a server code
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Create an error carrying a CA server error code
    #[must_use]
    pub fn with_code(code: u32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CaClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.code {
            Some(code) => write!(f, "CA error ({code}): {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Operation that reached the CA and failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Enrollment of an identity
    Enroll,
    /// Registration of an identity by a registrar
    Register,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enroll => write!(f, "enroll"),
            Self::Register => write!(f, "register"),
        }
    }
}

/// Errors that can occur when using the Fabric CA services
#[derive(Error, Debug)]
pub enum FabricCaError {
    /// Missing or malformed local input
    #[error("validation failed: {0}")]
    Validation(String),

    /// The services could not be set up
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A signing identity could not be derived for the registrar
    #[error("error creating signing identity: {0}")]
    IdentityDerivation(#[source] Box<FabricCaError>),

    /// The user lacks usable enrollment credentials
    #[error("credential error: {0}")]
    Credential(String),

    /// A value returned by the CA was not encoded as expected
    #[error("error decoding enrollment secret: {0}")]
    Encoding(String),

    /// A call to the CA failed
    #[error("{operation} failed: {source}")]
    Protocol {
        /// The operation that failed
        operation: Operation,
        /// Error reported by the CA client
        #[source]
        source: CaClientError,
    },

    /// Error reported by the CA client, passed through as-is
    #[error(transparent)]
    Ca(#[from] CaClientError),

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl FabricCaError {
    /// Wrap a CA client error as a failure of `operation`
    #[must_use]
    pub const fn protocol(operation: Operation, source: CaClientError) -> Self {
        Self::Protocol { operation, source }
    }

    /// Returns true if local input was rejected before any call was made
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the registrar's credentials were unusable
    #[must_use]
    pub fn is_credential(&self) -> bool {
        match self {
            Self::Credential(_) => true,
            Self::IdentityDerivation(inner) => inner.is_credential(),
            _ => false,
        }
    }

    /// Returns true if the error came from the CA and a caller may retry.
    ///
    /// The services never retry on their own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Protocol { .. } | Self::Ca(_))
    }

    /// Returns the CA client error underneath this one, if any
    #[must_use]
    pub fn downstream(&self) -> Option<&CaClientError> {
        match self {
            Self::Protocol { source, .. } | Self::Ca(source) => Some(source),
            Self::IdentityDerivation(inner) => inner.downstream(),
            _ => None,
        }
    }
}

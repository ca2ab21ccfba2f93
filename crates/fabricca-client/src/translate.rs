//! Mapping from local request shapes onto the CA client's.

use fabricca_core::api;
use fabricca_core::{EnrollmentRequest, RegistrationRequest, RevocationRequest};

pub(crate) fn enrollment_request(request: &EnrollmentRequest) -> api::EnrollmentRequest {
    api::EnrollmentRequest {
        name: request.name.clone(),
        secret: request.secret.clone(),
        profile: None,
        label: None,
    }
}

/// Attributes keep their order; an empty list becomes `None`.
pub(crate) fn registration_request(request: &RegistrationRequest) -> api::RegistrationRequest {
    let attributes = (!request.attributes.is_empty()).then(|| {
        request
            .attributes
            .iter()
            .map(|attr| api::Attribute {
                name: attr.key.clone(),
                value: attr.value.clone(),
            })
            .collect()
    });

    api::RegistrationRequest {
        name: request.name.clone(),
        identity_type: request.identity_type.clone(),
        max_enrollments: request.max_enrollments,
        affiliation: request.affiliation.clone(),
        attributes,
    }
}

pub(crate) fn revocation_request(request: &RevocationRequest) -> api::RevocationRequest {
    api::RevocationRequest {
        name: non_empty(request.name.as_deref()),
        serial: non_empty(request.serial.as_deref()),
        aki: non_empty(request.aki.as_deref()),
        reason: request.reason.code(),
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_owned)
}

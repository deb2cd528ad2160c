//! Checking a response's event type and role against an ontology.

use crate::errors::{QaError, QaResult};
use crate::ontology::Ontology;
use crate::response::Response;

/// Roles valid for every event type regardless of the ontology.
pub const ALWAYS_VALID_ROLES: [&str; 2] = ["Time", "Place"];

pub fn is_always_valid_role(role: &str) -> bool {
    ALWAYS_VALID_ROLES.contains(&role)
}

/// Checks `response` against the event-type to valid-roles mapping.
///
/// Fails with [`QaError::InvalidEventType`] when the type is not a key of
/// `valid_roles`, otherwise with [`QaError::InvalidRole`] when the role is
/// neither listed for that type nor one of [`ALWAYS_VALID_ROLES`].
pub fn validate_response(response: &Response, valid_roles: &Ontology) -> QaResult<()> {
    let Some(roles) = valid_roles.get(response.event_type()) else {
        return Err(QaError::InvalidEventType {
            doc_id: response.doc_id().to_string(),
            event_type: response.event_type().to_string(),
            valid_types: valid_roles.keys().map(str::to_string).collect(),
        });
    };
    if is_always_valid_role(response.role()) || roles.contains(response.role()) {
        return Ok(());
    }
    Err(QaError::InvalidRole {
        doc_id: response.doc_id().to_string(),
        event_type: response.event_type().to_string(),
        role: response.role().to_string(),
        valid_roles: roles.iter().cloned().collect(),
    })
}

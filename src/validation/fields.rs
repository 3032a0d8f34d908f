use crate::error::{Constraint, UserField, ValidationError};
use crate::validation::email::normalize_email;
use uuid::Uuid;

/// Parses a required UUID.
///
/// Accepts the hyphenated, simple, braced and URN renderings.
pub fn parse_id(raw: Option<&str>) -> Result<Uuid, ValidationError> {
    let raw = raw.ok_or(ValidationError::missing(UserField::Id))?;
    Uuid::parse_str(raw).map_err(|_| ValidationError::new(UserField::Id, Constraint::Uuid))
}

/// Checks a required email address and returns it with the domain lowercased.
pub fn parse_email(raw: Option<&str>) -> Result<String, ValidationError> {
    let raw = raw.ok_or(ValidationError::missing(UserField::Email))?;
    normalize_email(raw).map_err(|e| ValidationError::new(UserField::Email, e.into()))
}

/// Requires a name to be present. Any string, including an empty one, counts.
pub fn require_name(raw: Option<&str>) -> Result<&str, ValidationError> {
    raw.ok_or(ValidationError::missing(UserField::Name))
}

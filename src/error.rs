use crate::validation::email::EmailSyntaxError;
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use utoipa::ToSchema;

/// Fields of a [`User`](crate::models::user::User) that can fail validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Id,
    Email,
    Name,
}

impl UserField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserField::Id => "id",
            UserField::Email => "email",
            UserField::Name => "name",
        }
    }
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule a field broke.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    #[error("field required")]
    Missing,
    #[error("input should be a valid UUID")]
    Uuid,
    #[error("value is not a valid email address: {0}")]
    Email(#[from] EmailSyntaxError),
}

impl Constraint {
    /// Stable machine-readable code for API consumers.
    pub fn code(&self) -> &'static str {
        match self {
            Constraint::Missing => "missing",
            Constraint::Uuid => "uuid_parsing",
            Constraint::Email(_) => "email_syntax",
        }
    }
}

/// # User Validation Failure
///
/// Raised when raw input cannot be turned into a
/// [`User`](crate::models::user::User). Names the first offending field and
/// the constraint it violated.
///
/// When returned from an actix-web handler it renders as
/// `422 Unprocessable Entity` with a [`ValidationErrorBody`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {constraint}")]
pub struct ValidationError {
    pub field: UserField,
    pub constraint: Constraint,
}

impl ValidationError {
    pub fn new(field: UserField, constraint: Constraint) -> Self {
        Self { field, constraint }
    }

    pub fn missing(field: UserField) -> Self {
        Self::new(field, Constraint::Missing)
    }

    pub fn body(&self) -> ValidationErrorBody {
        ValidationErrorBody {
            field: self.field.as_str().to_string(),
            constraint: self.constraint.code().to_string(),
            message: self.constraint.to_string(),
        }
    }
}

/// JSON form of a [`ValidationError`].
///
/// ## Example JSON
/// ```json
/// {
///   "field": "email",
///   "constraint": "email_syntax",
///   "message": "value is not a valid email address: the address must contain an @ sign"
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, PartialEq, ToSchema)]
pub struct ValidationErrorBody {
    pub field: String,
    pub constraint: String,
    pub message: String,
}

impl ResponseError for ValidationError {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.body())
    }
}

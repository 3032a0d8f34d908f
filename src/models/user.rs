use crate::error::ValidationError;
use crate::validation::fields::{parse_email, parse_id, require_name};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

fn default_active() -> bool {
    true
}

/// # User Record
///
/// A validated user. The only way to obtain one is through [`User::new`],
/// [`User::try_from`] on a [`UserInput`], or deserializing JSON (which goes
/// through [`UserInput`]), so every instance carries a parsed `id` and an
/// email that passed the syntax check.
///
/// ## Example JSON
/// ```json
/// {
///   "id": "5f1f2c1e-8a8e-4f77-9a5c-3f1f0b6f4b2a",
///   "email": "a@example.com",
///   "name": "Ada",
///   "is_active": true
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct User {
    id: Uuid,
    #[schema(example = "a@example.com")]
    email: String,
    name: String,
    #[schema(default = true)]
    is_active: bool,
}

/// Raw, unvalidated field values for a [`User`].
///
/// A missing `is_active` defaults to `true`; an explicit `null` is a type error.
#[derive(Deserialize, Debug, Clone)]
pub struct UserInput {
    pub id: Option<String>,
    pub email: Option<String>,
    pub name: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl Default for UserInput {
    fn default() -> Self {
        Self {
            id: None,
            email: None,
            name: None,
            is_active: default_active(),
        }
    }
}

impl User {
    /// Builds an active user from typed parts, checking the email.
    pub fn new(id: Uuid, email: &str, name: impl Into<String>) -> Result<Self, ValidationError> {
        let email = parse_email(Some(email))?;
        Ok(Self {
            id,
            email,
            name: name.into(),
            is_active: default_active(),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

impl TryFrom<UserInput> for User {
    type Error = ValidationError;

    /// Validates `id`, then `email`, then `name`, and reports the first
    /// failure.
    fn try_from(input: UserInput) -> Result<Self, Self::Error> {
        validate(input).inspect_err(|e| {
            tracing::debug!(
                field = %e.field,
                constraint = e.constraint.code(),
                "rejected user input"
            );
        })
    }
}

fn validate(input: UserInput) -> Result<User, ValidationError> {
    let id = parse_id(input.id.as_deref())?;
    let email = parse_email(input.email.as_deref())?;
    let name = require_name(input.name.as_deref())?.to_string();
    Ok(User {
        id,
        email,
        name,
        is_active: input.is_active,
    })
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = UserInput::deserialize(deserializer)?;
        User::try_from(input).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Constraint, UserField};
    use serde_json::json;

    fn input(id: Option<&str>, email: &str, name: &str) -> UserInput {
        UserInput {
            id: id.map(str::to_string),
            email: Some(email.to_string()),
            name: Some(name.to_string()),
            ..UserInput::default()
        }
    }

    #[test]
    fn valid_input_defaults_to_active() {
        let id = Uuid::new_v4();
        let raw = input(Some(id.to_string().as_str()), "a@example.com", "Ada");
        let user = User::try_from(raw).unwrap();

        assert_eq!(user.id(), id);
        assert_eq!(user.email(), "a@example.com");
        assert_eq!(user.name(), "Ada");
        assert!(user.is_active());
    }

    #[test]
    fn explicit_inactive_is_preserved() {
        let id = Uuid::new_v4().to_string();
        let mut raw = input(Some(id.as_str()), "a@example.com", "Ada");
        raw.is_active = false;

        let user = User::try_from(raw).unwrap();
        assert!(!user.is_active());
    }

    #[test]
    fn invalid_email_is_rejected() {
        let id = Uuid::new_v4().to_string();
        let err = User::try_from(input(Some(id.as_str()), "not-an-email", "Ada")).unwrap_err();

        assert_eq!(err.field, UserField::Email);
        assert_eq!(err.constraint.code(), "email_syntax");
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = User::try_from(input(None, "a@example.com", "Ada")).unwrap_err();
        assert_eq!(err, ValidationError::missing(UserField::Id));
    }

    #[test]
    fn missing_name_is_rejected() {
        let raw = UserInput {
            id: Some(Uuid::new_v4().to_string()),
            email: Some("a@example.com".to_string()),
            ..UserInput::default()
        };
        let err = User::try_from(raw).unwrap_err();
        assert_eq!(err, ValidationError::missing(UserField::Name));
    }

    #[test]
    fn first_failing_field_is_reported() {
        let err = User::try_from(input(Some("nope"), "not-an-email", "Ada")).unwrap_err();
        assert_eq!(err, ValidationError::new(UserField::Id, Constraint::Uuid));
    }

    #[test]
    fn new_checks_email_and_sets_active() {
        let id = Uuid::new_v4();
        let user = User::new(id, "a@example.com", "Ada").unwrap();
        assert!(user.is_active());
        assert_eq!(user.id(), id);

        let err = User::new(id, "a@localhost", "Ada").unwrap_err();
        assert_eq!(err.field, UserField::Email);
    }

    #[test]
    fn new_rejects_undeliverable_addresses() {
        for email in [
            "\"with space\"@example.com",
            "user@[192.168.0.1]",
            "a@1.2.3.4",
            "a@foo.localhost",
            "a@host.invalid",
            "a@x.test",
        ] {
            let err = User::new(Uuid::nil(), email, "Ada").unwrap_err();
            assert_eq!(err.field, UserField::Email, "{email}");
        }
    }

    #[test]
    fn stored_email_has_lowercased_domain() {
        let user = User::new(Uuid::nil(), "Ada@EXAMPLE.COM", "Ada").unwrap();
        assert_eq!(user.email(), "Ada@example.com");
    }

    #[test]
    fn deserializes_and_validates_json() {
        let id = Uuid::new_v4();
        let user: User = serde_json::from_value(json!({
            "id": id,
            "email": "a@example.com",
            "name": "Ada",
            "is_active": false
        }))
        .unwrap();
        assert_eq!(user.id(), id);
        assert!(!user.is_active());

        let err = serde_json::from_value::<User>(json!({
            "email": "a@example.com",
            "name": "Ada"
        }))
        .unwrap_err();
        assert!(err.to_string().contains("id: field required"));
    }

    #[test]
    fn json_missing_is_active_defaults_to_true() {
        let user: User = serde_json::from_value(json!({
            "id": Uuid::new_v4(),
            "email": "a@example.com",
            "name": "Ada"
        }))
        .unwrap();
        assert!(user.is_active());
    }

    #[test]
    fn json_null_is_active_is_rejected() {
        let result = serde_json::from_value::<User>(json!({
            "id": Uuid::new_v4(),
            "email": "a@example.com",
            "name": "Ada",
            "is_active": null
        }));
        assert!(result.is_err());
    }

    #[test]
    fn json_rejects_wrongly_typed_fields() {
        let result = serde_json::from_value::<User>(json!({
            "id": Uuid::new_v4(),
            "email": "a@example.com",
            "name": "Ada",
            "is_active": "yes"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn serializes_all_four_fields() {
        let id = Uuid::new_v4();
        let user = User::new(id, "a@example.com", "Ada").unwrap();
        assert_eq!(
            serde_json::to_value(&user).unwrap(),
            json!({
                "id": id.to_string(),
                "email": "a@example.com",
                "name": "Ada",
                "is_active": true
            })
        );
    }
}

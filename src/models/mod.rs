/// # Health Status Response
///
/// Body of the liveness probe. Always `{"status":"ok"}`.
pub mod health;

/// # User Record
///
/// Validated user entity (`id`, `email`, `name`, `is_active`) and the raw
/// [`UserInput`](user::UserInput) it is built from.
pub mod user;

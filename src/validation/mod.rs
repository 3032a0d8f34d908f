/// Email address syntax checking.
///
/// Dot-atom local parts (RFC 5322) and internationalized host names
/// (RFC 6531). Quoted local parts, IP literals and special-use domains are
/// rejected. Length limits from RFC 5321 apply.
///
/// # Examples
/// ```
/// use user_management::validation::email::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(is_valid_email("Pelé@exämple.中国"));
/// assert!(!is_valid_email("invalid@ex_mple.com"));
/// ```
pub mod email;

/// Field-level parsers that turn raw user input into typed values.
///
/// Each parser reports a [`ValidationError`](crate::error::ValidationError)
/// naming the field it was given.
pub mod fields;

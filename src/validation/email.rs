use thiserror::Error;

/// Maximum length of a whole address (RFC 5321).
pub const MAX_EMAIL_LEN: usize = 254;
/// Maximum length of the local part (RFC 5321).
pub const MAX_LOCAL_PART_LEN: usize = 64;
const MAX_LABEL_LEN: usize = 63;

/// Special-use domains (RFC 6761 and friends) that never deliver mail.
/// Matches the domain itself and any of its subdomains.
const SPECIAL_USE_DOMAINS: &[&str] = &["arpa", "invalid", "local", "localhost", "onion", "test"];

/// Reason an address failed the syntax check.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailSyntaxError {
    #[error("the address is empty")]
    Empty,
    #[error("the address is longer than 254 characters")]
    TooLong,
    #[error("the address must contain an @ sign")]
    MissingAt,
    #[error("the part before the @ is longer than 64 characters")]
    LocalPartTooLong,
    #[error("the part before the @ is not valid")]
    InvalidLocalPart,
    #[error("the domain after the @ is not valid")]
    InvalidDomain,
    #[error("the domain after the @ is a special-use or reserved name")]
    SpecialUseDomain,
}

/// Checks an email address for deliverable-address syntax.
///
/// The local part must be a dot-atom (RFC 5322); quoted local parts are
/// rejected. The domain must be a dotted host name with internationalized
/// labels allowed. IP literals, special-use names such as `localhost` or
/// `*.test`, and all-numeric top-level labels are rejected.
///
/// # Examples
/// ```
/// use user_management::validation::email::{EmailSyntaxError, check_email};
///
/// assert!(check_email("user.name+tag@example.com").is_ok());
/// assert_eq!(check_email("not-an-email"), Err(EmailSyntaxError::MissingAt));
/// assert_eq!(check_email("a@x.test"), Err(EmailSyntaxError::SpecialUseDomain));
/// ```
pub fn check_email(email: &str) -> Result<(), EmailSyntaxError> {
    split_email(email).map(|_| ())
}

/// Checks `email` and returns it with the domain lowercased.
///
/// The local part is kept as given, since its case may be significant to the
/// receiving server.
pub fn normalize_email(email: &str) -> Result<String, EmailSyntaxError> {
    let (local_part, domain_part) = split_email(email)?;
    Ok(format!("{}@{}", local_part, domain_part.to_lowercase()))
}

/// Boolean form of [`check_email`].
pub fn is_valid_email(email: &str) -> bool {
    check_email(email).is_ok()
}

fn split_email(email: &str) -> Result<(&str, &str), EmailSyntaxError> {
    if email.is_empty() {
        return Err(EmailSyntaxError::Empty);
    }
    if email.len() > MAX_EMAIL_LEN {
        return Err(EmailSyntaxError::TooLong);
    }

    let (local_part, domain_part) = email.split_once('@').ok_or(EmailSyntaxError::MissingAt)?;

    if local_part.len() > MAX_LOCAL_PART_LEN {
        return Err(EmailSyntaxError::LocalPartTooLong);
    }
    if !is_valid_dot_atom(local_part, false) {
        return Err(EmailSyntaxError::InvalidLocalPart);
    }
    if !is_valid_domain_name(domain_part) {
        return Err(EmailSyntaxError::InvalidDomain);
    }
    if is_special_use(domain_part) {
        return Err(EmailSyntaxError::SpecialUseDomain);
    }
    Ok((local_part, domain_part))
}

/// `is_domain` applies label rules instead of atext rules.
fn is_valid_dot_atom(s: &str, is_domain: bool) -> bool {
    s.split('.').all(|part| {
        !part.is_empty()
            && part.chars().all(|c| match c {
                '-' => !is_domain || (!part.starts_with('-') && !part.ends_with('-')),
                c if is_domain => c.is_alphanumeric(),
                _ => c.is_alphanumeric() || "!#$%&'*+/=?^_`{|}~".contains(c),
            })
    })
}

/// Host names need at least two labels and a top-level label that is not
/// purely numeric, which also rules out bare IPv4 addresses.
fn is_valid_domain_name(domain: &str) -> bool {
    let Some((_, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !tld.chars().all(|c| c.is_ascii_digit())
        && domain
            .split('.')
            .all(|label| label.len() <= MAX_LABEL_LEN && is_valid_dot_atom(label, true))
}

fn is_special_use(domain: &str) -> bool {
    let domain = domain.to_lowercase();
    SPECIAL_USE_DOMAINS.iter().any(|special| {
        domain == *special
            || domain
                .strip_suffix(special)
                .is_some_and(|rest| rest.ends_with('.'))
    })
}

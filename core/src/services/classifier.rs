//! Contact identifier classifier
//!
//! Decides the delivery channel for an identifier. Phone numbers are matched
//! strictly (Uzbek mobile format, `+998` followed by nine digits); anything
//! that is not a phone number must be a well-formed email address.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::challenge::Channel;
use crate::errors::{AuthError, DomainResult};

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+998\d{9}$").expect("phone regex is valid")
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex is valid")
});

/// Classify an identifier into a delivery channel.
///
/// Phone format wins; the email check only runs when the phone pattern does
/// not match. The decision is returned as a value so callers thread it
/// through explicitly.
pub fn classify_contact(identifier: &str) -> DomainResult<Channel> {
    if PHONE_REGEX.is_match(identifier) {
        Ok(Channel::Phone)
    } else if EMAIL_REGEX.is_match(identifier) {
        Ok(Channel::Email)
    } else {
        Err(AuthError::InvalidContact {
            identifier: mask_identifier(identifier),
        }
        .into())
    }
}

/// Mask an identifier for logs and error messages.
///
/// Keeps a short prefix and suffix; everything in between becomes `****`.
pub fn mask_identifier(identifier: &str) -> String {
    let chars: Vec<char> = identifier.chars().collect();
    if chars.len() >= 7 {
        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 2..].iter().collect();
        format!("{}****{}", prefix, suffix)
    } else {
        "****".to_string()
    }
}

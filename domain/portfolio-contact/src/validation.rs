use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Loose `local@domain.tld` shape shared by the contact form and the relay.
pub static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Minimum message length, in UTF-16 code units as browsers count it.
pub const MIN_MESSAGE_UNITS: usize = 10;

pub fn message_units(message: &str) -> usize {
    message.encode_utf16().count()
}

pub(crate) fn validate_message_length(message: &str) -> Result<(), validator::ValidationError> {
    if message_units(message) < MIN_MESSAGE_UNITS {
        return Err(validator::ValidationError::new("message_too_short"));
    }
    Ok(())
}

/// Reasons the relay turns a submission away. The display strings are sent
/// back to the caller verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message must be at least 10 characters")]
    MessageTooShort,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_addresses() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last+tag@sub.example.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "",
            "ada",
            "ada@",
            "@example.com",
            "ada@example",
            "ada example@example.com",
            "ada@@example.com",
            "ada@example .com",
            " ada@example.com",
        ] {
            assert!(!is_valid_email(email), "{email:?} should be rejected");
        }
    }

    #[test]
    fn test_message_length_counts_utf16_units() {
        assert_eq!(message_units("1234567890"), 10);
        assert_eq!(message_units("\u{1F600}"), 2);
        assert!(validate_message_length("\u{1F600}".repeat(5).as_str()).is_ok());
        assert!(validate_message_length("\u{1F600}".repeat(4).as_str()).is_err());
        assert!(validate_message_length("123456789").is_err());
    }

    #[test]
    fn test_messages_are_caller_facing() {
        assert_eq!(
            ValidationError::MissingFields.to_string(),
            "All fields are required"
        );
        assert_eq!(
            ValidationError::InvalidEmail.to_string(),
            "Invalid email address"
        );
        assert_eq!(
            ValidationError::MessageTooShort.to_string(),
            "Message must be at least 10 characters"
        );
    }
}

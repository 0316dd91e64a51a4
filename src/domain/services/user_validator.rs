use thiserror::Error;

use crate::domain::NewUser;

/// Only addresses in this domain are accepted.
pub const EMAIL_DOMAIN_SUFFIX: &str = "@gmail.com";

/// The first rule a candidate user broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Email cannot be empty.")]
    EmptyEmail,

    #[error("Wrong Email format.")]
    WrongEmailFormat,

    #[error("mail cannot be empty")]
    EmptyLocalPart,
}

/// Checks a candidate against the user rules, stopping at the first failure.
///
/// Blank checks trim surrounding whitespace; the suffix and local-part checks
/// look at the email exactly as supplied.
pub fn validate_user(candidate: &NewUser) -> Result<(), ValidationError> {
    if candidate.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if candidate.email.trim().is_empty() {
        return Err(ValidationError::EmptyEmail);
    }

    let local_part = candidate
        .email
        .strip_suffix(EMAIL_DOMAIN_SUFFIX)
        .ok_or(ValidationError::WrongEmailFormat)?;

    if local_part.is_empty() {
        return Err(ValidationError::EmptyLocalPart);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(name: &str, email: &str) -> Result<(), ValidationError> {
        validate_user(&NewUser::new(name, email))
    }

    #[test]
    fn test_valid_user_passes() {
        assert_eq!(check("abc", "abc@gmail.com"), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(check("", "abc@gmail.com"), Err(ValidationError::EmptyName));
        assert_eq!(check("   \t", "abc@gmail.com"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_name_error_reported_before_email_error() {
        assert_eq!(check("", ""), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_blank_email_rejected() {
        assert_eq!(check("abc", ""), Err(ValidationError::EmptyEmail));
        assert_eq!(check("abc", "  "), Err(ValidationError::EmptyEmail));
    }

    #[test]
    fn test_wrong_domain_rejected() {
        assert_eq!(check("abc", "abc"), Err(ValidationError::WrongEmailFormat));
        assert_eq!(
            check("abc", "abc@yahoo.com"),
            Err(ValidationError::WrongEmailFormat)
        );
    }

    #[test]
    fn test_suffix_check_is_not_trimmed() {
        assert_eq!(
            check("abc", "abc@gmail.com "),
            Err(ValidationError::WrongEmailFormat)
        );
    }

    #[test]
    fn test_empty_local_part_rejected() {
        assert_eq!(
            check("abc", "@gmail.com"),
            Err(ValidationError::EmptyLocalPart)
        );
    }

    #[test]
    fn test_whitespace_local_part_accepted() {
        assert_eq!(check("abc", " @gmail.com"), Ok(()));
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty.");
        assert_eq!(ValidationError::EmptyEmail.to_string(), "Email cannot be empty.");
        assert_eq!(ValidationError::WrongEmailFormat.to_string(), "Wrong Email format.");
    }
}

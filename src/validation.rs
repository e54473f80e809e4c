use std::sync::OnceLock;

use regex::Regex;

use crate::errors::AppError;

/// NI prefixes that are never allocated.
const BANNED_NI_PREFIXES: [&str; 7] = ["BG", "GB", "NK", "KN", "TN", "NT", "ZZ"];

fn ni_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // AA 999999 A: restricted letter classes, six digits with interior
    // whitespace tolerated, suffix A-D or a space. The unallocated-prefix
    // rule is checked separately since the regex engine has no lookahead.
    RE.get_or_init(|| {
        Regex::new(r"^[A-CEGHJ-PR-TW-Z][A-CEGHJ-NPR-TW-Z](?:\s*\d\s*){6}[A-D\s]$")
            .expect("NI number pattern is valid")
    })
}

fn phone_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\+?1?\d{9,15}$").expect("phone pattern is valid"))
}

fn twitter_shape() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\w{1,15}$").expect("twitter pattern is valid"))
}

pub fn validate_ni_number(field: &str, value: &str) -> Result<(), AppError> {
    if !ni_shape().is_match(value) {
        return Err(AppError::Validation(format!(
            "{}: must be in the format 'AA999999A', restrictions to characters apply",
            field
        )));
    }
    let prefix: String = value.chars().take(2).collect();
    if BANNED_NI_PREFIXES.contains(&prefix.as_str()) {
        return Err(AppError::Validation(format!(
            "{}: prefix {} is not a valid NI number prefix",
            field, prefix
        )));
    }
    Ok(())
}

pub fn validate_phone(field: &str, value: &str) -> Result<(), AppError> {
    if !phone_shape().is_match(value) {
        return Err(AppError::Validation(format!(
            "{}: not a valid phone number",
            field
        )));
    }
    Ok(())
}

/// Optional fields are only validated when a non-empty value was supplied.
pub fn validate_optional_phone(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_empty() => validate_phone(field, v),
        _ => Ok(()),
    }
}

pub fn validate_twitter_handle(field: &str, value: &str) -> Result<(), AppError> {
    if !twitter_shape().is_match(value) {
        return Err(AppError::Validation(format!(
            "{}: not a valid username, please remove @ and use max 15 characters",
            field
        )));
    }
    Ok(())
}

pub fn validate_optional_twitter_handle(field: &str, value: Option<&str>) -> Result<(), AppError> {
    match value {
        Some(v) if !v.is_empty() => validate_twitter_handle(field, v),
        _ => Ok(()),
    }
}

pub fn validate_email(field: &str, value: &str) -> Result<(), AppError> {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    let valid = !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if !valid {
        return Err(AppError::Validation(format!(
            "{}: not a valid email address",
            field
        )));
    }
    Ok(())
}

pub fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_ni_numbers() {
        for ni in ["AB123456C", "CE654321A", "JH111111D", "AB123456 "] {
            assert!(validate_ni_number("ni_number", ni).is_ok(), "{} should pass", ni);
        }
    }

    #[test]
    fn rejects_banned_ni_prefixes() {
        for ni in ["BG123456A", "GB123456A", "NK123456A", "ZZ123456A"] {
            assert!(validate_ni_number("ni_number", ni).is_err(), "{} should fail", ni);
        }
    }

    #[test]
    fn rejects_malformed_ni_numbers() {
        // D is not allowed as a first letter, Q not in either class,
        // wrong digit counts, bad suffix letter.
        for ni in ["DA123456A", "QQ123456A", "AB12345C", "AB1234567C", "AB123456E", ""] {
            assert!(validate_ni_number("ni_number", ni).is_err(), "{} should fail", ni);
        }
    }

    #[test]
    fn ni_number_tolerates_interior_spacing() {
        assert!(validate_ni_number("ni_number", "AB 12 34 56 C").is_ok());
    }

    #[test]
    fn phone_numbers() {
        assert!(validate_phone("mob_phone", "+447700900123").is_ok());
        assert!(validate_phone("mob_phone", "07700900123").is_ok());
        assert!(validate_phone("mob_phone", "12345").is_err());
        assert!(validate_phone("mob_phone", "not-a-phone").is_err());
        // absent or empty optional values pass
        assert!(validate_optional_phone("home_phone", None).is_ok());
        assert!(validate_optional_phone("home_phone", Some("")).is_ok());
        assert!(validate_optional_phone("home_phone", Some("999")).is_err());
    }

    #[test]
    fn twitter_handles() {
        assert!(validate_twitter_handle("twitter_username", "jane_doe").is_ok());
        assert!(validate_twitter_handle("twitter_username", "@jane").is_err());
        assert!(
            validate_twitter_handle("twitter_username", "a_very_long_handle_x").is_err(),
            "over 15 characters should fail"
        );
    }

    #[test]
    fn emails() {
        assert!(validate_email("email", "fa@example.com").is_ok());
        assert!(validate_email("email", "no-at-sign").is_err());
        assert!(validate_email("email", "@example.com").is_err());
        assert!(validate_email("email", "fa@nodot").is_err());
        assert!(validate_email("email", "fa@.com").is_err());
    }

    #[test]
    fn required_fields() {
        assert!(require("first_name", "Jane").is_ok());
        assert!(require("first_name", "   ").is_err());
    }
}

use std::fmt;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::ValidationError;

use crate::constants::{
    CRM_COUPON_FIELD, CRM_DISCOUNT_FIELD, DISCOUNT_RANGE, EMAIL_REQUIRED_ERROR, FULL_NAME_REQUIRED_ERROR,
    INVALID_DISCOUNT_ERROR, INVALID_EMAIL_ERROR, INVALID_FULL_NAME_ERROR, INVALID_MOBILE_ERROR,
    MIN_MOBILE_DIGITS, MOBILE_REQUIRED_ERROR, SUBMIT_FAILED_ERROR,
};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const COUPON_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::new("email_required"));
    }
    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationError::new("invalid_email_format"));
    }
    Ok(())
}

pub fn validate_full_name(full_name: &str) -> Result<(), ValidationError> {
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(ValidationError::new("full_name_required"));
    }
    if full_name.split_whitespace().count() < 2 {
        return Err(ValidationError::new("invalid_full_name"));
    }
    Ok(())
}

pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if mobile.trim().is_empty() {
        return Err(ValidationError::new("mobile_required"));
    }
    let cleaned: String = mobile
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '+' | '(' | ')'))
        .collect();
    if cleaned.len() < MIN_MOBILE_DIGITS || !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("invalid_mobile"));
    }
    Ok(())
}

/// Whole percent inside [`DISCOUNT_RANGE`], digits only.
pub fn validate_discount(discount: &str) -> Result<(), ValidationError> {
    match discount.parse::<u32>() {
        Ok(value) if DISCOUNT_RANGE.contains(&value) && discount.chars().all(|c| c.is_ascii_digit()) => Ok(()),
        _ => Err(ValidationError::new("invalid_discount")),
    }
}

pub fn error_message(error: &ValidationError) -> &'static str {
    match &*error.code {
        "email_required" => EMAIL_REQUIRED_ERROR,
        "invalid_email_format" => INVALID_EMAIL_ERROR,
        "full_name_required" => FULL_NAME_REQUIRED_ERROR,
        "invalid_full_name" => INVALID_FULL_NAME_ERROR,
        "mobile_required" => MOBILE_REQUIRED_ERROR,
        "invalid_mobile" => INVALID_MOBILE_ERROR,
        _ => INVALID_DISCOUNT_ERROR,
    }
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats typed digits as `(123) 456-7890`, dropping anything past ten digits.
pub fn format_phone_number(input: &str) -> String {
    let digits = digits_only(input);
    match digits.len() {
        0..=3 => digits,
        4..=6 => format!("({}) {}", &digits[..3], &digits[3..]),
        _ => {
            let end = digits.len().min(10);
            format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..end])
        }
    }
}

pub fn first_name(full_name: &str) -> String {
    let trimmed = full_name.trim();
    trimmed
        .split_whitespace()
        .next()
        .unwrap_or(trimmed)
        .to_string()
}

/// `{discount}{1000..=9999}{four base-36 characters}`, e.g. `15` -> `154821K9QZ`.
pub fn generate_coupon_code<R: Rng + ?Sized>(discount: &str, rng: &mut R) -> String {
    let number: u32 = rng.gen_range(1000..=9999);
    let suffix: String = (0..4)
        .map(|_| COUPON_ALPHABET[rng.gen_range(0..COUPON_ALPHABET.len())] as char)
        .collect();
    format!("{}{}{}", discount, number, suffix)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Email,
    FullName,
    Mobile,
}

/// Per-field messages shown under the lead form inputs.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LeadFieldErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

impl LeadFieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.full_name.is_none() && self.mobile.is_none() && self.discount.is_none()
    }

    pub fn get(&self, field: LeadField) -> Option<&str> {
        match field {
            LeadField::Email => self.email.as_deref(),
            LeadField::FullName => self.full_name.as_deref(),
            LeadField::Mobile => self.mobile.as_deref(),
        }
    }

    pub fn clear(&mut self, field: LeadField) {
        match field {
            LeadField::Email => self.email = None,
            LeadField::FullName => self.full_name = None,
            LeadField::Mobile => self.mobile = None,
        }
    }
}

impl fmt::Display for LeadFieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = [&self.email, &self.full_name, &self.mobile, &self.discount]
            .into_iter()
            .filter_map(|m| m.as_deref())
            .collect();
        write!(f, "{}", messages.join("; "))
    }
}

/// Body of `POST /api/leads`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct LeadSubmission {
    pub email: String,
    pub full_name: String,
    pub mobile: String,
    pub discount: String,
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<(), LeadFieldErrors> {
        let message = |result: Result<(), ValidationError>| result.err().map(|e| error_message(&e).to_string());

        let errors = LeadFieldErrors {
            email: message(validate_email(&self.email)),
            full_name: message(validate_full_name(&self.full_name)),
            mobile: message(validate_mobile(&self.mobile)),
            discount: message(validate_discount(&self.discount)),
        };

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeadResponse {
    pub coupon_code: String,
    pub discount: String,
}

/// Error body returned by `POST /api/leads`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LeadErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<LeadFieldErrors>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CrmCustomField {
    pub id: String,
    pub value: String,
}

/// Contact payload accepted by the CRM contacts endpoint.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CrmContactRequest {
    pub location_id: String,
    pub first_name: String,
    pub email: String,
    pub phone: String,
    pub custom_fields: Vec<CrmCustomField>,
}

impl CrmContactRequest {
    pub fn from_submission(submission: &LeadSubmission, location_id: &str, coupon_code: &str) -> Self {
        Self {
            location_id: location_id.to_string(),
            first_name: first_name(&submission.full_name),
            email: submission.email.trim().to_string(),
            phone: digits_only(&submission.mobile),
            custom_fields: vec![
                CrmCustomField {
                    id: CRM_COUPON_FIELD.to_string(),
                    value: coupon_code.to_string(),
                },
                CrmCustomField {
                    id: CRM_DISCOUNT_FIELD.to_string(),
                    value: format!("{}%", submission.discount),
                },
            ],
        }
    }
}

/// User-facing message for a failed CRM call.
pub fn crm_error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .unwrap_or(SUBMIT_FAILED_ERROR)
            .to_string(),
        Err(_) => format!("Server error: {}", status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn submission() -> LeadSubmission {
        LeadSubmission {
            email: " jane@example.com ".to_string(),
            full_name: "Jane  Doe".to_string(),
            mobile: "(555) 123-4567".to_string(),
            discount: "15".to_string(),
        }
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("a@b.co").is_ok());
        assert_eq!(validate_email("  ").unwrap_err().code, "email_required");
        assert_eq!(validate_email("a@b").unwrap_err().code, "invalid_email_format");
        assert_eq!(validate_email("a b@c.de").unwrap_err().code, "invalid_email_format");
    }

    #[test]
    fn test_full_name_needs_two_words() {
        assert!(validate_full_name("Jane Doe").is_ok());
        assert_eq!(validate_full_name("").unwrap_err().code, "full_name_required");
        assert_eq!(validate_full_name(" Jane ").unwrap_err().code, "invalid_full_name");
    }

    #[test]
    fn test_mobile_validation() {
        assert!(validate_mobile("(555) 123-4567").is_ok());
        assert!(validate_mobile("+1 555 123 4567").is_ok());
        assert_eq!(validate_mobile("").unwrap_err().code, "mobile_required");
        assert_eq!(validate_mobile("555-1234").unwrap_err().code, "invalid_mobile");
        assert_eq!(validate_mobile("555.123.45678").unwrap_err().code, "invalid_mobile");
    }

    #[test]
    fn test_discount_validation() {
        assert!(validate_discount("5").is_ok());
        assert!(validate_discount("100").is_ok());
        assert!(validate_discount("0").is_err());
        assert!(validate_discount("101").is_err());
        assert!(validate_discount("150").is_err());
        assert!(validate_discount("+5").is_err());
        assert!(validate_discount("abc").is_err());
    }

    #[test]
    fn test_phone_formatting() {
        assert_eq!(format_phone_number(""), "");
        assert_eq!(format_phone_number("555"), "555");
        assert_eq!(format_phone_number("5551"), "(555) 1");
        assert_eq!(format_phone_number("555123"), "(555) 123");
        assert_eq!(format_phone_number("5551234"), "(555) 123-4");
        assert_eq!(format_phone_number("(555) 123-45678901"), "(555) 123-4567");
    }

    #[test]
    fn test_submission_collects_field_errors() {
        assert!(submission().validate().is_ok());

        let errors = LeadSubmission {
            email: "nope".to_string(),
            full_name: "Jane".to_string(),
            ..submission()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get(LeadField::Email), Some(INVALID_EMAIL_ERROR));
        assert_eq!(errors.get(LeadField::FullName), Some(INVALID_FULL_NAME_ERROR));
        assert_eq!(errors.get(LeadField::Mobile), None);

        let mut errors = errors;
        errors.clear(LeadField::Email);
        errors.clear(LeadField::FullName);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_out_of_range_discount_is_reported() {
        let errors = LeadSubmission {
            discount: "150".to_string(),
            ..submission()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.discount.as_deref(), Some(INVALID_DISCOUNT_ERROR));
        assert_eq!(errors.to_string(), INVALID_DISCOUNT_ERROR);
    }

    #[test]
    fn test_coupon_code_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let code = generate_coupon_code("15", &mut rng);
            assert_eq!(code.len(), 10);
            assert!(code.starts_with("15"));
            let number: u32 = code[2..6].parse().unwrap();
            assert!((1000..=9999).contains(&number));
            assert!(code[6..].chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_crm_payload() {
        let request = CrmContactRequest::from_submission(&submission(), "loc-1", "151234ABCD");
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["locationId"], "loc-1");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["email"], "jane@example.com");
        assert_eq!(json["phone"], "5551234567");
        assert_eq!(json["customFields"][0]["id"], CRM_COUPON_FIELD);
        assert_eq!(json["customFields"][0]["value"], "151234ABCD");
        assert_eq!(json["customFields"][1]["value"], "15%");
    }

    #[test]
    fn test_crm_error_message() {
        assert_eq!(crm_error_message(422, r#"{"message":"Duplicate contact"}"#), "Duplicate contact");
        assert_eq!(crm_error_message(400, r#"{"error":"x"}"#), SUBMIT_FAILED_ERROR);
        assert_eq!(crm_error_message(503, "<html>down</html>"), "Server error: 503");
    }
}

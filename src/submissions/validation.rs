//! Form field validation

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
pub const PHONE_PATTERN: &str = r"^\+?[\d\s\-()]+$";

pub const MIN_NAME_LEN: usize = 2;
pub const MIN_MESSAGE_LEN: usize = 5;

/// Accepted values for the volunteer "area of interest" field
pub const INTEREST_AREAS: &[&str] = &["education", "career", "social", "research", "general"];

/// One failing field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every field that failed validation, in form order
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .fields.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f.field == field)
    }
}

/// Collects field errors while a form is checked
#[derive(Debug, Default)]
pub struct Report {
    fields: Vec<FieldError>,
}

impl Report {
    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields.push(FieldError::new(field, message));
    }

    pub fn check(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.push(field, message);
        }
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                fields: self.fields,
            })
        }
    }
}

/// Compiled field patterns
#[derive(Debug, Clone)]
pub struct Validator {
    email: Regex,
    phone: Regex,
}

impl Validator {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    pub fn is_email(&self, value: &str) -> bool {
        self.email.is_match(value.trim())
    }

    pub fn is_phone(&self, value: &str) -> bool {
        self.phone.is_match(value.trim())
    }

    pub fn name(&self, report: &mut Report, value: &str) {
        report.check(
            value.trim().chars().count() >= MIN_NAME_LEN,
            "name",
            format!("Name must be at least {} characters", MIN_NAME_LEN),
        );
    }

    pub fn email(&self, report: &mut Report, value: &str) {
        report.check(
            self.is_email(value),
            "email",
            "Please enter a valid email address",
        );
    }

    /// Phone is optional; blank passes
    pub fn phone(&self, report: &mut Report, value: Option<&str>) {
        if let Some(phone) = value.filter(|p| !p.trim().is_empty()) {
            report.check(
                self.is_phone(phone),
                "phone",
                "Please enter a valid phone number",
            );
        }
    }

    pub fn message(&self, report: &mut Report, value: &str) {
        report.check(
            value.trim().chars().count() >= MIN_MESSAGE_LEN,
            "message",
            format!("Message must be at least {} characters", MIN_MESSAGE_LEN),
        );
    }

    pub fn interest(&self, report: &mut Report, value: &str) {
        report.check(
            INTEREST_AREAS.contains(&value),
            "interest",
            "Please select an area of interest",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern() {
        let v = Validator::new().unwrap();

        assert!(v.is_email("amina@tfdn.org"));
        assert!(v.is_email("  a@b.co "));
        assert!(!v.is_email("amina@tfdn"));
        assert!(!v.is_email("amina tfdn.org"));
        assert!(!v.is_email("a b@c.d"));
        assert!(!v.is_email(""));
    }

    #[test]
    fn test_phone_pattern() {
        let v = Validator::new().unwrap();

        assert!(v.is_phone("+254 700 000 000"));
        assert!(v.is_phone("(020) 123-4567"));
        assert!(!v.is_phone("call me"));
        assert!(!v.is_phone("++254"));
    }

    #[test]
    fn test_report_collects_all_fields() {
        let v = Validator::new().unwrap();
        let mut report = Report::default();

        v.name(&mut report, "A");
        v.email(&mut report, "nope");
        v.phone(&mut report, Some("abc"));
        v.message(&mut report, "hi");

        let err = report.finish().unwrap_err();
        let fields: Vec<&str> = err.fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "email", "phone", "message"]);
        assert!(err.to_string().contains("email: Please enter a valid email address"));
    }

    #[test]
    fn test_blank_phone_is_accepted() {
        let v = Validator::new().unwrap();
        let mut report = Report::default();

        v.phone(&mut report, Some("   "));
        v.phone(&mut report, None);

        assert!(report.finish().is_ok());
    }

    #[test]
    fn test_interest_areas() {
        let v = Validator::new().unwrap();

        let mut report = Report::default();
        v.interest(&mut report, "research");
        assert!(report.finish().is_ok());

        let mut report = Report::default();
        v.interest(&mut report, "");
        assert!(report.finish().unwrap_err().has_field("interest"));
    }
}

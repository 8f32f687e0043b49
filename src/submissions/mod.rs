//! Mock form submissions
//!
//! Contact, volunteer and newsletter forms. Each submission is validated,
//! logged and acknowledged after a short artificial delay. Nothing is stored.

pub mod validation;

pub use validation::{FieldError, ValidationError, Validator, INTEREST_AREAS};

use std::time::Duration;

use serde::{Deserialize, Serialize};

use validation::Report;

/// Artificial delays per submission, in milliseconds
pub mod delays {
    pub const CONTACT: u64 = 500;
    pub const VOLUNTEER: u64 = 500;
    pub const NEWSLETTER: u64 = 400;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolunteerForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub interest: String,
    #[serde(default)]
    pub skills: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

/// Acknowledgement returned for an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormAck {
    pub success: bool,
    pub message: String,
}

impl FormAck {
    fn accepted(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
        }
    }
}

/// Validates and acknowledges form submissions
#[derive(Debug, Clone)]
pub struct Submissions {
    validator: Validator,
    simulate_latency: bool,
}

impl Submissions {
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            simulate_latency: true,
        }
    }

    /// Builder method: enable or disable simulated latency
    pub fn with_latency(mut self, enabled: bool) -> Self {
        self.simulate_latency = enabled;
        self
    }

    async fn delay(&self, ms: u64) {
        if self.simulate_latency {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    pub fn check_contact(&self, form: &ContactForm) -> Result<(), ValidationError> {
        let mut report = Report::default();
        self.validator.name(&mut report, &form.name);
        self.validator.email(&mut report, &form.email);
        self.validator.message(&mut report, &form.message);
        report.finish()
    }

    pub fn check_volunteer(&self, form: &VolunteerForm) -> Result<(), ValidationError> {
        let mut report = Report::default();
        self.validator.name(&mut report, &form.name);
        self.validator.email(&mut report, &form.email);
        self.validator.phone(&mut report, form.phone.as_deref());
        self.validator.interest(&mut report, &form.interest);
        self.validator.message(&mut report, &form.message);
        report.finish()
    }

    pub fn check_newsletter(&self, form: &NewsletterSignup) -> Result<(), ValidationError> {
        let mut report = Report::default();
        self.validator.email(&mut report, &form.email);
        report.finish()
    }

    pub async fn submit_contact(&self, form: &ContactForm) -> Result<FormAck, ValidationError> {
        self.check_contact(form)?;
        self.delay(delays::CONTACT).await;

        tracing::info!(
            name = %form.name,
            email = %form.email,
            message_len = form.message.len(),
            "Contact form submitted"
        );

        Ok(FormAck::accepted("Thank you for your message!"))
    }

    pub async fn submit_volunteer(&self, form: &VolunteerForm) -> Result<FormAck, ValidationError> {
        self.check_volunteer(form)?;
        self.delay(delays::VOLUNTEER).await;

        tracing::info!(
            name = %form.name,
            email = %form.email,
            interest = %form.interest,
            has_phone = form.phone.is_some(),
            "Volunteer form submitted"
        );

        Ok(FormAck::accepted("Thank you for volunteering!"))
    }

    pub async fn subscribe_newsletter(
        &self,
        form: &NewsletterSignup,
    ) -> Result<FormAck, ValidationError> {
        self.check_newsletter(form)?;
        self.delay(delays::NEWSLETTER).await;

        tracing::info!(email = %form.email, "Newsletter subscription");

        Ok(FormAck::accepted("Successfully subscribed!"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desk() -> Submissions {
        Submissions::new(Validator::new().unwrap()).with_latency(false)
    }

    fn volunteer() -> VolunteerForm {
        VolunteerForm {
            name: "Wanjiru".to_string(),
            email: "wanjiru@example.com".to_string(),
            phone: Some("+254 711 222 333".to_string()),
            interest: "career".to_string(),
            skills: None,
            message: "I would like to mentor young professionals.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_contact_ack() {
        let form = ContactForm {
            name: "Otieno".to_string(),
            email: "otieno@example.com".to_string(),
            message: "Hello there".to_string(),
        };

        let ack = desk().submit_contact(&form).await.unwrap();
        assert!(ack.success);
        assert_eq!(ack.message, "Thank you for your message!");
    }

    #[tokio::test]
    async fn test_contact_rejected() {
        let form = ContactForm {
            name: "O".to_string(),
            email: "otieno".to_string(),
            message: "ok".to_string(),
        };

        let err = desk().submit_contact(&form).await.unwrap_err();
        assert_eq!(err.fields.len(), 3);
    }

    #[tokio::test]
    async fn test_volunteer() {
        let desk = desk();

        let ack = desk.submit_volunteer(&volunteer()).await.unwrap();
        assert_eq!(ack.message, "Thank you for volunteering!");

        let mut bad = volunteer();
        bad.phone = Some("not a phone".to_string());
        bad.interest = "sports".to_string();
        let err = desk.submit_volunteer(&bad).await.unwrap_err();
        assert!(err.has_field("phone"));
        assert!(err.has_field("interest"));
        assert!(!err.has_field("email"));
    }

    #[tokio::test]
    async fn test_newsletter() {
        let desk = desk();

        let ack = desk
            .subscribe_newsletter(&NewsletterSignup {
                email: "reader@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(ack.message, "Successfully subscribed!");

        assert!(desk
            .subscribe_newsletter(&NewsletterSignup::default())
            .await
            .is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_newsletter_delay() {
        let desk = Submissions::new(Validator::new().unwrap());
        let started = tokio::time::Instant::now();

        desk.subscribe_newsletter(&NewsletterSignup {
            email: "reader@example.com".to_string(),
        })
        .await
        .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(delays::NEWSLETTER));
    }

    #[test]
    fn test_volunteer_optional_fields_deserialize() {
        let form: VolunteerForm = serde_json::from_str(
            r#"{"name":"Amani","email":"a@b.co","interest":"general","message":"Happy to help"}"#,
        )
        .unwrap();

        assert!(form.phone.is_none());
        assert!(desk().check_volunteer(&form).is_ok());
    }
}

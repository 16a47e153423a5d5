//! Client-side contact and newsletter forms.
//!
//! Neither form has a delivery endpoint. A valid submission is turned into a
//! serializable payload and logged; nothing leaves the browser.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Placeholder shown by the subject dropdown until a subject is chosen.
pub const SUBJECT_PLACEHOLDER: &str = "Select one...";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Display, EnumIter, EnumString)]
pub enum Subject {
    #[strum(serialize = "General Enquiry")]
    GeneralEnquiry,
    #[strum(serialize = "Investor Relations")]
    InvestorRelations,
    #[strum(serialize = "Career Opportunities")]
    CareerOpportunities,
    #[strum(serialize = "Partnerships & Collaborations")]
    Partnerships,
    #[strum(serialize = "Media & Press")]
    MediaAndPress,
    #[strum(serialize = "Legal & Privacy")]
    LegalAndPrivacy,
    #[strum(serialize = "Feedback or Suggestions")]
    Feedback,
    #[strum(serialize = "Technical Support")]
    TechnicalSupport,
    #[strum(serialize = "Other")]
    Other,
}

impl Subject {
    pub fn all() -> Vec<Subject> {
        Subject::iter().collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Please enter your name.")]
    MissingName,
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please choose a subject.")]
    MissingSubject,
    #[error("Please write a message.")]
    MissingMessage,
}

/// Which input a [`FormError`] belongs to, for inline messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl FormError {
    pub fn field(&self) -> Field {
        match self {
            FormError::MissingName => Field::Name,
            FormError::MissingEmail | FormError::InvalidEmail => Field::Email,
            FormError::MissingSubject => Field::Subject,
            FormError::MissingMessage => Field::Message,
        }
    }
}

/// Loose structural email check: one `@`, a non-empty local part, and a
/// dotted domain without whitespace.
pub fn looks_like_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty() && !domain.starts_with('.'),
        None => false,
    }
}

fn check_email(email: &str) -> Result<(), FormError> {
    if email.trim().is_empty() {
        Err(FormError::MissingEmail)
    } else if !looks_like_email(email) {
        Err(FormError::InvalidEmail)
    } else {
        Ok(())
    }
}

/// In-progress contact form values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

/// A contact request that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

impl ContactForm {
    /// Text for the dropdown button.
    pub fn subject_label(&self) -> String {
        self.subject
            .map(|s| s.to_string())
            .unwrap_or_else(|| SUBJECT_PLACEHOLDER.to_string())
    }

    /// Every problem with the form, in field order.
    pub fn errors(&self) -> Vec<FormError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FormError::MissingName);
        }
        if let Err(e) = check_email(&self.email) {
            errors.push(e);
        }
        if self.subject.is_none() {
            errors.push(FormError::MissingSubject);
        }
        if self.message.trim().is_empty() {
            errors.push(FormError::MissingMessage);
        }
        errors
    }

    /// Validates the form; the first failing field wins.
    pub fn validate(&self) -> Result<ContactSubmission, FormError> {
        if let Some(first) = self.errors().into_iter().next() {
            return Err(first);
        }
        let subject = self.subject.ok_or(FormError::MissingSubject)?;
        Ok(ContactSubmission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject,
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl NewsletterSignup {
    pub fn parse(email: &str) -> Result<Self, FormError> {
        check_email(email)?;
        Ok(Self {
            email: email.trim().to_string(),
        })
    }
}

/// Accepts a validated submission. No endpoint is configured, so the payload
/// is only logged.
pub fn submit_contact(submission: &ContactSubmission) {
    match serde_json::to_string(submission) {
        Ok(json) => dioxus_logger::tracing::info!("contact request accepted (no delivery configured): {json}"),
        Err(e) => dioxus_logger::tracing::warn!("contact request could not be serialized: {e}"),
    }
}

pub fn submit_newsletter(signup: &NewsletterSignup) {
    match serde_json::to_string(signup) {
        Ok(json) => dioxus_logger::tracing::info!("newsletter signup accepted (no delivery configured): {json}"),
        Err(e) => dioxus_logger::tracing::warn!("newsletter signup could not be serialized: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.ca".to_string(),
            subject: Some(Subject::MediaAndPress),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn nine_subjects_in_menu_order() {
        let labels: Vec<String> = Subject::all().iter().map(|s| s.to_string()).collect();
        assert_eq!(
            labels,
            [
                "General Enquiry",
                "Investor Relations",
                "Career Opportunities",
                "Partnerships & Collaborations",
                "Media & Press",
                "Legal & Privacy",
                "Feedback or Suggestions",
                "Technical Support",
                "Other",
            ]
        );
    }

    #[test]
    fn subjects_parse_from_their_labels() {
        assert_eq!(Subject::from_str("Legal & Privacy"), Ok(Subject::LegalAndPrivacy));
        assert!(Subject::from_str(SUBJECT_PLACEHOLDER).is_err());
    }

    #[test]
    fn complete_form_is_accepted() {
        let submission = filled().validate().unwrap();
        assert_eq!(submission.subject, Subject::MediaAndPress);
        assert_eq!(submission.name, "Ada Lovelace");
    }

    #[test]
    fn each_empty_required_field_blocks_submission() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingName));

        let mut form = filled();
        form.email.clear();
        assert_eq!(form.validate(), Err(FormError::MissingEmail));

        let mut form = filled();
        form.subject = None;
        assert_eq!(form.validate(), Err(FormError::MissingSubject));

        let mut form = filled();
        form.message.clear();
        assert_eq!(form.validate(), Err(FormError::MissingMessage));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let fields: Vec<Field> = ContactForm::default().errors().iter().map(|e| e.field()).collect();
        assert_eq!(fields, [Field::Name, Field::Email, Field::Subject, Field::Message]);
    }

    #[test]
    fn placeholder_until_subject_chosen() {
        let mut form = ContactForm::default();
        assert_eq!(form.subject_label(), SUBJECT_PLACEHOLDER);
        form.subject = Some(Subject::Other);
        assert_eq!(form.subject_label(), "Other");
    }

    #[test]
    fn email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email(" first.last@sub.example.ca "));
        assert!(!looks_like_email("no-at-sign.ca"));
        assert!(!looks_like_email("@example.ca"));
        assert!(!looks_like_email("a@example"));
        assert!(!looks_like_email("a@.ca"));
        assert!(!looks_like_email("a@b@c.ca"));
        assert!(!looks_like_email("a b@c.ca"));
    }

    #[test]
    fn newsletter_requires_an_email() {
        assert_eq!(NewsletterSignup::parse(""), Err(FormError::MissingEmail));
        assert_eq!(NewsletterSignup::parse("nope"), Err(FormError::InvalidEmail));
        assert_eq!(
            NewsletterSignup::parse("reader@example.ca").map(|s| s.email),
            Ok("reader@example.ca".to_string())
        );
    }
}

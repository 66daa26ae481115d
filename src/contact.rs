use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::Profile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

/// What a visitor sends through the contact form. Nothing transmits it yet;
/// the field names are the payload a backend endpoint would accept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Current contents of the contact form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    fields: ContactSubmission,
}

impl ContactDraft {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields == ContactSubmission::default()
    }

    pub fn is_complete(&self) -> bool {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .all(|field| !self.get(field).trim().is_empty())
    }

    /// Takes the entered values, leaving every field blank, and returns them
    /// with the acknowledgement to show the visitor.
    pub fn submit(&mut self, profile: &Profile) -> (ContactSubmission, Acknowledgement) {
        let submission = std::mem::take(&mut self.fields);
        log::debug!("contact form submitted, {} chars", submission.message.len());
        (
            submission,
            Acknowledgement(format!(
                "Thanks for reaching out, {} will get back to you soon!",
                profile.first_name
            )),
        )
    }
}

/// Message shown to the visitor in place of a real server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Acknowledgement(String);

impl Acknowledgement {
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn resume_acknowledgement(profile: &Profile) -> Acknowledgement {
    Acknowledgement(format!(
        "{} download started! (Simulated)",
        profile.resume_file
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROFILE;

    fn filled() -> ContactDraft {
        let mut draft = ContactDraft::default();
        draft.set(ContactField::Name, "John Doe".to_string());
        draft.set(ContactField::Email, "john@example.com".to_string());
        draft.set(
            ContactField::Message,
            "Hi Arnav, I'd like to talk about...".to_string(),
        );
        draft
    }

    #[test]
    fn test_submit_clears_fields() {
        let mut draft = filled();
        assert!(draft.is_complete());

        let (submission, ack) = draft.submit(&PROFILE);

        assert!(draft.is_empty());
        assert_eq!(draft.get(ContactField::Name), "");
        assert_eq!(draft.get(ContactField::Email), "");
        assert_eq!(draft.get(ContactField::Message), "");

        assert_eq!(submission.name, "John Doe");
        assert_eq!(submission.email, "john@example.com");
        assert_eq!(
            ack.message(),
            "Thanks for reaching out, Arnav will get back to you soon!"
        );
    }

    #[test]
    fn test_completeness_requires_every_field() {
        let mut draft = filled();
        draft.set(ContactField::Email, "   ".to_string());
        assert!(!draft.is_complete());
        assert!(!draft.is_empty());
        assert!(!ContactDraft::default().is_complete());
    }

    #[test]
    fn test_submission_payload_shape() {
        let (submission, _) = filled().submit(&PROFILE);
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "John Doe",
                "email": "john@example.com",
                "message": "Hi Arnav, I'd like to talk about...",
            })
        );
    }

    #[test]
    fn test_resume_acknowledgement() {
        assert_eq!(
            resume_acknowledgement(&PROFILE).to_string(),
            "Arnav_Bhoite_Resume.pdf download started! (Simulated)"
        );
    }
}

//! This module holds the state and rules behind the custom-furniture inquiry form.
//!
//! No view code lives here. The page in `custom_furniture` keeps an
//! [`InquiryState`] in a signal and forwards input events, submissions and
//! the delayed reset to it.

use core::time::Duration;
use std::sync::LazyLock;

use leptos::logging;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long the success message stays up before the form is cleared.
pub const RESET_DELAY: Duration = Duration::from_millis(5000);

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const PHONE_DIGITS: usize = 10;

/// The four fields of the inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    Requirements,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Phone, Self::Requirements];

    /// The DOM id used for the input and, suffixed with `-error`, for its message.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Requirements => "requirements",
        }
    }
}

/// A single field validation failure.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Invalid phone number")]
    InvalidPhone,
    #[error("Requirements are required")]
    RequirementsRequired,
}

impl InquiryError {
    /// The field this failure belongs to.
    pub const fn field(self) -> Field {
        match self {
            Self::NameRequired => Field::Name,
            Self::EmailRequired | Self::InvalidEmail => Field::Email,
            Self::PhoneRequired | Self::InvalidPhone => Field::Phone,
            Self::RequirementsRequired => Field::Requirements,
        }
    }
}

/// The values typed into the inquiry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub requirements: String,
}

impl InquiryForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Requirements => &self.requirements,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Requirements => &mut self.requirements,
        };
        *slot = value;
    }

    /// Copy with surrounding whitespace stripped from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            requirements: self.requirements.trim().to_string(),
        }
    }
}

/// Per-field validation results; `None` means the field passed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<InquiryError>,
    pub email: Option<InquiryError>,
    pub phone: Option<InquiryError>,
    pub requirements: Option<InquiryError>,
}

impl FieldErrors {
    pub const fn get(&self, field: Field) -> Option<InquiryError> {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Requirements => self.requirements,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Phone => self.phone = None,
            Field::Requirements => self.requirements = None,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.requirements.is_none()
    }

    /// Number of fields currently failing.
    pub fn count(&self) -> usize {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_some())
            .count()
    }
}

fn check_name(input: &str) -> Option<InquiryError> {
    input.trim().is_empty().then_some(InquiryError::NameRequired)
}

fn check_email(input: &str) -> Option<InquiryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(InquiryError::EmailRequired);
    }
    (!EMAIL_PATTERN.is_match(trimmed)).then_some(InquiryError::InvalidEmail)
}

fn check_phone(input: &str) -> Option<InquiryError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(InquiryError::PhoneRequired);
    }
    let digits = trimmed.chars().filter(char::is_ascii_digit).count();
    (digits != PHONE_DIGITS).then_some(InquiryError::InvalidPhone)
}

fn check_requirements(input: &str) -> Option<InquiryError> {
    input
        .trim()
        .is_empty()
        .then_some(InquiryError::RequirementsRequired)
}

/// Validates every field independently of the others.
pub fn validate(form: &InquiryForm) -> FieldErrors {
    FieldErrors {
        name: check_name(&form.name),
        email: check_email(&form.email),
        phone: check_phone(&form.phone),
        requirements: check_requirements(&form.requirements),
    }
}

/// Destination for accepted inquiries.
///
/// The storefront has no intake service yet, so the only implementation
/// writes to the diagnostic log. A backend client would implement this trait.
pub trait InquirySink {
    fn deliver(&self, inquiry: &InquiryForm);
}

/// Writes accepted inquiries to the console (browser) or stdout (server).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl InquirySink for LogSink {
    fn deliver(&self, inquiry: &InquiryForm) {
        match serde_json::to_string(inquiry) {
            Ok(json) => logging::log!("Inquiry submitted: {json}"),
            Err(err) => logging::error!("Inquiry submitted but could not be encoded: {err}"),
        }
    }
}

/// Identifies one successful submission so its delayed reset can be matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitted(SubmissionTicket),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Valid; the caller should schedule [`InquiryState::reset`] with this ticket.
    Accepted(SubmissionTicket),
    /// Invalid; errors are populated and the form is untouched.
    Rejected(FieldErrors),
    /// A previous submission is still showing its success state.
    AlreadySubmitted,
}

/// Form values, errors and lifecycle phase of one mounted inquiry page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryState {
    pub form: InquiryForm,
    pub errors: FieldErrors,
    pub phase: Phase,
    submissions: u64,
}

impl InquiryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_submitted(&self) -> bool {
        matches!(self.phase, Phase::Submitted(_))
    }

    /// Applies a keystroke: stores the value and drops that field's error only.
    pub fn edit(&mut self, field: Field, value: String) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    /// Validates the whole form and, when it passes, hands the trimmed values
    /// to `sink`.
    pub fn submit(&mut self, sink: &impl InquirySink) -> SubmitOutcome {
        if self.is_submitted() {
            return SubmitOutcome::AlreadySubmitted;
        }

        self.errors = validate(&self.form);
        if !self.errors.is_valid() {
            logging::debug_warn!(
                "Inquiry rejected with {} invalid field(s)",
                self.errors.count()
            );
            return SubmitOutcome::Rejected(self.errors);
        }

        sink.deliver(&self.form.trimmed());
        self.submissions += 1;
        let ticket = SubmissionTicket(self.submissions);
        self.phase = Phase::Submitted(ticket);
        SubmitOutcome::Accepted(ticket)
    }

    /// Clears the form after the success message, if `ticket` is still current.
    ///
    /// Returns whether anything changed.
    pub fn reset(&mut self, ticket: SubmissionTicket) -> bool {
        if self.phase != Phase::Submitted(ticket) {
            return false;
        }
        self.form = InquiryForm::default();
        self.errors = FieldErrors::default();
        self.phase = Phase::Editing;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use mockall::{mock, predicate::eq};

    mock! {
        Sink {}
        impl InquirySink for Sink {
            fn deliver(&self, inquiry: &InquiryForm);
        }
    }

    fn filled_form() -> InquiryForm {
        InquiryForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "(555) 123-4567".to_string(),
            requirements: "Walnut dining table seating eight".to_string(),
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        let errors = validate(&filled_form());
        assert!(errors.is_valid());
        assert_eq!(errors, FieldErrors::default());
        assert_eq!(errors.count(), 0);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = validate(&InquiryForm::default());
        assert_eq!(errors.name, Some(InquiryError::NameRequired));
        assert_eq!(errors.email, Some(InquiryError::EmailRequired));
        assert_eq!(errors.phone, Some(InquiryError::PhoneRequired));
        assert_eq!(errors.requirements, Some(InquiryError::RequirementsRequired));
        assert_eq!(errors.count(), 4);
    }

    #[test]
    fn test_whitespace_only_counts_as_missing() {
        let form = InquiryForm {
            name: "   ".to_string(),
            email: "\t".to_string(),
            phone: " \n ".to_string(),
            requirements: "  ".to_string(),
        };
        assert_eq!(validate(&form).count(), 4);
        assert_eq!(validate(&form).email, Some(InquiryError::EmailRequired));
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(check_email("a@b"), Some(InquiryError::InvalidEmail));
        assert_eq!(check_email("a@b.com"), None);
        assert_eq!(check_email("  a@b.com  "), None);
        assert_eq!(check_email("a@@b.com"), Some(InquiryError::InvalidEmail));
        assert_eq!(check_email("a b@c.com"), Some(InquiryError::InvalidEmail));
        assert_eq!(check_email("@b.com"), Some(InquiryError::InvalidEmail));
        assert_eq!(check_email("a@.com"), Some(InquiryError::InvalidEmail));
        assert_eq!(check_email("a@b."), Some(InquiryError::InvalidEmail));
        assert_eq!(check_email("first.last@sub.example.org"), None);
    }

    #[test]
    fn test_phone_rules() {
        assert_eq!(check_phone("123-456-7890"), None);
        assert_eq!(check_phone("(123) 456 7890"), None);
        assert_eq!(check_phone("1234567890"), None);
        assert_eq!(check_phone("12345"), Some(InquiryError::InvalidPhone));
        assert_eq!(check_phone("+1 123 456 7890"), Some(InquiryError::InvalidPhone));
        assert_eq!(check_phone("phone"), Some(InquiryError::InvalidPhone));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(InquiryError::NameRequired.to_string(), "Name is required");
        assert_eq!(InquiryError::EmailRequired.to_string(), "Email is required");
        assert_eq!(InquiryError::InvalidEmail.to_string(), "Invalid email format");
        assert_eq!(InquiryError::PhoneRequired.to_string(), "Phone number is required");
        assert_eq!(InquiryError::InvalidPhone.to_string(), "Invalid phone number");
        assert_eq!(
            InquiryError::RequirementsRequired.to_string(),
            "Requirements are required"
        );
    }

    #[test]
    fn test_error_field_mapping() {
        assert_eq!(InquiryError::InvalidEmail.field(), Field::Email);
        assert_eq!(InquiryError::PhoneRequired.field(), Field::Phone);
        for field in Field::ALL {
            let mut form = filled_form();
            form.set(field, String::new());
            let errors = validate(&form);
            assert_eq!(errors.get(field).map(InquiryError::field), Some(field));
        }
    }

    #[test]
    fn test_submit_valid_delivers_once() {
        let mut sink = MockSink::new();
        sink.expect_deliver()
            .with(eq(filled_form()))
            .times(1)
            .return_const(());

        let mut state = InquiryState::new();
        for field in Field::ALL {
            state.edit(field, filled_form().get(field).to_string());
        }

        let outcome = state.submit(&sink);
        assert_matches!(outcome, SubmitOutcome::Accepted(_));
        assert!(state.is_submitted());
        assert_eq!(state.form, filled_form());
    }

    #[test]
    fn test_submit_delivers_trimmed_values() {
        let mut sink = MockSink::new();
        sink.expect_deliver()
            .with(eq(filled_form()))
            .times(1)
            .return_const(());

        let mut state = InquiryState::new();
        for field in Field::ALL {
            state.edit(field, format!("  {}\t", filled_form().get(field)));
        }

        assert_matches!(state.submit(&sink), SubmitOutcome::Accepted(_));
        assert_eq!(state.form.email, format!("  {}\t", filled_form().email));
    }

    #[test]
    fn test_submit_invalid_never_delivers() {
        let mut sink = MockSink::new();
        sink.expect_deliver().never();

        let mut state = InquiryState {
            form: InquiryForm {
                email: "a@b".to_string(),
                ..filled_form()
            },
            ..InquiryState::default()
        };

        let outcome = state.submit(&sink);
        assert_matches!(outcome, SubmitOutcome::Rejected(errors) if errors.email == Some(InquiryError::InvalidEmail));
        assert_eq!(state.phase, Phase::Editing);
        assert_eq!(state.form.email, "a@b");
    }

    #[test]
    fn test_second_submit_is_ignored_while_submitted() {
        let mut sink = MockSink::new();
        sink.expect_deliver().times(1).return_const(());

        let mut state = InquiryState {
            form: filled_form(),
            ..InquiryState::default()
        };
        assert_matches!(state.submit(&sink), SubmitOutcome::Accepted(_));
        assert_eq!(state.submit(&sink), SubmitOutcome::AlreadySubmitted);
    }

    #[test]
    fn test_reset_with_current_ticket_clears_everything() {
        let mut state = InquiryState {
            form: filled_form(),
            ..InquiryState::default()
        };
        let SubmitOutcome::Accepted(ticket) = state.submit(&LogSink) else {
            panic!("filled form should be accepted");
        };

        assert!(state.reset(ticket));
        assert_eq!(state.form, InquiryForm::default());
        assert_eq!(state.phase, Phase::Editing);
        assert!(state.errors.is_valid());
    }

    #[test]
    fn test_stale_ticket_does_not_reset() {
        let mut state = InquiryState {
            form: filled_form(),
            ..InquiryState::default()
        };
        let SubmitOutcome::Accepted(first) = state.submit(&LogSink) else {
            panic!("filled form should be accepted");
        };
        assert!(state.reset(first));
        assert!(!state.reset(first));

        state.form = filled_form();
        let SubmitOutcome::Accepted(second) = state.submit(&LogSink) else {
            panic!("filled form should be accepted");
        };
        assert_ne!(first, second);
        assert!(!state.reset(first));
        assert!(state.is_submitted());
        assert_eq!(state.form, filled_form());
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut state = InquiryState::new();
        assert_matches!(state.submit(&LogSink), SubmitOutcome::Rejected(_));
        assert_eq!(state.errors.count(), 4);

        state.edit(Field::Phone, "5".to_string());
        assert_eq!(state.errors.phone, None);
        assert_eq!(state.errors.name, Some(InquiryError::NameRequired));
        assert_eq!(state.errors.email, Some(InquiryError::EmailRequired));
        assert_eq!(state.errors.requirements, Some(InquiryError::RequirementsRequired));
        assert_eq!(state.form.phone, "5");
    }

    #[test]
    fn test_inquiry_form_serialization() {
        let json = serde_json::to_value(filled_form()).unwrap();
        assert_eq!(json["name"], "Ada Lovelace");
        assert_eq!(json["phone"], "(555) 123-4567");

        let back: InquiryForm = serde_json::from_value(json).unwrap();
        assert_eq!(back, filled_form());
    }

    #[test]
    fn test_field_ids_are_unique() {
        let mut ids: Vec<_> = Field::ALL.iter().map(|f| f.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}

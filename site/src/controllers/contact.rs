//! Contact form: client-side validation and feedback only. Nothing is sent.

use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::notify::Notifier;
use crate::core::{ElementRef, NotificationKind, View};

pub const FORM_SELECTOR: &str = ".contact-form";
pub const FIELDS: [&str; 8] = [
    "name",
    "email",
    "phone",
    "room-type",
    "check-in",
    "check-out",
    "guests",
    "message",
];
pub const SUCCESS_MESSAGE: &str = "Thank you for your inquiry! We will contact you soon.";

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields.")]
    MissingRequired,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// Named fields of the contact form. Absent controls read as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub room_type: String,
    pub check_in: String,
    pub check_out: String,
    pub guests: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut submission = Self::default();
        for (name, value) in fields {
            let name: String = name.into();
            let slot = match name.as_str() {
                "name" => &mut submission.name,
                "email" => &mut submission.email,
                "phone" => &mut submission.phone,
                "room-type" => &mut submission.room_type,
                "check-in" => &mut submission.check_in,
                "check-out" => &mut submission.check_out,
                "guests" => &mut submission.guests,
                "message" => &mut submission.message,
                other => {
                    tracing::debug!(field = other, "ignoring unknown contact field");
                    continue;
                }
            };
            *slot = value.into();
        }
        submission
    }

    pub fn read(view: &dyn View, form: &ElementRef) -> Self {
        Self::from_fields(
            FIELDS
                .iter()
                .filter_map(|name| view.form_value(form, name).map(|value| (*name, value))),
        )
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() || self.email.is_empty() {
            return Err(ValidationError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

pub struct ContactForm {
    notifier: Rc<Notifier>,
}

impl ContactForm {
    pub fn new(notifier: Rc<Notifier>) -> Self {
        Self { notifier }
    }

    /// Submit handler (default navigation already prevented by the caller).
    /// Failures keep the form contents; success clears them.
    pub fn submit(&self, view: &mut dyn View) -> Result<ContactSubmission, ValidationError> {
        let form = ElementRef::nth(FORM_SELECTOR, 0);
        let submission = ContactSubmission::read(view, &form);

        if let Err(err) = submission.validate() {
            tracing::debug!(%err, "contact form rejected");
            self.notifier
                .show(view, &err.to_string(), NotificationKind::Error);
            return Err(err);
        }

        tracing::info!(room_type = %submission.room_type, "contact inquiry accepted");
        self.notifier
            .show(view, SUCCESS_MESSAGE, NotificationKind::Success);
        view.reset_form(&form);
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::view::{ElementState, MemoryView};
    use crate::core::ManualScheduler;

    fn form_view(name: &str, email: &str) -> MemoryView {
        let mut view = MemoryView::new();
        view.push(
            FORM_SELECTOR,
            ElementState::default()
                .with_field("name", name)
                .with_field("email", email)
                .with_field("room-type", "deluxe")
                .with_field("message", "Two nights in May"),
        );
        view
    }

    fn form() -> ContactForm {
        let notifier = Notifier::new(Rc::new(ManualScheduler::new()), 5_000);
        ContactForm::new(Rc::new(notifier))
    }

    fn field(view: &MemoryView, name: &str) -> String {
        view.form_value(&ElementRef::nth(FORM_SELECTOR, 0), name)
            .unwrap_or_default()
    }

    #[test]
    fn email_pattern() {
        assert!(is_valid_email("jo@example.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(!is_valid_email("jo@example"));
        assert!(!is_valid_email("jo example@x.com"));
        assert!(!is_valid_email("jo@@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn empty_email_shows_error_and_keeps_fields() {
        let mut view = form_view("Jo", "");
        assert_eq!(form().submit(&mut view), Err(ValidationError::MissingRequired));

        assert_eq!(view.notifications.len(), 1);
        assert_eq!(view.notifications[0].kind, NotificationKind::Error);
        assert_eq!(view.notifications[0].message, "Please fill in all required fields.");
        assert_eq!(field(&view, "name"), "Jo");
        assert_eq!(field(&view, "message"), "Two nights in May");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut view = form_view("Jo", "jo-at-example.com");
        assert_eq!(form().submit(&mut view), Err(ValidationError::InvalidEmail));
        assert_eq!(view.notifications[0].message, "Please enter a valid email address.");
        assert_eq!(field(&view, "email"), "jo-at-example.com");
    }

    #[test]
    fn valid_submission_succeeds_and_clears() {
        let mut view = form_view("Jo", "jo@example.com");
        let submission = form().submit(&mut view).expect("valid");

        assert_eq!(submission.room_type, "deluxe");
        assert_eq!(view.notifications.len(), 1);
        assert_eq!(view.notifications[0].kind, NotificationKind::Success);
        assert_eq!(view.notifications[0].message, SUCCESS_MESSAGE);
        for name in ["name", "email", "room-type", "message"] {
            assert_eq!(field(&view, name), "", "{name} not cleared");
        }
    }

    #[test]
    fn missing_form_reports_missing_fields() {
        let mut view = MemoryView::new();
        assert_eq!(form().submit(&mut view), Err(ValidationError::MissingRequired));
    }

    #[test]
    fn fields_map_from_kebab_case() {
        let submission = ContactSubmission::from_fields([
            ("check-in", "2026-05-01"),
            ("guests", "2"),
            ("room-type", "suite"),
            ("newsletter", "yes"),
        ]);
        assert_eq!(submission.check_in, "2026-05-01");
        assert_eq!(submission.guests, "2");
        assert_eq!(submission.room_type, "suite");
        assert!(submission.name.is_empty());
    }
}

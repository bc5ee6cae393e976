//! Contact form data model and submit-time validation.
//!
//! Validation lives here as plain functions over the form value; the Yew
//! component in `form.rs` only wires events and the network call.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

pub const ALLOWED_FILE_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "application/pdf",
];

/// 5 MiB cap, enforced on the declared size at selection time and re-derived
/// from the base64 payload at submit time.
pub const MAX_FILE_SIZE: u64 = 5 * 1024 * 1024;

pub const MAX_NAME_LEN: usize = 100;
pub const MIN_MESSAGE_LEN: usize = 10;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Budget range offered by the form. `Unspecified` is a legal choice and
/// serializes to the empty string the webhook expects.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Budget {
    #[default]
    Unspecified,
    From1kTo5k,
    From5kTo10k,
    From10kTo30k,
    Above30k,
}

impl Budget {
    pub const ALL: [Budget; 5] = [
        Budget::Unspecified,
        Budget::From1kTo5k,
        Budget::From5kTo10k,
        Budget::From10kTo30k,
        Budget::Above30k,
    ];

    /// Wire value, also used as the `<option>` value attribute.
    pub fn as_value(self) -> &'static str {
        match self {
            Budget::Unspecified => "",
            Budget::From1kTo5k => "1k-5k",
            Budget::From5kTo10k => "5k-10k",
            Budget::From10kTo30k => "10k-30k",
            Budget::Above30k => "30k+",
        }
    }

    pub fn from_value(value: &str) -> Option<Budget> {
        Budget::ALL.into_iter().find(|b| b.as_value() == value)
    }
}

impl Serialize for Budget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_value())
    }
}

/// An accepted file, read into a base64 data URL so it travels inside the
/// JSON payload instead of a multipart body.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct FileAttachment {
    pub name: String,
    pub data: String,
}

/// Working state of the form. Mutated field by field while the user types,
/// reset wholesale on a successful submission.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub budget: Budget,
    pub attachment: Option<FileAttachment>,
}

/// A single field update. Keeping this a sum type makes the dispatch in
/// `apply` exhaustive instead of keying into the record by field name.
#[derive(Clone, PartialEq, Debug)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Message(String),
    Budget(Budget),
}

impl FieldEdit {
    pub fn apply(self, form: &mut ContactSubmission) {
        match self {
            FieldEdit::Name(value) => form.name = value,
            FieldEdit::Email(value) => form.email = value,
            FieldEdit::Message(value) => form.message = value,
            FieldEdit::Budget(value) => form.budget = value,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttachError {
    UnsupportedType,
    TooLarge,
}

impl AttachError {
    pub fn message(self) -> &'static str {
        match self {
            AttachError::UnsupportedType => "Invalid file type. Please upload an image or PDF.",
            AttachError::TooLarge => "File size must be less than 5MB.",
        }
    }
}

/// Gate a file selection before it is read: declared media type must be an
/// allowed image format or PDF, declared size must fit the cap.
pub fn check_attachment_candidate(media_type: &str, byte_size: f64) -> Result<(), AttachError> {
    if !ALLOWED_FILE_TYPES.contains(&media_type) {
        return Err(AttachError::UnsupportedType);
    }
    if byte_size > MAX_FILE_SIZE as f64 {
        return Err(AttachError::TooLarge);
    }
    Ok(())
}

/// Byte size implied by a base64 data URL, ignoring the `data:...;base64,`
/// header when present. base64 expands content 4:3, so payload * 3/4.
pub fn estimated_attachment_bytes(data: &str) -> u64 {
    let payload = match data.split_once("base64,") {
        Some((_, rest)) => rest,
        None => data,
    };
    payload.len() as u64 * 3 / 4
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    fn new(field: &'static str, message: &'static str) -> Self {
        ValidationError { field, message }
    }
}

fn is_valid_email(address: &str) -> bool {
    let address = address.trim();
    if address.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    if !local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "._%+-".contains(c))
    {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Full submit-time check. Returns the first failing field; the caller makes
/// no network call unless this passes.
pub fn validate(form: &ContactSubmission) -> Result<(), ValidationError> {
    let name_len = form.name.trim().chars().count();
    if name_len == 0 {
        return Err(ValidationError::new("name", "Name is required"));
    }
    if name_len > MAX_NAME_LEN {
        return Err(ValidationError::new("name", "Name is too long"));
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::new("email", "Invalid email address"));
    }
    let message_len = form.message.trim().chars().count();
    if message_len < MIN_MESSAGE_LEN {
        return Err(ValidationError::new(
            "message",
            "Message must be at least 10 characters",
        ));
    }
    if message_len > MAX_MESSAGE_LEN {
        return Err(ValidationError::new("message", "Message is too long"));
    }
    if let Some(attachment) = &form.attachment {
        if estimated_attachment_bytes(&attachment.data) > MAX_FILE_SIZE {
            return Err(ValidationError::new(
                "file",
                "File size must be less than 5MB",
            ));
        }
    }
    Ok(())
}

/// Wire payload for the contact webhook. Built only from a submission that
/// already passed `validate`.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub message: String,
    pub budget: Budget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileAttachment>,
    pub timestamp: String,
}

impl ContactPayload {
    pub fn new(form: &ContactSubmission, submitted_at: DateTime<Utc>) -> Self {
        ContactPayload {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            message: form.message.trim().to_string(),
            budget: form.budget,
            file: form.attachment.clone(),
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn valid_form() -> ContactSubmission {
        ContactSubmission {
            name: "Dana Cohen".to_string(),
            email: "dana@example.com".to_string(),
            message: "I need a dashboard for my store.".to_string(),
            budget: Budget::From5kTo10k,
            attachment: None,
        }
    }

    #[test]
    fn accepts_only_allowed_media_types() {
        for media_type in ALLOWED_FILE_TYPES {
            assert_eq!(check_attachment_candidate(media_type, 1024.0), Ok(()));
        }
        for media_type in ["image/svg+xml", "text/html", "application/zip", ""] {
            assert_eq!(
                check_attachment_candidate(media_type, 1024.0),
                Err(AttachError::UnsupportedType)
            );
        }
    }

    #[test]
    fn size_cap_is_inclusive_at_five_mib() {
        assert_eq!(
            check_attachment_candidate("image/png", MAX_FILE_SIZE as f64),
            Ok(())
        );
        assert_eq!(
            check_attachment_candidate("image/png", MAX_FILE_SIZE as f64 + 1.0),
            Err(AttachError::TooLarge)
        );
    }

    #[test]
    fn estimated_size_skips_the_data_url_header() {
        let data = format!("data:image/png;base64,{}", "A".repeat(4000));
        assert_eq!(estimated_attachment_bytes(&data), 3000);
        // Bare payload without a header estimates the same way
        assert_eq!(estimated_attachment_bytes(&"A".repeat(4000)), 3000);
    }

    #[test]
    fn budget_round_trips_through_its_wire_value() {
        for budget in Budget::ALL {
            assert_eq!(Budget::from_value(budget.as_value()), Some(budget));
        }
        assert_eq!(Budget::from_value("100k"), None);
        assert_eq!(
            serde_json::to_string(&Budget::Above30k).unwrap(),
            "\"30k+\""
        );
        assert_eq!(serde_json::to_string(&Budget::Unspecified).unwrap(), "\"\"");
    }

    #[test]
    fn field_edits_are_idempotent() {
        let mut form = ContactSubmission::default();
        FieldEdit::Name("Dana".to_string()).apply(&mut form);
        let after_first = form.clone();
        FieldEdit::Name("Dana".to_string()).apply(&mut form);
        assert_eq!(form, after_first);

        FieldEdit::Budget(Budget::Above30k).apply(&mut form);
        let after_first = form.clone();
        FieldEdit::Budget(Budget::Above30k).apply(&mut form);
        assert_eq!(form, after_first);
    }

    #[test]
    fn valid_submission_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn empty_name_and_short_message_are_rejected() {
        let form = ContactSubmission {
            name: String::new(),
            email: "a@b.com".to_string(),
            message: "short".to_string(),
            ..ContactSubmission::default()
        };
        let err = validate(&form).unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn name_bounds_apply_to_the_trimmed_value() {
        let mut form = valid_form();
        form.name = "   ".to_string();
        assert_eq!(validate(&form).unwrap_err().field, "name");
        form.name = "x".repeat(100);
        assert_eq!(validate(&form), Ok(()));
        form.name = "x".repeat(101);
        assert_eq!(validate(&form).unwrap_err().field, "name");
    }

    #[test]
    fn message_bounds_apply_to_the_trimmed_value() {
        let mut form = valid_form();
        form.message = " 123456789 ".to_string(); // 9 chars once trimmed
        assert_eq!(validate(&form).unwrap_err().field, "message");
        form.message = "x".repeat(10);
        assert_eq!(validate(&form), Ok(()));
        form.message = "x".repeat(2000);
        assert_eq!(validate(&form), Ok(()));
        form.message = "x".repeat(2001);
        assert_eq!(validate(&form).unwrap_err().field, "message");
    }

    #[test]
    fn email_grammar() {
        for good in [
            "a@b.com",
            "dana.cohen@mail.example.co.il",
            "user+tag@example.io",
            "  padded@example.com  ",
        ] {
            let mut form = valid_form();
            form.email = good.to_string();
            assert_eq!(validate(&form), Ok(()), "expected {good:?} to pass");
        }
        for bad in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@example",
            "us er@example.com",
            "user@-example.com",
            "user@example..com",
            ".user@example.com",
        ] {
            let mut form = valid_form();
            form.email = bad.to_string();
            assert_eq!(
                validate(&form).unwrap_err().field,
                "email",
                "expected {bad:?} to fail"
            );
        }
    }

    #[test]
    fn oversized_attachment_fails_revalidation() {
        let mut form = valid_form();
        // 8_000_000 base64 chars estimate to 6_000_000 bytes, over the cap
        form.attachment = Some(FileAttachment {
            name: "brief.pdf".to_string(),
            data: format!("data:application/pdf;base64,{}", "A".repeat(8_000_000)),
        });
        assert_eq!(validate(&form).unwrap_err().field, "file");
        form.attachment = Some(FileAttachment {
            name: "brief.pdf".to_string(),
            data: format!("data:application/pdf;base64,{}", "A".repeat(1000)),
        });
        assert_eq!(validate(&form), Ok(()));
    }

    #[test]
    fn payload_carries_trimmed_fields_and_iso_timestamp() {
        let mut form = valid_form();
        form.name = "  Dana Cohen  ".to_string();
        form.message = "  I need a dashboard for my store.  ".to_string();
        let submitted_at = Utc.with_ymd_and_hms(2026, 2, 14, 9, 30, 0).unwrap();
        let payload = ContactPayload::new(&form, submitted_at);
        assert_eq!(payload.name, "Dana Cohen");
        assert_eq!(payload.message, "I need a dashboard for my store.");
        assert_eq!(payload.timestamp, "2026-02-14T09:30:00.000Z");

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["budget"], "5k-10k");
        assert!(json.get("file").is_none());
    }

    #[test]
    fn successful_reset_returns_to_the_initial_value() {
        let mut form = valid_form();
        form.attachment = Some(FileAttachment {
            name: "mock.png".to_string(),
            data: "data:image/png;base64,aGVsbG8=".to_string(),
        });
        form = ContactSubmission::default();
        assert_eq!(form, ContactSubmission::default());
        assert!(form.name.is_empty());
        assert!(form.attachment.is_none());
        assert_eq!(form.budget, Budget::Unspecified);
    }
}

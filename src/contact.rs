use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// The pattern browsers apply to `<input type="email">`.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Used for the input's `id` and `name`.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your@email.com",
            Field::Message => "Tell me about your project...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// The contact form's fields. Lives only as long as the section is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(FormError::Missing(field));
        }
        let email = self.email.trim();
        if !EMAIL.is_match(email) {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }

    /// Hands back the filled-in payload and clears every field. An invalid form is
    /// left untouched.
    pub fn submit(&mut self) -> Result<ContactForm, FormError> {
        self.validate()?;
        Ok(std::mem::take(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Let's build something".to_string(),
        }
    }

    #[test]
    fn test_submit_clears_all_fields() {
        let mut form = filled();
        let payload = form.submit().expect("form should be valid");
        assert_eq!(payload, filled());
        assert_eq!(form, ContactForm::default());
        for field in Field::ALL {
            assert!(form.get(field).is_empty());
        }
    }

    #[test]
    fn test_missing_field_keeps_state() {
        let mut form = filled();
        form.set(Field::Message, "   ".to_string());
        assert_eq!(form.submit(), Err(FormError::Missing(Field::Message)));
        assert_eq!(form.name, "Ada");

        let mut empty = ContactForm::default();
        assert_eq!(empty.submit(), Err(FormError::Missing(Field::Name)));
    }

    #[test]
    fn test_email_validation() {
        let mut form = filled();
        for bad in ["ada", "ada@", "@example.com", "ada@exa mple.com", "ada@-example.com"] {
            form.set(Field::Email, bad.to_string());
            assert!(
                matches!(form.validate(), Err(FormError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }
        for good in ["a@b", "first.last+tag@sub.example.co", "  ada@example.com  "] {
            form.set(Field::Email, good.to_string());
            assert_eq!(form.validate(), Ok(()), "{good} should be accepted");
        }
    }

    #[test]
    fn test_payload_serializes_for_logging() {
        let json = serde_json::to_string(&filled()).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"ada@example.com","message":"Let's build something"}"#
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::Missing(Field::Email).to_string(), "Email is required");
        assert_eq!(
            FormError::InvalidEmail("x".to_string()).to_string(),
            "'x' is not a valid email address"
        );
    }
}

use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The input's `name`/`id` attribute, also the template parameter key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required fields are empty: {0:?}")]
    Missing(Vec<Field>),
    #[error("'{0}' is not an email address")]
    InvalidEmail(String),
}

/// What the visitor has typed into the contact form so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
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

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields the browser's `required` check would flag. Like the browser,
    /// whitespace counts as a value.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    /// Same checks the browser runs for `required` and `type="email"`
    /// inputs, so a submit that slips past native validation is still
    /// rejected before anything leaves the page.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::Missing(missing));
        }
        if !looks_like_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

// Dotless hosts such as `jane@localhost` pass, as they do for `type="email"`.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(jane().validate(), Ok(()));
    }

    #[test]
    fn empty_message_is_missing() {
        let mut form = jane();
        form.set(Field::Message, String::new());
        assert_eq!(
            form.validate(),
            Err(ValidationError::Missing(vec![Field::Message]))
        );
    }

    #[test]
    fn whitespace_only_passes_required_check() {
        let mut form = jane();
        form.set(Field::Name, "   ".into());
        assert!(form.missing_fields().is_empty());
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn blank_email_is_not_an_address() {
        let mut form = jane();
        form.set(Field::Email, "   ".into());
        assert!(matches!(form.validate(), Err(ValidationError::InvalidEmail(_))));
    }

    #[test]
    fn dotless_domain_is_accepted() {
        let mut form = jane();
        form.set(Field::Email, "a@b".into());
        assert_eq!(form.validate(), Ok(()));

        form.set(Field::Email, "a@.b".into());
        assert!(form.validate().is_err());
    }

    #[test]
    fn new_form_reports_every_field() {
        let form = ContactForm::default();
        assert!(form.is_empty());
        assert_eq!(form.missing_fields(), Field::ALL.to_vec());
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["jane", "jane@", "@example.com", "ja ne@example.com", "a@b@c"] {
            let mut form = jane();
            form.set(Field::Email, email.into());
            assert!(
                matches!(form.validate(), Err(ValidationError::InvalidEmail(_))),
                "{email} should be rejected"
            );
        }
    }

    #[test]
    fn set_touches_one_field() {
        let mut form = ContactForm::default();
        form.set(Field::Email, "j".into());
        assert_eq!(form.get(Field::Email), "j");
        assert_eq!(form.get(Field::Name), "");
        assert_eq!(form.get(Field::Message), "");
    }

    #[test]
    fn clear_resets_everything() {
        let mut form = jane();
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}

//! Placeholder substitution for contact fields.
//!
//! Stored records may carry tokens such as `{{EMAIL}}` instead of literal contact
//! values so the same entry can be served with different deployment settings. A field
//! is substituted only when its whole value is a token.

use std::collections::HashMap;

use crate::content::ContentError;
use crate::models::resume::{Contact, ResumeRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Email,
    WebsiteUrl,
    LinkedinUrl,
    GithubUrl,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Email,
        Placeholder::WebsiteUrl,
        Placeholder::LinkedinUrl,
        Placeholder::GithubUrl,
    ];

    /// Token name between the braces.
    pub fn key(self) -> &'static str {
        match self {
            Placeholder::Email => "EMAIL",
            Placeholder::WebsiteUrl => "WEBSITE_URL",
            Placeholder::LinkedinUrl => "LINKEDIN_URL",
            Placeholder::GithubUrl => "GITHUB_URL",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

/// Configured values for each placeholder. A placeholder with no value resolves to an
/// absent field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceholderValues {
    values: HashMap<Placeholder, String>,
}

impl PlaceholderValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `placeholder` when `value` is present and non-blank.
    pub fn with(mut self, placeholder: Placeholder, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            self.values.insert(placeholder, value);
        }
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    /// Resolves one raw field value.
    ///
    /// Literal values pass through, `{{KEY}}` becomes the configured value, an empty
    /// string becomes `None`. An unrecognised token is an error.
    pub fn resolve(&self, raw: &str) -> Result<Option<String>, ContentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let Some(key) = trimmed
            .strip_prefix("{{")
            .and_then(|rest| rest.strip_suffix("}}"))
        else {
            return Ok(Some(trimmed.to_string()));
        };

        let placeholder = Placeholder::from_key(key.trim())
            .ok_or_else(|| ContentError::UnknownPlaceholder(trimmed.to_string()))?;
        Ok(self.get(placeholder).map(str::to_string))
    }

    fn resolve_field(&self, field: Option<String>) -> Result<Option<String>, ContentError> {
        match field {
            Some(raw) => self.resolve(&raw),
            None => Ok(None),
        }
    }
}

pub fn normalize_contact(contact: Contact, values: &PlaceholderValues) -> Result<Contact, ContentError> {
    Ok(Contact {
        email: values.resolve_field(contact.email)?,
        website: values.resolve_field(contact.website)?,
        linkedin: values.resolve_field(contact.linkedin)?,
        github: values.resolve_field(contact.github)?,
    })
}

/// Resolves placeholders in the record's contact block. Other fields are untouched.
pub fn normalize(mut record: ResumeRecord, values: &PlaceholderValues) -> Result<ResumeRecord, ContentError> {
    record.contact = record
        .contact
        .map(|contact| normalize_contact(contact, values))
        .transpose()?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> PlaceholderValues {
        PlaceholderValues::new()
            .with(Placeholder::Email, Some("me@example.com".to_string()))
            .with(Placeholder::GithubUrl, Some("https://github.com/me".to_string()))
            .with(Placeholder::LinkedinUrl, Some("   ".to_string()))
    }

    #[test]
    fn test_key_round_trip() {
        for placeholder in Placeholder::ALL {
            assert_eq!(Placeholder::from_key(placeholder.key()), Some(placeholder));
        }
        assert_eq!(Placeholder::from_key("PHONE"), None);
    }

    #[test]
    fn test_resolve_token_literal_and_empty() {
        let values = values();
        assert_eq!(values.resolve("{{EMAIL}}").unwrap().as_deref(), Some("me@example.com"));
        assert_eq!(values.resolve("{{ GITHUB_URL }}").unwrap().as_deref(), Some("https://github.com/me"));
        assert_eq!(values.resolve("https://x.dev").unwrap().as_deref(), Some("https://x.dev"));
        assert_eq!(values.resolve("").unwrap(), None);
        assert_eq!(values.resolve("  ").unwrap(), None);
    }

    #[test]
    fn test_unset_placeholder_resolves_to_absent() {
        let values = values();
        assert_eq!(values.resolve("{{WEBSITE_URL}}").unwrap(), None);
        // Blank configured values are treated as unset.
        assert_eq!(values.get(Placeholder::LinkedinUrl), None);
        assert_eq!(values.resolve("{{LINKEDIN_URL}}").unwrap(), None);
    }

    #[test]
    fn test_unknown_placeholder_is_an_error() {
        let err = values().resolve("{{PHONE}}").unwrap_err();
        assert!(matches!(err, ContentError::UnknownPlaceholder(ref t) if t == "{{PHONE}}"));
    }

    #[test]
    fn test_embedded_token_is_literal() {
        assert_eq!(
            values().resolve("mailto:{{EMAIL}}").unwrap().as_deref(),
            Some("mailto:{{EMAIL}}")
        );
    }

    #[test]
    fn test_normalize_contact_fields() {
        let contact = Contact {
            email: Some("{{EMAIL}}".to_string()),
            website: Some("{{WEBSITE_URL}}".to_string()),
            linkedin: Some(String::new()),
            github: Some("{{GITHUB_URL}}".to_string()),
        };
        let normalized = normalize_contact(contact, &values()).unwrap();
        assert_eq!(
            normalized,
            Contact {
                email: Some("me@example.com".to_string()),
                website: None,
                linkedin: None,
                github: Some("https://github.com/me".to_string()),
            }
        );
    }
}

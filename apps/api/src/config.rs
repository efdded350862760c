use anyhow::{bail, Context, Result};

use crate::content::{Placeholder, PlaceholderValues};
use crate::models::resume::DocumentIdentity;

/// Where content entries are read from.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBackend {
    /// `{root}/{collection}/{id}.json` on local disk.
    Filesystem { root: String },
    /// Objects in an S3 bucket (MinIO locally, AWS in production).
    S3 {
        bucket: String,
        endpoint: String,
        prefix: String,
        access_key_id: String,
        secret_access_key: String,
    },
}

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub content: ContentBackend,
    pub resume_entry_id: String,
    pub owner_name: String,
    pub owner_title: String,
    pub contact_email: Option<String>,
    pub contact_website_url: Option<String>,
    pub contact_linkedin_url: Option<String>,
    pub contact_github_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            content: content_backend()?,
            resume_entry_id: env_or("RESUME_ENTRY_ID", "main"),
            owner_name: require_env("RESUME_OWNER_NAME")?,
            owner_title: require_env("RESUME_OWNER_TITLE")?,
            contact_email: optional_env("CONTACT_EMAIL"),
            contact_website_url: optional_env("CONTACT_WEBSITE_URL"),
            contact_linkedin_url: optional_env("CONTACT_LINKEDIN_URL"),
            contact_github_url: optional_env("CONTACT_GITHUB_URL"),
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn identity(&self) -> DocumentIdentity {
        DocumentIdentity {
            name: self.owner_name.clone(),
            title: self.owner_title.clone(),
        }
    }

    pub fn placeholder_values(&self) -> PlaceholderValues {
        PlaceholderValues::new()
            .with(Placeholder::Email, self.contact_email.clone())
            .with(Placeholder::WebsiteUrl, self.contact_website_url.clone())
            .with(Placeholder::LinkedinUrl, self.contact_linkedin_url.clone())
            .with(Placeholder::GithubUrl, self.contact_github_url.clone())
    }
}

fn content_backend() -> Result<ContentBackend> {
    match env_or("CONTENT_BACKEND", "fs").as_str() {
        "fs" => Ok(ContentBackend::Filesystem {
            root: env_or("CONTENT_DIR", "content"),
        }),
        "s3" => Ok(ContentBackend::S3 {
            bucket: require_env("S3_BUCKET")?,
            endpoint: require_env("S3_ENDPOINT")?,
            prefix: env_or("S3_PREFIX", ""),
            access_key_id: require_env("AWS_ACCESS_KEY_ID")?,
            secret_access_key: require_env("AWS_SECRET_ACCESS_KEY")?,
        }),
        other => bail!("CONTENT_BACKEND must be 'fs' or 's3', got '{other}'"),
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

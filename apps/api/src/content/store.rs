use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::debug;

use crate::content::ContentError;

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// Read-only access to JSON entries grouped by collection.
///
/// Carried in `AppState` as `Arc<dyn ContentStore>`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Raw bytes of `collection/id`, or `None` when no such entry exists.
    async fn get_entry(&self, collection: &str, id: &str) -> Result<Option<Bytes>, ContentError>;
}

fn entry_key(collection: &str, id: &str) -> String {
    format!("{collection}/{id}.json")
}

// ────────────────────────────────────────────────────────────────────────────
// FsContentStore: entries as files under a root directory
// ────────────────────────────────────────────────────────────────────────────

/// Reads `{root}/{collection}/{id}.json`.
pub struct FsContentStore {
    root: PathBuf,
}

impl FsContentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FsContentStore { root: root.into() }
    }
}

#[async_trait]
impl ContentStore for FsContentStore {
    async fn get_entry(&self, collection: &str, id: &str) -> Result<Option<Bytes>, ContentError> {
        let path = self.root.join(entry_key(collection, id));
        match tokio::fs::read(&path).await {
            Ok(data) => {
                debug!(path = %path.display(), bytes = data.len(), "read content entry");
                Ok(Some(Bytes::from(data)))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ContentError::Io(e)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// S3ContentStore: entries as objects in a bucket (MinIO locally, AWS in production)
// ────────────────────────────────────────────────────────────────────────────

/// Reads `{prefix}{collection}/{id}.json` from `bucket`.
pub struct S3ContentStore {
    client: S3Client,
    bucket: String,
    prefix: String,
}

impl S3ContentStore {
    pub fn new(client: S3Client, bucket: impl Into<String>, prefix: impl Into<String>) -> Self {
        S3ContentStore {
            client,
            bucket: bucket.into(),
            prefix: prefix.into(),
        }
    }

    fn object_key(&self, collection: &str, id: &str) -> String {
        format!("{}{}", self.prefix, entry_key(collection, id))
    }
}

#[async_trait]
impl ContentStore for S3ContentStore {
    async fn get_entry(&self, collection: &str, id: &str) -> Result<Option<Bytes>, ContentError> {
        let key = self.object_key(collection, id);
        let output = match self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
        {
            Ok(output) => output,
            Err(e) if e.as_service_error().is_some_and(|se| se.is_no_such_key()) => {
                return Ok(None);
            }
            Err(e) => {
                return Err(ContentError::S3(format!(
                    "get s3://{}/{key} failed: {e}",
                    self.bucket
                )));
            }
        };

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| ContentError::S3(format!("reading s3://{}/{key} failed: {e}", self.bucket)))?
            .into_bytes();
        debug!(bucket = %self.bucket, key = %key, bytes = data.len(), "read content entry");
        Ok(Some(data))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryContentStore: fixture store for tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemoryContentStore {
    entries: std::collections::HashMap<String, Bytes>,
}

#[cfg(test)]
impl MemoryContentStore {
    pub(crate) fn with_entry(mut self, collection: &str, id: &str, json: &str) -> Self {
        self.entries
            .insert(entry_key(collection, id), Bytes::copy_from_slice(json.as_bytes()));
        self
    }
}

#[cfg(test)]
#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get_entry(&self, collection: &str, id: &str) -> Result<Option<Bytes>, ContentError> {
        Ok(self.entries.get(&entry_key(collection, id)).cloned())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

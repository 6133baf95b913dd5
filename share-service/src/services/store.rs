//! File-backed share store.
//!
//! One pretty-printed JSON file per share under the store directory,
//! named `{id}.json`. Writes always target distinct files and the only
//! cross-file operation (the purge sweep) tolerates interleaving, so no
//! locking is needed.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use invoice_core::error::AppError;
use rand::Rng;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::models::{DesignOptions, InvoiceSnapshot, ShareRecord};

const ID_LENGTH: usize = 8;
const ID_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Outcome of one purge sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeStats {
    pub scanned: usize,
    pub deleted: usize,
}

#[async_trait]
pub trait ShareStore: Send + Sync {
    /// Persist a new record and return its id.
    async fn create(
        &self,
        invoice: InvoiceSnapshot,
        design: Option<DesignOptions>,
    ) -> Result<String, AppError>;

    /// Load a record by id. Missing and unreadable records are both
    /// `NotFound`; the caller never learns which it was.
    async fn read(&self, id: &str) -> Result<ShareRecord, AppError>;

    /// Delete every record older than `max_age_days`. Per-file failures
    /// are swallowed so one bad file never stops the sweep.
    async fn purge(&self, max_age_days: u64) -> Result<PurgeStats, AppError>;
}

pub struct FileShareStore {
    base_path: PathBuf,
}

impl FileShareStore {
    pub async fn new(base_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let base_path = base_path.into();
        if !base_path.exists() {
            fs::create_dir_all(&base_path).await?;
        }
        Ok(Self { base_path })
    }

    fn record_path(&self, id: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", id))
    }

    /// Evaluate one record file; true when it was deleted. Errors never
    /// escape here, a record that cannot be judged is left in place.
    async fn purge_one(&self, path: &Path, now: DateTime<Utc>, max_age: Duration) -> bool {
        let bytes = match fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "purge: file unreadable, keeping");
                return false;
            }
        };

        let value: serde_json::Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "purge: malformed JSON, keeping");
                return false;
            }
        };

        // A record whose createdAt is missing or garbled fails open: it is
        // kept rather than deleted.
        let created = value
            .get("createdAt")
            .and_then(|v| v.as_str())
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        let Some(created) = created else {
            return false;
        };

        if now.signed_duration_since(created) <= max_age {
            return false;
        }

        match fs::remove_file(path).await {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "purged expired share");
                true
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "purge: delete failed");
                false
            }
        }
    }
}

/// 8 characters drawn uniformly from the upper-cased base-36 alphabet.
/// Not cryptographic and not collision-checked: with 36^8 possible ids the
/// store assumes no collision at this scale.
fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LENGTH)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

/// Ids are looked up by joining onto the store directory, so anything that
/// is not plain alphanumeric is treated as unknown instead of becoming a
/// path.
fn valid_id(id: &str) -> bool {
    !id.is_empty() && id.chars().all(|c| c.is_ascii_alphanumeric())
}

#[async_trait]
impl ShareStore for FileShareStore {
    async fn create(
        &self,
        invoice: InvoiceSnapshot,
        design: Option<DesignOptions>,
    ) -> Result<String, AppError> {
        // The directory may have been removed since startup.
        fs::create_dir_all(&self.base_path).await?;

        let id = generate_id();
        let record = ShareRecord {
            id: id.clone(),
            created_at: Utc::now(),
            invoice,
            design,
        };
        let json = serde_json::to_vec_pretty(&record)
            .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;
        fs::write(self.record_path(&id), json).await?;

        Ok(id)
    }

    async fn read(&self, id: &str) -> Result<ShareRecord, AppError> {
        if !valid_id(id) {
            tracing::debug!(id, "rejected malformed share id");
            return Err(AppError::NotFound(anyhow::anyhow!("Not found")));
        }

        let path = self.record_path(id);
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(id, error = %e, "share record missing");
                return Err(AppError::NotFound(anyhow::anyhow!("Not found")));
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(record) => Ok(record),
            Err(e) => {
                // Logged as distinct from "missing" for operability, but the
                // caller sees the same NotFound either way.
                tracing::warn!(id, error = %e, "share record exists but is unreadable");
                Err(AppError::NotFound(anyhow::anyhow!("Not found")))
            }
        }
    }

    async fn purge(&self, max_age_days: u64) -> Result<PurgeStats, AppError> {
        let mut stats = PurgeStats::default();

        // The directory listing is taken once; records created mid-sweep
        // may be skipped, which is fine because a fresh record is never
        // old enough to qualify.
        let mut entries = match fs::read_dir(&self.base_path).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(error = %e, "purge skipped: store directory unreadable");
                return Ok(stats);
            }
        };

        let now = Utc::now();
        let max_age = Duration::days(max_age_days as i64);

        loop {
            let entry = match entries.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    tracing::debug!(error = %e, "purge: directory entry unreadable");
                    break;
                }
            };
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            stats.scanned += 1;
            if self.purge_one(&path, now, max_age).await {
                stats.deleted += 1;
            }
        }

        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::{generate_id, valid_id, ID_LENGTH};

    #[test]
    fn generated_ids_are_uppercase_base36() {
        for _ in 0..100 {
            let id = generate_id();
            assert_eq!(id.len(), ID_LENGTH);
            assert!(id
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
            assert!(valid_id(&id));
        }
    }

    #[test]
    fn path_like_ids_are_rejected() {
        assert!(!valid_id("../../etc/passwd"));
        assert!(!valid_id("A1B2C3D4/"));
        assert!(!valid_id(""));
        assert!(valid_id("A1B2C3D4"));
    }
}

// src/store/profiles.rs

use std::path::PathBuf;
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::student::StudentProfile;

/// On-disk layout: one JSON document with a `students` array.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Document {
    #[serde(default)]
    students: Vec<StudentProfile>,
}

/// Flat-file JSON store for student profiles.
///
/// Every operation re-reads the document and writes it back whole; the
/// read-modify-write is serialized behind one async mutex. Cross-process
/// writers race with last-write-wins, which is accepted at this scale.
#[derive(Clone)]
pub struct ProfileStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl ProfileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path: Arc::new(path),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Reads and parses the document. A missing or unreadable file yields
    /// an empty document so a fresh deployment works without seeding.
    async fn load(&self) -> Document {
        match tokio::fs::read(self.path.as_ref()).await {
            Ok(raw) => match serde_json::from_slice(&raw) {
                Ok(doc) => doc,
                Err(e) => {
                    tracing::error!("Failed to parse profile document, using empty DB: {}", e);
                    Document::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read profile document, using empty DB: {}", e);
                Document::default()
            }
        }
    }

    async fn save(&self, doc: &Document) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let pretty = serde_json::to_vec_pretty(doc)?;
        tokio::fs::write(self.path.as_ref(), pretty).await?;
        Ok(())
    }

    /// Creates the profile, or fully overwrites an existing record with
    /// the same email. The record id is kept across overwrites; a new
    /// record gets a millisecond-timestamp id.
    pub async fn upsert(&self, mut profile: StudentProfile) -> Result<StudentProfile, AppError> {
        let _guard = self.lock.lock().await;

        let mut doc = self.load().await;
        match doc.students.iter_mut().find(|s| s.email == profile.email) {
            Some(existing) => {
                profile.id = existing.id;
                *existing = profile.clone();
            }
            None => {
                profile.id = Utc::now().timestamp_millis();
                doc.students.push(profile.clone());
            }
        }

        self.save(&doc).await?;
        Ok(profile)
    }

    pub async fn find(&self, email: &str) -> Result<Option<StudentProfile>, AppError> {
        let _guard = self.lock.lock().await;
        let doc = self.load().await;
        Ok(doc.students.into_iter().find(|s| s.email == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::student::SignupRequest;

    fn profile(email: &str, name: &str) -> StudentProfile {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "email": email,
            "password": "p",
            "fullName": name,
            "class": "10th",
        }))
        .unwrap();
        request.into_profile("hash".to_string())
    }

    fn scratch_store() -> (tempfile::TempDir, ProfileStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = ProfileStore::new(dir.path().join("database.json"));
        (dir, store)
    }

    #[tokio::test]
    async fn missing_file_reads_as_empty() {
        let (_dir, store) = scratch_store();
        assert!(store.find("a@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn upsert_assigns_id_and_persists() {
        let (_dir, store) = scratch_store();
        let saved = store.upsert(profile("a@x.com", "A")).await.unwrap();
        assert!(saved.id > 0);

        let found = store.find("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.full_name, "A");
        assert_eq!(found.id, saved.id);
    }

    #[tokio::test]
    async fn re_signup_overwrites_but_keeps_id() {
        let (_dir, store) = scratch_store();
        let first = store.upsert(profile("a@x.com", "A")).await.unwrap();
        let second = store.upsert(profile("a@x.com", "B")).await.unwrap();

        assert_eq!(first.id, second.id);
        let found = store.find("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.full_name, "B");
    }
}

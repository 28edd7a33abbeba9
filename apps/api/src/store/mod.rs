//! Persistence of the resume and the design selection.
//!
//! Values are stored as JSON strings under fixed keys. Reads are forgiving:
//! a missing key or a value that no longer decodes yields the documented
//! default, so a stale or corrupted store never blocks the editor.

pub mod memory;
pub mod redis_store;

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ids::mint_id;
use crate::models::{Resume, Selection};

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

pub const RESUME_KEY: &str = "resume-data";
pub const TEMPLATE_KEY: &str = "selected-template";
pub const FONT_KEY: &str = "selected-font";
pub const LAYOUT_KEY: &str = "selected-layout";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// String key-value storage. Implementations own key namespacing.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_raw(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set_raw(&self, key: &str, value: String) -> Result<(), StoreError>;
}

/// Decodes the value at `key`, falling back to `default` when it is missing or undecodable.
pub async fn load_or_default<T, F>(
    store: &dyn KeyValueStore,
    key: &str,
    default: F,
) -> Result<T, StoreError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let Some(raw) = store.get_raw(key).await? else {
        debug!("No stored value for '{key}', using default");
        return Ok(default());
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(value),
        Err(e) => {
            warn!("Stored value for '{key}' could not be decoded ({e}), using default");
            Ok(default())
        }
    }
}

pub async fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StoreError> {
    let raw = serde_json::to_string(value)?;
    debug!("Saving '{key}' ({} bytes)", raw.len());
    store.set_raw(key, raw).await
}

/// Loads the resume. Skill categories saved before they carried ids get one
/// now, and the normalized resume is written back so the ids stay stable.
pub async fn load_resume(store: &dyn KeyValueStore) -> Result<Resume, StoreError> {
    let mut resume: Resume = load_or_default(store, RESUME_KEY, Resume::default).await?;
    if resume.assign_missing_skill_ids(mint_id) {
        info!("Assigned ids to skill categories from older saved data");
        save_resume(store, &resume).await?;
    }
    Ok(resume)
}

pub async fn save_resume(store: &dyn KeyValueStore, resume: &Resume) -> Result<(), StoreError> {
    save_json(store, RESUME_KEY, resume).await
}

/// Loads the selection. Each choice lives under its own key and falls back on its own.
pub async fn load_selection(store: &dyn KeyValueStore) -> Result<Selection, StoreError> {
    let defaults = Selection::default();
    Ok(Selection {
        template_id: load_or_default(store, TEMPLATE_KEY, || defaults.template_id.clone()).await?,
        font_family: load_or_default(store, FONT_KEY, || defaults.font_family.clone()).await?,
        layout_style: load_or_default(store, LAYOUT_KEY, || defaults.layout_style.clone()).await?,
    })
}

pub async fn save_selection(store: &dyn KeyValueStore, selection: &Selection) -> Result<(), StoreError> {
    save_json(store, TEMPLATE_KEY, &selection.template_id).await?;
    save_json(store, FONT_KEY, &selection.font_family).await?;
    save_json(store, LAYOUT_KEY, &selection.layout_style).await
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Skill;

    #[tokio::test]
    async fn test_empty_store_yields_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_resume(&store).await.unwrap(), Resume::default());
        assert_eq!(load_selection(&store).await.unwrap(), Selection::default());
    }

    #[tokio::test]
    async fn test_corrupt_value_falls_back() {
        let store = MemoryStore::new();
        store
            .set_raw(RESUME_KEY, "{not json".to_string())
            .await
            .unwrap();
        store
            .set_raw(FONT_KEY, "42".to_string())
            .await
            .unwrap();
        assert_eq!(load_resume(&store).await.unwrap(), Resume::default());
        assert_eq!(load_selection(&store).await.unwrap().font_family, "inter");
    }

    #[tokio::test]
    async fn test_selection_keys_are_independent() {
        let store = MemoryStore::new();
        store
            .set_raw(LAYOUT_KEY, "\"compact\"".to_string())
            .await
            .unwrap();
        let selection = load_selection(&store).await.unwrap();
        assert_eq!(selection.layout_style, "compact");
        assert_eq!(selection.template_id, "modern-blue");
    }

    #[tokio::test]
    async fn test_selection_round_trips_as_json_strings() {
        let store = MemoryStore::new();
        let selection = Selection {
            template_id: "minimal-gray".to_string(),
            font_family: "lato".to_string(),
            layout_style: "sidebar-left".to_string(),
        };
        save_selection(&store, &selection).await.unwrap();
        assert_eq!(
            store.get_raw(TEMPLATE_KEY).await.unwrap().as_deref(),
            Some("\"minimal-gray\"")
        );
        assert_eq!(load_selection(&store).await.unwrap(), selection);
    }

    #[tokio::test]
    async fn test_legacy_skills_get_stable_ids() {
        let store = MemoryStore::new();
        store
            .set_raw(
                RESUME_KEY,
                r#"{"skills": [{"category": "Languages", "items": ["Rust"]}]}"#.to_string(),
            )
            .await
            .unwrap();

        let first = load_resume(&store).await.unwrap();
        let id = first.skills[0].id.clone();
        assert!(!id.is_empty());

        let second = load_resume(&store).await.unwrap();
        assert_eq!(second.skills, vec![Skill {
            id,
            category: "Languages".to_string(),
            items: vec!["Rust".to_string()],
        }]);
    }
}

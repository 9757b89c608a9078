//! Key-value persistence for the session and tag lists.
//!
//! Each list is stored as a single JSON array under a fixed key. Loading
//! never fails: a missing record yields the default (no sessions, preset
//! tags), and an unreadable or malformed record yields the same default
//! with a warning. Backends that can keep a copy of the malformed record do
//! so before the next write replaces it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::constants::{DISMISSED_REMINDER_KEY, SESSIONS_KEY, TAGS_KEY};
use crate::error::{ScheduleError, ScheduleResult};
use crate::reminder::DismissedReminder;
use crate::session::Session;
use crate::tag::{Tag, default_tags};

/// A string-keyed, string-valued backend.
///
/// A successful `set` must be visible to the next `get` of the same key.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> ScheduleResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> ScheduleResult<()>;

    /// Copy the raw record under `key` aside. Returns where the copy went,
    /// or `None` if this backend keeps no copies.
    fn back_up(&self, _key: &str) -> ScheduleResult<Option<String>> {
        Ok(None)
    }
}

/// In-process backend.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> ScheduleResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> ScheduleResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Backend storing each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> ScheduleResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(std::fs::read_to_string(&path)?))
    }

    fn set(&mut self, key: &str, value: &str) -> ScheduleResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            ScheduleError::Storage(format!(
                "Could not create data directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.path_for(key);
        let temp = self.dir.join(format!("{key}.json.tmp"));

        std::fs::write(&temp, value)?;
        std::fs::rename(&temp, &path)?;
        Ok(())
    }

    fn back_up(&self, key: &str) -> ScheduleResult<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let backup = self.dir.join(format!("{key}.json.bak"));
        std::fs::copy(&path, &backup)?;
        Ok(Some(backup.display().to_string()))
    }
}

/// Load the session list, or an empty list if none is stored.
pub fn load_sessions(kv: &impl KeyValueStore) -> Vec<Session> {
    load_or(kv, SESSIONS_KEY, Vec::new)
}

/// Load the tag list, or the preset tags if none is stored.
pub fn load_tags(kv: &impl KeyValueStore) -> Vec<Tag> {
    load_or(kv, TAGS_KEY, default_tags)
}

pub fn save_sessions(kv: &mut impl KeyValueStore, sessions: &[Session]) -> ScheduleResult<()> {
    save(kv, SESSIONS_KEY, sessions)
}

pub fn save_tags(kv: &mut impl KeyValueStore, tags: &[Tag]) -> ScheduleResult<()> {
    save(kv, TAGS_KEY, tags)
}

/// The last reminder the user dismissed, if any.
pub fn load_dismissed_reminder(kv: &impl KeyValueStore) -> Option<DismissedReminder> {
    load_record(kv, DISMISSED_REMINDER_KEY)
}

pub fn save_dismissed_reminder(
    kv: &mut impl KeyValueStore,
    record: &DismissedReminder,
) -> ScheduleResult<()> {
    kv.set(DISMISSED_REMINDER_KEY, &serde_json::to_string(record)?)
}

fn load_or<T, F>(kv: &impl KeyValueStore, key: &str, default: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Vec<T>,
{
    load_record(kv, key).unwrap_or_else(default)
}

fn load_record<T: DeserializeOwned>(kv: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = match kv.get(key) {
        Ok(raw) => raw?,
        Err(e) => {
            log::warn!("could not read '{key}', starting from defaults: {e}");
            return None;
        }
    };

    match serde_json::from_str(&raw) {
        Ok(record) => Some(record),
        Err(e) => {
            match kv.back_up(key) {
                Ok(Some(copy)) => log::warn!(
                    "stored '{key}' is malformed, starting from defaults (original kept at {copy}): {e}"
                ),
                Ok(None) => log::warn!("stored '{key}' is malformed, starting from defaults: {e}"),
                Err(backup_err) => log::warn!(
                    "stored '{key}' is malformed, starting from defaults (could not keep a copy: {backup_err}): {e}"
                ),
            }
            None
        }
    }
}

fn save<T: Serialize>(kv: &mut impl KeyValueStore, key: &str, items: &[T]) -> ScheduleResult<()> {
    let json = serde_json::to_string(items)?;
    kv.set(key, &json)?;
    log::debug!("persisted {} item(s) under '{key}'", items.len());
    Ok(())
}

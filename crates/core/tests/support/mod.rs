//! In-memory fake host for store tests.
//!
//! Tracks call counts so tests can assert that rejected inputs never
//! reach the host, and exposes failure switches for the stale-cache
//! policy tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use timeslice_core::store::ports::{
    MissedPromptRepository, SettingsRepository, TimeEntryRepository,
};
use timeslice_core::AppStore;
use timeslice_domain::{
    Category, MissedPrompt, NewTimeEntry, Result, Setting, TimeEntry, TimesliceError,
};

#[derive(Default)]
pub struct FakeHost {
    pub entries: Mutex<Vec<TimeEntry>>,
    pub missed: Mutex<Vec<MissedPrompt>>,
    pub settings: Mutex<HashMap<String, String>>,
    next_id: AtomicI64,

    pub entry_create_calls: AtomicUsize,
    pub entry_update_calls: AtomicUsize,
    pub set_setting_calls: AtomicUsize,

    pub fail_find_entries: AtomicBool,
    pub fail_delete_missed: AtomicBool,
}

impl FakeHost {
    /// Fake host plus a store wired against it.
    pub fn with_store() -> (Arc<Self>, AppStore) {
        let host = Arc::new(Self::default());
        let store = AppStore::new(
            Arc::clone(&host) as Arc<dyn TimeEntryRepository>,
            Arc::clone(&host) as Arc<dyn MissedPromptRepository>,
            Arc::clone(&host) as Arc<dyn SettingsRepository>,
        );
        (host, store)
    }

    pub fn seed_missed(&self, timestamp: i64) {
        self.missed.lock().push(MissedPrompt {
            id: Some(self.next_id.fetch_add(1, Ordering::SeqCst) + 1),
            timestamp,
            reason: None,
            created_at: Some(timestamp),
        });
    }
}

#[async_trait]
impl TimeEntryRepository for FakeHost {
    async fn create(&self, entry: NewTimeEntry) -> Result<i64> {
        self.entry_create_calls.fetch_add(1, Ordering::SeqCst);
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.entries.lock().push(TimeEntry {
            id: Some(id),
            timestamp: entry.timestamp,
            category: entry.category,
            duration_minutes: entry.duration_minutes.unwrap_or(15),
            is_away: entry.is_away,
            is_retroactive: entry.is_retroactive,
            notes: entry.notes,
            created_at: Some(entry.timestamp),
        });
        Ok(id)
    }

    async fn find_in_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<TimeEntry>> {
        if self.fail_find_entries.load(Ordering::SeqCst) {
            return Err(TimesliceError::Database("host unavailable".into()));
        }
        let mut entries: Vec<TimeEntry> = self
            .entries
            .lock()
            .iter()
            .filter(|e| e.timestamp >= start_ts && e.timestamp < end_ts)
            .cloned()
            .collect();
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }

    async fn update(
        &self,
        id: i64,
        category: Option<Category>,
        notes: Option<String>,
    ) -> Result<()> {
        self.entry_update_calls.fetch_add(1, Ordering::SeqCst);
        let mut entries = self.entries.lock();
        let entry = entries
            .iter_mut()
            .find(|e| e.id == Some(id))
            .ok_or_else(|| TimesliceError::NotFound(format!("entry {id}")))?;
        if let Some(category) = category {
            entry.category = category;
        }
        if let Some(notes) = notes {
            entry.notes = Some(notes);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.entries.lock().retain(|e| e.id != Some(id));
        Ok(())
    }
}

#[async_trait]
impl MissedPromptRepository for FakeHost {
    async fn create(&self, timestamp: i64, reason: Option<String>) -> Result<i64> {
        let mut missed = self.missed.lock();
        if missed.iter().any(|m| m.timestamp == timestamp) {
            return Ok(0);
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        missed.push(MissedPrompt {
            id: Some(id),
            timestamp,
            reason,
            created_at: Some(timestamp),
        });
        Ok(id)
    }

    async fn find_in_range(&self, start_ts: i64, end_ts: i64) -> Result<Vec<MissedPrompt>> {
        let mut missed: Vec<MissedPrompt> = self
            .missed
            .lock()
            .iter()
            .filter(|m| m.timestamp >= start_ts && m.timestamp < end_ts)
            .cloned()
            .collect();
        missed.sort_by_key(|m| m.timestamp);
        Ok(missed)
    }

    async fn delete_by_timestamp(&self, timestamp: i64) -> Result<()> {
        if self.fail_delete_missed.load(Ordering::SeqCst) {
            return Err(TimesliceError::Database("host unavailable".into()));
        }
        self.missed.lock().retain(|m| m.timestamp != timestamp);
        Ok(())
    }
}

#[async_trait]
impl SettingsRepository for FakeHost {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.settings.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_setting_calls.fetch_add(1, Ordering::SeqCst);
        self.settings.lock().insert(key.into(), value.into());
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Setting>> {
        Ok(self
            .settings
            .lock()
            .iter()
            .map(|(key, value)| Setting {
                key: key.clone(),
                value: value.clone(),
            })
            .collect())
    }
}

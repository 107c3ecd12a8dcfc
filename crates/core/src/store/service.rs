//! Application store - state container and host orchestration
//!
//! One store instance exists per application process, but nothing here is
//! ambient: the store is constructed with its ports injected so tests can
//! build isolated instances against fakes.
//!
//! Failure policy: load operations replace a cached collection wholesale
//! on success and keep the previous (stale) collection on failure; the
//! error is logged here and also returned so callers can assert on it.
//! Mutations call the host, then reload the affected collection(s); a
//! reload failure after a successful mutation never fails the mutation.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use parking_lot::Mutex;
use timeslice_domain::{
    settings, Category, MissedPrompt, NewTimeEntry, Result, TimeEntry, TimesliceError,
};
use tracing::{debug, error};

use super::ports::{MissedPromptRepository, SettingsRepository, TimeEntryRepository};
use crate::time::day_bounds;

/// Top-level screen selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Prompt,
    Calendar,
    Settings,
}

/// Calendar rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Summary,
    Timeline,
}

#[derive(Debug)]
struct UiState {
    screen: Screen,
    view_mode: ViewMode,
    selected_date: NaiveDate,
    pending_timestamp: Option<i64>,
}

#[derive(Debug, Default)]
struct CacheState {
    entries: Vec<TimeEntry>,
    missed_prompts: Vec<MissedPrompt>,
    settings: HashMap<String, String>,
}

/// Process-wide application state container.
pub struct AppStore {
    entries_repo: Arc<dyn TimeEntryRepository>,
    missed_repo: Arc<dyn MissedPromptRepository>,
    settings_repo: Arc<dyn SettingsRepository>,
    ui: Mutex<UiState>,
    cache: Mutex<CacheState>,
}

impl AppStore {
    /// Create a store starting on today's calendar in timeline mode.
    pub fn new(
        entries_repo: Arc<dyn TimeEntryRepository>,
        missed_repo: Arc<dyn MissedPromptRepository>,
        settings_repo: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self {
            entries_repo,
            missed_repo,
            settings_repo,
            ui: Mutex::new(UiState {
                screen: Screen::Calendar,
                view_mode: ViewMode::Timeline,
                selected_date: Local::now().date_naive(),
                pending_timestamp: None,
            }),
            cache: Mutex::new(CacheState::default()),
        }
    }

    // ------------------------------------------------------------------
    // View/navigation state
    // ------------------------------------------------------------------

    pub fn screen(&self) -> Screen {
        self.ui.lock().screen
    }

    pub fn set_screen(&self, screen: Screen) {
        self.ui.lock().screen = screen;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.ui.lock().view_mode
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        self.ui.lock().view_mode = mode;
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.ui.lock().selected_date
    }

    pub fn set_selected_date(&self, date: NaiveDate) {
        self.ui.lock().selected_date = date;
    }

    /// Change the selected date and reload its collections, the way the
    /// calendar screen does on navigation.
    pub async fn select_date(&self, date: NaiveDate) {
        self.set_selected_date(date);
        let _ = self.load_entries_for_date(date).await;
        let _ = self.load_missed_prompts(date).await;
    }

    pub fn pending_timestamp(&self) -> Option<i64> {
        self.ui.lock().pending_timestamp
    }

    /// A non-null pending timestamp forces the prompt screen.
    pub fn set_pending_timestamp(&self, timestamp: Option<i64>) {
        let mut ui = self.ui.lock();
        ui.pending_timestamp = timestamp;
        if timestamp.is_some() {
            ui.screen = Screen::Prompt;
        }
    }

    /// Dismiss the prompt without logging anything.
    pub fn skip_prompt(&self) {
        let mut ui = self.ui.lock();
        ui.pending_timestamp = None;
        ui.screen = Screen::Calendar;
    }

    // ------------------------------------------------------------------
    // Cached collections
    // ------------------------------------------------------------------

    pub fn entries(&self) -> Vec<TimeEntry> {
        self.cache.lock().entries.clone()
    }

    pub fn missed_prompts(&self) -> Vec<MissedPrompt> {
        self.cache.lock().missed_prompts.clone()
    }

    pub fn settings(&self) -> HashMap<String, String> {
        self.cache.lock().settings.clone()
    }

    /// Cached setting value, falling back to the registry default.
    pub fn setting(&self, key: &str) -> Option<String> {
        self.cache
            .lock()
            .settings
            .get(key)
            .cloned()
            .or_else(|| settings::default_for(key).map(str::to_string))
    }

    // ------------------------------------------------------------------
    // Load operations
    // ------------------------------------------------------------------

    /// Load the day's entries, replacing the cached list on success.
    pub async fn load_entries_for_date(&self, date: NaiveDate) -> Result<()> {
        let (start, end) = day_bounds(date, &Local);
        match self.entries_repo.find_in_range(start, end).await {
            Ok(entries) => {
                debug!(count = entries.len(), %date, "loaded entries");
                self.cache.lock().entries = entries;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, %date, "failed to load entries; keeping cached list");
                Err(err)
            }
        }
    }

    /// Load the day's missed prompts, replacing the cached list on success.
    pub async fn load_missed_prompts(&self, date: NaiveDate) -> Result<()> {
        let (start, end) = day_bounds(date, &Local);
        match self.missed_repo.find_in_range(start, end).await {
            Ok(missed) => {
                self.cache.lock().missed_prompts = missed;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, %date, "failed to load missed prompts; keeping cached list");
                Err(err)
            }
        }
    }

    /// Load all settings into the cached map.
    pub async fn load_settings(&self) -> Result<()> {
        match self.settings_repo.get_all().await {
            Ok(list) => {
                let map = list.into_iter().map(|s| (s.key, s.value)).collect();
                self.cache.lock().settings = map;
                Ok(())
            }
            Err(err) => {
                error!(error = %err, "failed to load settings; keeping cached map");
                Err(err)
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutation operations
    // ------------------------------------------------------------------

    /// Log an interval. Used both for answering a live prompt and for
    /// filling an empty past slot from the editor (`is_retroactive`).
    ///
    /// On success the pending prompt is cleared and the calendar screen
    /// is restored.
    pub async fn create_entry(
        &self,
        timestamp: i64,
        category: Category,
        notes: &str,
        is_retroactive: bool,
    ) -> Result<i64> {
        ensure_notes(notes)?;

        let mut entry = NewTimeEntry::new(timestamp, category).with_notes(notes);
        entry.is_retroactive = is_retroactive;
        let id = self.entries_repo.create(entry).await?;

        let _ = self.load_entries_for_date(self.selected_date()).await;

        let mut ui = self.ui.lock();
        ui.pending_timestamp = None;
        ui.screen = Screen::Calendar;
        Ok(id)
    }

    /// Update category and/or notes of an existing entry, then reload.
    pub async fn update_entry(
        &self,
        id: i64,
        category: Option<Category>,
        notes: Option<&str>,
    ) -> Result<()> {
        if let Some(notes) = notes {
            ensure_notes(notes)?;
        }

        self.entries_repo
            .update(id, category, notes.map(str::to_string))
            .await?;
        let _ = self.load_entries_for_date(self.selected_date()).await;
        Ok(())
    }

    /// Delete an entry, then reload the day.
    pub async fn delete_entry(&self, id: i64) -> Result<()> {
        self.entries_repo.delete(id).await?;
        let _ = self.load_entries_for_date(self.selected_date()).await;
        Ok(())
    }

    /// Write a setting, then reload the cached map.
    ///
    /// Values for recognized keys are validated against the registry
    /// before the host call; the settings screen only offers these.
    pub async fn update_setting(&self, key: &str, value: &str) -> Result<()> {
        if !settings::validate(key, value) {
            return Err(TimesliceError::InvalidInput(format!(
                "invalid value {value:?} for setting {key:?}"
            )));
        }

        self.settings_repo.set(key, value).await?;
        let _ = self.load_settings().await;
        Ok(())
    }

    /// Backfill a missed prompt: create the retroactive entry, delete the
    /// missed-prompt record, then reload both collections.
    ///
    /// The two host calls are sequential, not transactional. If the
    /// create succeeds and the delete fails, the missed prompt stays
    /// visible alongside the new entry until it is filled or deleted
    /// again; an accepted inconsistency window.
    pub async fn fill_missed_prompt(
        &self,
        timestamp: i64,
        category: Category,
        notes: &str,
    ) -> Result<()> {
        ensure_notes(notes)?;

        let entry = NewTimeEntry::new(timestamp, category)
            .with_notes(notes)
            .retroactive();
        self.entries_repo.create(entry).await?;
        self.missed_repo.delete_by_timestamp(timestamp).await?;

        let date = self.selected_date();
        let _ = self.load_entries_for_date(date).await;
        let _ = self.load_missed_prompts(date).await;
        Ok(())
    }
}

/// The UI contract requires notes; reject blank ones before any host call.
fn ensure_notes(notes: &str) -> Result<()> {
    if notes.trim().is_empty() {
        Err(TimesliceError::InvalidInput("notes are required".into()))
    } else {
        Ok(())
    }
}

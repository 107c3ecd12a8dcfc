//! SQLite persistence for the Timeslice host boundary.

mod manager;
mod missed_prompt_repository;
mod settings_repository;
mod time_entry_repository;

pub use manager::{DbConnection, DbManager};
pub use missed_prompt_repository::SqliteMissedPromptRepository;
pub use settings_repository::SqliteSettingsRepository;
pub use time_entry_repository::SqliteTimeEntryRepository;

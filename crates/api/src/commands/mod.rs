//! Host commands - the persistence/command boundary
//!
//! One async function per operation, with the argument shapes the desktop
//! shell invokes. Thin wrappers over the repository ports plus structured
//! execution logging.

mod export;
mod settings;
mod time_entry;

pub use export::{export_entries_for_range, export_entries_to_csv, export_file_name};
pub use settings::{get_all_settings, get_setting, set_setting};
pub use time_entry::{
    create_missed_prompt, create_time_entry, delete_missed_prompt, delete_time_entry,
    get_entries_for_date, get_missed_prompts, update_time_entry,
};

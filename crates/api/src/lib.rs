//! # Timeslice App
//!
//! Application layer - host command surface and entry point wiring.
//!
//! This crate contains:
//! - Host commands (the persistence/command boundary)
//! - Application context (dependency injection)
//! - Inbound tracker event handling
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires up the hexagonal architecture
//! - Provides the request/response surface a desktop shell would invoke

pub mod commands;
pub mod context;
pub mod events;
pub mod utils;

// Re-export for convenience
pub use commands::{
    create_missed_prompt, create_time_entry, delete_missed_prompt, delete_time_entry,
    export_entries_for_range, export_entries_to_csv, export_file_name, get_all_settings,
    get_entries_for_date, get_missed_prompts, get_setting, set_setting, update_time_entry,
};
pub use context::AppContext;

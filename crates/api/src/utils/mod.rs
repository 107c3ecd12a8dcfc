//! Shared helpers for the command surface.

pub mod logging;

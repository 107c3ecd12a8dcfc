//! Application store: navigation state, cached collections and the
//! orchestration methods that drive the persistence host.

pub mod ports;
mod service;

pub use service::{AppStore, Screen, ViewMode};

//! Shared context setup for integration tests.

use std::sync::Arc;

use tempfile::TempDir;
use timeslice_domain::{Config, DatabaseConfig};
use timeslice_lib::AppContext;

/// Create a test context backed by a fresh temporary database.
///
/// The scheduler is wired but not started, so tests drive events
/// explicitly.
pub async fn setup_test_context() -> (Arc<AppContext>, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temporary database directory");
    let db_path = temp_dir.path().join("timeslice.db");

    let config = Config {
        database: DatabaseConfig {
            path: db_path.to_string_lossy().into_owned(),
            pool_size: 4,
        },
    };

    let ctx = AppContext::new_with_config(config)
        .await
        .expect("failed to create test context");

    (ctx, temp_dir)
}

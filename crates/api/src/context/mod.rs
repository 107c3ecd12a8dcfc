//! Application context - dependency injection container

use std::sync::Arc;

use timeslice_core::store::ports::{
    CsvExporter, MissedPromptRepository, SettingsRepository, TimeEntryRepository,
};
use timeslice_core::tracking::ports::{IdleProbe, Notifier};
use timeslice_core::AppStore;
use timeslice_domain::{Config, Result, TimesliceError};
use timeslice_infra::{
    loader, CsvExportService, DbManager, LogNotifier, PromptScheduler,
    SchedulerCommand, SqliteMissedPromptRepository, SqliteSettingsRepository,
    SqliteTimeEntryRepository, SystemIdleProbe, TrackerEvent,
};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::events::handle_tracker_event;

/// Type alias for time entry repository trait object
type DynTimeEntryRepository = dyn TimeEntryRepository + 'static;

/// Type alias for missed prompt repository trait object
type DynMissedPromptRepository = dyn MissedPromptRepository + 'static;

/// Type alias for settings repository trait object
type DynSettingsRepository = dyn SettingsRepository + 'static;

/// Type alias for CSV exporter trait object
type DynCsvExporter = dyn CsvExporter + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    // Core services
    pub config: Config,
    pub db: Arc<DbManager>,
    pub time_entries: Arc<DynTimeEntryRepository>,
    pub missed_prompts: Arc<DynMissedPromptRepository>,
    pub settings: Arc<DynSettingsRepository>,
    pub exporter: Arc<DynCsvExporter>,
    pub store: Arc<AppStore>,

    // Prompt scheduler and its command handle
    scheduler: Mutex<PromptScheduler>,
    scheduler_commands: mpsc::Sender<SchedulerCommand>,
    events_rx: Mutex<Option<mpsc::Receiver<TrackerEvent>>>,
    pump_handle: Mutex<Option<JoinHandle<()>>>,
}

impl AppContext {
    /// Build the context from the probed configuration.
    pub async fn new() -> Result<Arc<Self>> {
        Self::new_with_config(loader::load()).await
    }

    /// Build the context from an explicit configuration.
    ///
    /// Opens the database, runs migrations, wires the repositories, the
    /// store and the scheduler, and primes the store's caches. The
    /// scheduler does not tick until [`start`](Self::start).
    pub async fn new_with_config(config: Config) -> Result<Arc<Self>> {
        let db = Arc::new(DbManager::new(
            &config.database.path,
            config.database.pool_size,
        )?);
        db.run_migrations()?;

        let settings_repo = SqliteSettingsRepository::new(Arc::clone(&db));
        let initial_interval = settings_repo.interval_minutes().await;

        let time_entries: Arc<DynTimeEntryRepository> =
            Arc::new(SqliteTimeEntryRepository::new(Arc::clone(&db)));
        let missed_prompts: Arc<DynMissedPromptRepository> =
            Arc::new(SqliteMissedPromptRepository::new(Arc::clone(&db)));
        let settings: Arc<DynSettingsRepository> = Arc::new(settings_repo);
        let exporter: Arc<DynCsvExporter> = Arc::new(CsvExportService::new(Arc::clone(&db)));

        let store = Arc::new(AppStore::new(
            Arc::clone(&time_entries),
            Arc::clone(&missed_prompts),
            Arc::clone(&settings),
        ));

        // Initial snapshot: settings plus today's collections. Failures
        // degrade to empty caches.
        let _ = store.load_settings().await;
        let today = store.selected_date();
        let _ = store.load_entries_for_date(today).await;
        let _ = store.load_missed_prompts(today).await;

        let idle_probe: Arc<dyn IdleProbe> = Arc::new(SystemIdleProbe::new());
        let notifier: Arc<dyn Notifier> = Arc::new(LogNotifier::new());
        let (events_tx, events_rx) = mpsc::channel(32);

        let scheduler = PromptScheduler::new(
            Arc::clone(&time_entries),
            Arc::clone(&settings),
            idle_probe,
            notifier,
            events_tx,
            initial_interval,
        );
        let scheduler_commands = scheduler.command_sender();

        info!(
            db_path = %config.database.path,
            interval_minutes = initial_interval,
            "application context initialised"
        );

        Ok(Arc::new(Self {
            config,
            db,
            time_entries,
            missed_prompts,
            settings,
            exporter,
            store,
            scheduler: Mutex::new(scheduler),
            scheduler_commands,
            events_rx: Mutex::new(Some(events_rx)),
            pump_handle: Mutex::new(None),
        }))
    }

    /// Start the prompt scheduler and the tracker event pump.
    pub async fn start(&self) -> Result<()> {
        let mut events_rx = self
            .events_rx
            .lock()
            .await
            .take()
            .ok_or_else(|| TimesliceError::Internal("context already started".into()))?;

        let store = Arc::clone(&self.store);
        let missed = Arc::clone(&self.missed_prompts);
        let pump = tokio::spawn(async move {
            while let Some(event) = events_rx.recv().await {
                handle_tracker_event(&store, &missed, event).await;
            }
        });
        *self.pump_handle.lock().await = Some(pump);

        self.scheduler.lock().await.start().await
    }

    /// Stop the scheduler and drain the event pump.
    pub async fn shutdown(&self) {
        self.scheduler.lock().await.stop().await;
        if let Some(pump) = self.pump_handle.lock().await.take() {
            if let Err(err) = pump.await {
                warn!(error = %err, "event pump did not shut down cleanly");
            }
        }
        info!("application context shut down");
    }

    /// Re-arm the prompt scheduler with a new interval.
    pub fn update_interval(&self, minutes: u64) {
        if let Err(err) = self
            .scheduler_commands
            .try_send(SchedulerCommand::UpdateInterval(minutes))
        {
            warn!(error = %err, minutes, "failed to send interval update to scheduler");
        }
    }
}

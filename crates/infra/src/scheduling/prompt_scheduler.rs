//! Prompt interval scheduler.
//!
//! Fires once per configured interval, aligned to wall-clock interval
//! boundaries. Each firing covers the interval that just elapsed: the
//! emitted timestamp is the previous interval's start.
//!
//! While the user is idle past the configured threshold the scheduler
//! logs `away` entries directly instead of prompting; the transition back
//! to activity emits a `ReturnFromAway` event.

use std::sync::Arc;

use timeslice_core::store::ports::{SettingsRepository, TimeEntryRepository};
use timeslice_core::{align_timestamp, IdleProbe, Notifier};
use timeslice_domain::{settings, NewTimeEntry, Result, TimesliceError};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

const NOTIFICATION_TITLE: &str = "Timeslice";
const NOTIFICATION_BODY: &str = "What did you work on in the last session?";

/// Events emitted towards the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    /// A prompt is due for the interval starting at `timestamp`.
    PromptDue { timestamp: i64 },
    /// The user came back after an idle stretch.
    ReturnFromAway { away_start: i64, away_end: i64 },
}

impl TrackerEvent {
    /// Wire name a desktop shell would subscribe to.
    pub fn name(&self) -> &'static str {
        match self {
            TrackerEvent::PromptDue { .. } => timeslice_domain::constants::EVENT_PROMPT_TIME_ENTRY,
            TrackerEvent::ReturnFromAway { .. } => {
                timeslice_domain::constants::EVENT_RETURN_FROM_AWAY
            }
        }
    }
}

/// Commands accepted by a running scheduler.
#[derive(Debug, Clone, Copy)]
pub enum SchedulerCommand {
    /// Re-arm the ticker with a new interval, in minutes.
    UpdateInterval(u64),
}

/// Type alias for task handle to avoid complexity warnings
type TaskHandle = Mutex<Option<JoinHandle<()>>>;

struct SchedulerCtx {
    entries: Arc<dyn TimeEntryRepository>,
    settings: Arc<dyn SettingsRepository>,
    idle_probe: Arc<dyn IdleProbe>,
    notifier: Arc<dyn Notifier>,
    events: mpsc::Sender<TrackerEvent>,
}

/// Interval timer that drives prompts, auto-away logging and
/// return-from-away events.
pub struct PromptScheduler {
    ctx: Option<SchedulerCtx>,
    initial_interval_minutes: u64,
    command_tx: mpsc::Sender<SchedulerCommand>,
    command_rx: Option<mpsc::Receiver<SchedulerCommand>>,
    cancellation_token: CancellationToken,
    task_handle: TaskHandle,
}

impl PromptScheduler {
    /// Create a scheduler; it does nothing until [`start`](Self::start).
    pub fn new(
        entries: Arc<dyn TimeEntryRepository>,
        settings: Arc<dyn SettingsRepository>,
        idle_probe: Arc<dyn IdleProbe>,
        notifier: Arc<dyn Notifier>,
        events: mpsc::Sender<TrackerEvent>,
        initial_interval_minutes: u64,
    ) -> Self {
        let (command_tx, command_rx) = mpsc::channel(8);
        Self {
            ctx: Some(SchedulerCtx {
                entries,
                settings,
                idle_probe,
                notifier,
                events,
            }),
            initial_interval_minutes: initial_interval_minutes.max(1),
            command_tx,
            command_rx: Some(command_rx),
            cancellation_token: CancellationToken::new(),
            task_handle: Mutex::new(None),
        }
    }

    /// Handle for sending commands to the running loop.
    pub fn command_sender(&self) -> mpsc::Sender<SchedulerCommand> {
        self.command_tx.clone()
    }

    /// Spawn the timer loop. Fails if already started.
    pub async fn start(&mut self) -> Result<()> {
        let ctx = self
            .ctx
            .take()
            .ok_or_else(|| TimesliceError::Internal("scheduler already started".into()))?;
        let commands = self
            .command_rx
            .take()
            .ok_or_else(|| TimesliceError::Internal("scheduler already started".into()))?;

        let cancel = self.cancellation_token.clone();
        let interval_minutes = self.initial_interval_minutes;

        let handle = tokio::spawn(async move {
            run_loop(ctx, interval_minutes, commands, cancel).await;
        });

        *self.task_handle.lock().await = Some(handle);
        info!(interval_minutes, "prompt scheduler started");
        Ok(())
    }

    /// Cancel the loop and wait for it to finish.
    pub async fn stop(&self) {
        self.cancellation_token.cancel();
        if let Some(handle) = self.task_handle.lock().await.take() {
            if let Err(err) = handle.await {
                warn!(error = %err, "prompt scheduler task did not shut down cleanly");
            }
        }
        info!("prompt scheduler stopped");
    }
}

async fn run_loop(
    ctx: SchedulerCtx,
    mut interval_minutes: u64,
    mut commands: mpsc::Receiver<SchedulerCommand>,
    cancel: CancellationToken,
) {
    // Wait out the partial interval so ticks land on boundaries.
    let initial_delay = seconds_until_boundary(chrono::Local::now().timestamp(), interval_minutes);
    if initial_delay > 0 {
        tokio::select! {
            () = sleep(Duration::from_secs(initial_delay)) => {}
            () = cancel.cancelled() => return,
        }
    }

    let mut ticker = make_ticker(interval_minutes);
    let mut idle_start: Option<i64> = None;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                tick(&ctx, interval_minutes, &mut idle_start).await;
            }
            Some(cmd) = commands.recv() => {
                match cmd {
                    SchedulerCommand::UpdateInterval(new_interval) => {
                        interval_minutes = new_interval.max(1);
                        ticker = make_ticker(interval_minutes);
                        debug!(interval_minutes, "prompt interval updated");
                    }
                }
            }
            () = cancel.cancelled() => break,
        }
    }
}

async fn tick(ctx: &SchedulerCtx, interval_minutes: u64, idle_start: &mut Option<i64>) {
    let idle_threshold = read_u32_setting(
        ctx,
        settings::IDLE_THRESHOLD_MINUTES,
        settings::DEFAULT_IDLE_THRESHOLD_MINUTES,
    )
    .await;
    let notification_enabled = read_setting(ctx, settings::NOTIFICATION_ENABLED)
        .await
        .map_or(true, |v| v == "true");
    let notification_sound = read_setting(ctx, settings::NOTIFICATION_SOUND)
        .await
        .unwrap_or_else(|| "default".to_string());

    let interval_seconds = interval_minutes as i64 * 60;
    let now = chrono::Local::now().timestamp();
    // Prompt covers the interval that just ended.
    let aligned_timestamp = align_timestamp(now, interval_minutes as i64) - interval_seconds;

    if ctx.idle_probe.is_idle(idle_threshold) {
        if idle_start.is_none() {
            *idle_start = Some(aligned_timestamp);
        }
        // Log the slot as away instead of prompting.
        let away = NewTimeEntry::away(aligned_timestamp, interval_minutes as i32);
        if let Err(err) = ctx.entries.create(away).await {
            warn!(error = %err, timestamp = aligned_timestamp, "failed to record away entry");
        }
        return;
    }

    if let Some(away_start) = idle_start.take() {
        send_event(
            ctx,
            TrackerEvent::ReturnFromAway {
                away_start,
                away_end: aligned_timestamp,
            },
        )
        .await;
    }

    if notification_enabled {
        ctx.notifier
            .notify(NOTIFICATION_TITLE, NOTIFICATION_BODY, &notification_sound);
    }

    send_event(
        ctx,
        TrackerEvent::PromptDue {
            timestamp: aligned_timestamp,
        },
    )
    .await;
}

async fn send_event(ctx: &SchedulerCtx, event: TrackerEvent) {
    debug!(event = event.name(), "emitting tracker event");
    if let Err(err) = ctx.events.send(event).await {
        warn!(error = %err, "tracker event receiver dropped");
    }
}

async fn read_setting(ctx: &SchedulerCtx, key: &str) -> Option<String> {
    match ctx.settings.get(key).await {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, key, "failed to read setting");
            None
        }
    }
}

async fn read_u32_setting(ctx: &SchedulerCtx, key: &str, default: u32) -> u32 {
    read_setting(ctx, key)
        .await
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn make_ticker(interval_minutes: u64) -> tokio::time::Interval {
    let mut ticker = interval(Duration::from_secs(interval_minutes * 60));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

/// Seconds until the next wall-clock interval boundary; zero when already
/// on one.
fn seconds_until_boundary(now_ts: i64, interval_minutes: u64) -> u64 {
    let interval_seconds = interval_minutes as i64 * 60;
    let into_interval = now_ts.rem_euclid(interval_seconds);
    if into_interval == 0 {
        0
    } else {
        (interval_seconds - into_interval) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_delay_is_zero_on_a_boundary() {
        assert_eq!(seconds_until_boundary(900, 15), 0);
        assert_eq!(seconds_until_boundary(0, 15), 0);
    }

    #[test]
    fn boundary_delay_counts_to_the_next_slot() {
        assert_eq!(seconds_until_boundary(901, 15), 899);
        assert_eq!(seconds_until_boundary(1799, 15), 1);
        assert_eq!(seconds_until_boundary(60, 1), 0);
        assert_eq!(seconds_until_boundary(61, 1), 59);
    }
}

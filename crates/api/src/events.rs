//! Inbound tracker event handling.
//!
//! The scheduler emits `prompt-time-entry` and `return-from-away` events;
//! this module applies them to the store.

use std::sync::Arc;

use timeslice_core::store::ports::MissedPromptRepository;
use timeslice_core::AppStore;
use timeslice_infra::TrackerEvent;
use tracing::{error, info};

/// Reason recorded when a prompt goes unanswered past its interval.
const UNANSWERED_REASON: &str = "prompt not answered";

/// Apply one tracker event to the application state.
pub async fn handle_tracker_event(
    store: &AppStore,
    missed_prompts: &Arc<dyn MissedPromptRepository>,
    event: TrackerEvent,
) {
    match event {
        TrackerEvent::PromptDue { timestamp } => {
            // A prompt still pending when the next one fires was missed:
            // record it so the backfill panel can offer the slot.
            if let Some(previous) = store.pending_timestamp() {
                if previous != timestamp {
                    match missed_prompts
                        .create(previous, Some(UNANSWERED_REASON.into()))
                        .await
                    {
                        Ok(_) => {
                            let _ = store.load_missed_prompts(store.selected_date()).await;
                        }
                        Err(err) => {
                            error!(error = %err, timestamp = previous, "failed to record missed prompt");
                        }
                    }
                }
            }
            store.set_pending_timestamp(Some(timestamp));
        }
        TrackerEvent::ReturnFromAway {
            away_start,
            away_end,
        } => {
            // Extension point: a dedicated backfill UI for the away
            // stretch is not implemented. The slots themselves were
            // already logged as away by the scheduler.
            info!(away_start, away_end, "returned from away");
        }
    }
}

//! Background scheduling for the prompt interval timer.

mod prompt_scheduler;

pub use prompt_scheduler::{PromptScheduler, SchedulerCommand, TrackerEvent};

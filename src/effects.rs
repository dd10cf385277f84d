//! Side effects requested by session transitions. The controller executes
//! them; deciding which ones happen stays here so it can be tested natively.

use crate::config::Endpoints;
use crate::session::{LookupOutcome, ProgressOutcome, StartOutcome};

pub const LOOKUP_FAILED: &str = "Could not find video. Please check the URL.";
pub const START_FAILED: &str = "Could not start the download. Please try again.";
pub const JOB_FAILED: &str = "Download failed. Please try again.";
pub const CLIPBOARD_DENIED: &str = "Please allow clipboard permissions or paste manually.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Alert(&'static str),
    /// Open the progress channel for an accepted job.
    Subscribe { job_id: String },
    CloseStream,
    /// Full-page navigation, used for the file download.
    Navigate(String),
    ScheduleReset { after_ms: u32 },
    CancelReset,
    ResetSession,
}

pub fn after_lookup(outcome: &LookupOutcome) -> Vec<Effect> {
    match outcome {
        LookupOutcome::Failed(_) => vec![Effect::Alert(LOOKUP_FAILED)],
        LookupOutcome::Applied | LookupOutcome::Stale => Vec::new(),
    }
}

pub fn after_start(outcome: &StartOutcome) -> Vec<Effect> {
    match outcome {
        StartOutcome::Subscribe { job_id } => vec![Effect::Subscribe { job_id: job_id.clone() }],
        StartOutcome::Failed(_) => vec![Effect::Alert(START_FAILED)],
        StartOutcome::Stale => Vec::new(),
    }
}

pub fn after_progress(outcome: &ProgressOutcome, endpoints: &Endpoints, reset_delay_ms: u32) -> Vec<Effect> {
    match outcome {
        ProgressOutcome::Updated | ProgressOutcome::Ignored => Vec::new(),
        ProgressOutcome::Failed => vec![Effect::CloseStream, Effect::Alert(JOB_FAILED)],
        ProgressOutcome::Completed { job_id } => vec![
            Effect::CloseStream,
            Effect::Navigate(endpoints.file(job_id)),
            Effect::ScheduleReset { after_ms: reset_delay_ms },
        ],
    }
}

/// The post-completion delay elapsed.
pub fn on_reset_due() -> Vec<Effect> {
    vec![Effect::CancelReset, Effect::CloseStream, Effect::ResetSession]
}

/// Nothing may outlive the view.
pub fn on_teardown() -> Vec<Effect> {
    vec![Effect::CloseStream, Effect::CancelReset]
}

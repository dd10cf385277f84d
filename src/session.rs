//! Client session state and the only functions allowed to change it.
//!
//! Every async operation (metadata lookup, job start) is tagged with a
//! [`RequestToken`] when issued; a response is applied only if its token is
//! still the latest one for that operation.

use crate::error::ApiError;
use crate::platform::detect_platform;
use crate::types::{DownloadRequest, Job, JobStatus, MediaFormat, Platform, ProgressEvent, VideoInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

#[derive(Debug, Default)]
struct Sequencer {
    latest: u64,
}

impl Sequencer {
    fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }

    fn invalidate(&mut self) {
        self.latest += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Input,
    Select,
    Progress,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub url: String,
    pub platform: Option<Platform>,
    pub loading: bool,
    pub info: Option<VideoInfo>,
    pub selected_quality: String,
    pub format: MediaFormat,
    pub job: Option<Job>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub token: RequestToken,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadTicket {
    pub token: RequestToken,
    pub request: DownloadRequest,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Applied,
    Failed(ApiError),
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// The backend accepted the job; open its progress stream.
    Subscribe { job_id: String },
    Failed(ApiError),
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressOutcome {
    Updated,
    Completed { job_id: String },
    Failed,
    /// Message for a job that is not active or already finished.
    Ignored,
}

#[derive(Debug, Default)]
pub struct Session {
    state: SessionState,
    lookups: Sequencer,
    starts: Sequencer,
    last_job_id: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        if self.state.job.is_some() {
            Screen::Progress
        } else if self.state.info.is_some() {
            Screen::Select
        } else {
            Screen::Input
        }
    }

    /// Editing the link while a lookup is pending abandons that lookup, so
    /// metadata is only ever applied for the URL it was fetched for.
    pub fn set_url(&mut self, url: impl Into<String>) {
        let url = url.into();
        if self.state.loading && url != self.state.url {
            self.lookups.invalidate();
            self.state.loading = false;
        }
        self.state.url = url;
        self.state.platform = detect_platform(&self.state.url);
    }

    pub fn toggle_format(&mut self) {
        self.state.format = self.state.format.toggled();
    }

    pub fn select_quality(&mut self, quality: impl Into<String>) {
        self.state.selected_quality = quality.into();
    }

    /// Start a metadata lookup. Returns `None` (and changes nothing) when
    /// there is no URL to look up.
    pub fn begin_lookup(&mut self) -> Option<LookupTicket> {
        let url = self.state.url.trim();
        if url.is_empty() {
            return None;
        }
        let url = url.to_string();
        self.state.loading = true;
        self.state.info = None;
        Some(LookupTicket {
            token: self.lookups.issue(),
            url,
        })
    }

    pub fn finish_lookup(
        &mut self,
        token: RequestToken,
        result: Result<VideoInfo, ApiError>,
    ) -> LookupOutcome {
        if !self.lookups.is_current(token) {
            return LookupOutcome::Stale;
        }
        self.state.loading = false;
        match result {
            Ok(info) => {
                self.state.selected_quality = info.qualities.first().cloned().unwrap_or_default();
                self.state.info = Some(info);
                LookupOutcome::Applied
            }
            Err(err) => {
                self.state.info = None;
                LookupOutcome::Failed(err)
            }
        }
    }

    /// Create the job for the current selection. `now_ms` is wall-clock
    /// milliseconds; ids stay strictly increasing even if the clock does not.
    pub fn begin_download(&mut self, now_ms: u64) -> Option<DownloadTicket> {
        let info = self.state.info.as_ref()?;
        if self.state.job.as_ref().is_some_and(|job| !job.status.is_terminal()) {
            return None;
        }

        self.last_job_id = now_ms.max(self.last_job_id + 1);
        let job_id = self.last_job_id.to_string();
        let request = DownloadRequest {
            url: self.state.url.trim().to_string(),
            quality: self.state.selected_quality.clone(),
            job_id: job_id.clone(),
            title: info.title.clone(),
            format: self.state.format,
        };
        self.state.job = Some(Job::new(job_id, info.title.clone()));

        Some(DownloadTicket {
            token: self.starts.issue(),
            request,
        })
    }

    pub fn finish_download_start(
        &mut self,
        token: RequestToken,
        result: Result<(), ApiError>,
    ) -> StartOutcome {
        if !self.starts.is_current(token) {
            return StartOutcome::Stale;
        }
        let Some(job) = self.state.job.as_ref() else {
            return StartOutcome::Stale;
        };
        match result {
            Ok(()) => StartOutcome::Subscribe { job_id: job.id.clone() },
            Err(err) => {
                self.state.job = None;
                StartOutcome::Failed(err)
            }
        }
    }

    pub fn apply_progress(&mut self, job_id: &str, event: ProgressEvent) -> ProgressOutcome {
        let Some(job) = self.active_job_mut(job_id) else {
            return ProgressOutcome::Ignored;
        };

        match event.status {
            JobStatus::Error => {
                job.status = JobStatus::Error;
                ProgressOutcome::Failed
            }
            JobStatus::Done => {
                job.status = JobStatus::Done;
                job.progress = 100.0;
                ProgressOutcome::Completed { job_id: job.id.clone() }
            }
            status => {
                job.status = status;
                if let Some(p) = event.progress.filter(|p| p.is_finite()) {
                    job.progress = p.clamp(0.0, 100.0);
                }
                ProgressOutcome::Updated
            }
        }
    }

    /// The progress channel for `job_id` went away for good.
    pub fn stream_lost(&mut self, job_id: &str) -> ProgressOutcome {
        match self.active_job_mut(job_id) {
            Some(job) => {
                job.status = JobStatus::Error;
                ProgressOutcome::Failed
            }
            None => ProgressOutcome::Ignored,
        }
    }

    /// Clear a finished or failed job and return to the selection screen.
    pub fn dismiss_job(&mut self) {
        if self.state.job.as_ref().is_some_and(|job| job.status.is_terminal()) {
            self.state.job = None;
        }
    }

    /// Back to the freshly-mounted state. Responses still in flight are
    /// discarded when they arrive.
    pub fn reset(&mut self) {
        self.state = SessionState::default();
        self.lookups.invalidate();
        self.starts.invalidate();
    }

    fn active_job_mut(&mut self, job_id: &str) -> Option<&mut Job> {
        self.state
            .job
            .as_mut()
            .filter(|job| job.id == job_id && !job.status.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(qualities: &[&str]) -> VideoInfo {
        VideoInfo {
            title: "Never Gonna Give You Up".into(),
            thumbnail: "https://i.ytimg.com/vi/x/hq.jpg".into(),
            preview: None,
            qualities: qualities.iter().map(|q| q.to_string()).collect(),
        }
    }

    fn event(status: &str, progress: Option<f64>) -> ProgressEvent {
        ProgressEvent { status: JobStatus::from(status.to_string()), progress }
    }

    /// Session with metadata loaded and a started job; returns the job id.
    fn session_with_job() -> (Session, String) {
        let mut s = Session::new();
        s.set_url("https://youtu.be/dQw4w9WgXcQ");
        let lookup = s.begin_lookup().unwrap();
        s.finish_lookup(lookup.token, Ok(info(&["1080", "720"])));
        let ticket = s.begin_download(1_700_000_000_000).unwrap();
        let outcome = s.finish_download_start(ticket.token, Ok(()));
        let StartOutcome::Subscribe { job_id } = outcome else {
            panic!("unexpected {outcome:?}");
        };
        (s, job_id)
    }

    #[test]
    fn url_changes_reclassify_platform() {
        let mut s = Session::new();
        s.set_url("https://www.instagram.com/reel/abc");
        assert_eq!(s.state().platform, Some(Platform::Instagram));
        s.set_url("https://example.com");
        assert_eq!(s.state().platform, None);
        s.set_url("");
        assert_eq!(s.state().platform, None);
    }

    #[test]
    fn empty_url_lookup_is_noop() {
        let mut s = Session::new();
        assert_eq!(s.begin_lookup(), None);
        assert!(!s.state().loading);
        s.set_url("   ");
        assert_eq!(s.begin_lookup(), None);
        assert!(!s.state().loading);
    }

    #[test]
    fn successful_lookup_selects_first_quality() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/x");
        let t = s.begin_lookup().unwrap();
        assert!(s.state().loading);
        assert_eq!(s.finish_lookup(t.token, Ok(info(&["1080", "720", "360"]))), LookupOutcome::Applied);
        assert_eq!(s.state().selected_quality, "1080");
        assert!(!s.state().loading);
        assert_eq!(s.screen(), Screen::Select);
    }

    #[test]
    fn failed_lookup_clears_state() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/x");
        let t = s.begin_lookup().unwrap();
        let out = s.finish_lookup(t.token, Err(ApiError::Status(404)));
        assert_eq!(out, LookupOutcome::Failed(ApiError::Status(404)));
        assert!(!s.state().loading);
        assert_eq!(s.state().info, None);
        assert_eq!(s.screen(), Screen::Input);
    }

    #[test]
    fn stale_lookup_response_is_discarded() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/first");
        let first = s.begin_lookup().unwrap();
        s.set_url("https://youtu.be/second");
        let second = s.begin_lookup().unwrap();

        assert_eq!(s.finish_lookup(second.token, Ok(info(&["720"]))), LookupOutcome::Applied);
        assert_eq!(s.finish_lookup(first.token, Ok(info(&["144"]))), LookupOutcome::Stale);
        assert_eq!(s.state().selected_quality, "720");
    }

    #[test]
    fn url_edit_during_lookup_discards_response() {
        let mut s = Session::new();
        s.set_url("https://www.youtube.com/watch?v=AAAA");
        let pending = s.begin_lookup().unwrap();
        s.set_url("https://www.instagram.com/reel/BBBB/");
        assert!(!s.state().loading);

        assert_eq!(s.finish_lookup(pending.token, Ok(info(&["720"]))), LookupOutcome::Stale);
        assert_eq!(s.state().info, None);
        assert_eq!(s.begin_download(1), None);
        assert_eq!(s.screen(), Screen::Input);

        // A fresh lookup for the new link pairs metadata with that link.
        let fresh = s.begin_lookup().unwrap();
        assert_eq!(fresh.url, "https://www.instagram.com/reel/BBBB/");
        s.finish_lookup(fresh.token, Ok(info(&["720"])));
        let ticket = s.begin_download(2).unwrap();
        assert_eq!(ticket.request.url, fresh.url);
    }

    #[test]
    fn same_url_keystroke_keeps_lookup() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/x");
        let pending = s.begin_lookup().unwrap();
        s.set_url("https://youtu.be/x");
        assert!(s.state().loading);
        assert_eq!(s.finish_lookup(pending.token, Ok(info(&["720"]))), LookupOutcome::Applied);
    }

    #[test]
    fn download_request_snapshots_selection() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/x");
        let t = s.begin_lookup().unwrap();
        s.finish_lookup(t.token, Ok(info(&["1080", "720"])));
        s.select_quality("720");
        s.toggle_format();

        let ticket = s.begin_download(42).unwrap();
        assert_eq!(ticket.request.quality, "720");
        assert_eq!(ticket.request.format, MediaFormat::Audio);
        assert_eq!(ticket.request.job_id, "42");
        assert_eq!(ticket.request.title, "Never Gonna Give You Up");

        let job = s.state().job.as_ref().unwrap();
        assert_eq!(job.status, JobStatus::Starting);
        assert_eq!(s.screen(), Screen::Progress);
    }

    #[test]
    fn only_one_active_job() {
        let (mut s, _) = session_with_job();
        assert_eq!(s.begin_download(1_700_000_000_001), None);
    }

    #[test]
    fn job_ids_increase_on_clock_ties() {
        let (mut s, job_id) = session_with_job();
        s.apply_progress(&job_id, event("error", None));
        let next = s.begin_download(1_700_000_000_000).unwrap();
        assert_eq!(next.request.job_id, "1700000000001");
        // The errored job was superseded.
        assert_eq!(s.state().job.as_ref().unwrap().status, JobStatus::Starting);
    }

    #[test]
    fn failed_start_discards_job() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/x");
        let t = s.begin_lookup().unwrap();
        s.finish_lookup(t.token, Ok(info(&["720"])));
        let ticket = s.begin_download(7).unwrap();

        let out = s.finish_download_start(ticket.token, Err(ApiError::Network("offline".into())));
        assert_eq!(out, StartOutcome::Failed(ApiError::Network("offline".into())));
        assert_eq!(s.state().job, None);
        assert_eq!(s.screen(), Screen::Select);
    }

    #[test]
    fn progress_updates_job() {
        let (mut s, job_id) = session_with_job();
        assert_eq!(s.apply_progress(&job_id, event("downloading", Some(37.5))), ProgressOutcome::Updated);
        let job = s.state().job.as_ref().unwrap();
        assert_eq!(job.progress, 37.5);
        assert_eq!(job.status, JobStatus::InProgress("downloading".into()));

        // Missing progress keeps the last known value.
        s.apply_progress(&job_id, event("converting", None));
        assert_eq!(s.state().job.as_ref().unwrap().progress, 37.5);

        assert_eq!(s.apply_progress("other-job", event("downloading", Some(90.0))), ProgressOutcome::Ignored);
        assert_eq!(s.state().job.as_ref().unwrap().progress, 37.5);
    }

    #[test]
    fn error_message_freezes_job() {
        let (mut s, job_id) = session_with_job();
        s.apply_progress(&job_id, event("downloading", Some(10.0)));
        assert_eq!(s.apply_progress(&job_id, event("error", None)), ProgressOutcome::Failed);
        assert_eq!(s.state().job.as_ref().unwrap().status, JobStatus::Error);

        let before = s.state().clone();
        assert_eq!(s.apply_progress(&job_id, event("downloading", Some(80.0))), ProgressOutcome::Ignored);
        assert_eq!(s.state(), &before);
    }

    #[test]
    fn done_then_reset_matches_fresh_session() {
        let (mut s, job_id) = session_with_job();
        assert_eq!(
            s.apply_progress(&job_id, event("done", None)),
            ProgressOutcome::Completed { job_id: job_id.clone() }
        );
        assert_eq!(s.state().job.as_ref().unwrap().percent(), 100);

        s.reset();
        assert_eq!(s.state(), Session::new().state());
        assert_eq!(s.screen(), Screen::Input);
    }

    #[test]
    fn reset_discards_in_flight_responses() {
        let mut s = Session::new();
        s.set_url("https://youtu.be/x");
        let t = s.begin_lookup().unwrap();
        s.reset();
        assert_eq!(s.finish_lookup(t.token, Ok(info(&["720"]))), LookupOutcome::Stale);
        assert_eq!(s.state(), Session::new().state());
    }

    #[test]
    fn lost_stream_fails_active_job_once() {
        let (mut s, job_id) = session_with_job();
        assert_eq!(s.stream_lost(&job_id), ProgressOutcome::Failed);
        assert_eq!(s.stream_lost(&job_id), ProgressOutcome::Ignored);
        s.dismiss_job();
        assert_eq!(s.screen(), Screen::Select);
    }
}

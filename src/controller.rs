use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::dialogs::alert;
use gloo_timers::callback::Timeout;
use serde_json::json;
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

use crate::api::ApiClient;
use crate::clipboard;
use crate::config::AppConfig;
use crate::effects::{self, Effect, CLIPBOARD_DENIED};
use crate::error::StreamError;
use crate::log;
use crate::session::{LookupOutcome, ProgressOutcome, Screen, Session, SessionState, StartOutcome};
use crate::stream::{ProgressSignal, ProgressSubscription};

/// Owns the session and performs the side effects its transitions ask for.
/// Cloning is cheap; every clone drives the same session.
#[derive(Clone)]
pub struct Controller {
    session: Rc<RefCell<Session>>,
    api: ApiClient,
    config: Rc<AppConfig>,
    progress: Rc<RefCell<Option<ProgressSubscription>>>,
    reset_timer: Rc<RefCell<Option<Timeout>>>,
    torn_down: Rc<Cell<bool>>,
    refresh: Callback<()>,
}

impl Controller {
    pub fn new(config: AppConfig, refresh: Callback<()>) -> Self {
        Self {
            session: Rc::new(RefCell::new(Session::new())),
            api: ApiClient::new(&config.api_base),
            config: Rc::new(config),
            progress: Rc::new(RefCell::new(None)),
            reset_timer: Rc::new(RefCell::new(None)),
            torn_down: Rc::new(Cell::new(false)),
            refresh,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn snapshot(&self) -> (SessionState, Screen) {
        let session = self.session.borrow();
        (session.state().clone(), session.screen())
    }

    // The borrow is released before the re-render is requested.
    fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let out = f(&mut self.session.borrow_mut());
        if !self.torn_down.get() {
            self.refresh.emit(());
        }
        out
    }

    pub fn set_url(&self, url: String) {
        self.update(|s| s.set_url(url));
    }

    pub fn toggle_format(&self) {
        self.update(Session::toggle_format);
    }

    pub fn select_quality(&self, quality: String) {
        self.update(|s| s.select_quality(quality));
    }

    pub fn dismiss_job(&self) {
        self.update(Session::dismiss_job);
    }

    pub fn paste(&self) {
        let this = self.clone();
        spawn_local(async move {
            match clipboard::read_text().await {
                Ok(text) => this.set_url(text),
                Err(err) => {
                    log::warn("clipboard_read_failed", json!({ "error": err.to_string() }));
                    alert(CLIPBOARD_DENIED);
                }
            }
        });
    }

    pub fn lookup(&self) {
        let Some(ticket) = self.update(Session::begin_lookup) else {
            return;
        };
        log::info("info_lookup_started", json!({ "url": ticket.url }));

        let this = self.clone();
        spawn_local(async move {
            let result = this.api.fetch_info(&ticket.url).await;
            let outcome = this.update(|s| s.finish_lookup(ticket.token, result));
            match &outcome {
                LookupOutcome::Applied => {
                    log::info("info_lookup_done", json!({ "url": ticket.url }));
                }
                LookupOutcome::Failed(err) => {
                    log::error("info_lookup_failed", json!({ "url": ticket.url, "error": err.to_string() }));
                }
                LookupOutcome::Stale => {
                    log::debug("info_lookup_stale", json!({ "url": ticket.url }));
                }
            }
            this.run(effects::after_lookup(&outcome));
        });
    }

    pub fn start_download(&self) {
        let now_ms = js_sys::Date::now() as u64;
        let Some(ticket) = self.update(|s| s.begin_download(now_ms)) else {
            return;
        };
        log::info(
            "download_requested",
            json!({ "job_id": ticket.request.job_id, "quality": ticket.request.quality, "format": ticket.request.format }),
        );

        let this = self.clone();
        spawn_local(async move {
            let result = this.api.start_download(&ticket.request).await;
            let outcome = this.update(|s| s.finish_download_start(ticket.token, result));
            match &outcome {
                StartOutcome::Subscribe { .. } => {}
                StartOutcome::Failed(err) => {
                    log::error(
                        "download_start_failed",
                        json!({ "job_id": ticket.request.job_id, "error": err.to_string() }),
                    );
                }
                StartOutcome::Stale => {
                    log::debug("download_start_stale", json!({ "job_id": ticket.request.job_id }));
                }
            }
            this.run(effects::after_start(&outcome));
        });
    }

    fn subscribe(&self, job_id: &str) {
        if self.torn_down.get() {
            return;
        }
        let on_signal = {
            let this = self.clone();
            Callback::from(move |signal: ProgressSignal| this.on_progress(signal))
        };
        let url = self.api.endpoints().progress(job_id);
        match ProgressSubscription::open(&url, job_id, on_signal) {
            Ok(sub) => {
                let previous = self.progress.borrow_mut().replace(sub);
                drop(previous);
            }
            Err(err) => {
                log::error("progress_stream_open_failed", json!({ "job_id": job_id, "error": err.to_string() }));
                let outcome = self.update(|s| s.stream_lost(job_id));
                self.handle_progress_outcome(job_id, outcome);
            }
        }
    }

    fn on_progress(&self, signal: ProgressSignal) {
        let ProgressSignal { job_id, payload } = signal;
        let outcome = match payload {
            Ok(event) => {
                log::debug("progress_event", json!({ "job_id": job_id, "status": event.status, "progress": event.progress }));
                self.update(|s| s.apply_progress(&job_id, event))
            }
            Err(StreamError::Malformed(reason)) => {
                log::warn("progress_event_malformed", json!({ "job_id": job_id, "reason": reason }));
                return;
            }
            Err(err) => {
                log::error("progress_stream_lost", json!({ "job_id": job_id, "error": err.to_string() }));
                self.update(|s| s.stream_lost(&job_id))
            }
        };
        self.handle_progress_outcome(&job_id, outcome);
    }

    fn handle_progress_outcome(&self, job_id: &str, outcome: ProgressOutcome) {
        match &outcome {
            ProgressOutcome::Failed => log::error("download_failed", json!({ "job_id": job_id })),
            ProgressOutcome::Completed { job_id } => log::info("download_done", json!({ "job_id": job_id })),
            ProgressOutcome::Updated | ProgressOutcome::Ignored => {}
        }
        self.run(effects::after_progress(
            &outcome,
            self.api.endpoints(),
            self.config.reset_delay_ms,
        ));
    }

    fn run(&self, plan: Vec<Effect>) {
        for effect in plan {
            match effect {
                Effect::Alert(message) => alert(message),
                Effect::Subscribe { job_id } => self.subscribe(&job_id),
                Effect::CloseStream => self.close_stream(),
                Effect::Navigate(href) => self.navigate(&href),
                Effect::ScheduleReset { after_ms } => self.schedule_reset(after_ms),
                Effect::CancelReset => {
                    let timer = self.reset_timer.borrow_mut().take();
                    drop(timer);
                }
                Effect::ResetSession => {
                    self.update(Session::reset);
                }
            }
        }
    }

    fn close_stream(&self) {
        let sub = self.progress.borrow_mut().take();
        drop(sub);
    }

    fn navigate(&self, href: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(href) {
            log::error("file_redirect_failed", json!({ "href": href, "error": format!("{e:?}") }));
        }
    }

    fn schedule_reset(&self, after_ms: u32) {
        let this = self.clone();
        // Runs the reset as a task so the timer is not dropped inside its own callback.
        let timer = Timeout::new(after_ms, move || {
            spawn_local(async move {
                this.run(effects::on_reset_due());
                log::debug("session_reset", json!({}));
            });
        });
        let previous = self.reset_timer.borrow_mut().replace(timer);
        drop(previous);
    }

    /// Component teardown.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        self.run(effects::on_teardown());
        log::debug("controller_teardown", json!({}));
    }
}

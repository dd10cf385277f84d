use serde_json::json;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Event, EventSource, MessageEvent};
use yew::Callback;

use crate::error::StreamError;
use crate::log;
use crate::types::ProgressEvent;

/// One delivery from a job's progress channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSignal {
    pub job_id: String,
    pub payload: Result<ProgressEvent, StreamError>,
}

type Handlers = (Closure<dyn FnMut(MessageEvent)>, Closure<dyn FnMut(Event)>);

/// Server-push channel for a single job. The channel is closed when this
/// value is dropped, whatever state the stream is in.
pub struct ProgressSubscription {
    job_id: String,
    source: EventSource,
    handlers: Option<Handlers>,
}

impl ProgressSubscription {
    pub fn open(
        url: &str,
        job_id: &str,
        on_signal: Callback<ProgressSignal>,
    ) -> Result<Self, StreamError> {
        let source = EventSource::new(url).map_err(|e| StreamError::Open(format!("{e:?}")))?;

        let on_message = {
            let job_id = job_id.to_string();
            let on_signal = on_signal.clone();
            Closure::<dyn FnMut(MessageEvent)>::new(move |e: MessageEvent| {
                let payload = match e.data().as_string() {
                    Some(data) => ProgressEvent::parse(&data)
                        .map_err(|err| StreamError::Malformed(err.to_string())),
                    None => Err(StreamError::Malformed("non-text payload".into())),
                };
                on_signal.emit(ProgressSignal { job_id: job_id.clone(), payload });
            })
        };

        // The browser reconnects on its own unless it gives up (CLOSED).
        let on_error = {
            let job_id = job_id.to_string();
            let watched = source.clone();
            Closure::<dyn FnMut(Event)>::new(move |_e: Event| {
                if watched.ready_state() == EventSource::CLOSED {
                    on_signal.emit(ProgressSignal {
                        job_id: job_id.clone(),
                        payload: Err(StreamError::Closed),
                    });
                } else {
                    log::debug("progress_stream_reconnecting", json!({ "job_id": job_id }));
                }
            })
        };

        source.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        source.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        log::info("progress_stream_open", json!({ "job_id": job_id, "url": url }));

        Ok(Self {
            job_id: job_id.to_string(),
            source,
            handlers: Some((on_message, on_error)),
        })
    }
}

impl Drop for ProgressSubscription {
    fn drop(&mut self) {
        self.source.close();
        self.source.set_onmessage(None);
        self.source.set_onerror(None);
        // A handler may be the one closing its own subscription, so free
        // the closures only after the current JS callback has returned.
        if let Some(handlers) = self.handlers.take() {
            spawn_local(async move { drop(handlers) });
        }
        log::debug("progress_stream_closed", json!({ "job_id": self.job_id }));
    }
}

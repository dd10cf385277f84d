use yew::prelude::*;
use yew_icons::{Icon, IconId};

use crate::types::{Job, JobStatus, MediaFormat};

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub job: Job,
    pub format: MediaFormat,
    pub on_dismiss: Callback<()>,
}

fn heading(job: &Job, format: MediaFormat) -> &'static str {
    match job.status {
        JobStatus::Done => "Download Complete",
        JobStatus::Error => "Download Failed",
        _ if format.is_audio() => "Converting Audio...",
        _ => "Downloading...",
    }
}

#[function_component(ProgressPage)]
pub fn progress_page(props: &Props) -> Html {
    let job = &props.job;
    let percent = job.percent();
    let phase = match job.status {
        JobStatus::Done => "Ready",
        JobStatus::Error => "Stopped",
        _ => "Processing",
    };

    let on_dismiss = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="progress-panel">
            <div class="progress-heading">{ heading(job, props.format) }</div>
            <div class="progress-title">{ job.title.clone() }</div>
            <div class="progress-meta">
                <span>{ phase }</span>
                <span>{ format!("{percent}%") }</span>
            </div>
            <div class="progress-track">
                <div
                    class={classes!("progress-fill", (job.status == JobStatus::Error).then_some("errored"))}
                    style={format!("width: {:.1}%;", job.progress)}
                />
            </div>
            { if job.status == JobStatus::Error {
                html! {
                    <button type="button" class="primary-btn" onclick={on_dismiss} style="margin-top: 24px;">
                        <Icon icon_id={IconId::LucideRotateCcw} width={"18"} height={"18"} />
                        {"Try again"}
                    </button>
                }
            } else { html! {} }}
        </div>
    }
}

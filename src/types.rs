use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Youtube,
    Instagram,
    Facebook,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Youtube, Platform::Instagram, Platform::Facebook];

    pub fn label(&self) -> &'static str {
        match self {
            Platform::Youtube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Facebook => "Facebook",
        }
    }

    /// Short CSS suffix used by the badge and the platform grid.
    pub fn css_key(&self) -> &'static str {
        match self {
            Platform::Youtube => "yt",
            Platform::Instagram => "ig",
            Platform::Facebook => "fb",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaFormat {
    #[default]
    Video,
    Audio,
}

impl MediaFormat {
    pub fn toggled(self) -> Self {
        match self {
            MediaFormat::Video => MediaFormat::Audio,
            MediaFormat::Audio => MediaFormat::Video,
        }
    }

    pub fn is_audio(self) -> bool {
        self == MediaFormat::Audio
    }
}

/// Metadata returned by `POST /api/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoInfo {
    pub title: String,
    #[serde(default)]
    pub thumbnail: String,
    /// Direct playable media URL, when the backend can offer one.
    #[serde(default)]
    pub preview: Option<String>,
    #[serde(default)]
    pub qualities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum JobStatus {
    Starting,
    /// Any intermediate tag the backend reports between start and finish.
    InProgress(String),
    Done,
    Error,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Done | JobStatus::Error)
    }

    pub fn as_str(&self) -> &str {
        match self {
            JobStatus::Starting => "starting",
            JobStatus::InProgress(tag) => tag,
            JobStatus::Done => "done",
            JobStatus::Error => "error",
        }
    }
}

impl From<String> for JobStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "starting" => JobStatus::Starting,
            "done" => JobStatus::Done,
            "error" => JobStatus::Error,
            _ => JobStatus::InProgress(raw),
        }
    }
}

impl From<JobStatus> for String {
    fn from(status: JobStatus) -> Self {
        status.as_str().to_string()
    }
}

/// One message on `GET /api/progress/{jobId}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProgressEvent {
    pub status: JobStatus,
    #[serde(default)]
    pub progress: Option<f64>,
}

impl ProgressEvent {
    pub fn parse(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Job {
    pub id: String,
    pub title: String,
    /// Always within 0..=100.
    pub progress: f64,
    pub status: JobStatus,
}

impl Job {
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            progress: 0.0,
            status: JobStatus::Starting,
        }
    }

    pub fn percent(&self) -> u8 {
        self.progress.round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    pub url: String,
    pub quality: String,
    pub job_id: String,
    pub title: String,
    pub format: MediaFormat,
}

/// Label shown in the quality selector: `"720"` becomes `"720p Resolution"`.
pub fn quality_label(quality: &str) -> String {
    if !quality.is_empty() && quality.chars().all(|c| c.is_ascii_digit()) {
        format!("{quality}p Resolution")
    } else {
        quality.to_string()
    }
}

use gloo::net::http::{Request, Response};

use crate::config::Endpoints;
use crate::error::ApiError;
use crate::types::{DownloadRequest, InfoRequest, VideoInfo};

/// Thin gateway to the backend's REST routes. No retries.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self { endpoints: Endpoints::new(base) }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub async fn fetch_info(&self, url: &str) -> Result<VideoInfo, ApiError> {
        let resp = Request::post(&self.endpoints.info())
            .json(&InfoRequest { url })
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = ensure_ok(resp)?;
        resp.json::<VideoInfo>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Ask the backend to start a job. The acknowledgement body is ignored.
    pub async fn start_download(&self, req: &DownloadRequest) -> Result<(), ApiError> {
        let resp = Request::post(&self.endpoints.download())
            .json(req)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        ensure_ok(resp).map(|_| ())
    }
}

fn ensure_ok(resp: Response) -> Result<Response, ApiError> {
    if resp.ok() {
        Ok(resp)
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

use std::fmt;

use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Clone, thiserror::Error)]
pub enum VideoGenError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{0}")]
    Api(String),
    #[error("malformed response from backend")]
    InvalidResponse,
    #[error("no {} is available for download yet", .0.label())]
    MissingUrl(DownloadKind),
}

impl From<reqwest::Error> for VideoGenError {
    fn from(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }
}

/// Opaque token identifying one generation attempt on the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationId(String);

impl GenerationId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for GenerationId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

impl fmt::Display for GenerationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payload for `POST /api/generate`. Field names on the wire are the
/// camelCase names the backend parses; every optional field carries its
/// documented default so the builder methods below only override them
/// when the form actually supplied a value.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub video_subject: String,
    pub ai_model: String,
    pub voice: String,
    pub paragraph_number: u32,
    pub automate_youtube_upload: bool,
    pub use_music: bool,
    pub zip_url: String,
    pub threads: u32,
    pub subtitles_position: String,
    pub custom_prompt: String,
    pub color: String,
}

impl GenerationRequest {
    pub fn new(video_subject: String) -> Self {
        Self {
            video_subject,
            ai_model: consts::DEFAULT_AI_MODEL.to_string(),
            voice: consts::DEFAULT_VOICE.to_string(),
            paragraph_number: consts::DEFAULT_PARAGRAPH_NUMBER,
            automate_youtube_upload: false,
            use_music: false,
            zip_url: String::new(),
            threads: consts::DEFAULT_THREADS,
            subtitles_position: consts::DEFAULT_SUBTITLES_POSITION.to_string(),
            custom_prompt: String::new(),
            color: consts::DEFAULT_SUBTITLES_COLOR.to_string(),
        }
    }

    // The `with_*` methods take raw form control values; a blank or
    // unparsable input keeps the default set in `new`.

    pub fn with_ai_model(mut self, raw: &str) -> Self {
        if !raw.is_empty() {
            self.ai_model = raw.to_string();
        }
        self
    }

    pub fn with_voice(mut self, raw: &str) -> Self {
        if !raw.is_empty() {
            self.voice = raw.to_string();
        }
        self
    }

    pub fn with_paragraph_number(mut self, raw: &str) -> Self {
        if let Ok(n) = raw.trim().parse::<u32>() {
            if n >= 1 {
                self.paragraph_number = n;
            }
        }
        self
    }

    pub fn with_youtube_upload(mut self, enabled: bool) -> Self {
        self.automate_youtube_upload = enabled;
        self
    }

    pub fn with_music(mut self, enabled: bool) -> Self {
        self.use_music = enabled;
        self
    }

    pub fn with_zip_url(mut self, raw: &str) -> Self {
        self.zip_url = raw.to_string();
        self
    }

    pub fn with_threads(mut self, raw: &str) -> Self {
        if let Ok(n) = raw.trim().parse::<u32>() {
            if n >= 1 {
                self.threads = n;
            }
        }
        self
    }

    pub fn with_subtitles_position(mut self, raw: &str) -> Self {
        if !raw.is_empty() {
            self.subtitles_position = raw.to_string();
        }
        self
    }

    pub fn with_custom_prompt(mut self, raw: &str) -> Self {
        self.custom_prompt = raw.to_string();
        self
    }

    pub fn with_color(mut self, raw: &str) -> Self {
        if !raw.is_empty() {
            self.color = raw.to_string();
        }
        self
    }
}

/// Creation response: either a `generation_id` or an error report.
#[derive(Deserialize, Clone, Debug)]
pub struct GenerateResponse {
    #[serde(default)]
    pub generation_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl GenerateResponse {
    pub fn into_result(self) -> Result<GenerationId, VideoGenError> {
        if self.status.as_deref() == Some(STATUS_ERROR) {
            let message = self
                .message
                .unwrap_or_else(|| "video generation failed".to_string());
            return Err(VideoGenError::Api(message));
        }
        self.generation_id
            .map(GenerationId::from)
            .ok_or(VideoGenError::InvalidResponse)
    }
}

/// Latest progress report for a generation. Every poll response replaces
/// the previous snapshot wholesale, so fields the server omits revert to
/// these serde defaults instead of persisting.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub script_url: Option<String>,
}

impl ProgressSnapshot {
    /// Local placeholder shown before the first poll response arrives.
    pub fn starting() -> Self {
        Self {
            status: "started".to_string(),
            progress: 0,
            message: "Starting...".to_string(),
            video_url: None,
            script_url: None,
        }
    }

    /// Only `completed` and `error` stop the polling loop; any other
    /// status the backend emits is treated as in-progress.
    pub fn is_terminal(&self) -> bool {
        matches!(self.status.as_str(), STATUS_COMPLETED | STATUS_ERROR)
    }

    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }

    pub fn is_error(&self) -> bool {
        self.status == STATUS_ERROR
    }

    pub fn download_url(&self, kind: DownloadKind) -> Option<&str> {
        match kind {
            DownloadKind::Video => self.video_url.as_deref(),
            DownloadKind::Script => self.script_url.as_deref(),
        }
    }
}

/// The two artifacts a completed generation exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DownloadKind {
    Video,
    Script,
}

impl DownloadKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Video => consts::VIDEO_DOWNLOAD_NAME,
            Self::Script => consts::SCRIPT_DOWNLOAD_NAME,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Video => "video/mp4",
            Self::Script => "text/plain",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Script => "script",
        }
    }
}

/// HTTP client for the video generation backend. Cheap to clone; the
/// base URL is threaded in at construction instead of read from a global.
#[derive(Clone, Debug)]
pub struct VideoGenClient {
    base: Url,
    client: reqwest::Client,
}

impl VideoGenClient {
    pub fn new(base: Url) -> Self {
        Self {
            base,
            client: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Submit one generation request. The backend reports logical errors
    /// in the body rather than the HTTP status, so the body is parsed
    /// unconditionally.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationId, VideoGenError> {
        let res = self
            .client
            .post(self.api_url("/api/generate"))
            .json(request)
            .send()
            .await?;
        let res: GenerateResponse = res.json().await?;
        res.into_result()
    }

    pub async fn progress(&self, id: &GenerationId) -> Result<ProgressSnapshot, VideoGenError> {
        let snapshot = self
            .client
            .get(self.api_url(&format!("/api/progress/{id}")))
            .send()
            .await?
            .json()
            .await?;
        Ok(snapshot)
    }

    /// Best-effort cancellation. No payload, and the response body is not
    /// interpreted; callers reset their local state regardless.
    pub async fn cancel(&self) -> Result<(), VideoGenError> {
        self.client
            .post(self.api_url("/api/cancel"))
            .send()
            .await?;
        Ok(())
    }

    /// Fetch the binary content behind a backend-relative path such as
    /// the `videoUrl` of a completed snapshot.
    pub async fn fetch_file(&self, rel_path: &str) -> Result<Vec<u8>, VideoGenError> {
        let res = self.client.get(self.file_url(rel_path)).send().await?;
        if !res.status().is_success() {
            return Err(VideoGenError::Api(format!(
                "download failed with status {}",
                res.status()
            )));
        }
        let bytes = res.bytes().await?;
        log::debug!("fetched {} bytes from {rel_path}", bytes.len());
        Ok(bytes.to_vec())
    }

    pub fn file_url(&self, rel_path: &str) -> String {
        self.api_url(rel_path)
    }

    // A root base URL displays with a trailing slash while one carrying a
    // path prefix does not, so joins go through this trim instead of
    // string concatenation against `Display`.
    fn api_url(&self, abs_path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), abs_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_fill_absent_optional_fields() {
        let req = GenerationRequest::new("cats".to_string())
            .with_ai_model("")
            .with_voice("")
            .with_paragraph_number("")
            .with_threads("not a number")
            .with_subtitles_position("")
            .with_color("");

        assert_eq!(req.video_subject, "cats");
        assert_eq!(req.ai_model, consts::DEFAULT_AI_MODEL);
        assert_eq!(req.voice, consts::DEFAULT_VOICE);
        assert_eq!(req.paragraph_number, consts::DEFAULT_PARAGRAPH_NUMBER);
        assert_eq!(req.threads, consts::DEFAULT_THREADS);
        assert_eq!(req.subtitles_position, consts::DEFAULT_SUBTITLES_POSITION);
        assert_eq!(req.color, consts::DEFAULT_SUBTITLES_COLOR);
        assert!(!req.automate_youtube_upload);
        assert!(!req.use_music);
        assert_eq!(req.zip_url, "");
        assert_eq!(req.custom_prompt, "");
    }

    #[test]
    fn request_builders_override_defaults() {
        let req = GenerationRequest::new("dogs".to_string())
            .with_ai_model("gpt4")
            .with_voice("en_uk_001")
            .with_paragraph_number("3")
            .with_youtube_upload(true)
            .with_music(true)
            .with_zip_url("https://example.com/songs.zip")
            .with_threads("4")
            .with_subtitles_position("center,top")
            .with_custom_prompt("make it funny")
            .with_color("#FF0000");

        assert_eq!(req.ai_model, "gpt4");
        assert_eq!(req.voice, "en_uk_001");
        assert_eq!(req.paragraph_number, 3);
        assert!(req.automate_youtube_upload);
        assert!(req.use_music);
        assert_eq!(req.zip_url, "https://example.com/songs.zip");
        assert_eq!(req.threads, 4);
        assert_eq!(req.subtitles_position, "center,top");
        assert_eq!(req.custom_prompt, "make it funny");
        assert_eq!(req.color, "#FF0000");
    }

    #[test]
    fn paragraph_number_below_one_keeps_default() {
        let req = GenerationRequest::new("cats".to_string()).with_paragraph_number("0");
        assert_eq!(req.paragraph_number, 1);
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let req = GenerationRequest::new("cats".to_string());
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(json["videoSubject"], "cats");
        assert_eq!(json["aiModel"], "g4f");
        assert_eq!(json["voice"], "en_us_001");
        assert_eq!(json["paragraphNumber"], 1);
        assert_eq!(json["automateYoutubeUpload"], false);
        assert_eq!(json["useMusic"], false);
        assert_eq!(json["zipUrl"], "");
        assert_eq!(json["threads"], 2);
        assert_eq!(json["subtitlesPosition"], "center,bottom");
        assert_eq!(json["customPrompt"], "");
        assert_eq!(json["color"], "#FFFFFF");
    }

    #[test]
    fn creation_response_with_id_succeeds() {
        let res: GenerateResponse =
            serde_json::from_str(r#"{"generation_id": "abc123"}"#).unwrap();
        let id = res.into_result().unwrap();
        assert_eq!(id.as_str(), "abc123");
    }

    #[test]
    fn creation_response_with_error_surfaces_message() {
        let res: GenerateResponse =
            serde_json::from_str(r#"{"status": "error", "message": "quota exceeded"}"#).unwrap();
        let err = res.into_result().unwrap_err();
        assert!(matches!(err, VideoGenError::Api(ref m) if m == "quota exceeded"));
    }

    #[test]
    fn creation_response_without_id_or_error_is_invalid() {
        let res: GenerateResponse = serde_json::from_str(r#"{"status": "success"}"#).unwrap();
        assert!(matches!(
            res.into_result(),
            Err(VideoGenError::InvalidResponse)
        ));
    }

    #[test]
    fn only_completed_and_error_are_terminal() {
        for status in ["completed", "error"] {
            let snap = ProgressSnapshot {
                status: status.to_string(),
                ..ProgressSnapshot::starting()
            };
            assert!(snap.is_terminal(), "{status} must be terminal");
        }
        for status in ["started", "processing", "downloading", "not_found", ""] {
            let snap = ProgressSnapshot {
                status: status.to_string(),
                ..ProgressSnapshot::starting()
            };
            assert!(!snap.is_terminal(), "{status} must not be terminal");
        }
    }

    #[test]
    fn snapshot_fields_omitted_by_server_revert_to_defaults() {
        let snap: ProgressSnapshot = serde_json::from_str(r#"{"status": "processing"}"#).unwrap();
        assert_eq!(snap.status, "processing");
        assert_eq!(snap.progress, 0);
        assert_eq!(snap.message, "");
        assert_eq!(snap.video_url, None);
        assert_eq!(snap.script_url, None);
    }

    #[test]
    fn completed_snapshot_exposes_download_urls() {
        let snap: ProgressSnapshot = serde_json::from_str(
            r#"{
                "status": "completed",
                "progress": 100,
                "message": "Done",
                "videoUrl": "/files/abc123.mp4",
                "scriptUrl": "/files/abc123.txt"
            }"#,
        )
        .unwrap();
        assert!(snap.is_completed());
        assert_eq!(
            snap.download_url(DownloadKind::Video),
            Some("/files/abc123.mp4")
        );
        assert_eq!(
            snap.download_url(DownloadKind::Script),
            Some("/files/abc123.txt")
        );
    }

    #[test]
    fn starting_placeholder_matches_contract() {
        let snap = ProgressSnapshot::starting();
        assert_eq!(snap.status, "started");
        assert_eq!(snap.progress, 0);
        assert_eq!(snap.message, "Starting...");
        assert!(!snap.is_terminal());
    }

    #[test]
    fn endpoint_urls_join_against_prefixed_base() {
        let client = VideoGenClient::new(Url::parse("http://localhost:8080").unwrap());
        assert_eq!(
            client.api_url("/api/generate"),
            "http://localhost:8080/api/generate"
        );

        // A base with a path prefix keeps the prefix and the separator.
        let client = VideoGenClient::new(Url::parse("http://host/prefix").unwrap());
        assert_eq!(client.api_url("/api/generate"), "http://host/prefix/api/generate");
        assert_eq!(
            client.api_url("/api/progress/abc123"),
            "http://host/prefix/api/progress/abc123"
        );

        let client = VideoGenClient::new(Url::parse("http://host/prefix/").unwrap());
        assert_eq!(client.api_url("/api/cancel"), "http://host/prefix/api/cancel");
    }

    #[test]
    fn missing_url_error_names_the_artifact() {
        assert_eq!(
            VideoGenError::MissingUrl(DownloadKind::Video).to_string(),
            "no video is available for download yet"
        );
        assert_eq!(
            VideoGenError::MissingUrl(DownloadKind::Script).to_string(),
            "no script is available for download yet"
        );
    }

    #[test]
    fn file_url_joins_relative_paths_against_base() {
        let client = VideoGenClient::new(Url::parse("http://localhost:8080").unwrap());
        assert_eq!(
            client.file_url("/files/abc123.mp4"),
            "http://localhost:8080/files/abc123.mp4"
        );

        let client = VideoGenClient::new(Url::parse("https://api.example.com/").unwrap());
        assert_eq!(
            client.file_url("/files/x.txt"),
            "https://api.example.com/files/x.txt"
        );
    }
}

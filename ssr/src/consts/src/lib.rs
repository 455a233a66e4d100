mod voices;

pub use voices::{VoiceDescriptor, VOICES};

use once_cell::sync::Lazy;
use reqwest::Url;

/// Base URL of the video generation backend. Override at build time with
/// the `VIDEOGEN_API_URL` environment variable.
pub static VIDEOGEN_API_URL: Lazy<Url> = Lazy::new(|| {
    Url::parse(option_env!("VIDEOGEN_API_URL").unwrap_or("http://localhost:8080")).unwrap()
});

/// Fixed delay between two progress polls for the same generation.
pub const PROGRESS_POLL_INTERVAL_MS: u32 = 1000;

pub const VIDEO_DOWNLOAD_NAME: &str = "video.mp4";
pub const SCRIPT_DOWNLOAD_NAME: &str = "script.txt";

// Defaults applied to every optional field absent from the form.
pub const DEFAULT_AI_MODEL: &str = "g4f";
pub const DEFAULT_VOICE: &str = "en_us_001";
pub const DEFAULT_PARAGRAPH_NUMBER: u32 = 1;
pub const DEFAULT_THREADS: u32 = 2;
pub const DEFAULT_SUBTITLES_POSITION: &str = "center,bottom";
pub const DEFAULT_SUBTITLES_COLOR: &str = "#FFFFFF";

/// Script providers the backend understands, as (value, label) pairs.
pub const AI_MODELS: &[(&str, &str)] = &[
    ("g4f", "g4f (Free)"),
    ("gpt3.5-turbo", "OpenAI GPT-3.5"),
    ("gpt4", "OpenAI GPT-4"),
    ("gemmini", "Gemini Pro"),
];

/// Subtitle anchor tokens accepted by the backend's video assembler.
pub const SUBTITLE_POSITIONS: &[(&str, &str)] = &[
    ("center,bottom", "Bottom"),
    ("center,center", "Center"),
    ("center,top", "Top"),
];

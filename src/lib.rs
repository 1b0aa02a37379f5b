pub mod subtitles;
pub use subtitles::{
    Cue, DeferReason, LoadOutcome, LoadReport, Subtitle, SubtitleFormat, TimeCode,
};

pub mod webvtt;
pub use webvtt::{Alignment, LineEnding, WebVtt, WebVttConfig};

pub mod errors;
pub use errors::{SubtitleError, SubtitleParserError, SubtitleParserResult, TimeCodeError};

use log::info;
use std::path::Path;

/// Split decoded file content into lines, dropping a leading byte order mark.
pub fn split_lines(content: &str) -> Vec<String> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .map(str::to_string)
        .collect()
}

/// Load WebVTT text with the default handler settings.
pub fn parse_webvtt(content: &str) -> LoadReport {
    WebVtt::new().load_subtitle(&split_lines(content))
}

/// Render a subtitle as WebVTT with the default handler settings.
pub fn to_webvtt(subtitle: &Subtitle) -> String {
    WebVtt::new().to_text(subtitle)
}

/// Read a UTF-8 `.vtt` file from disk and load it.
pub fn read_local_subtitle<P: AsRef<Path>>(path: P) -> SubtitleParserResult<LoadReport> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let content = String::from_utf8(bytes).map_err(|e| {
        SubtitleError::new(format!("{} is not valid UTF-8: {}", path.display(), e))
    })?;
    info!("Read {} ({} bytes)", path.display(), content.len());
    Ok(parse_webvtt(&content))
}

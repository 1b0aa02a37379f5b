mod config;
mod entities;
mod lines;
mod markup;
mod parser;
mod position;
mod timecode;
mod writer;

pub use config::{LineEnding, WebVttConfig};
pub use entities::decode_html_entities;
pub use lines::{
    classify_line, parse_timing_line, timing_shape, LineKind, TimingLine, TimingShape,
};
pub use markup::{
    colors_to_internal, colors_to_webvtt, remove_native_formatting, strip_ssa_tags, voices,
};
pub use parser::{load_lines, CueBlockParser, ParsedCues};
pub use position::{
    alignment_from_settings, marker_from_settings, settings_from_text, Alignment, Horizontal,
    Vertical,
};
pub use timecode::{format_time_code, parse_time_code};
pub use writer::{format_cue_text, write_subtitle};

use crate::subtitles::{LoadReport, Subtitle, SubtitleFormat};

/// WebVTT handler for the shared subtitle model.
#[derive(Debug, Clone, Default)]
pub struct WebVtt {
    config: WebVttConfig,
}

impl WebVtt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WebVttConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WebVttConfig {
        &self.config
    }

    /// Distinct speaker names from `<v Name>` tags, in first-seen order.
    pub fn voices(&self, subtitle: &Subtitle) -> Vec<String> {
        voices(subtitle)
    }
}

impl SubtitleFormat for WebVtt {
    fn name(&self) -> &'static str {
        "WebVTT"
    }

    fn extension(&self) -> &'static str {
        ".vtt"
    }

    fn load_subtitle(&self, lines: &[String]) -> LoadReport {
        load_lines(lines, &self.config)
    }

    fn to_text(&self, subtitle: &Subtitle) -> String {
        write_subtitle(subtitle, &self.config)
    }

    fn remove_native_formatting(&self, subtitle: &mut Subtitle) {
        for cue in &mut subtitle.cues {
            cue.text = remove_native_formatting(&cue.text);
        }
    }
}

use serde::{Deserialize, Serialize};

/// Line separator used when writing WebVTT text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options for the WebVTT handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebVttConfig {
    pub line_ending: LineEnding,
    /// Decode `&amp;`-style references in cue text on load.
    pub decode_entities: bool,
}

impl Default for WebVttConfig {
    fn default() -> Self {
        Self {
            line_ending: LineEnding::Lf,
            decode_entities: true,
        }
    }
}

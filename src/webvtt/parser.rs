use super::config::WebVttConfig;
use super::entities::decode_html_entities;
use super::lines::{classify_line, timing_shape, LineKind, TimingLine, WEBVTT_HEADER};
use super::markup::colors_to_internal;
use super::position::marker_from_settings;
use super::timecode::parse_time_code;
use crate::subtitles::{Cue, DeferReason, LoadOutcome, LoadReport, Subtitle};
use log::{debug, info, warn};

/// First line of the numbered-cue WebVTT dialect.
const NUMBERED_VARIANT_HEADER: &str = "WEBVTT FILE";
/// The numbered dialect is only claimed for files with more cues than this.
const NUMBERED_VARIANT_MIN_CUES: usize = 5;

#[derive(Debug)]
struct OpenCue {
    cue: Cue,
    /// Alignment marker from the timing line, prefixed to the first text line.
    pending_marker: String,
}

#[derive(Debug)]
enum State {
    Seeking,
    InCue(OpenCue),
}

/// Line-by-line cue segmentation.
///
/// Feed every line with a peek at the following one, then call
/// [`CueBlockParser::finish`]. Cues are kept in file order and their times are
/// not checked against each other.
#[derive(Debug)]
pub struct CueBlockParser {
    subtitle: Subtitle,
    state: State,
    had_empty_line: bool,
    numbered_cues: usize,
    error_count: usize,
}

/// What the state machine produced before any post-processing.
#[derive(Debug)]
pub struct ParsedCues {
    pub subtitle: Subtitle,
    pub numbered_cues: usize,
    pub error_count: usize,
}

impl Default for CueBlockParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CueBlockParser {
    pub fn new() -> Self {
        Self {
            subtitle: Subtitle::new(),
            state: State::Seeking,
            had_empty_line: false,
            numbered_cues: 0,
            error_count: 0,
        }
    }

    pub fn feed(&mut self, line: &str, next: Option<&str>) {
        match classify_line(line) {
            LineKind::Timing(timing) => self.open_cue(&timing),
            LineKind::Header if self.subtitle.is_empty() => {
                debug!("WebVTT header found");
                self.subtitle.header = Some(WEBVTT_HEADER.to_string());
            }
            LineKind::Number if self.is_cue_number(next) => {
                debug!("Skipping cue number line '{}'", line.trim());
                self.numbered_cues += 1;
            }
            _ => self.append_text(line),
        }
    }

    pub fn finish(mut self) -> ParsedCues {
        self.close_cue();
        ParsedCues {
            subtitle: self.subtitle,
            numbered_cues: self.numbered_cues,
            error_count: self.error_count,
        }
    }

    fn is_cue_number(&self, next: Option<&str>) -> bool {
        matches!(self.state, State::InCue(_))
            && self.had_empty_line
            && next.and_then(timing_shape).is_some()
    }

    fn close_cue(&mut self) {
        if let State::InCue(open) = std::mem::replace(&mut self.state, State::Seeking) {
            let mut cue = open.cue;
            cue.text = cue.text.trim_end().to_string();
            self.subtitle.cues.push(cue);
        }
    }

    fn open_cue(&mut self, timing: &TimingLine) {
        self.close_cue();
        self.had_empty_line = false;

        let times = parse_time_code(&timing.start)
            .and_then(|start| parse_time_code(&timing.end).map(|end| (start, end)));
        match times {
            Ok((start, end)) => {
                self.state = State::InCue(OpenCue {
                    cue: Cue::new(start, end, String::new()),
                    pending_marker: marker_from_settings(&timing.settings),
                });
            }
            Err(e) => {
                warn!("Dropping cue {} --> {}: {}", timing.start, timing.end, e);
                self.error_count += 1;
            }
        }
    }

    fn append_text(&mut self, line: &str) {
        let State::InCue(open) = &mut self.state else {
            return;
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            self.had_empty_line = true;
        }
        open.cue.text.push_str(&std::mem::take(&mut open.pending_marker));
        open.cue.text.push_str(trimmed);
        open.cue.text.push('\n');
    }
}

/// Whether the parsed result looks like the numbered `WEBVTT FILE` dialect.
fn numbered_variant_reason<S: AsRef<str>>(
    lines: &[S],
    parsed: &ParsedCues,
) -> Option<DeferReason> {
    let cue_count = parsed.subtitle.len();
    let first_line = lines.first().map(|line| line.as_ref());
    if cue_count > NUMBERED_VARIANT_MIN_CUES
        && parsed.numbered_cues + 1 >= cue_count
        && first_line == Some(NUMBERED_VARIANT_HEADER)
    {
        Some(DeferReason::NumberedCueVariant {
            numbered_cues: parsed.numbered_cues,
            cue_count,
        })
    } else {
        None
    }
}

/// Run the whole load pipeline over raw lines.
///
/// Accepted subtitles get their color markup translated, entities decoded
/// (unless disabled) and cues numbered from 1.
pub fn load_lines<S: AsRef<str>>(lines: &[S], config: &WebVttConfig) -> LoadReport {
    let mut parser = CueBlockParser::new();
    for (index, line) in lines.iter().enumerate() {
        let next = lines.get(index + 1).map(|next| next.as_ref());
        parser.feed(line.as_ref(), next);
    }
    let parsed = parser.finish();
    let error_count = parsed.error_count;

    if let Some(reason) = numbered_variant_reason(lines, &parsed) {
        info!(
            "Input looks like numbered WebVTT ({:?}), deferring to that handler",
            reason
        );
        return LoadReport {
            outcome: LoadOutcome::DeferToVariant {
                partial: parsed.subtitle,
                reason,
            },
            error_count,
        };
    }

    let mut subtitle = parsed.subtitle;
    for cue in &mut subtitle.cues {
        cue.text = colors_to_internal(&cue.text);
        if config.decode_entities {
            cue.text = decode_html_entities(&cue.text);
        }
    }
    subtitle.renumber(1);

    info!(
        "Loaded {} WebVTT cues ({} errors)",
        subtitle.len(),
        error_count
    );
    LoadReport {
        outcome: LoadOutcome::Accepted(subtitle),
        error_count,
    }
}

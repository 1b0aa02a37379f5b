use super::config::WebVttConfig;
use super::lines::WEBVTT_HEADER;
use super::markup::{colors_to_webvtt, strip_ssa_tags};
use super::position::settings_from_text;
use super::timecode::format_time_code;
use crate::subtitles::{Cue, Subtitle};

/// Cue text as written: SSA overrides dropped, no blank lines, WebVTT color tags.
pub fn format_cue_text(text: &str) -> String {
    let stripped = strip_ssa_tags(text);
    let lines: Vec<&str> = stripped
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty())
        .collect();
    colors_to_webvtt(&lines.join("\n"))
}

fn write_cue(out: &mut String, cue: &Cue, with_extra: bool, newline: &str) {
    out.push_str(&format!(
        "{} --> {}{}",
        format_time_code(&cue.start_time),
        format_time_code(&cue.end_time),
        settings_from_text(&cue.text)
    ));
    out.push_str(newline);

    for line in format_cue_text(&cue.text).split('\n') {
        out.push_str(line);
        out.push_str(newline);
    }

    if with_extra {
        if let Some(extra) = cue.extra.as_deref().filter(|extra| !extra.is_empty()) {
            out.push_str(extra);
            out.push_str(newline);
        }
    }
    out.push_str(newline);
}

/// Render `subtitle` as WebVTT text.
///
/// Style annotations are only written when the subtitle itself came from a
/// plain `WEBVTT` file. The result has no trailing whitespace.
pub fn write_subtitle(subtitle: &Subtitle, config: &WebVttConfig) -> String {
    let newline = config.line_ending.as_str();
    let with_extra = subtitle.has_header(WEBVTT_HEADER);

    let mut out = String::new();
    out.push_str(WEBVTT_HEADER);
    out.push_str(newline);
    out.push_str(newline);
    for cue in &subtitle.cues {
        write_cue(&mut out, cue, with_extra, newline);
    }

    out.trim_end().to_string()
}

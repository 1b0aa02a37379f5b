//! Inline markup rewriting between WebVTT (`<c.yellow>`, `<v Name>`) and the
//! HTML-ish form shared by the other formats (`<font color="yellow">`).
//!
//! Every function is one forward scan over the input. Tags are assumed not to
//! nest; malformed tags are copied through untouched.

use crate::subtitles::Subtitle;

const WEBVTT_CLOSE: &str = "</c>";
const INTERNAL_CLOSE: &str = "</font>";
const INTERNAL_COLOR_QUOTED: &str = "<font color=\"";
const INTERNAL_COLOR_BARE: &str = "<font color=";
const VOICE_OPEN: &str = "<v ";

/// Tags whose markers are dropped while their inner text is kept.
const STRUCTURAL_TAGS: [&str; 4] = ["v", "rt", "ruby", "span"];

fn lowercase_run(s: &str) -> usize {
    s.bytes().take_while(|b| b.is_ascii_lowercase()).count()
}

/// Length of a `<c.class>` / `<c class>` tag at the start of `rest`, with its class.
fn webvtt_color_tag(rest: &str) -> Option<(usize, &str)> {
    let after = rest.strip_prefix("<c")?;
    let after = after.strip_prefix('.').or_else(|| after.strip_prefix(' '))?;
    let len = lowercase_run(after);
    if len == 0 || !after[len..].starts_with('>') {
        return None;
    }
    Some((3 + len + 1, &after[..len]))
}

/// Length of a `<font color="x">` or `<font color=x>` tag at the start of `rest`.
fn internal_color_tag(rest: &str) -> Option<(usize, &str)> {
    if let Some(after) = rest.strip_prefix(INTERNAL_COLOR_QUOTED) {
        let len = lowercase_run(after);
        if len > 0 && after[len..].starts_with("\">") {
            return Some((INTERNAL_COLOR_QUOTED.len() + len + 2, &after[..len]));
        }
        return None;
    }
    let after = rest.strip_prefix(INTERNAL_COLOR_BARE)?;
    let len = lowercase_run(after);
    if len > 0 && after[len..].starts_with('>') {
        return Some((INTERNAL_COLOR_BARE.len() + len + 1, &after[..len]));
    }
    None
}

fn push_next_char(out: &mut String, rest: &str) -> usize {
    match rest.chars().next() {
        Some(c) => {
            out.push(c);
            c.len_utf8()
        }
        None => 0,
    }
}

/// `<c.yellow>` / `<c yellow>` become `<font color="yellow">`, `</c>` becomes `</font>`.
pub fn colors_to_internal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if rest.starts_with(WEBVTT_CLOSE) {
            out.push_str(INTERNAL_CLOSE);
            pos += WEBVTT_CLOSE.len();
        } else if let Some((len, class)) = webvtt_color_tag(rest) {
            out.push_str(INTERNAL_COLOR_QUOTED);
            out.push_str(class);
            out.push_str("\">");
            pos += len;
        } else {
            pos += push_next_char(&mut out, rest);
        }
    }
    out
}

/// Inverse of [`colors_to_internal`]. Colors that are not plain lowercase
/// names (e.g. `#ff0000`) keep their `<font>` tag.
pub fn colors_to_webvtt(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if rest.starts_with(INTERNAL_CLOSE) {
            out.push_str(WEBVTT_CLOSE);
            pos += INTERNAL_CLOSE.len();
        } else if let Some((len, class)) = internal_color_tag(rest) {
            out.push_str("<c.");
            out.push_str(class);
            out.push('>');
            pos += len;
        } else {
            pos += push_next_char(&mut out, rest);
        }
    }
    out
}

/// Remove SSA override blocks such as `{\an8}` or `{\i1}`.
pub fn strip_ssa_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if rest.starts_with("{\\") {
            if let Some(end) = rest.find('}') {
                pos += end + 1;
                continue;
            }
        }
        pos += push_next_char(&mut out, rest);
    }
    out
}

/// Which structural tag opens at the start of `rest`, and the tag length.
fn structural_open(rest: &str) -> Option<(usize, usize)> {
    let after = rest.strip_prefix('<')?;
    STRUCTURAL_TAGS.iter().enumerate().find_map(|(index, tag)| {
        let tail = after.strip_prefix(tag)?;
        if !tail.starts_with([' ', '.', '>']) {
            return None;
        }
        let end = rest.find('>')?;
        Some((index, end + 1))
    })
}

fn structural_close(rest: &str) -> Option<(usize, usize)> {
    let after = rest.strip_prefix("</")?;
    STRUCTURAL_TAGS.iter().enumerate().find_map(|(index, tag)| {
        after
            .strip_prefix(tag)
            .filter(|tail| tail.starts_with('>'))
            .map(|_| (index, tag.len() + 3))
    })
}

/// Any `<c...>` or `</c...>` tag made of letters, dots, underscores or spaces.
fn class_tag(rest: &str) -> Option<usize> {
    let after = rest.strip_prefix("</c").or_else(|| rest.strip_prefix("<c"))?;
    let prefix = rest.len() - after.len();
    let body = after
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || matches!(b, b'.' | b'_' | b' '))
        .count();
    after[body..].starts_with('>').then_some(prefix + body + 1)
}

/// Drop WebVTT-only markup while keeping the text it wraps.
///
/// `<v>`, `<rt>`, `<ruby>` and `<span>` lose their opening tag (attributes
/// included) and the next matching closing tag; class tags `<c...>` are
/// removed outright. Internal `<font>` markup is left alone.
pub fn remove_native_formatting(text: &str) -> String {
    if !text.contains('<') {
        return text.to_string();
    }

    let mut pending_close = [0usize; STRUCTURAL_TAGS.len()];
    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if let Some((tag, len)) = structural_open(rest) {
            pending_close[tag] += 1;
            pos += len;
        } else if let Some((tag, len)) =
            structural_close(rest).filter(|(tag, _)| pending_close[*tag] > 0)
        {
            pending_close[tag] -= 1;
            pos += len;
        } else if let Some(len) = class_tag(rest) {
            pos += len;
        } else {
            pos += push_next_char(&mut out, rest);
        }
    }
    out.trim().to_string()
}

/// Distinct `<v Name>` voices across all cues, in first-seen order.
pub fn voices(subtitle: &Subtitle) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for cue in &subtitle.cues {
        let text = cue.text.as_str();
        let mut search_from = 0;
        while let Some(found) = text[search_from..].find(VOICE_OPEN) {
            let start = search_from + found;
            let name_start = start + VOICE_OPEN.len();
            if let Some(end) = text[name_start..].find('>') {
                let name = text[name_start..name_start + end].trim();
                if !name.is_empty() && !names.iter().any(|n| n == name) {
                    names.push(name.to_string());
                }
            }
            search_from = start + 1;
        }
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtitles::{Cue, TimeCode};

    #[test]
    fn test_colors_to_internal() {
        assert_eq!(
            colors_to_internal("<c.yellow>text</c>"),
            "<font color=\"yellow\">text</font>"
        );
        assert_eq!(
            colors_to_internal("a <c red>b</c> c"),
            "a <font color=\"red\">b</font> c"
        );
        assert_eq!(colors_to_internal("<c.Yellow>x</c>"), "<c.Yellow>x</font>");
        assert_eq!(colors_to_internal("<c>x"), "<c>x");
    }

    #[test]
    fn test_colors_to_webvtt() {
        assert_eq!(
            colors_to_webvtt("<font color=\"yellow\">text</font>"),
            "<c.yellow>text</c>"
        );
        assert_eq!(colors_to_webvtt("<font color=red>text</font>"), "<c.red>text</c>");
        assert_eq!(
            colors_to_webvtt("<font color=\"#ff0000\">x</font>"),
            "<font color=\"#ff0000\">x</c>"
        );
    }

    #[test]
    fn test_color_round_trip_keeps_unicode() {
        let source = "Ça <c.cyan>va</c> 🙂";
        assert_eq!(colors_to_webvtt(&colors_to_internal(source)), source);
    }

    #[test]
    fn test_strip_ssa_tags() {
        assert_eq!(strip_ssa_tags("{\\an8}Top {\\i1}line"), "Top line");
        assert_eq!(strip_ssa_tags("{not a tag}"), "{not a tag}");
        assert_eq!(strip_ssa_tags("{\\unclosed"), "{\\unclosed");
    }

    #[test]
    fn test_remove_native_formatting() {
        assert_eq!(remove_native_formatting("<v John>Hello</v>"), "Hello");
        assert_eq!(
            remove_native_formatting("<ruby>漢<rt>kan</rt></ruby>"),
            "漢kan"
        );
        assert_eq!(
            remove_native_formatting("<span lang=\"en\">hi</span>"),
            "hi"
        );
        assert_eq!(remove_native_formatting("<c.loud>x</c>"), "x");
        assert_eq!(remove_native_formatting("<c.a.b_c>x</c>"), "x");
        assert_eq!(
            remove_native_formatting("<font color=\"red\">x</font>"),
            "<font color=\"red\">x</font>"
        );
        assert_eq!(remove_native_formatting("a </v> b"), "a </v> b");
        assert_eq!(remove_native_formatting(" plain "), " plain ");
    }

    #[test]
    fn test_voices_first_seen_order() {
        let subtitle = Subtitle::with_cues(vec![
            Cue::new(TimeCode::default(), TimeCode::default(), "<v John>Hello</v>"),
            Cue::new(
                TimeCode::default(),
                TimeCode::default(),
                "<v Mary>Hi</v>\n<v John>Again</v>",
            ),
        ]);
        assert_eq!(voices(&subtitle), vec!["John", "Mary"]);
    }
}

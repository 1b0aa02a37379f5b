use regex::Regex;
use std::sync::OnceLock;

pub(crate) const WEBVTT_HEADER: &str = "WEBVTT";
const ARROW: &str = "-->";
const MISSING_HOURS: &str = "00:";

/// Accepted layouts of a cue timing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingShape {
    /// `h:m:s.ms --> h:m:s.ms`
    Full,
    /// `m:s.ms --> h:m:s.ms`
    ShortStart,
    /// `m:s.ms --> m:s.ms`
    Short,
}

/// A timing line with both sides normalized to `h:m:s.ms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingLine {
    pub shape: TimingShape,
    pub start: String,
    pub end: String,
    /// Everything after the end time code, e.g. `position:10% line:0%`.
    pub settings: String,
}

/// Context-free classification of one raw input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Header,
    Timing(TimingLine),
    Blank,
    /// Bare non-negative integer, a cue number candidate.
    Number,
    Text,
}

fn full_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^-?\d+:-?\d+:-?\d+\.-?\d+\s*-->\s*-?\d+:-?\d+:-?\d+\.-?\d+").unwrap()
    })
}

fn short_start_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^-?\d+:-?\d+\.-?\d+\s*-->\s*-?\d+:-?\d+:-?\d+\.-?\d+").unwrap()
    })
}

fn short_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^-?\d+:-?\d+\.-?\d+\s*-->\s*-?\d+:-?\d+\.-?\d+").unwrap())
}

/// Which timing layout `line` uses, ignoring leading whitespace.
pub fn timing_shape(line: &str) -> Option<TimingShape> {
    let line = line.trim_start();
    if !line.contains(ARROW) {
        return None;
    }
    if full_regex().is_match(line) {
        Some(TimingShape::Full)
    } else if short_start_regex().is_match(line) {
        Some(TimingShape::ShortStart)
    } else if short_regex().is_match(line) {
        Some(TimingShape::Short)
    } else {
        None
    }
}

/// Split a timing line into normalized start/end tokens and cue settings.
///
/// The end token runs up to the first whitespace, so trailing garbage glued
/// to it is left for the time code parser to reject.
pub fn parse_timing_line(line: &str) -> Option<TimingLine> {
    let shape = timing_shape(line)?;
    let (start, rest) = line.trim_start().split_once(ARROW)?;
    let rest = rest.trim_start();
    let (end, settings) = match rest.find(char::is_whitespace) {
        Some(index) => (&rest[..index], rest[index..].trim()),
        None => (rest, ""),
    };

    let (start, end) = match shape {
        TimingShape::Full => (start.trim().to_string(), end.to_string()),
        TimingShape::ShortStart => (format!("{}{}", MISSING_HOURS, start.trim()), end.to_string()),
        TimingShape::Short => (
            format!("{}{}", MISSING_HOURS, start.trim()),
            format!("{}{}", MISSING_HOURS, end),
        ),
    };

    Some(TimingLine {
        shape,
        start,
        end,
        settings: settings.to_string(),
    })
}

fn is_bare_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn classify_line(line: &str) -> LineKind {
    if let Some(timing) = parse_timing_line(line) {
        return LineKind::Timing(timing);
    }

    let trimmed = line.trim();
    if trimmed == WEBVTT_HEADER {
        LineKind::Header
    } else if trimmed.is_empty() {
        LineKind::Blank
    } else if is_bare_integer(trimmed) {
        LineKind::Number
    } else {
        LineKind::Text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        assert_eq!(
            timing_shape("00:00:01.000 --> 00:00:02.000"),
            Some(TimingShape::Full)
        );
        assert_eq!(
            timing_shape("00:01.000 --> 00:00:02.000"),
            Some(TimingShape::ShortStart)
        );
        assert_eq!(timing_shape("00:01.000 --> 00:02.000"), Some(TimingShape::Short));
        assert_eq!(timing_shape("  00:01.000-->00:02.000"), Some(TimingShape::Short));
        assert_eq!(timing_shape("00:00:01.000 --> 00:02.000"), None);
        assert_eq!(timing_shape("00:00:01,000 --> 00:00:02,000"), None);
        assert_eq!(timing_shape("hello --> world"), None);
    }

    #[test]
    fn test_negative_fields_are_recognized() {
        assert_eq!(
            timing_shape("-00:00:01.000 --> 00:00:-02.000"),
            Some(TimingShape::Full)
        );
    }

    #[test]
    fn test_short_lines_get_hours() {
        let timing = parse_timing_line("00:01.500 --> 00:02.000 line:0").unwrap();
        assert_eq!(timing.start, "00:00:01.500");
        assert_eq!(timing.end, "00:00:02.000");
        assert_eq!(timing.settings, "line:0");

        let timing = parse_timing_line("00:01.500 --> 01:00:02.000").unwrap();
        assert_eq!(timing.start, "00:00:01.500");
        assert_eq!(timing.end, "01:00:02.000");
        assert_eq!(timing.settings, "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify_line(" WEBVTT "), LineKind::Header);
        assert_eq!(classify_line("WEBVTT FILE"), LineKind::Text);
        assert_eq!(classify_line("   "), LineKind::Blank);
        assert_eq!(classify_line("12"), LineKind::Number);
        assert_eq!(classify_line("-12"), LineKind::Text);
        assert!(matches!(
            classify_line("00:00:01.000 --> 00:00:02.000 position:10%"),
            LineKind::Timing(TimingLine { shape: TimingShape::Full, .. })
        ));
    }
}

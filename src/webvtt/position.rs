//! Translation between WebVTT `position:`/`line:` cue settings and the
//! `{\anN}` alignment markers used across subtitle formats.
//!
//! The markers follow the numeric keypad: `1` is bottom-left, `5` middle-center,
//! `9` top-right.

use serde::Serialize;

const POSITION_TAG: &str = "position:";
const LINE_TAG: &str = "line:";
const MARKER_PREFIX: &str = "{\\a";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Alignment {
    BottomLeft = 1,
    BottomCenter = 2,
    BottomRight = 3,
    MiddleLeft = 4,
    MiddleCenter = 5,
    MiddleRight = 6,
    TopLeft = 7,
    TopCenter = 8,
    TopRight = 9,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Horizontal {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl Alignment {
    pub const ALL: [Alignment; 9] = [
        Alignment::BottomLeft,
        Alignment::BottomCenter,
        Alignment::BottomRight,
        Alignment::MiddleLeft,
        Alignment::MiddleCenter,
        Alignment::MiddleRight,
        Alignment::TopLeft,
        Alignment::TopCenter,
        Alignment::TopRight,
    ];

    pub fn from_axes(horizontal: Horizontal, vertical: Vertical) -> Self {
        match (vertical, horizontal) {
            (Vertical::Bottom, Horizontal::Left) => Alignment::BottomLeft,
            (Vertical::Bottom, Horizontal::Center) => Alignment::BottomCenter,
            (Vertical::Bottom, Horizontal::Right) => Alignment::BottomRight,
            (Vertical::Middle, Horizontal::Left) => Alignment::MiddleLeft,
            (Vertical::Middle, Horizontal::Center) => Alignment::MiddleCenter,
            (Vertical::Middle, Horizontal::Right) => Alignment::MiddleRight,
            (Vertical::Top, Horizontal::Left) => Alignment::TopLeft,
            (Vertical::Top, Horizontal::Center) => Alignment::TopCenter,
            (Vertical::Top, Horizontal::Right) => Alignment::TopRight,
        }
    }

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn horizontal(self) -> Horizontal {
        match self.number() % 3 {
            1 => Horizontal::Left,
            2 => Horizontal::Center,
            _ => Horizontal::Right,
        }
    }

    pub fn vertical(self) -> Vertical {
        match self.number() {
            1..=3 => Vertical::Bottom,
            4..=6 => Vertical::Middle,
            _ => Vertical::Top,
        }
    }

    /// The marker token, e.g. `{\an7}`.
    pub fn marker(self) -> String {
        format!("{{\\an{}}}", self.number())
    }

    /// Alignment named by a marker at the very start of `text`.
    pub fn from_text_prefix(text: &str) -> Option<Self> {
        if !text.starts_with(MARKER_PREFIX) {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|alignment| text.starts_with(&alignment.marker()))
    }
}

/// Value following `tag` in the settings text, cut at whitespace or at a
/// `,` alignment suffix (`line:10%,start` gives `10%`).
fn setting_value<'a>(settings: &'a str, tag: &str) -> Option<&'a str> {
    let index = settings.find(tag)?;
    let value = settings[index + tag.len()..].trim_start();
    let end = value
        .find(|c: char| c.is_whitespace() || c == ',')
        .unwrap_or(value.len());
    Some(&value[..end])
}

/// Unsigned decimal such as `10` or `12.5`. Signs are rejected, so a
/// WebVTT `line:-1` counts as unset.
fn parse_unsigned(value: &str) -> Option<f64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return None;
    }
    value.parse::<f64>().ok()
}

fn horizontal_from_settings(settings: &str) -> Horizontal {
    let percent = setting_value(settings, POSITION_TAG)
        .and_then(|value| value.strip_suffix('%'))
        .and_then(parse_unsigned);
    match percent {
        Some(number) if number < 25.0 => Horizontal::Left,
        Some(number) if number > 75.0 => Horizontal::Right,
        _ => Horizontal::Center,
    }
}

fn vertical_from_settings(settings: &str) -> Vertical {
    let Some(value) = setting_value(settings, LINE_TAG) else {
        return Vertical::Bottom;
    };
    match value.strip_suffix('%') {
        Some(percent) => match parse_unsigned(percent) {
            Some(number) if number < 25.0 => Vertical::Top,
            Some(number) if number < 75.0 => Vertical::Middle,
            _ => Vertical::Bottom,
        },
        None => match parse_unsigned(value) {
            Some(number) if number < 7.0 => Vertical::Top,
            Some(number) if number < 11.0 => Vertical::Middle,
            _ => Vertical::Bottom,
        },
    }
}

/// Alignment implied by the cue settings of a timing line.
///
/// Returns `None` for the default bottom-center placement.
pub fn alignment_from_settings(settings: &str) -> Option<Alignment> {
    let horizontal = horizontal_from_settings(settings);
    let vertical = vertical_from_settings(settings);
    match (horizontal, vertical) {
        (Horizontal::Center, Vertical::Bottom) => None,
        _ => Some(Alignment::from_axes(horizontal, vertical)),
    }
}

/// Marker token to prefix to the first text line of a cue, or `""`.
pub fn marker_from_settings(settings: &str) -> String {
    alignment_from_settings(settings)
        .map(Alignment::marker)
        .unwrap_or_default()
}

/// Cue settings suffix for a cue whose text starts with an alignment marker,
/// e.g. `" position:20% line:20%"`. Empty when there is nothing to express.
pub fn settings_from_text(text: &str) -> String {
    let Some(alignment) = Alignment::from_text_prefix(text) else {
        return String::new();
    };

    let position = match alignment.horizontal() {
        Horizontal::Left => Some("20%"),
        Horizontal::Right => Some("80%"),
        Horizontal::Center => None,
    };
    let line = match alignment.vertical() {
        Vertical::Top => Some("20%"),
        Vertical::Middle => Some("50%"),
        Vertical::Bottom => None,
    };

    let parts: Vec<String> = position
        .map(|value| format!("{}{}", POSITION_TAG, value))
        .into_iter()
        .chain(line.map(|value| format!("{}{}", LINE_TAG, value)))
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!(" {}", parts.join(" "))
    }
}

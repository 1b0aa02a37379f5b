use serde::Serialize;
use std::fmt;

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Point in time on the subtitle timeline, kept at millisecond precision.
///
/// Fields are always reported in canonical form: minutes and seconds in
/// `0..60`, milliseconds in `0..1000`, hours unbounded. Out-of-range input
/// (e.g. `75` seconds) is carried over into the next unit on construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TimeCode {
    total_milliseconds: u64,
}

impl TimeCode {
    pub fn new(hours: u64, minutes: u64, seconds: u64, milliseconds: u64) -> Self {
        Self {
            total_milliseconds: hours * MILLIS_PER_HOUR
                + minutes * MILLIS_PER_MINUTE
                + seconds * MILLIS_PER_SECOND
                + milliseconds,
        }
    }

    /// Build a time code from signed components. Negative totals saturate at zero.
    pub fn from_signed_parts(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> Self {
        let total = hours
            .saturating_mul(MILLIS_PER_HOUR as i64)
            .saturating_add(minutes.saturating_mul(MILLIS_PER_MINUTE as i64))
            .saturating_add(seconds.saturating_mul(MILLIS_PER_SECOND as i64))
            .saturating_add(milliseconds);
        Self::from_milliseconds(total.max(0) as u64)
    }

    pub fn from_milliseconds(total_milliseconds: u64) -> Self {
        Self { total_milliseconds }
    }

    pub fn total_milliseconds(&self) -> u64 {
        self.total_milliseconds
    }

    pub fn hours(&self) -> u64 {
        self.total_milliseconds / MILLIS_PER_HOUR
    }

    pub fn minutes(&self) -> u64 {
        (self.total_milliseconds % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE
    }

    pub fn seconds(&self) -> u64 {
        (self.total_milliseconds % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND
    }

    pub fn milliseconds(&self) -> u64 {
        self.total_milliseconds % MILLIS_PER_SECOND
    }
}

impl fmt::Display for TimeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hours(),
            self.minutes(),
            self.seconds(),
            self.milliseconds()
        )
    }
}

/// One subtitle entry: a time range and the text shown during it.
///
/// `text` uses `\n` between lines and may start with an alignment marker
/// such as `{\an8}` or carry `<font color="...">` markup shared with the
/// other format handlers.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Cue {
    pub number: usize,
    pub start_time: TimeCode,
    pub end_time: TimeCode,
    pub text: String,
    /// Style or voice annotation carried over from another format.
    pub extra: Option<String>,
}

impl Cue {
    pub fn new(start_time: TimeCode, end_time: TimeCode, text: impl Into<String>) -> Self {
        Self {
            number: 0,
            start_time,
            end_time,
            text: text.into(),
            extra: None,
        }
    }

    pub fn duration_milliseconds(&self) -> i64 {
        self.end_time.total_milliseconds() as i64 - self.start_time.total_milliseconds() as i64
    }
}

/// Ordered list of cues plus the header line detected on load.
///
/// Cues stay in file order. Start/end ordering is not validated, neither
/// within a cue nor across cues.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct Subtitle {
    pub header: Option<String>,
    pub cues: Vec<Cue>,
}

impl Subtitle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cues(cues: Vec<Cue>) -> Self {
        Self { header: None, cues }
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    /// Assign sequential display numbers starting at `start`.
    pub fn renumber(&mut self, start: usize) {
        for (index, cue) in self.cues.iter_mut().enumerate() {
            cue.number = start + index;
        }
    }

    pub fn has_header(&self, value: &str) -> bool {
        self.header.as_deref() == Some(value)
    }
}

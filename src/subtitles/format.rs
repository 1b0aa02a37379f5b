use super::types::Subtitle;

/// Why a handler refused an input it could otherwise read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeferReason {
    /// Input starts with `WEBVTT FILE` and numbers nearly every cue, which is
    /// the numbered-cue WebVTT dialect handled elsewhere.
    NumberedCueVariant { numbered_cues: usize, cue_count: usize },
}

/// Result of handing a list of lines to a format handler.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Accepted(Subtitle),
    /// The caller should retry with another handler. `partial` holds the cues
    /// read so far, before any markup translation or renumbering.
    DeferToVariant { partial: Subtitle, reason: DeferReason },
}

/// Load outcome plus the number of cues dropped for malformed time codes.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub outcome: LoadOutcome,
    pub error_count: usize,
}

impl LoadReport {
    pub fn subtitle(&self) -> &Subtitle {
        match &self.outcome {
            LoadOutcome::Accepted(subtitle) => subtitle,
            LoadOutcome::DeferToVariant { partial, .. } => partial,
        }
    }

    pub fn into_subtitle(self) -> Subtitle {
        match self.outcome {
            LoadOutcome::Accepted(subtitle) => subtitle,
            LoadOutcome::DeferToVariant { partial, .. } => partial,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, LoadOutcome::Accepted(_))
    }
}

/// A text subtitle format that can read lines into a [`Subtitle`] and write it back.
pub trait SubtitleFormat {
    fn name(&self) -> &'static str;

    fn extension(&self) -> &'static str;

    fn load_subtitle(&self, lines: &[String]) -> LoadReport;

    fn to_text(&self, subtitle: &Subtitle) -> String;

    /// Drop markup that only this format understands, before converting to another one.
    fn remove_native_formatting(&self, subtitle: &mut Subtitle);

    /// Whether `lines` look like this format: accepted and more cues than errors.
    fn is_mine(&self, lines: &[String]) -> bool {
        let report = self.load_subtitle(lines);
        match &report.outcome {
            LoadOutcome::Accepted(subtitle) => subtitle.len() > report.error_count,
            LoadOutcome::DeferToVariant { .. } => false,
        }
    }
}

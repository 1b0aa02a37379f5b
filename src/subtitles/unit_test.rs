use crate::subtitles::{
    Cue, DeferReason, LoadOutcome, LoadReport, Subtitle, SubtitleFormat, TimeCode,
};

#[cfg(test)]
mod test_helpers {
    use super::*;

    pub fn cue(start_ms: u64, end_ms: u64, text: &str) -> Cue {
        Cue::new(
            TimeCode::from_milliseconds(start_ms),
            TimeCode::from_milliseconds(end_ms),
            text,
        )
    }

    /// Format that accepts one cue per non-empty line and counts lines
    /// starting with `!` as errors.
    pub struct LineFormat;

    impl SubtitleFormat for LineFormat {
        fn name(&self) -> &'static str {
            "Lines"
        }

        fn extension(&self) -> &'static str {
            ".txt"
        }

        fn load_subtitle(&self, lines: &[String]) -> LoadReport {
            let mut subtitle = Subtitle::new();
            let mut error_count = 0;
            for line in lines.iter().filter(|line| !line.is_empty()) {
                if line.starts_with('!') {
                    error_count += 1;
                } else {
                    subtitle.cues.push(cue(0, 1000, line));
                }
            }
            if lines.first().map(String::as_str) == Some("defer") {
                return LoadReport {
                    outcome: LoadOutcome::DeferToVariant {
                        partial: subtitle,
                        reason: DeferReason::NumberedCueVariant {
                            numbered_cues: 0,
                            cue_count: 0,
                        },
                    },
                    error_count,
                };
            }
            LoadReport {
                outcome: LoadOutcome::Accepted(subtitle),
                error_count,
            }
        }

        fn to_text(&self, subtitle: &Subtitle) -> String {
            subtitle
                .cues
                .iter()
                .map(|cue| cue.text.as_str())
                .collect::<Vec<_>>()
                .join("\n")
        }

        fn remove_native_formatting(&self, _subtitle: &mut Subtitle) {}
    }

    pub fn lines(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }
}

#[test]
fn test_time_code_components_are_canonical() {
    let tc = TimeCode::new(1, 59, 59, 999);
    assert_eq!(tc.total_milliseconds(), 7_199_999);
    assert_eq!(
        (tc.hours(), tc.minutes(), tc.seconds(), tc.milliseconds()),
        (1, 59, 59, 999)
    );

    let carried = TimeCode::new(0, 0, 0, 61_001);
    assert_eq!(
        (carried.minutes(), carried.seconds(), carried.milliseconds()),
        (1, 1, 1)
    );
}

#[test]
fn test_time_code_ordering_and_display() {
    let a = TimeCode::new(0, 0, 1, 500);
    let b = TimeCode::new(0, 0, 2, 0);
    assert!(a < b);
    assert_eq!(a.to_string(), "00:00:01.500");
    assert_eq!(TimeCode::new(100, 0, 0, 0).to_string(), "100:00:00.000");
}

#[test]
fn test_signed_parts_saturate() {
    assert_eq!(TimeCode::from_signed_parts(0, 0, -5, 0), TimeCode::default());
    assert_eq!(
        TimeCode::from_signed_parts(0, 1, -30, 0),
        TimeCode::new(0, 0, 30, 0)
    );
}

#[test]
fn test_renumber_and_lenient_times() {
    use test_helpers::cue;
    let mut subtitle = Subtitle::with_cues(vec![
        cue(5000, 1000, "ends before it starts"),
        cue(0, 500, "earlier than the previous cue"),
    ]);
    subtitle.renumber(1);
    assert_eq!(subtitle.cues[0].number, 1);
    assert_eq!(subtitle.cues[1].number, 2);
    assert_eq!(subtitle.cues[0].duration_milliseconds(), -4000);
}

#[test]
fn test_report_accessors() {
    use test_helpers::*;
    let report = LineFormat.load_subtitle(&lines(&["a", "!", "b"]));
    assert!(report.is_accepted());
    assert_eq!(report.error_count, 1);
    assert_eq!(report.subtitle().len(), 2);
    assert_eq!(report.into_subtitle().cues[1].text, "b");
}

#[test]
fn test_default_is_mine() {
    use test_helpers::*;
    assert!(LineFormat.is_mine(&lines(&["a", "b", "!"])));
    assert!(!LineFormat.is_mine(&lines(&["a", "!", "!"])));
    assert!(!LineFormat.is_mine(&lines(&["defer", "a", "b"])));
    assert!(!LineFormat.is_mine(&[]));
}

#[test]
fn test_header_check_is_exact() {
    let mut subtitle = Subtitle::new();
    assert!(!subtitle.has_header("WEBVTT"));
    subtitle.header = Some("WEBVTT FILE".to_string());
    assert!(!subtitle.has_header("WEBVTT"));
    subtitle.header = Some("WEBVTT".to_string());
    assert!(subtitle.has_header("WEBVTT"));
}

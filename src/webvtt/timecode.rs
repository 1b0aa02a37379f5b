use crate::errors::TimeCodeError;
use crate::subtitles::TimeCode;
use std::str::FromStr;

/// Parse an `h:m:s.ms` token.
///
/// Fields are split on `:`, `.` and space; the first four must be integers.
/// Values are not range checked, so `00:00:75.000` reads as 1m15s. A minus
/// sign is accepted on any field and the total saturates at zero.
pub fn parse_time_code(token: &str) -> Result<TimeCode, TimeCodeError> {
    let fields: Vec<&str> = token
        .trim()
        .split([':', '.', ' '])
        .filter(|field| !field.is_empty())
        .collect();

    if fields.len() < 4 {
        return Err(TimeCodeError::new(format!(
            "expected hh:mm:ss.mmm, got '{}'",
            token.trim()
        )));
    }

    let mut values = [0i64; 4];
    for (value, field) in values.iter_mut().zip(&fields) {
        *value = field.parse::<i64>().map_err(|e| {
            TimeCodeError::new(format!("invalid field '{}' in '{}': {}", field, token.trim(), e))
        })?;
    }

    Ok(TimeCode::from_signed_parts(
        values[0], values[1], values[2], values[3],
    ))
}

/// Format as `hh:mm:ss.mmm`. Hours get at least two digits.
pub fn format_time_code(time_code: &TimeCode) -> String {
    time_code.to_string()
}

impl FromStr for TimeCode {
    type Err = TimeCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_token() {
        let tc = parse_time_code("01:02:03.456").unwrap();
        assert_eq!(
            (tc.hours(), tc.minutes(), tc.seconds(), tc.milliseconds()),
            (1, 2, 3, 456)
        );
    }

    #[test]
    fn test_parse_ignores_trailing_fields() {
        let tc = parse_time_code(" 00:00:02.000 line:10%").unwrap();
        assert_eq!(tc, TimeCode::new(0, 0, 2, 0));
    }

    #[test]
    fn test_parse_is_permissive_on_ranges() {
        let tc = parse_time_code("00:00:75.000").unwrap();
        assert_eq!(tc, TimeCode::new(0, 1, 15, 0));
        assert_eq!(tc.seconds(), 15);
    }

    #[test]
    fn test_parse_negative_saturates() {
        let tc = parse_time_code("-1:00:00.000").unwrap();
        assert_eq!(tc, TimeCode::default());
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_time_code("00:01.500").is_err());
        assert!(parse_time_code("00:00:0x.500").is_err());
        assert!(parse_time_code("00:00:02.000abc").is_err());
        assert!(parse_time_code("").is_err());
    }

    #[test]
    fn test_format_pads_and_keeps_long_hours() {
        assert_eq!(format_time_code(&TimeCode::new(0, 0, 1, 5)), "00:00:01.005");
        assert_eq!(format_time_code(&TimeCode::new(123, 4, 5, 60)), "123:04:05.060");
    }

    #[test]
    fn test_from_str() {
        let tc: TimeCode = "00:10:00.250".parse().unwrap();
        assert_eq!(tc.total_milliseconds(), 600_250);
    }
}

use thiserror::Error;

/// Why a duration string could not be read.
///
/// The legacy form handling degraded unparseable text to zero minutes; that
/// made "0:00" and "garbage" indistinguishable downstream, so parsing is
/// strict and the caller decides how to react.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationParseError {
    #[error("empty duration")]
    Empty,
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    #[error("negative duration: {0:?}")]
    Negative(String),
    #[error("too many fields: {0:?}")]
    TooManyFields(String),
}

fn parse_component(fragment: &str, original: &str) -> Result<f64, DurationParseError> {
    let value: f64 = fragment
        .trim()
        .parse()
        .map_err(|_| DurationParseError::InvalidNumber(original.to_string()))?;
    if value < 0.0 {
        return Err(DurationParseError::Negative(original.to_string()));
    }
    Ok(value)
}

/// Parse a duration string into minutes.
///
/// Accepts `mm:ss`, `hh:mm:ss`, or a bare number of minutes.
pub fn parse_duration(text: &str) -> Result<f64, DurationParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let fields: Vec<&str> = trimmed.split(':').collect();
    match fields.as_slice() {
        [minutes] => parse_component(minutes, text),
        [minutes, seconds] => {
            Ok(parse_component(minutes, text)? + parse_component(seconds, text)? / 60.0)
        }
        [hours, minutes, seconds] => Ok(parse_component(hours, text)? * 60.0
            + parse_component(minutes, text)?
            + parse_component(seconds, text)? / 60.0),
        _ => Err(DurationParseError::TooManyFields(text.to_string())),
    }
}

/// Format minutes as `H:MM:SS` (or `M:SS` under an hour).
///
/// Rounds to whole seconds first so that e.g. 59.999 minutes carries over
/// into `1:00:00` instead of an invalid `59:60`.
pub fn format_duration(minutes: f64) -> String {
    let total_secs = (minutes * 60.0).round().max(0.0) as u64;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{}:{:02}", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_parse_mm_ss() {
        assert_eq!(parse_duration("33:00"), Ok(33.0));
        assert_eq!(parse_duration("5:30"), Ok(5.5));
        assert_eq!(parse_duration("0:30"), Ok(0.5));
    }

    #[test]
    fn test_parse_hh_mm_ss() {
        assert_eq!(parse_duration("2:33:00"), Ok(153.0));
        assert_eq!(parse_duration("1:00:30"), Ok(60.5));
    }

    #[test]
    fn test_parse_bare_minutes() {
        assert_eq!(parse_duration("90"), Ok(90.0));
        assert_eq!(parse_duration("12.5"), Ok(12.5));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_duration("  33:00  "), Ok(33.0));
    }

    #[test]
    fn test_parse_empty_is_error() {
        assert_matches!(parse_duration(""), Err(DurationParseError::Empty));
        assert_matches!(parse_duration("   "), Err(DurationParseError::Empty));
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert_matches!(
            parse_duration("abc"),
            Err(DurationParseError::InvalidNumber(_))
        );
        assert_matches!(
            parse_duration("1x:00"),
            Err(DurationParseError::InvalidNumber(_))
        );
    }

    #[test]
    fn test_parse_negative_is_error() {
        assert_matches!(parse_duration("-5"), Err(DurationParseError::Negative(_)));
        assert_matches!(
            parse_duration("1:-30"),
            Err(DurationParseError::Negative(_))
        );
    }

    #[test]
    fn test_parse_too_many_fields_is_error() {
        assert_matches!(
            parse_duration("1:2:3:4"),
            Err(DurationParseError::TooManyFields(_))
        );
    }

    #[test]
    fn test_format_under_an_hour() {
        assert_eq!(format_duration(0.0), "0:00");
        assert_eq!(format_duration(1.0), "1:00");
        assert_eq!(format_duration(5.5), "5:30");
        assert_eq!(format_duration(33.0), "33:00");
    }

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_duration(60.0), "1:00:00");
        assert_eq!(format_duration(90.5), "1:30:30");
        assert_eq!(format_duration(153.0), "2:33:00");
        assert_eq!(format_duration(280.0), "4:40:00");
    }

    #[test]
    fn test_format_carries_seconds_overflow() {
        // 59.999 min rounds to 3600 s; must not render as 59:60
        assert_eq!(format_duration(59.999), "1:00:00");
        assert_eq!(format_duration(0.9999), "1:00");
        assert_eq!(format_duration(125.999), "2:06:00");
    }

    #[test]
    fn test_format_never_emits_sixty_seconds() {
        let mut m = 0.0;
        while m < 130.0 {
            let rendered = format_duration(m);
            let secs = rendered.rsplit(':').next().unwrap();
            assert!(secs.parse::<u32>().unwrap() < 60, "bad token in {rendered}");
            m += 0.9997;
        }
    }

    #[test]
    fn test_round_trip_within_one_second() {
        for m in [0.0, 1.0, 59.99, 60.0, 90.5, 125.999] {
            let back = parse_duration(&format_duration(m)).unwrap();
            assert!((back - m).abs() <= 1.0 / 60.0, "round trip drifted for {m}");
        }
    }
}

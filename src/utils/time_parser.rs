use chrono::{DateTime, Duration, NaiveDateTime, Utc};

/// 过期时间解析
pub struct TimeParser;

/// HTML `<input type="datetime-local">` 提交的格式
const DATETIME_LOCAL_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

const OUT_OF_RANGE: &str = "Expiration time out of range";

impl TimeParser {
    /// 解析过期时间，支持：
    /// - RFC3339：2030-10-01T12:00:00Z
    /// - datetime-local：2030-10-01T12:00（按 UTC 解释）
    /// - 相对时间：1d, 2w, 1h30m, 2d12h（相对 `now`）
    pub fn parse_expire_time(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
        let input = input.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
            return Ok(dt.with_timezone(&Utc));
        }

        for format in DATETIME_LOCAL_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
                return Ok(naive.and_utc());
            }
        }

        Self::parse_relative_time(input, now)
    }

    fn parse_relative_time(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, String> {
        let mut total = Duration::zero();
        let mut remaining = input;

        while !remaining.is_empty() {
            let digits_end = remaining
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(remaining.len());
            if digits_end == 0 {
                return Err(format!("Invalid time format: '{}'", input));
            }
            let num: i64 = remaining[..digits_end]
                .parse()
                .map_err(|_| format!("Invalid number in '{}'", input))?;
            remaining = &remaining[digits_end..];

            let unit_end = remaining
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(remaining.len());
            if unit_end == 0 {
                return Err(format!("Missing time unit after '{}'", num));
            }
            let unit = &remaining[..unit_end];
            remaining = &remaining[unit_end..];

            // "M" 表示月，其余单位大小写不敏感
            let step = match unit {
                "M" => num.checked_mul(30).and_then(Duration::try_days),
                _ => match unit.to_ascii_lowercase().as_str() {
                    "s" | "sec" | "second" | "seconds" => Duration::try_seconds(num),
                    "m" | "min" | "minute" | "minutes" => Duration::try_minutes(num),
                    "h" | "hour" | "hours" => Duration::try_hours(num),
                    "d" | "day" | "days" => Duration::try_days(num),
                    "w" | "week" | "weeks" => Duration::try_weeks(num),
                    "month" | "months" => num.checked_mul(30).and_then(Duration::try_days),
                    "y" | "year" | "years" => num.checked_mul(365).and_then(Duration::try_days),
                    _ => return Err(format!("Unsupported time unit: '{}'", unit)),
                },
            }
            .ok_or_else(|| OUT_OF_RANGE.to_string())?;

            total = total
                .checked_add(&step)
                .ok_or_else(|| OUT_OF_RANGE.to_string())?;
        }

        if total == Duration::zero() {
            return Err("Time interval cannot be zero".to_string());
        }

        now.checked_add_signed(total)
            .ok_or_else(|| OUT_OF_RANGE.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_relative_time() {
        let now = fixed_now();

        let result = TimeParser::parse_expire_time("1d", now).unwrap();
        assert_eq!(result - now, Duration::days(1));

        let result = TimeParser::parse_expire_time("2w", now).unwrap();
        assert_eq!(result - now, Duration::days(14));

        let result = TimeParser::parse_expire_time("1d2h30m", now).unwrap();
        assert_eq!(
            result - now,
            Duration::days(1) + Duration::hours(2) + Duration::minutes(30)
        );

        let result = TimeParser::parse_expire_time("3M", now).unwrap();
        assert_eq!(result - now, Duration::days(90));
    }

    #[test]
    fn test_parse_rfc3339() {
        let result = TimeParser::parse_expire_time("2031-10-01T12:00:00+02:00", fixed_now());
        assert_eq!(
            result.unwrap(),
            Utc.with_ymd_and_hms(2031, 10, 1, 10, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_datetime_local() {
        let result = TimeParser::parse_expire_time("2031-05-20T08:15", fixed_now()).unwrap();
        assert_eq!(result, Utc.with_ymd_and_hms(2031, 5, 20, 8, 15, 0).unwrap());
    }

    #[test]
    fn test_invalid_format() {
        let now = fixed_now();
        assert!(TimeParser::parse_expire_time("invalid", now).is_err());
        assert!(TimeParser::parse_expire_time("1x", now).is_err());
        assert!(TimeParser::parse_expire_time("10", now).is_err());
        assert!(TimeParser::parse_expire_time("0d", now).is_err());
        assert!(TimeParser::parse_expire_time("2031-13-01T00:00", now).is_err());
    }

    #[test]
    fn test_huge_interval_is_error() {
        let now = fixed_now();
        for input in [
            "99999999999999d",
            "9223372036854775807y",
            "9223372036854775807M",
            "99999999999999999w",
            "9223372036854775807s9223372036854775807s",
            "99999999999999999999d",
        ] {
            assert!(
                TimeParser::parse_expire_time(input, now).is_err(),
                "{} should be rejected",
                input
            );
        }
    }
}

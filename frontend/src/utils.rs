use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

pub fn video_url(video_id: &str) -> String {
    format!(
        "https://www.youtube.com/watch?v={}",
        urlencoding::encode(video_id)
    )
}

pub fn channel_url(channel_id: &str) -> String {
    format!(
        "https://www.youtube.com/channel/{}",
        urlencoding::encode(channel_id)
    )
}

/// Renders an ISO-8601 duration such as `PT1H2M3S` as `1:02:03`, or `M:SS`
/// when there are no hours. Anything unreadable renders as `0:00`.
pub fn format_duration(duration: Option<&str>) -> String {
    let (hours, minutes, seconds) = duration.map(parse_iso8601_duration).unwrap_or_default();

    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}", minutes, seconds)
    }
}

// Reads the `PT#H#M#S` part of a duration; components are optional but must
// appear in that order.
fn parse_iso8601_duration(duration: &str) -> (u64, u64, u64) {
    let Some(start) = duration.find("PT") else {
        return (0, 0, 0);
    };

    let mut parts = (0, 0, 0);
    let mut rest = &duration[start + 2..];
    let mut last_unit = 0;

    loop {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            break;
        }
        let Ok(value) = rest[..digits].parse::<u64>() else {
            break;
        };
        let unit = match rest[digits..].chars().next() {
            Some('H') if last_unit < 1 => 1,
            Some('M') if last_unit < 2 => 2,
            Some('S') if last_unit < 3 => 3,
            _ => break,
        };
        match unit {
            1 => parts.0 = value,
            2 => parts.1 = value,
            _ => parts.2 = value,
        }
        last_unit = unit;
        rest = &rest[digits + 1..];
    }

    parts
}

/// Compact view count (`1.5K`, `2.3M`). Ties round up, so 1250 is `1.3K`.
pub fn format_view_count(view_count: Option<u64>) -> String {
    match view_count {
        None | Some(0) => "0".to_string(),
        Some(count) if count >= 1_000_000 => one_decimal(count, 1_000_000, "M"),
        Some(count) if count >= 1_000 => one_decimal(count, 1_000, "K"),
        Some(count) => count.to_string(),
    }
}

// `count / unit` with one decimal, rounding half up on exact integers.
fn one_decimal(count: u64, unit: u64, suffix: &str) -> String {
    let step = unit / 10;
    let tenths = count.saturating_add(step / 2) / step;
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// Approximate age of a timestamp ("3 days ago"). Months are 30 days and
/// years 365 days.
pub fn format_published_time(published_at: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(published) = published_at
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<DateTime<Utc>>().ok())
    else {
        return String::new();
    };

    let seconds = now.signed_duration_since(published).num_seconds();

    if seconds < MINUTE {
        "Just now".to_string()
    } else if seconds < HOUR {
        ago(seconds / MINUTE, "minute")
    } else if seconds < DAY {
        ago(seconds / HOUR, "hour")
    } else if seconds < MONTH {
        ago(seconds / DAY, "day")
    } else if seconds < YEAR {
        ago(seconds / MONTH, "month")
    } else {
        ago(seconds / YEAR, "year")
    }
}

fn ago(amount: i64, unit: &str) -> String {
    if amount == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{amount} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn published(offset: Duration) -> String {
        (now() - offset).to_rfc3339()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Some("PT1H2M3S")), "1:02:03");
        assert_eq!(format_duration(Some("PT5M9S")), "5:09");
        assert_eq!(format_duration(Some("PT45S")), "0:45");
        assert_eq!(format_duration(Some("PT2H")), "2:00:00");
        assert_eq!(format_duration(Some("PT12M")), "12:00");
        assert_eq!(format_duration(None), "0:00");
        assert_eq!(format_duration(Some("")), "0:00");
        assert_eq!(format_duration(Some("garbage")), "0:00");
    }

    #[test]
    fn test_format_view_count() {
        assert_eq!(format_view_count(Some(999)), "999");
        assert_eq!(format_view_count(Some(1500)), "1.5K");
        assert_eq!(format_view_count(Some(2_300_000)), "2.3M");
        assert_eq!(format_view_count(Some(1_000)), "1.0K");
        assert_eq!(format_view_count(Some(1_250)), "1.3K");
        assert_eq!(format_view_count(Some(1_249)), "1.2K");
        assert_eq!(format_view_count(Some(2_250_000)), "2.3M");
        assert_eq!(format_view_count(Some(999_950)), "1000.0K");
        assert_eq!(format_view_count(Some(0)), "0");
        assert_eq!(format_view_count(None), "0");
    }

    #[test]
    fn test_format_published_time_buckets() {
        let cases = [
            (Duration::seconds(30), "Just now"),
            (Duration::minutes(1), "1 minute ago"),
            (Duration::minutes(59), "59 minutes ago"),
            (Duration::hours(1), "1 hour ago"),
            (Duration::hours(5), "5 hours ago"),
            (Duration::days(1), "1 day ago"),
            (Duration::days(29), "29 days ago"),
            (Duration::days(30), "1 month ago"),
            (Duration::days(364), "12 months ago"),
            (Duration::days(365), "1 year ago"),
            (Duration::days(365 * 3 + 10), "3 years ago"),
        ];

        for (offset, expected) in cases {
            let timestamp = published(offset);
            assert_eq!(
                format_published_time(Some(&timestamp), now()),
                expected,
                "offset {offset:?}"
            );
        }
    }

    #[test]
    fn test_format_published_time_edge_cases() {
        assert_eq!(format_published_time(None, now()), "");
        assert_eq!(format_published_time(Some(""), now()), "");
        assert_eq!(format_published_time(Some("yesterday"), now()), "");

        let future = (now() + Duration::hours(2)).to_rfc3339();
        assert_eq!(format_published_time(Some(&future), now()), "Just now");

        assert_eq!(
            format_published_time(Some("2024-05-31T12:00:00Z"), now()),
            "1 day ago"
        );
    }

    #[test]
    fn test_urls() {
        assert_eq!(video_url("abc123"), "https://www.youtube.com/watch?v=abc123");
        assert_eq!(
            channel_url("UC_x5XG1OV2P6uZZ5FSM9Ttw"),
            "https://www.youtube.com/channel/UC_x5XG1OV2P6uZZ5FSM9Ttw"
        );
    }
}

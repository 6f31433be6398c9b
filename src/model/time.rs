use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

/// Day, month, year and 24-hour clock, all zero-padded.
pub(crate) const TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format a timestamp in the local time zone as `DD.MM.YYYY HH:MM:SS`.
pub fn format_time(time: DateTime<Utc>) -> String {
    format_time_in(time, &Local)
}

/// Format a timestamp in the given time zone as `DD.MM.YYYY HH:MM:SS`.
pub fn format_time_in<Tz>(time: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.with_timezone(tz).format(TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arbtest::arbtest;
    use chrono::FixedOffset;
    use rawaddr::rawaddr::{MAX_TIMESTAMP, MIN_TIMESTAMP};

    fn utc(timestamp: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(timestamp, 0).unwrap()
    }

    fn assert_pattern(formatted: &str) {
        let bytes = formatted.as_bytes();
        assert_eq!(bytes.len(), 19, "{formatted}");
        for (i, byte) in bytes.iter().enumerate() {
            match i {
                2 | 5 => assert_eq!(*byte, b'.', "{formatted}"),
                10 => assert_eq!(*byte, b' ', "{formatted}"),
                13 | 16 => assert_eq!(*byte, b':', "{formatted}"),
                _ => assert!(byte.is_ascii_digit(), "{formatted}"),
            }
        }
    }

    #[test]
    fn test_format_time_utc() {
        assert_eq!(format_time_in(utc(0), &Utc), "01.01.1970 00:00:00");
        assert_eq!(format_time_in(utc(1_700_000_000), &Utc), "14.11.2023 22:13:20");
        assert_eq!(format_time_in(utc(1_700_050_000), &Utc), "15.11.2023 12:06:40");
    }

    #[test]
    fn test_format_time_offset() {
        let msk = FixedOffset::east_opt(3 * 3600).unwrap();
        assert_eq!(format_time_in(utc(1_700_000_000), &msk), "15.11.2023 01:13:20");

        let pst = FixedOffset::west_opt(8 * 3600).unwrap();
        assert_eq!(format_time_in(utc(1_700_000_000), &pst), "14.11.2023 14:13:20");
    }

    #[test]
    fn test_format_time_local() {
        assert_pattern(&format_time(utc(1_700_000_000)));
    }

    #[test]
    fn test_format_time_decodable_bounds() {
        let east = FixedOffset::east_opt(14 * 3600).unwrap();
        let west = FixedOffset::west_opt(12 * 3600).unwrap();

        assert_eq!(format_time_in(utc(MAX_TIMESTAMP), &east), "31.12.9999 13:59:59");
        assert_eq!(format_time_in(utc(MIN_TIMESTAMP), &west), "01.01.0001 12:00:00");
    }

    #[test]
    fn prop_test_format_time_pattern() {
        arbtest(|u| {
            let timestamp = u.int_in_range(MIN_TIMESTAMP..=MAX_TIMESTAMP)?;
            let offset = u.int_in_range(-12 * 3600..=14 * 3600)?;
            let tz = FixedOffset::east_opt(offset).unwrap();

            let formatted = format_time_in(utc(timestamp), &tz);
            assert_pattern(&formatted);
            assert_eq!(formatted, format_time_in(utc(timestamp), &tz));
            Ok(())
        });
    }
}

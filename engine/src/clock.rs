use crate::constants::Millis;
use chrono::{DateTime, NaiveDate};

fn utc_date(at: Millis) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(at).map(|dt| dt.date_naive())
}

/// Whether `now` falls on a different UTC calendar day than `last`.
///
/// Only the (year, month, day) triple matters: 23:59 to 00:01 is a new day, 00:01 to 23:59
/// of the same date is not. Instants chrono cannot represent count as a new day.
pub fn is_new_utc_day(last: Millis, now: Millis) -> bool {
    match (utc_date(last), utc_date(now)) {
        (Some(last), Some(now)) => last != now,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Millis {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0)
            .single()
            .expect("valid date")
            .timestamp_millis()
    }

    #[test]
    fn midnight_crossing_is_a_new_day() {
        assert!(is_new_utc_day(at(2024, 1, 1, 23, 59), at(2024, 1, 2, 0, 1)));
    }

    #[test]
    fn same_date_is_never_a_new_day() {
        assert!(!is_new_utc_day(at(2024, 1, 1, 0, 1), at(2024, 1, 1, 23, 59)));
    }

    #[test]
    fn same_day_of_month_in_another_month_is_a_new_day() {
        assert!(is_new_utc_day(at(2024, 1, 15, 12, 0), at(2024, 2, 15, 12, 0)));
        assert!(is_new_utc_day(at(2023, 3, 15, 12, 0), at(2024, 3, 15, 12, 0)));
    }

    #[test]
    fn unrepresentable_instant_counts_as_new_day() {
        assert!(is_new_utc_day(Millis::MIN, at(2024, 1, 1, 0, 0)));
    }
}

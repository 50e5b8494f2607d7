//! Day counts between lifecycle events

use crate::date::CalendarValue;
use chrono::NaiveDate;

/// Days from `a` to `b` at calendar-day granularity, never negative
///
/// A negative span is collapsed to `0`. Such spans come from inconsistent or
/// partially specified source dates, e.g. an issue date known only to the
/// month (resolved to day 1) compared with a publish date later that month.
/// The collapse is lossy policy: "no elapsed time", not "unknown".
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u32 {
    let days = b.signed_duration_since(a).num_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Days from `a` to `b` for two resolved calendar values
///
/// # Panics
///
/// Panics if either operand is [`CalendarValue::Absent`]. Callers must check
/// both endpoints first; an absent operand is a programming error.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pubtrail_features::{distance, CalendarValue};
///
/// let a = CalendarValue::Resolved(NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
/// let b = CalendarValue::Resolved(NaiveDate::from_ymd_opt(2021, 1, 31).unwrap());
/// assert_eq!(distance(&a, &b), 30);
/// assert_eq!(distance(&b, &a), 0);
/// ```
pub fn distance(a: &CalendarValue, b: &CalendarValue) -> u32 {
    match (a, b) {
        (CalendarValue::Resolved(a), CalendarValue::Resolved(b)) => days_between(*a, *b),
        _ => panic!(
            "day distance requires two resolved dates, got {:?} and {:?}",
            a, b
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarValue {
        CalendarValue::Resolved(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_forward_span() {
        assert_eq!(distance(&date(2021, 1, 1), &date(2021, 1, 31)), 30);
        assert_eq!(distance(&date(2020, 1, 15), &date(2020, 2, 20)), 36);
    }

    #[test]
    fn test_negative_span_collapses_to_zero() {
        assert_eq!(distance(&date(2021, 3, 15), &date(2021, 3, 1)), 0);
    }

    #[test]
    fn test_same_day() {
        assert_eq!(distance(&date(2021, 3, 15), &date(2021, 3, 15)), 0);
    }

    #[test]
    fn test_leap_year() {
        assert_eq!(distance(&date(2020, 2, 28), &date(2020, 3, 1)), 2);
        assert_eq!(distance(&date(2021, 2, 28), &date(2021, 3, 1)), 1);
    }

    #[test]
    #[should_panic(expected = "requires two resolved dates")]
    fn test_absent_operand_panics() {
        distance(&CalendarValue::Absent, &date(2021, 3, 1));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: distance is never negative and matches the signed span when forward
        #[test]
        fn test_distance_non_negative(a in 0i64..40_000, b in 0i64..40_000) {
            let epoch = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
            let da = epoch + chrono::Duration::days(a);
            let db = epoch + chrono::Duration::days(b);

            let d = distance(&CalendarValue::Resolved(da), &CalendarValue::Resolved(db));
            if b >= a {
                prop_assert_eq!(i64::from(d), b - a);
            } else {
                prop_assert_eq!(d, 0);
            }
        }
    }
}

//! Raw date strings to calendar values

use chrono::{Datelike, NaiveDate};

/// Formats for a three-token date, in order
const DAY_MONTH_YEAR_FORMATS: &[&str] = &[
    "%d %B %Y",  // 15 March 2021, 15 Mar 2021
    "%B %d, %Y", // March 15, 2021
    "%B %d %Y",  // March 15 2021
];

/// Format for a single-token ISO date
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A date resolved to calendar-day precision, or the explicit absence of one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarValue {
    /// A resolved calendar date
    Resolved(NaiveDate),

    /// Empty or uninterpretable source string
    Absent,
}

impl CalendarValue {
    /// Whether a date was resolved
    pub fn is_resolved(&self) -> bool {
        matches!(self, CalendarValue::Resolved(_))
    }

    /// The resolved date, if any
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarValue::Resolved(date) => Some(*date),
            CalendarValue::Absent => None,
        }
    }

    /// `(year, month, day)` of the resolved date
    pub fn ymd(&self) -> Option<(i32, u32, u32)> {
        self.date().map(|d| (d.year(), d.month(), d.day()))
    }
}

impl From<Option<NaiveDate>> for CalendarValue {
    fn from(date: Option<NaiveDate>) -> Self {
        match date {
            Some(date) => CalendarValue::Resolved(date),
            None => CalendarValue::Absent,
        }
    }
}

/// Textual `(month, year)` projection of a raw date string
///
/// Both parts are empty when the string has no recognisable shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthYear {
    /// Month token as written on the page (e.g. `March`)
    pub month: String,

    /// Year token as written on the page (e.g. `2021`)
    pub year: String,
}

impl MonthYear {
    /// Create a pair
    pub fn new(month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            year: year.into(),
        }
    }

    /// Whether neither part was found
    pub fn is_empty(&self) -> bool {
        self.month.is_empty() && self.year.is_empty()
    }
}

/// Normalizes raw date strings of unspecified format
///
/// Parsing never fails loudly: anything that cannot be interpreted as at
/// least a month and a year becomes [`CalendarValue::Absent`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DateParser;

impl DateParser {
    /// Create a parser
    pub fn new() -> Self {
        Self
    }

    /// Interpret `raw` as a day-month-year or month-year date
    ///
    /// Month-only dates resolve to the first day of that month.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubtrail_features::{CalendarValue, DateParser};
    ///
    /// let parser = DateParser::new();
    /// assert_eq!(parser.parse_full("15 March 2021").ymd(), Some((2021, 3, 15)));
    /// assert_eq!(parser.parse_full("March 2021").ymd(), Some((2021, 3, 1)));
    /// assert_eq!(parser.parse_full(""), CalendarValue::Absent);
    /// assert_eq!(parser.parse_full("sometime"), CalendarValue::Absent);
    /// ```
    pub fn parse_full(&self, raw: &str) -> CalendarValue {
        let normalized = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            return CalendarValue::Absent;
        }

        // Dispatch on shape first: chrono lets a format space match nothing
        // and `%Y` match two digits, so "March 2020" would otherwise read as
        // March 20 of year 20.
        let date = match normalized.split(' ').count() {
            3 => parse_day_month_year(&normalized),
            2 => parse_month_year(&normalized),
            1 => parse_iso(&normalized),
            _ => None,
        };
        date.into()
    }

    /// Split `raw` on whitespace and pick the month and year tokens
    ///
    /// Three tokens are read as `<day> <month> <year>`, two tokens as
    /// `<month> <year>`; any other count yields an empty pair. This is a
    /// purely textual projection and accepts strings `parse_full` rejects.
    ///
    /// # Examples
    ///
    /// ```
    /// use pubtrail_features::{DateParser, MonthYear};
    ///
    /// let parser = DateParser::new();
    /// assert_eq!(parser.month_year("15 March 2021"), MonthYear::new("March", "2021"));
    /// assert_eq!(parser.month_year("March 2021"), MonthYear::new("March", "2021"));
    /// assert_eq!(parser.month_year(""), MonthYear::default());
    /// ```
    pub fn month_year(&self, raw: &str) -> MonthYear {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        match tokens.as_slice() {
            [_, month, year] => MonthYear::new(*month, *year),
            [month, year] => MonthYear::new(*month, *year),
            _ => MonthYear::default(),
        }
    }
}

fn parse_day_month_year(s: &str) -> Option<NaiveDate> {
    DAY_MONTH_YEAR_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

fn parse_month_year(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("1 {}", s), "%d %B %Y").ok()
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", s), ISO_DATE_FORMAT))
        .ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: three tokens project positions 1 and 2
        #[test]
        fn test_three_tokens(day in "[0-9]{1,2}", month in "[A-Za-z]{3,9}", year in "[0-9]{4}") {
            let raw = format!("{} {} {}", day, month, year);
            prop_assert_eq!(DateParser::new().month_year(&raw), MonthYear::new(month, year));
        }

        /// Property: two tokens project positions 0 and 1
        #[test]
        fn test_two_tokens(month in "[A-Za-z]{3,9}", year in "[0-9]{4}") {
            let raw = format!("{} {}", month, year);
            prop_assert_eq!(DateParser::new().month_year(&raw), MonthYear::new(month, year));
        }

        /// Property: any other token count gives an empty pair
        #[test]
        fn test_other_token_counts(tokens in prop::collection::vec("[a-z0-9]{1,6}", 0..8)) {
            prop_assume!(tokens.len() != 2 && tokens.len() != 3);
            let raw = tokens.join(" ");
            prop_assert!(DateParser::new().month_year(&raw).is_empty());
        }

        /// Property: parse_full never panics
        #[test]
        fn test_parse_full_total(raw in ".*") {
            let _ = DateParser::new().parse_full(&raw);
        }
    }
}

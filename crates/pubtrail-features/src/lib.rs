//! Pubtrail Features
//!
//! Turns the raw lifecycle timestamps of harvested articles into comparable
//! calendar values and tabular features.
//!
//! # Pipeline
//!
//! ```text
//! ArticleRecord → DateParser → CalendarValue ─┐
//!               └→ month_year ─────────────────┴→ FeatureRow → table
//! ```
//!
//! - [`DateParser`] resolves a raw string into a [`CalendarValue`] or
//!   `Absent`, and projects `(month, year)` independently of full parsing.
//! - [`distance`] counts days between two resolved values, collapsing
//!   negative spans to zero.
//! - [`FeatureCalculator`] derives one [`FeatureRow`] per record.
//! - [`write_table`] renders rows as `;`-separated text.
//!
//! # Example Usage
//!
//! ```
//! use pubtrail_domain::{ArticleLink, ArticleRecord, LifecycleTimestamps};
//! use pubtrail_features::{DayDelta, FeatureCalculator};
//!
//! let time = LifecycleTimestamps {
//!     received: "01 January 2020".to_string(),
//!     accepted: "15 January 2020".to_string(),
//!     published: "20 February 2020".to_string(),
//!     issuedate: "March 2020".to_string(),
//! };
//! let record = ArticleRecord::new("Title", ArticleLink::new("https://example.org"), "", time);
//!
//! let row = FeatureCalculator::new().compute(&record);
//! assert_eq!(row.received_to_accepted, DayDelta::Days(14));
//! assert_eq!(row.accepted_to_published, DayDelta::Days(36));
//! assert_eq!(row.published_to_issued, DayDelta::Days(10));
//! ```

#![warn(missing_docs)]

mod calculator;
mod config;
mod date;
mod distance;
mod error;
mod table;

pub use calculator::{DayDelta, FeatureCalculator, FeatureRow};
pub use config::FeatureConfig;
pub use date::{CalendarValue, DateParser, MonthYear};
pub use distance::{days_between, distance};
pub use error::FeatureError;
pub use table::{write_table, TABLE_HEADER};

//! Records in, feature table out

use pubtrail_domain::ArticleRecord;
use pubtrail_features::{write_table, DayDelta, FeatureCalculator, FeatureConfig, MonthYear};

const RECORDS: &str = r#"[
  {
    "title": "Structure of the nucleosome core particle",
    "link": "https://www.nature.com/articles/s41586-020-0001-1",
    "doi": "https://doi.org/10.1038/s41586-020-0001-1",
    "time": {
      "received": "01 January 2020",
      "accepted": "15 January 2020",
      "published": "20 February 2020",
      "issuedate": "March 2020"
    }
  },
  {
    "title": "Legacy structure of things",
    "link": "https://www.nature.com/articles/nature07001",
    "doi": "",
    "time": {
      "received": "",
      "accepted": "17 April 2008",
      "published": "08 June 2008",
      "issuedate": ""
    }
  },
  {
    "title": "Corrected after issue",
    "link": "https://www.nature.com/articles/c1",
    "time": {
      "published": "20 May 2015",
      "issuedate": "April 2015"
    }
  }
]"#;

fn records() -> Vec<ArticleRecord> {
    serde_json::from_str(RECORDS).unwrap()
}

#[test]
fn test_full_lifecycle_record() {
    let row = FeatureCalculator::new().compute(&records()[0]);

    assert_eq!(row.received, MonthYear::new("January", "2020"));
    assert_eq!(row.issued, MonthYear::new("March", "2020"));
    assert_eq!(row.received_to_accepted, DayDelta::Days(14));
    assert_eq!(row.accepted_to_published, DayDelta::Days(36));
    assert_eq!(row.published_to_issued, DayDelta::Days(10));
}

#[test]
fn test_absent_received_only_affects_its_delta() {
    let row = FeatureCalculator::new().compute(&records()[1]);

    assert!(row.received.is_empty());
    assert_eq!(row.received_to_accepted, DayDelta::NotComputable);
    assert_eq!(row.accepted_to_published, DayDelta::Days(52));
    assert_eq!(row.published_to_issued, DayDelta::NotComputable);
}

#[test]
fn test_issue_before_publication_collapses_to_zero() {
    let row = FeatureCalculator::new().compute(&records()[2]);

    assert_eq!(row.published_to_issued, DayDelta::Days(0));
    assert_eq!(row.received_to_accepted, DayDelta::NotComputable);
}

#[test]
fn test_table_for_saved_records() {
    let rows = FeatureCalculator::new().compute_all(&records());

    let mut out = Vec::new();
    write_table(&mut out, &rows, &FeatureConfig::default()).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "Structure of the nucleosome core particle;https://doi.org/10.1038/s41586-020-0001-1;\
         January;2020;January;2020;February;2020;March;2020;14;36;10"
    );
    assert_eq!(lines[2], "Legacy structure of things;;;;April;2008;June;2008;;;;52;");
    for line in &lines {
        assert_eq!(line.split(';').count(), 13);
    }
}

#[test]
fn test_missing_delta_placeholder() {
    let rows = FeatureCalculator::new().compute_all(&records()[1..2]);
    let config = FeatureConfig {
        missing_delta: "NA".to_string(),
        separator: ",".to_string(),
    };

    let mut out = Vec::new();
    write_table(&mut out, &rows, &config).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(
        text.lines().nth(1),
        Some("Legacy structure of things,,,,April,2008,June,2008,,,NA,52,NA")
    );
}

//! Report export for spendlog
//!
//! Serializes a filtered expense view to a sectioned CSV file named after
//! the covered period.

pub mod csv;

pub use csv::{export_to_path, write_report};

use chrono::NaiveDateTime;

/// The period a report covers, used for its title and file name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// A whole calendar month
    Month { month: u32, year: i32 },
    /// An inclusive date range
    Range {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl ReportPeriod {
    /// Title line written at the top of the report
    pub fn title(&self) -> String {
        match self {
            Self::Month { month, year } => {
                format!("Expense Analysis for {} {}", month_name(*month), year)
            }
            Self::Range { start, end } => format!(
                "Expense Analysis from {} to {}",
                start.format("%d-%m-%Y"),
                end.format("%d-%m-%Y")
            ),
        }
    }

    /// Short human label for the period, used in messages
    pub fn label(&self) -> String {
        match self {
            Self::Month { month, year } => format!("{} {}", month_name(*month), year),
            Self::Range { start, end } => format!(
                "{} to {}",
                start.format("%d-%m-%Y"),
                end.format("%d-%m-%Y")
            ),
        }
    }

    /// File name the report is written under
    pub fn file_name(&self) -> String {
        match self {
            Self::Month { month, year } => format!("expense_report_{:02}-{}.csv", month, year),
            Self::Range { start, end } => format!(
                "expense_report_{}_to_{}.csv",
                start.format("%d-%m-%Y"),
                end.format("%d-%m-%Y")
            ),
        }
    }
}

/// English name of a calendar month (1-12)
pub fn month_name(month: u32) -> &'static str {
    chrono::Month::try_from(month as u8)
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn range() -> ReportPeriod {
        ReportPeriod::Range {
            start: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(23, 59, 59)
                .unwrap(),
        }
    }

    #[test]
    fn test_month_title_and_file_name() {
        let period = ReportPeriod::Month {
            month: 3,
            year: 2024,
        };
        assert_eq!(period.title(), "Expense Analysis for March 2024");
        assert_eq!(period.file_name(), "expense_report_03-2024.csv");
        assert_eq!(period.label(), "March 2024");
    }

    #[test]
    fn test_range_title_and_file_name() {
        let period = range();
        assert_eq!(
            period.title(),
            "Expense Analysis from 01-03-2024 to 15-03-2024"
        );
        assert_eq!(
            period.file_name(),
            "expense_report_01-03-2024_to_15-03-2024.csv"
        );
    }

    #[test]
    fn test_month_name() {
        assert_eq!(month_name(1), "January");
        assert_eq!(month_name(12), "December");
        assert_eq!(month_name(13), "Unknown");
    }
}

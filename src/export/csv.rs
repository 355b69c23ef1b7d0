//! CSV report writer
//!
//! Writes the sectioned expense report: a separator hint for spreadsheet
//! apps, the period title and export timestamp, the detailed expense table
//! sorted newest first, the grand total, category and payment-method totals
//! with zero rows omitted, and the highest expense of the period.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::{Expense, LabelRegistry};
use crate::reports::totals;

use super::ReportPeriod;

/// Write a full report for `records` to `writer`
///
/// Fails with an empty-set error, writing nothing, when `records` is empty.
pub fn write_report<W: Write>(
    records: &[Expense],
    period: &ReportPeriod,
    categories: &LabelRegistry,
    payment_methods: &[&str],
    exported_at: NaiveDateTime,
    writer: &mut W,
) -> SpendlogResult<()> {
    if records.is_empty() {
        return Err(SpendlogError::EmptySet(period.label()));
    }

    let total = totals::total(records);
    let category_totals = totals::by_category(records, categories.len());
    let method_totals = totals::by_payment_method(records, payment_methods.len());
    let highest = totals::highest(records)?;

    // Separator hint for spreadsheet apps; must stay unquoted to be honored
    writeln!(writer, "SEP=,").map_err(export_err)?;
    writeln!(writer, "{}", escape_csv(&period.title())).map_err(export_err)?;
    writeln!(
        writer,
        "Exported on: {}",
        exported_at.format("%d-%m-%Y %H:%M:%S")
    )
    .map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    // Detailed expenses, newest first
    writeln!(writer, "Detailed Expenses").map_err(export_err)?;
    writeln!(
        writer,
        "Index,Date,Amount,Description,Category,Payment Method,Day of Week,Month,Year"
    )
    .map_err(export_err)?;

    let mut sorted: Vec<&Expense> = records.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    for (i, expense) in sorted.iter().enumerate() {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{},{}",
            i + 1,
            expense.date.format("%d-%m-%Y"),
            expense.amount.to_plain_string(),
            escape_csv(&expense.description),
            escape_csv(&label_or_unknown(categories, expense.category)),
            escape_csv(&method_or_unknown(payment_methods, expense.payment_method)),
            expense.date.format("%A"),
            expense.date.format("%B"),
            expense.date.format("%Y")
        )
        .map_err(export_err)?;
    }

    writeln!(writer).map_err(export_err)?;
    writeln!(writer, "Total Expenses,{}", total.to_plain_string()).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    // Category totals, zero rows omitted
    writeln!(writer, "Category-wise Totals").map_err(export_err)?;
    writeln!(writer, "Category,Total,% of Total").map_err(export_err)?;
    for (i, amount) in category_totals.iter().enumerate() {
        if amount.is_positive() {
            writeln!(
                writer,
                "{},{},{:.2}%",
                escape_csv(&label_or_unknown(categories, i)),
                amount.to_plain_string(),
                totals::percentage(*amount, total)
            )
            .map_err(export_err)?;
        }
    }

    writeln!(writer).map_err(export_err)?;

    // Payment method totals, zero rows omitted
    writeln!(writer, "Payment Method Totals").map_err(export_err)?;
    writeln!(writer, "Payment Method,Total").map_err(export_err)?;
    for (i, amount) in method_totals.iter().enumerate() {
        if amount.is_positive() {
            writeln!(
                writer,
                "{},{}",
                escape_csv(&method_or_unknown(payment_methods, i)),
                amount.to_plain_string()
            )
            .map_err(export_err)?;
        }
    }

    writeln!(writer).map_err(export_err)?;

    writeln!(writer, "Highest Expense").map_err(export_err)?;
    writeln!(writer, "Amount,Description,Category,Payment Method,Date").map_err(export_err)?;
    writeln!(
        writer,
        "{},{},{},{},{}",
        highest.amount.to_plain_string(),
        escape_csv(&highest.description),
        escape_csv(&label_or_unknown(categories, highest.category)),
        escape_csv(&method_or_unknown(payment_methods, highest.payment_method)),
        highest.date.format("%d-%m-%Y")
    )
    .map_err(export_err)?;

    writer.flush().map_err(export_err)?;

    Ok(())
}

/// Write a report file named after the period into `dir`
///
/// The empty-set check runs before the file is created, so a failed export
/// leaves no file behind. Returns the path written.
pub fn export_to_path(
    records: &[Expense],
    period: &ReportPeriod,
    categories: &LabelRegistry,
    payment_methods: &[&str],
    dir: &Path,
) -> SpendlogResult<PathBuf> {
    if records.is_empty() {
        return Err(SpendlogError::EmptySet(period.label()));
    }

    let path = dir.join(period.file_name());
    let mut file = File::create(&path).map_err(|e| {
        SpendlogError::Export(format!("Failed to create {}: {}", path.display(), e))
    })?;

    write_report(
        records,
        period,
        categories,
        payment_methods,
        Local::now().naive_local(),
        &mut file,
    )?;

    log::info!("Wrote report to {}", path.display());
    Ok(path)
}

fn export_err(e: std::io::Error) -> SpendlogError {
    SpendlogError::Export(e.to_string())
}

/// Escape a string for CSV format
fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

fn label_or_unknown(categories: &LabelRegistry, index: usize) -> String {
    categories
        .get(index)
        .unwrap_or("Unknown")
        .to_string()
}

fn method_or_unknown(payment_methods: &[&str], index: usize) -> String {
    payment_methods
        .get(index)
        .copied()
        .unwrap_or("Unknown")
        .to_string()
}

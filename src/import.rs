//! CSV transaction import
//!
//! Parses delimited text in the dashboard's wire format: a header line
//! followed by one row per transaction, columns in fixed order
//! `date,vendor,amount,category,transactionType`. Quoting follows RFC 4180
//! via the `csv` crate, so vendor and category names containing commas are
//! handled correctly when quoted.
//!
//! Parsing is row-tolerant: malformed rows are collected as [`RowError`]s
//! alongside the rows that parsed, and the caller decides whether to keep
//! the partial batch or reject the whole import via [`parse_csv_strict`].
//! A malformed amount is always a row error, never a silent zero.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Money, Transaction};

/// Expected column count: date, vendor, amount, category, transactionType
pub const EXPECTED_FIELDS: usize = 5;

/// Date format accepted for the date column
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a single CSV row failed to parse
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RowErrorKind {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("malformed row: {0}")]
    Malformed(String),
}

/// A parse failure for one data row
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("row {row}: {kind}")]
pub struct RowError {
    /// 1-based data row number (the header line is row 0)
    pub row: usize,
    /// What went wrong
    pub kind: RowErrorKind,
}

/// Outcome of a tolerant CSV parse
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// Rows that parsed successfully, in input order
    pub transactions: Vec<Transaction>,
    /// Rows that failed, in input order
    pub errors: Vec<RowError>,
}

impl ImportReport {
    /// True when every data row parsed
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of data rows seen
    pub fn row_count(&self) -> usize {
        self.transactions.len() + self.errors.len()
    }
}

/// Parse CSV content into transactions, collecting per-row errors
///
/// The header line is discarded. Empty input (or header-only input) yields
/// an empty report. Every field is trimmed of surrounding whitespace.
pub fn parse_csv(content: &str) -> ImportReport {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.trim().as_bytes());

    let mut report = ImportReport::default();

    for (idx, result) in reader.records().enumerate() {
        let row = idx + 1;
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                report.errors.push(RowError {
                    row,
                    kind: RowErrorKind::Malformed(e.to_string()),
                });
                continue;
            }
        };

        match parse_record(&record) {
            Ok(txn) => report.transactions.push(txn),
            Err(kind) => report.errors.push(RowError { row, kind }),
        }
    }

    report
}

/// Parse CSV content, rejecting the whole batch on the first bad row
pub fn parse_csv_strict(content: &str) -> BudgetResult<Vec<Transaction>> {
    let report = parse_csv(content);
    match report.errors.into_iter().next() {
        Some(err) => Err(BudgetError::Import {
            row: err.row,
            message: err.kind.to_string(),
        }),
        None => Ok(report.transactions),
    }
}

fn parse_record(record: &StringRecord) -> Result<Transaction, RowErrorKind> {
    if record.len() != EXPECTED_FIELDS {
        return Err(RowErrorKind::FieldCount {
            expected: EXPECTED_FIELDS,
            found: record.len(),
        });
    }

    let field = |i: usize| record.get(i).unwrap_or_default();

    let date_str = field(0);
    let date = NaiveDate::parse_from_str(date_str, DATE_FORMAT)
        .map_err(|_| RowErrorKind::InvalidDate(date_str.to_string()))?;

    let amount = parse_amount(field(2))?;

    Ok(Transaction::new(
        date,
        field(1),
        amount,
        field(3),
        field(4),
    ))
}

/// Parse an amount field, tolerating currency markup
///
/// Anything other than digits, `.` and `-` is stripped first, so "$2,000.00"
/// and "150.00 USD" both parse. An empty or unparsable remainder is an
/// error, as is a negative value: amounts are magnitudes and direction comes
/// from the type column, never from the sign.
fn parse_amount(raw: &str) -> Result<Money, RowErrorKind> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    let invalid = || RowErrorKind::InvalidAmount(raw.to_string());

    if cleaned.is_empty() {
        return Err(invalid());
    }

    let amount = Money::parse(&cleaned).map_err(|_| invalid())?;
    if amount.is_negative() {
        return Err(invalid());
    }
    Ok(amount)
}

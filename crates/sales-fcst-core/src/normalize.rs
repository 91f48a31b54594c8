//! Row normalization: raw text rows to typed feature rows.
//!
//! Converts each [`RawRow`] into a [`FeatureRow`] one-to-one and in order.
//! Under the default fail-open policy nothing is rejected: malformed dates
//! and unparseable quantities degrade to NaN sentinels, unknown product
//! names collapse to [`Category::ProductB`], and every row flows on into
//! training. The stricter [`CoercionPolicy::Reject`] fails the run on the
//! first invalid date or quantity instead.

use chrono::{Datelike, NaiveDate};

use crate::error::{PipelineError, Result};
use crate::ingest::RawRow;

/// Column carrying the sale date text.
pub const DATE_COLUMN: &str = "sales_date";
/// Column carrying the product name text.
pub const PRODUCT_COLUMN: &str = "product_description";
/// Column carrying the quantity text.
pub const QUANTITY_COLUMN: &str = "quantity_sold";

/// Product name that encodes to class 0.
pub const PRODUCT_A_NAME: &str = "Product A";

/// Closed two-class product encoding.
///
/// Exactly [`PRODUCT_A_NAME`] maps to class 0; every other product name,
/// including empty or missing, collapses to class 1. A third product name
/// is silently misclassified — an accepted approximation of the
/// two-product scheme, not a bug to fix here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    ProductA,
    ProductB,
}

impl Category {
    /// Both categories in canonical (code) order.
    pub const ALL: [Category; 2] = [Category::ProductA, Category::ProductB];

    /// Encode a product name.
    pub fn from_name(name: &str) -> Self {
        if name == PRODUCT_A_NAME {
            Category::ProductA
        } else {
            Category::ProductB
        }
    }

    /// Numeric code used as the model feature.
    pub fn code(&self) -> f64 {
        match self {
            Category::ProductA => 0.0,
            Category::ProductB => 1.0,
        }
    }

    /// Display name used in predicted series labels.
    pub fn label(&self) -> &'static str {
        match self {
            Category::ProductA => "Product A",
            Category::ProductB => "Product B",
        }
    }
}

/// Policy for coercing malformed cell text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionPolicy {
    /// Invalid values become NaN sentinels that flow into training
    /// undiagnosed beyond debug logging.
    #[default]
    FailOpen,
    /// The first invalid date or quantity fails normalization.
    Reject,
}

/// One typed training observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow {
    /// 1-based month number of the sale date; NaN when the date text was
    /// malformed under the fail-open policy.
    pub period: f64,
    /// Binary product class.
    pub category: Category,
    /// Quantity sold; NaN when unparseable under the fail-open policy.
    pub quantity: f64,
}

/// Normalize raw rows into feature rows, one-to-one and order-preserving.
pub fn normalize_rows(rows: &[RawRow], policy: CoercionPolicy) -> Result<Vec<FeatureRow>> {
    let normalized: Result<Vec<FeatureRow>> =
        rows.iter().map(|row| normalize_row(row, policy)).collect();
    let normalized = normalized?;

    tracing::debug!(rows = normalized.len(), "normalized rows");
    Ok(normalized)
}

fn normalize_row(row: &RawRow, policy: CoercionPolicy) -> Result<FeatureRow> {
    let date_text = field(row, DATE_COLUMN);
    let period = match parse_month(date_text) {
        Some(month) => f64::from(month),
        None => match policy {
            CoercionPolicy::FailOpen => {
                tracing::debug!(value = date_text, "unparseable sale date, period is NaN");
                f64::NAN
            }
            CoercionPolicy::Reject => {
                return Err(PipelineError::InvalidInput(format!(
                    "unparseable sale date '{date_text}'"
                )))
            }
        },
    };

    let category = Category::from_name(field(row, PRODUCT_COLUMN));

    let quantity_text = field(row, QUANTITY_COLUMN);
    let quantity = parse_quantity(quantity_text);
    if quantity.is_nan() {
        match policy {
            CoercionPolicy::FailOpen => {
                tracing::debug!(value = quantity_text, "unparseable quantity, using NaN");
            }
            CoercionPolicy::Reject => {
                return Err(PipelineError::InvalidInput(format!(
                    "unparseable quantity '{quantity_text}'"
                )))
            }
        }
    }

    Ok(FeatureRow {
        period,
        category,
        quantity,
    })
}

fn field<'a>(row: &'a RawRow, name: &str) -> &'a str {
    row.get(name).map(String::as_str).unwrap_or("")
}

/// Extract the 1-based month number from date-like text.
///
/// Accepts the formats the sales exports actually carry: full dates
/// (`2023-01-15`, `01/15/2023`) and year-month (`2023-01`).
pub fn parse_month(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%m/%d/%Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.month());
        }
    }

    // Year-month only; anchor to the first day to reuse the date parser.
    NaiveDate::parse_from_str(&format!("{text}-01"), "%Y-%m-%d")
        .ok()
        .map(|date| date.month())
}

/// Best-effort float parse: a full parse first, then the longest leading
/// numeric prefix, then NaN.
pub fn parse_quantity(text: &str) -> f64 {
    let text = text.trim();
    if let Ok(value) = text.parse::<f64>() {
        return value;
    }

    let prefix = numeric_prefix_len(text);
    if prefix == 0 {
        return f64::NAN;
    }
    text[..prefix].parse::<f64>().unwrap_or(f64::NAN)
}

fn numeric_prefix_len(text: &str) -> usize {
    let mut len = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'+' | b'-' if i == 0 => len = i + 1,
            b'0'..=b'9' => {
                seen_digit = true;
                len = i + 1;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                len = i + 1;
            }
            _ => break,
        }
    }

    if seen_digit {
        len
    } else {
        0
    }
}

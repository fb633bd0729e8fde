//! Cell values extracted from records.
//!
//! Every field a table can filter, sort or display is read as a [`CellValue`].

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// A single field value, typed so that sorting can pick a comparator per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Missing value. Displays as empty text.
    Empty,
    /// Free text
    Text(String),
    /// Numeric value (amounts, progress)
    Number(f64),
    /// Calendar date
    Date(NaiveDate),
}

impl CellValue {
    /// Build a text value, mapping an empty string to [`CellValue::Empty`].
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// Build a date value from an optional date.
    pub fn date(value: Option<NaiveDate>) -> Self {
        value.map_or(Self::Empty, Self::Date)
    }

    /// Whether the value is missing.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Rank used when two values of different kinds meet in a sort.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Number(_) => 0,
            Self::Date(_) => 1,
            Self::Text(_) => 2,
            Self::Empty => 3,
        }
    }

    /// Ascending comparison between two values.
    ///
    /// # Details
    /// - Numbers use `f64::total_cmp`
    /// - Dates compare chronologically
    /// - Text compares case-insensitively, then by raw text so that the order is total
    /// - Values of different kinds order Number < Date < Text
    ///
    /// `Empty` handling is left to [`compare_for_sort`], which keeps it last in
    /// both directions.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a), Self::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

/// Compare two values for a sort in the given direction.
///
/// Empty values always go last, whichever the direction.
pub fn compare_for_sort(a: &CellValue, b: &CellValue, ascending: bool) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.compare(b);
            if ascending { ordering } else { ordering.reverse() }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Number(n) if n.fract() == 0.0 && n.is_finite() => write!(f, "{}", *n as i64),
            Self::Number(n) => write!(f, "{}", n),
            Self::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u8> for CellValue {
    fn from(value: u8) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<NaiveDate> for CellValue {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::Number(12500.0).to_string(), "12500");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(day(2024, 4, 5).to_string(), "2024-04-05");
        assert_eq!(CellValue::text("Laval").to_string(), "Laval");
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(CellValue::text("").is_empty());
        assert!(CellValue::date(None).is_empty());
    }

    #[test]
    fn test_compare_same_kind() {
        assert_eq!(
            CellValue::Number(2.0).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(day(2024, 5, 1).compare(&day(2024, 4, 30)), Ordering::Greater);
        assert_eq!(
            CellValue::text("laval").compare(&CellValue::text("Montréal")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::text("Fini").compare(&CellValue::text("Fini")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_compare_mixed_kinds() {
        assert_eq!(
            CellValue::Number(999.0).compare(&day(2000, 1, 1)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::text("a").compare(&CellValue::Number(1.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_empty_sorts_last_both_directions() {
        let empty = CellValue::Empty;
        let value = CellValue::Number(1.0);
        assert_eq!(compare_for_sort(&empty, &value, true), Ordering::Greater);
        assert_eq!(compare_for_sort(&empty, &value, false), Ordering::Greater);
        assert_eq!(compare_for_sort(&value, &empty, false), Ordering::Less);
        assert_eq!(compare_for_sort(&empty, &empty, true), Ordering::Equal);
    }

    #[test]
    fn test_descending_reverses() {
        let a = CellValue::Number(1.0);
        let b = CellValue::Number(2.0);
        assert_eq!(compare_for_sort(&a, &b, true), Ordering::Less);
        assert_eq!(compare_for_sort(&a, &b, false), Ordering::Greater);
    }
}

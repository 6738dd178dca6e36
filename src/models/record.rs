//! Ledger record model
//!
//! A record captures one income or expense entry. The home-currency value is
//! computed once at construction from the rate in effect at that moment; a
//! later rate change never rewrites existing records.

use chrono::NaiveDate;
use std::fmt;

use super::category::Category;
use crate::fx;

/// Whether a record adds to or subtracts from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Kind {
    #[default]
    Income,
    Expense,
}

impl Kind {
    /// Canonical language-independent identifier (used by the sink)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Toggle between the two kinds
    pub fn toggle(&self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Currency the amount was entered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    /// The currency all summaries are denominated in (TWD in the original)
    #[default]
    Home,
    /// Converted via the session rate at entry time (USD in the original)
    Foreign,
}

impl Currency {
    /// Canonical language-independent identifier (used by the sink)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Foreign => "foreign",
        }
    }

    /// Toggle between the two currencies
    pub fn toggle(&self) -> Self {
        match self {
            Self::Home => Self::Foreign,
            Self::Foreign => Self::Home,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One ledger entry
///
/// Records have no identity beyond their position in the ledger; deleting one
/// shifts the positions of everything after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Entry date (user-supplied, defaults to today in the entry form)
    pub date: NaiveDate,

    /// Income or expense
    pub kind: Kind,

    /// Amount as entered, non-negative, denominated in `currency`
    pub amount: f64,

    /// Currency the amount was entered in
    pub currency: Currency,

    /// Home-currency value, negative for expenses. Snapshotted at entry time.
    pub converted: f64,

    /// Category
    pub category: Category,

    /// Free-text note, may be empty
    pub note: String,
}

impl Record {
    /// Create a record, converting the amount at the given rate.
    ///
    /// Expenses store the negated converted magnitude so summary totals are
    /// plain sums over the ledger.
    pub fn new(
        date: NaiveDate,
        kind: Kind,
        amount: f64,
        currency: Currency,
        rate: f64,
        category: Category,
        note: impl Into<String>,
    ) -> Self {
        let magnitude = fx::convert(amount, currency, rate);
        let converted = match kind {
            Kind::Income => magnitude,
            Kind::Expense => -magnitude,
        };

        Self {
            date,
            kind,
            amount,
            currency,
            converted,
            category,
            note: note.into(),
        }
    }

    /// The "YYYY-MM" month key used by the monthly statistics view
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {} ({:.2})",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount,
            self.currency,
            self.converted
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_home_income_passes_through() {
        let rec = Record::new(
            date(2024, 3, 15),
            Kind::Income,
            100.0,
            Currency::Home,
            32.0,
            Category::Salary,
            "",
        );
        assert_eq!(rec.converted, 100.0);
    }

    #[test]
    fn test_foreign_income_converts_at_rate() {
        let rec = Record::new(
            date(2024, 3, 15),
            Kind::Income,
            100.0,
            Currency::Foreign,
            32.0,
            Category::Salary,
            "paycheck",
        );
        assert!((rec.converted - 3200.0).abs() < 1e-9);
    }

    #[test]
    fn test_expense_stores_negative_converted() {
        let rec = Record::new(
            date(2024, 3, 15),
            Kind::Expense,
            50.0,
            Currency::Home,
            32.0,
            Category::Food,
            "lunch",
        );
        assert_eq!(rec.converted, -50.0);
        // The entered amount keeps its sign
        assert_eq!(rec.amount, 50.0);
    }

    #[test]
    fn test_rate_is_snapshotted_per_record() {
        let a = Record::new(
            date(2024, 3, 1),
            Kind::Income,
            10.0,
            Currency::Foreign,
            30.0,
            Category::Other,
            "",
        );
        let b = Record::new(
            date(2024, 3, 2),
            Kind::Income,
            10.0,
            Currency::Foreign,
            33.0,
            Category::Other,
            "",
        );
        assert!((a.converted - 300.0).abs() < 1e-9);
        assert!((b.converted - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_key() {
        let rec = Record::new(
            date(2024, 3, 15),
            Kind::Expense,
            1.0,
            Currency::Home,
            32.0,
            Category::Food,
            "",
        );
        assert_eq!(rec.month_key(), "2024-03");
    }
}

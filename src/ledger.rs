//! In-memory session ledger
//!
//! An ordered, append-only-with-deletion list of records plus the reductions
//! the summary and statistics views are built from. Records are addressable
//! by position only; the whole ledger dies with the session.

use std::collections::BTreeMap;

use crate::error::{TallyError, TallyResult};
use crate::models::{Kind, Record};

/// The ordered collection of records for one session
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<Record>,
}

/// Summary totals over the full ledger, in home currency
///
/// `total_expense` is the positive magnitude (records store expenses
/// negative), so `balance == total_income - total_expense` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

/// One bar of the monthly statistics chart
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// "YYYY-MM" month key
    pub month: String,
    pub kind: Kind,
    /// Sum of converted values for this (month, kind); negative for expenses
    pub total: f64,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record at the end
    pub fn append(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Delete the record at `position`, shifting later records down.
    ///
    /// Out-of-range positions are a validation error, not a panic.
    pub fn delete(&mut self, position: usize) -> TallyResult<Record> {
        if position >= self.records.len() {
            return Err(TallyError::Validation(format!(
                "No record at position {}",
                position
            )));
        }
        Ok(self.records.remove(position))
    }

    /// All records in insertion order
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Reduce the ledger to income/expense/balance totals.
    ///
    /// Expenses are stored with negative converted values, so both totals are
    /// plain filtered sums.
    pub fn summarize(&self) -> Summary {
        let total_income: f64 = self
            .records
            .iter()
            .filter(|r| r.kind == Kind::Income)
            .map(|r| r.converted)
            .sum();

        let total_expense: f64 = -self
            .records
            .iter()
            .filter(|r| r.kind == Kind::Expense)
            .map(|r| r.converted)
            .sum::<f64>();

        Summary {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Group records by calendar month and kind, summing converted values.
    ///
    /// Ordered by month ascending (lexical "YYYY-MM" order is chronological),
    /// income before expense within a month. Months with no records for a
    /// kind simply have no entry.
    pub fn monthly_totals(&self) -> Vec<MonthlyTotal> {
        let mut totals: BTreeMap<(String, Kind), f64> = BTreeMap::new();

        for record in &self.records {
            *totals
                .entry((record.month_key(), record.kind))
                .or_insert(0.0) += record.converted;
        }

        totals
            .into_iter()
            .map(|((month, kind), total)| MonthlyTotal { month, kind, total })
            .collect()
    }
}

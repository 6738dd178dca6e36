//! Session state and action dispatch
//!
//! The session owns the ledger, the current language, and the conversion
//! rate. Every user interaction is expressed as an `Action` and applied
//! through `Session::apply`, so the transition logic is testable without any
//! UI harness and independent sessions never share state.

use crate::error::{TallyError, TallyResult};
use crate::fx;
use crate::i18n::Language;
use crate::ledger::Ledger;
use crate::models::money::parse_amount;
use crate::models::{Category, Currency, Kind, Record};
use crate::sink::RecordSink;

use chrono::NaiveDate;

/// Field values collected by the entry form, before conversion
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub date: NaiveDate,
    pub kind: Kind,
    /// Raw amount text as entered; validated on apply
    pub amount: String,
    pub currency: Currency,
    pub category: Category,
    pub note: String,
}

/// One user interaction
#[derive(Debug, Clone)]
pub enum Action {
    /// Submit the entry form
    Add(RecordDraft),
    /// Delete the record at a position
    Delete(usize),
    /// Switch the display language
    SetLanguage(Language),
    /// Adjust the conversion rate (clamped to the accepted range)
    SetRate(f64),
}

/// State for one interactive session
pub struct Session {
    pub language: Language,
    rate: f64,
    ledger: Ledger,
    sink: Option<Box<dyn RecordSink>>,
}

impl Session {
    /// Create a session with an empty ledger and no sink
    pub fn new(language: Language, rate: f64) -> Self {
        Self {
            language,
            rate: fx::clamp_rate(rate),
            ledger: Ledger::new(),
            sink: None,
        }
    }

    /// Attach an external append sink
    pub fn with_sink(mut self, sink: Box<dyn RecordSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Current conversion rate
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// The session ledger (read-only; mutation goes through `apply`)
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Whether an external sink is configured
    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }

    /// Apply one action.
    ///
    /// Returns `Ok(Some(warning))` for actions that succeeded with a
    /// non-fatal problem (currently only sink failures); validation failures
    /// are `Err` and leave the session untouched.
    pub fn apply(&mut self, action: Action) -> TallyResult<Option<String>> {
        match action {
            Action::Add(draft) => self.add_record(draft),
            Action::Delete(position) => {
                self.ledger.delete(position)?;
                Ok(None)
            }
            Action::SetLanguage(language) => {
                self.language = language;
                Ok(None)
            }
            Action::SetRate(rate) => {
                if !rate.is_finite() {
                    return Err(TallyError::Validation("Rate must be a number".into()));
                }
                self.rate = fx::clamp_rate(rate);
                Ok(None)
            }
        }
    }

    fn add_record(&mut self, draft: RecordDraft) -> TallyResult<Option<String>> {
        let amount =
            parse_amount(&draft.amount).map_err(|e| TallyError::Validation(e.to_string()))?;

        let record = Record::new(
            draft.date,
            draft.kind,
            amount,
            draft.currency,
            self.rate,
            draft.category,
            draft.note,
        );

        // The in-memory ledger is the source of truth; the sink is
        // fire-and-forget and its failure must not lose the record.
        let warning = match self.sink.as_mut() {
            Some(sink) => sink
                .append(&record)
                .err()
                .map(|e| format!("Sink {}: {}", sink.describe(), e)),
            None => None,
        };

        self.ledger.append(record);

        Ok(warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;

    fn draft(amount: &str, kind: Kind, currency: Currency) -> RecordDraft {
        RecordDraft {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            kind,
            amount: amount.to_string(),
            currency,
            category: Category::Other,
            note: String::new(),
        }
    }

    /// A sink that always fails, for exercising the warning path
    struct BrokenSink;

    impl RecordSink for BrokenSink {
        fn append(&mut self, _record: &Record) -> TallyResult<()> {
            Err(TallyError::Sink("unreachable".into()))
        }

        fn describe(&self) -> String {
            "broken".into()
        }
    }

    #[test]
    fn test_add_converts_at_current_rate() {
        let mut session = Session::new(Language::English, 32.0);

        session
            .apply(Action::Add(draft("100", Kind::Income, Currency::Foreign)))
            .unwrap();

        let rec = &session.ledger().records()[0];
        assert!((rec.converted - 3200.0).abs() < 1e-9);
    }

    #[test]
    fn test_rate_change_is_not_retroactive() {
        let mut session = Session::new(Language::English, 32.0);
        session
            .apply(Action::Add(draft("100", Kind::Income, Currency::Foreign)))
            .unwrap();
        session.apply(Action::SetRate(40.0)).unwrap();
        session
            .apply(Action::Add(draft("100", Kind::Income, Currency::Foreign)))
            .unwrap();

        let records = session.ledger().records();
        assert!((records[0].converted - 3200.0).abs() < 1e-9);
        assert!((records[1].converted - 4000.0).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_amount_is_rejected_and_nothing_is_added() {
        let mut session = Session::new(Language::English, 32.0);

        let err = session
            .apply(Action::Add(draft("abc", Kind::Expense, Currency::Home)))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(session.ledger().is_empty());

        let err = session
            .apply(Action::Add(draft("-5", Kind::Expense, Currency::Home)))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(session.ledger().is_empty());
    }

    #[test]
    fn test_delete_by_position() {
        let mut session = Session::new(Language::English, 32.0);
        for amount in ["1", "2", "3"] {
            session
                .apply(Action::Add(draft(amount, Kind::Income, Currency::Home)))
                .unwrap();
        }

        session.apply(Action::Delete(1)).unwrap();

        let amounts: Vec<_> = session.ledger().records().iter().map(|r| r.amount).collect();
        assert_eq!(amounts, [1.0, 3.0]);
    }

    #[test]
    fn test_sink_failure_is_warning_not_error() {
        let mut session = Session::new(Language::English, 32.0).with_sink(Box::new(BrokenSink));

        let warning = session
            .apply(Action::Add(draft("50", Kind::Expense, Currency::Home)))
            .unwrap();

        assert!(warning.is_some());
        assert!(warning.unwrap().contains("broken"));
        // The record still landed in the ledger
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_set_rate_clamps() {
        let mut session = Session::new(Language::English, 32.0);

        session.apply(Action::SetRate(1000.0)).unwrap();
        assert_eq!(session.rate(), fx::MAX_RATE);

        session.apply(Action::SetRate(0.0)).unwrap();
        assert_eq!(session.rate(), fx::MIN_RATE);

        assert!(session.apply(Action::SetRate(f64::NAN)).is_err());
    }

    #[test]
    fn test_language_switch_leaves_records_untouched() {
        let mut session = Session::new(Language::Chinese, 32.0);
        let mut d = draft("100", Kind::Expense, Currency::Foreign);
        d.category = Category::Food;
        d.note = "午餐".to_string();
        session.apply(Action::Add(d)).unwrap();

        let before = session.ledger().records()[0].clone();
        session.apply(Action::SetLanguage(Language::English)).unwrap();
        let after = &session.ledger().records()[0];

        assert_eq!(&before, after);
        assert_eq!(session.language, Language::English);
    }

    #[test]
    fn test_summary_scenario_through_actions() {
        let mut session = Session::new(Language::English, 32.0);
        session
            .apply(Action::Add(draft("100", Kind::Income, Currency::Foreign)))
            .unwrap();
        session
            .apply(Action::Add(draft("50", Kind::Expense, Currency::Home)))
            .unwrap();

        let summary = session.ledger().summarize();
        assert!((summary.total_income - 3200.0).abs() < 1e-9);
        assert!((summary.total_expense - 50.0).abs() < 1e-9);
        assert!((summary.balance - 3150.0).abs() < 1e-9);
    }
}

//! Static bilingual string tables
//!
//! Every user-facing label lives here; the data model stores only canonical
//! enum values. Switching language swaps the whole bundle atomically, so a
//! category can never be labelled in one language and missed in the other —
//! the lookups are exhaustive matches over the enums.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Currency, Kind};

/// Display language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Chinese,
    English,
}

impl Language {
    /// Name shown in the language selector
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chinese => "中文",
            Self::English => "English",
        }
    }

    /// Toggle between the two languages
    pub fn toggle(&self) -> Self {
        match self {
            Self::Chinese => Self::English,
            Self::English => Self::Chinese,
        }
    }

    /// The string bundle for this language
    pub fn strings(&self) -> &'static Strings {
        match self {
            Self::Chinese => &CHINESE,
            Self::English => &ENGLISH,
        }
    }
}

/// One bundle of display strings
#[derive(Debug)]
pub struct Strings {
    pub title: &'static str,
    pub settings: &'static str,
    pub language: &'static str,
    pub rate: &'static str,
    pub new_record: &'static str,
    pub kind: &'static str,
    pub income: &'static str,
    pub expense: &'static str,
    pub amount: &'static str,
    pub currency: &'static str,
    pub category: &'static str,
    pub note: &'static str,
    pub date: &'static str,
    pub add_record: &'static str,
    pub record_success: &'static str,
    pub records: &'static str,
    pub no_records: &'static str,
    pub total_income: &'static str,
    pub total_expense: &'static str,
    pub balance: &'static str,
    pub currency_home: &'static str,
    pub currency_foreign: &'static str,
    pub delete: &'static str,
    pub delete_confirm: &'static str,
    pub record_deleted: &'static str,
    pub converted_amount: &'static str,
    pub statistics: &'static str,
    /// Symbol prefixed to home-currency values
    pub home_symbol: &'static str,
}

static CHINESE: Strings = Strings {
    title: "💰 簡易記帳",
    settings: "設定",
    language: "語言",
    rate: "匯率",
    new_record: "新增紀錄",
    kind: "類型",
    income: "收入",
    expense: "支出",
    amount: "金額",
    currency: "貨幣",
    category: "分類",
    note: "備註",
    date: "日期",
    add_record: "新增紀錄",
    record_success: "紀錄新增成功！",
    records: "金流紀錄",
    no_records: "目前沒有任何紀錄喔～",
    total_income: "總收入（台幣）",
    total_expense: "總支出（台幣）",
    balance: "目前餘額（台幣）",
    currency_home: "台幣 (TWD)",
    currency_foreign: "美金 (USD)",
    delete: "刪除",
    delete_confirm: "刪除這筆紀錄？",
    record_deleted: "紀錄已刪除",
    converted_amount: "台幣金額 (TWD)",
    statistics: "每月統計",
    home_symbol: "NT$",
};

static ENGLISH: Strings = Strings {
    title: "💰 Simple Expense Tracker",
    settings: "Settings",
    language: "Language",
    rate: "Rate",
    new_record: "New Record",
    kind: "Type",
    income: "Income",
    expense: "Expense",
    amount: "Amount",
    currency: "Currency",
    category: "Category",
    note: "Note",
    date: "Date",
    add_record: "Add Record",
    record_success: "Record added successfully!",
    records: "Transactions",
    no_records: "No records yet.",
    total_income: "Total Income (TWD)",
    total_expense: "Total Expense (TWD)",
    balance: "Current Balance (TWD)",
    currency_home: "TWD",
    currency_foreign: "USD",
    delete: "Delete",
    delete_confirm: "Delete this record?",
    record_deleted: "Record deleted",
    converted_amount: "Amount (TWD)",
    statistics: "Monthly Statistics",
    home_symbol: "NT$",
};

/// Label for a record kind in the given language
pub fn kind_label(kind: Kind, lang: Language) -> &'static str {
    let t = lang.strings();
    match kind {
        Kind::Income => t.income,
        Kind::Expense => t.expense,
    }
}

/// Label for a currency in the given language
pub fn currency_label(currency: Currency, lang: Language) -> &'static str {
    let t = lang.strings();
    match currency {
        Currency::Home => t.currency_home,
        Currency::Foreign => t.currency_foreign,
    }
}

/// Label for a category in the given language
///
/// Exhaustive over `Category`: adding a variant forces a label for both
/// languages before this compiles.
pub fn category_label(category: Category, lang: Language) -> &'static str {
    match lang {
        Language::Chinese => match category {
            Category::Food => "餐飲",
            Category::Transport => "交通",
            Category::Entertainment => "娛樂",
            Category::Shopping => "購物",
            Category::Salary => "薪資",
            Category::Investment => "投資",
            Category::Other => "其他",
        },
        Language::English => match category {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::Other => "Others",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_toggle() {
        assert_eq!(Language::Chinese.toggle(), Language::English);
        assert_eq!(Language::English.toggle(), Language::Chinese);
    }

    #[test]
    fn test_every_category_labelled_in_both_languages() {
        for cat in Category::ALL {
            for lang in [Language::Chinese, Language::English] {
                assert!(!category_label(cat, lang).is_empty());
            }
        }
    }

    #[test]
    fn test_category_labels_unique_per_language() {
        for lang in [Language::Chinese, Language::English] {
            let mut labels: Vec<_> = Category::ALL
                .iter()
                .map(|c| category_label(*c, lang))
                .collect();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), Category::ALL.len());
        }
    }

    #[test]
    fn test_bundles_differ() {
        assert_ne!(
            Language::Chinese.strings().total_income,
            Language::English.strings().total_income
        );
        assert_ne!(
            kind_label(Kind::Expense, Language::Chinese),
            kind_label(Kind::Expense, Language::English)
        );
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::English).unwrap();
        assert_eq!(json, "\"english\"");
        let lang: Language = serde_json::from_str("\"chinese\"").unwrap();
        assert_eq!(lang, Language::Chinese);
    }
}

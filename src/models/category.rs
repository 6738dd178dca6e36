//! Record categories
//!
//! The category list is fixed; records store the enum variant, and the
//! language-specific label is looked up at render time only.

use std::fmt;

/// Spending/income category for a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Salary,
    Investment,
    Other,
}

impl Category {
    /// All categories in entry-form order
    pub const ALL: [Category; 7] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Salary,
        Category::Investment,
        Category::Other,
    ];

    /// Canonical language-independent identifier (used by the sink)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Salary => "salary",
            Self::Investment => "investment",
            Self::Other => "other",
        }
    }

    /// Next category in entry-form order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in entry-form order, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::Food
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_cycle() {
        let mut cat = Category::Food;
        for _ in 0..Category::ALL.len() {
            cat = cat.next();
        }
        assert_eq!(cat, Category::Food);

        assert_eq!(Category::Food.prev(), Category::Other);
        assert_eq!(Category::Other.next(), Category::Food);
    }

    #[test]
    fn test_canonical_identifiers_are_unique() {
        let mut names: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Category::ALL.len());
    }
}

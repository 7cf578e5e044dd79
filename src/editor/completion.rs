//! Keyword completion popup
//!
//! Offers SQL keyword candidates for the word prefix at the cursor.

/// Keywords offered by the completion popup
pub const SQL_KEYWORDS: &[&str] = &[
    "ALL", "AND", "AS", "ASC", "AVG", "BETWEEN", "BY", "CASE", "COUNT", "CREATE", "CROSS",
    "DELETE", "DESC", "DISTINCT", "DROP", "ELSE", "END", "EXCEPT", "EXISTS", "FROM", "FULL",
    "GROUP", "HAVING", "IN", "INNER", "INSERT", "INTERSECT", "INTO", "IS", "JOIN", "LEFT",
    "LIKE", "LIMIT", "MAX", "MIN", "NATURAL", "NOT", "NULL", "OFFSET", "ON", "OR", "ORDER",
    "OUTER", "RIGHT", "SELECT", "SET", "SUM", "TABLE", "THEN", "UNION", "UPDATE", "VALUES",
    "WHEN", "WHERE",
];

/// An open completion popup: filtered candidates plus a selection
pub struct CompletionMenu {
    items: Vec<&'static str>,
    selected: usize,
    prefix: String,
}

impl CompletionMenu {
    /// Open a popup for the given word prefix
    ///
    /// Returns None when nothing matches (an empty popup is useless).
    pub fn open(prefix: &str) -> Option<Self> {
        let upper = prefix.to_ascii_uppercase();
        let items: Vec<&'static str> = SQL_KEYWORDS
            .iter()
            .copied()
            .filter(|kw| kw.starts_with(&upper))
            .collect();
        if items.is_empty() {
            None
        } else {
            Some(Self {
                items,
                selected: 0,
                prefix: prefix.to_string(),
            })
        }
    }

    /// The candidates, in display order
    pub fn items(&self) -> &[&'static str] {
        &self.items
    }

    /// Index of the selected candidate
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// The prefix the popup was filtered with
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Move the selection up, wrapping at the top
    pub fn move_up(&mut self) {
        if self.selected == 0 {
            self.selected = self.items.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    /// Move the selection down, wrapping at the bottom
    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    /// The text to insert when the selection is accepted
    ///
    /// Only the part after the already-typed prefix is inserted.
    pub fn accepted_suffix(&self) -> String {
        let item = self.items[self.selected];
        item.chars().skip(self.prefix.chars().count()).collect()
    }
}

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;

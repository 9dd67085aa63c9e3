use std::fmt;

use crate::model::Person;

/// Filter label that selects the whole roster.
pub const ALL_DEPARTMENTS: &str = "ALL";

/// Department names whose display form is not plain title case.
const SPECIAL_CASES: &[(&str, &str)] = &[
    (
        "cte, computer science & engineering",
        "CTE, Computer Science & Engineering",
    ),
    ("english", "English"),
    ("science", "Science"),
    ("math", "Math"),
    ("history", "History"),
    ("health and physical science", "Health & Physical Science"),
    ("parent and student engagement", "Parent & Student Engagement"),
    ("health and safety", "Health & Safety"),
];

/// Produce the canonical display name for a raw department string.
///
/// Known names are looked up case-insensitively in a fixed table; anything
/// else is title-cased word by word (words split on spaces) with runs of
/// whitespace collapsed.
/// Blank input yields an empty string.
#[must_use]
pub fn normalize_department(raw: &str) -> String {
    let key = raw.trim().to_lowercase();
    if key.is_empty() {
        return String::new();
    }

    if let Some((_, display)) = SPECIAL_CASES.iter().find(|(k, _)| *k == key) {
        return (*display).to_owned();
    }

    // Only space-separated words are capitalized; other whitespace is
    // collapsed afterwards without starting a new word.
    let titled = raw
        .to_lowercase()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ");
    titled.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

//
// ─── FILTER ────────────────────────────────────────────────────────────────────
//

/// Which slice of the roster the quiz draws from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Named(String),
}

impl DepartmentFilter {
    /// Parse a filter label as sent by a presentation adapter.
    ///
    /// `"ALL"` selects everyone; any other value is matched exactly against
    /// normalized department names.
    #[must_use]
    pub fn parse(label: &str) -> Self {
        if label == ALL_DEPARTMENTS {
            Self::All
        } else {
            Self::Named(label.to_owned())
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_DEPARTMENTS,
            Self::Named(name) => name,
        }
    }

    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => {
                person.department().is_some() && person.normalized_department() == *name
            }
        }
    }
}

impl fmt::Display for DepartmentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

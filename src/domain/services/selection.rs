use std::cmp::Ordering;
use std::str::FromStr;

use crate::domain::models::resort::ResortRecord;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Rating,
    Name,
    Price,
}

impl FromStr for SortKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            "price" => Ok(SortKey::Price),
            other => Err(AppError::Validation(format!("Unknown sort key: {}", other))),
        }
    }
}

/// In-memory filter and sort for the picker surface.
///
/// The filter is a case-insensitive substring match against name or
/// location; an empty query matches everything. Tie order under a sort key
/// is unspecified. An empty result is a valid outcome, not an error.
pub fn filter_and_sort(records: &[ResortRecord], query: &str, sort: SortKey) -> Vec<ResortRecord> {
    let needle = query.to_lowercase();
    let mut matched: Vec<ResortRecord> = records
        .iter()
        .filter(|r| {
            needle.is_empty()
                || r.name.to_lowercase().contains(&needle)
                || r.location.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect();

    matched.sort_by(|a, b| match sort {
        SortKey::Rating => b.rating.cmp(&a.rating),
        SortKey::Name => compare_names(&a.name, &b.name),
        SortKey::Price => a.price.sort_value().total_cmp(&b.price.sort_value()),
    });
    matched
}

// Case- and diacritic-folded comparison stands in for a locale collator
// here; macron vowels are the only non-ASCII letters in resort names.
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a).cmp(&collation_key(b))
}

fn collation_key(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| match c {
            'ā' => 'a',
            'ē' => 'e',
            'ī' => 'i',
            'ō' => 'o',
            'ū' => 'u',
            other => other,
        })
        .collect()
}

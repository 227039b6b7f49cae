//! Derived views over the entry list. Everything here is recomputed on demand.

use crate::StartupEntry;

/// Category chip that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";
/// Maximum number of trending categories.
pub const TRENDING_LIMIT: usize = 5;

pub const CSV_HEADER: &str = "Name,Category,Votes";
pub const CSV_FILENAME: &str = "startups.csv";
pub const CSV_MIME_TYPE: &str = "text/csv";

/// `"All"` followed by each distinct category in first-seen order.
pub fn category_set(entries: &[StartupEntry]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for entry in entries {
        if !categories[1..].iter().any(|c| c == &entry.category) {
            categories.push(entry.category.clone());
        }
    }
    categories
}

/// Top categories by entry count. Equal counts keep first-seen order.
pub fn trending_tags(entries: &[StartupEntry]) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        match counts.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((entry.category.as_str(), 1)),
        }
    }
    // sort_by is stable, so ties stay in first-seen order.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(TRENDING_LIMIT)
        .map(|(c, _)| c.to_string())
        .collect()
}

pub fn max_votes(entries: &[StartupEntry]) -> u64 {
    entries.iter().map(|e| e.votes).max().unwrap_or(0)
}

/// Applies the category filter then the case-insensitive name search to `source`.
pub fn visible_entries<'a>(
    source: &'a [StartupEntry],
    selected_category: &str,
    search_term: &str,
) -> Vec<&'a StartupEntry> {
    let needle = search_term.to_lowercase();
    source
        .iter()
        .filter(|e| selected_category == ALL_CATEGORIES || e.category == selected_category)
        .filter(|e| e.name.to_lowercase().contains(&needle))
        .collect()
}

/// Header plus one unquoted `name,category,votes` line per entry.
///
/// Fields containing commas are written verbatim and will split columns.
pub fn csv_document<'a>(entries: impl IntoIterator<Item = &'a StartupEntry>) -> String {
    let rows: Vec<String> = entries
        .into_iter()
        .map(|e| format!("{},{},{}", e.name, e.category, e.votes))
        .collect();
    format!("{CSV_HEADER}\n{}", rows.join("\n"))
}

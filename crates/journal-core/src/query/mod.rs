//! Read-only derivations over a loaded collection.
//!
//! Everything here borrows the entry slice for the duration of one query
//! and never touches the store.

pub mod similarity;

use std::collections::HashMap;

use crate::entry::JournalEntry;

/// Default similarity threshold for fuzzy title search.
pub const DEFAULT_FUZZY_CUTOFF: f64 = 0.5;

/// Default result cap for fuzzy title search.
pub const DEFAULT_FUZZY_MAX_RESULTS: usize = 10;

/// Filter entries by tag with any-match (OR) semantics.
///
/// An entry is included if any of its tags case-insensitively equals any of
/// the requested tags. Requested tags are trimmed first. An empty request
/// returns the full input unchanged.
pub fn filter_by_tags<'a>(entries: &'a [JournalEntry], tags: &[String]) -> Vec<&'a JournalEntry> {
    if tags.is_empty() {
        return entries.iter().collect();
    }

    let wanted: Vec<String> = tags.iter().map(|tag| tag.trim().to_lowercase()).collect();
    entries
        .iter()
        .filter(|entry| {
            entry
                .tags
                .iter()
                .any(|tag| wanted.iter().any(|want| want == &tag.to_lowercase()))
        })
        .collect()
}

/// Case-insensitive substring search on titles.
pub fn search_by_title<'a>(entries: &'a [JournalEntry], query: &str) -> Vec<&'a JournalEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.title.to_lowercase().contains(&needle))
        .collect()
}

/// Case-insensitive exact match of `query` against at least one tag.
pub fn search_by_tag<'a>(entries: &'a [JournalEntry], query: &str) -> Vec<&'a JournalEntry> {
    let needle = query.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.tags.iter().any(|tag| tag.to_lowercase() == needle))
        .collect()
}

/// Fuzzy title search: titles whose similarity to `query` meets `cutoff`.
///
/// Ranked by similarity descending, truncated to `max_results`. Ties keep
/// input order. `cutoff` is a 0-1 threshold on the Ratcliff/Obershelp
/// ratio; see [`similarity::ratio`].
pub fn fuzzy_search_titles(
    titles: &[String],
    query: &str,
    max_results: usize,
    cutoff: f64,
) -> Vec<String> {
    let mut scored: Vec<(f64, &String)> = titles
        .iter()
        .map(|title| (similarity::ratio(query, title), title))
        .filter(|(score, _)| *score >= cutoff)
        .collect();
    // Stable sort, so equal scores keep input order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(max_results)
        .map(|(_, title)| title.clone())
        .collect()
}

/// Tag with the highest occurrence count across all entries.
///
/// Counting is case-sensitive. Returns `None` when no entry has any tag.
/// Ties are broken by first appearance in the collection.
pub fn most_common_tag(entries: &[JournalEntry]) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0usize;
    for tag in entries.iter().flat_map(|entry| entry.tags.iter()) {
        let slot = counts.entry(tag.as_str()).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        slot.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|a, b| a.1 .0.cmp(&b.1 .0).then(b.1 .1.cmp(&a.1 .1)))
        .map(|(tag, _)| tag.to_string())
}

/// Aggregate statistics over a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalStats {
    /// Number of entries
    pub count: usize,

    /// Number of distinct tags (case-sensitive)
    pub distinct_tag_count: usize,

    /// Most frequent tag, `None` when no entry has any tag
    pub most_common_tag: Option<String>,

    /// Total whitespace-delimited words across all contents
    pub total_words: usize,

    /// `total_words / count`, `0.0` for an empty collection
    pub avg_words_per_entry: f64,
}

/// Compute statistics over the given entries.
pub fn stats(entries: &[JournalEntry]) -> JournalStats {
    let count = entries.len();
    let total_words: usize = entries
        .iter()
        .map(|entry| entry.content.split_whitespace().count())
        .sum();
    let distinct_tag_count = entries
        .iter()
        .flat_map(|entry| entry.tags.iter())
        .collect::<std::collections::HashSet<_>>()
        .len();
    let avg_words_per_entry = if count == 0 {
        0.0
    } else {
        total_words as f64 / count as f64
    };

    JournalStats {
        count,
        distinct_tag_count,
        most_common_tag: most_common_tag(entries),
        total_words,
        avg_words_per_entry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn entry(title: &str, content: &str, tags: &[&str]) -> JournalEntry {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        JournalEntry::new(Uuid::new_v4(), title, content, Utc::now(), &tags)
            .expect("test entry should be valid")
    }

    #[test]
    fn test_filter_by_tags_empty_request_returns_all() {
        let entries = vec![entry("a", "x", &["one"]), entry("b", "y", &[])];
        let filtered = filter_by_tags(&entries, &[]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_by_tags_any_match_case_insensitive() {
        let entries = vec![
            entry("a", "x", &["Rust", "cli"]),
            entry("b", "y", &["python"]),
            entry("c", "z", &[]),
        ];
        let filtered = filter_by_tags(&entries, &["rust".to_string()]);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "a");

        // OR across requested tags: either tag is enough.
        let filtered = filter_by_tags(&entries, &["rust".to_string(), "PYTHON".to_string()]);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_by_tags_trims_requested_tags() {
        let entries = vec![entry("a", "x", &["rust"])];
        let filtered = filter_by_tags(&entries, &["  rust ".to_string()]);
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_search_by_title_substring() {
        let entries = vec![entry("Setup Env", "x", &[]), entry("Wrote Tests", "y", &[])];
        let found = search_by_title(&entries, "setup");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Setup Env");
    }

    #[test]
    fn test_search_by_tag_exact_only() {
        let entries = vec![
            entry("a", "x", &["testing"]),
            entry("b", "y", &["test"]),
        ];
        let found = search_by_tag(&entries, "TEST");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "b");
    }

    #[test]
    fn test_fuzzy_search_cutoff_and_ranking() {
        let titles = vec![
            "Setup Env".to_string(),
            "Setup Environment".to_string(),
            "Completely Different".to_string(),
        ];
        let found = fuzzy_search_titles(&titles, "Setup Env", 10, 0.5);
        assert_eq!(found[0], "Setup Env");
        assert!(found.contains(&"Setup Environment".to_string()));
        assert!(!found.contains(&"Completely Different".to_string()));
    }

    #[test]
    fn test_fuzzy_search_respects_max_results() {
        let titles = vec!["aaa".to_string(), "aab".to_string(), "aac".to_string()];
        let found = fuzzy_search_titles(&titles, "aaa", 2, 0.1);
        assert_eq!(found.len(), 2);
        assert_eq!(found[0], "aaa");
    }

    #[test]
    fn test_most_common_tag_counts_and_ties() {
        let entries = vec![
            entry("a", "x", &["setup", "tools"]),
            entry("b", "y", &["tools"]),
        ];
        assert_eq!(most_common_tag(&entries), Some("tools".to_string()));

        // No tags anywhere: defined sentinel, not a panic.
        let untagged = vec![entry("a", "x", &[])];
        assert_eq!(most_common_tag(&untagged), None);

        // Equal counts fall back to first appearance.
        let tied = vec![entry("a", "x", &["first", "second"])];
        assert_eq!(most_common_tag(&tied), Some("first".to_string()));
    }

    #[test]
    fn test_stats_word_counts() {
        let entries = vec![entry("a", "a b c", &["t"]), entry("b", "d e", &["t"])];
        let stats = stats(&entries);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_words, 5);
        assert!((stats.avg_words_per_entry - 2.5).abs() < f64::EPSILON);
        assert_eq!(stats.distinct_tag_count, 1);
        assert_eq!(stats.most_common_tag, Some("t".to_string()));
    }

    #[test]
    fn test_stats_empty_collection_guarded() {
        let stats = stats(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.total_words, 0);
        assert_eq!(stats.avg_words_per_entry, 0.0);
        assert_eq!(stats.most_common_tag, None);
    }
}

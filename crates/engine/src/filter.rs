//! Search, category filtering, grouping and sorting for list views.
//!
//! Everything here is a pure derivation over the record set; the
//! controller recomputes these views on every keystroke/toggle and never
//! caches them.
//!
//! Key invariants:
//! - Category enumeration preserves first-seen order
//! - An empty category selection lets nothing through
//! - Sorting is stable; equal keys keep their input order

use std::collections::HashSet;

use crate::record::PageRecord;

/// Case-insensitive substring search over name and category.
/// An empty term matches everything.
pub fn matches_search<R: PageRecord>(record: &R, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    if record.name().to_lowercase().contains(&needle) {
        return true;
    }
    record
        .category()
        .map_or(false, |c| c.to_lowercase().contains(&needle))
}

/// Distinct categories in first-seen order.
pub fn distinct_categories<R: PageRecord>(records: &[R]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for record in records {
        if let Some(category) = record.category() {
            if seen.insert(category.to_string()) {
                out.push(category.to_string());
            }
        }
    }
    out
}

/// User-selected subset of the categories observed in the record set.
///
/// `all` is the display universe (first-seen order); `selected` is the
/// membership predicate. The two drift apart as the user toggles.
#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    all: Vec<String>,
    selected: HashSet<String>,
}

impl CategoryFilter {
    /// Build from a freshly fetched record set: every observed category,
    /// all selected.
    pub fn from_records<R: PageRecord>(records: &[R]) -> Self {
        let all = distinct_categories(records);
        let selected = all.iter().cloned().collect();
        CategoryFilter { all, selected }
    }

    /// The category universe, first-seen order.
    pub fn all_categories(&self) -> &[String] {
        &self.all
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected.contains(category)
    }

    /// Flip one category in or out of the selection.
    pub fn toggle(&mut self, category: &str) {
        if !self.selected.remove(category) {
            self.selected.insert(category.to_string());
        }
    }

    pub fn select_all(&mut self) {
        self.selected = self.all.iter().cloned().collect();
    }

    pub fn clear_all(&mut self) {
        self.selected.clear();
    }

    /// Membership test. Records without a category never pass.
    pub fn passes<R: PageRecord>(&self, record: &R) -> bool {
        record
            .category()
            .map_or(false, |c| self.selected.contains(c))
    }
}

/// Partition a filtered view into (category, records) groups,
/// preserving the first-seen order of categories.
pub fn group_by_category<'a, R: PageRecord>(records: &[&'a R]) -> Vec<(String, Vec<&'a R>)> {
    let mut groups: Vec<(String, Vec<&'a R>)> = Vec::new();
    for &record in records {
        let category = record.category().unwrap_or("").to_string();
        match groups.iter_mut().find(|(c, _)| *c == category) {
            Some((_, members)) => members.push(record),
            None => groups.push((category, vec![record])),
        }
    }
    groups
}

/// Sort key for the tableaux grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    /// Lexicographic (category, name) tuple.
    CategoryName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Stable sort of a filtered view. `Descending` flips the comparator
/// sign, so ties keep their input order in both directions.
pub fn sort_records<'a, R: PageRecord>(
    records: &[&'a R],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a R> {
    let mut out = records.to_vec();
    out.sort_by(|a, b| {
        let ord = match key {
            SortKey::Name => a.name().cmp(b.name()),
            SortKey::CategoryName => a
                .category()
                .unwrap_or("")
                .cmp(b.category().unwrap_or(""))
                .then_with(|| a.name().cmp(b.name())),
        };
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    out
}

//! Per-page list-view controller.
//!
//! One instance per mounted content page: owns the fetched record set,
//! derives the filtered/grouped/sorted views, and manages the single
//! edit slot plus the two-step delete confirmation.
//!
//! Key invariants:
//! - The record set only changes on the accessor's success path; no
//!   speculative local mutation, nothing to roll back
//! - The loading flag clears on every settlement, success or failure
//! - At most one edit is in flight; `begin_*` while active is a no-op
//! - Accordion expansion and category selection are independent state

use crate::accessor::{RecordSource, UpdatePayload};
use crate::filter::{self, CategoryFilter, SortDirection, SortKey};
use crate::notify::{Notification, NotificationSink};
use crate::record::{mint_record_id, PageRecord};

/// The single in-flight add/edit. `original: None` is the add flow; the
/// draft id is minted before the slot opens, so an add's id is never yet
/// present in the record set.
#[derive(Debug, Clone)]
pub enum EditSlot<R> {
    Idle,
    Editing { original: Option<R>, draft: R },
}

impl<R> EditSlot<R> {
    pub fn is_active(&self) -> bool {
        matches!(self, EditSlot::Editing { .. })
    }
}

/// Display labels for notifications ("task"/"tasks", "document"/...).
#[derive(Debug, Clone, Copy)]
pub struct PageLabels {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl PageLabels {
    pub const TASKS: PageLabels = PageLabels { singular: "task", plural: "tasks" };
    pub const DOCUMENTS: PageLabels = PageLabels { singular: "document", plural: "documents" };
    pub const TABLEAUX: PageLabels = PageLabels { singular: "tableau", plural: "tableaux" };
    pub const DIAGRAMS: PageLabels = PageLabels { singular: "diagram", plural: "diagrams" };
}

/// State container for one content page.
pub struct PageView<R> {
    labels: PageLabels,
    records: Vec<R>,
    loading: bool,
    search: String,
    /// Some(_) on pages with a category dropdown (documents, tableaux).
    category_filter: Option<CategoryFilter>,
    /// Open accordion groups. Independent of the category selection.
    expanded: Vec<String>,
    edit: EditSlot<R>,
    /// Id awaiting delete confirmation.
    pending_delete: Option<String>,
}

impl<R: PageRecord> PageView<R> {
    /// Page without a category dropdown (dashboard, diagrammes).
    pub fn new(labels: PageLabels) -> Self {
        PageView {
            labels,
            records: Vec::new(),
            loading: false,
            search: String::new(),
            category_filter: None,
            expanded: Vec::new(),
            edit: EditSlot::Idle,
            pending_delete: None,
        }
    }

    /// Page with a category dropdown (documents, tableaux).
    pub fn with_category_filter(labels: PageLabels) -> Self {
        let mut view = Self::new(labels);
        view.category_filter = Some(CategoryFilter::default());
        view
    }

    // ── State access ────────────────────────────────────────────────

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn category_filter(&self) -> Option<&CategoryFilter> {
        self.category_filter.as_ref()
    }

    pub fn edit_slot(&self) -> &EditSlot<R> {
        &self.edit
    }

    /// Mutable access to the working copy while an edit is active.
    pub fn draft_mut(&mut self) -> Option<&mut R> {
        match &mut self.edit {
            EditSlot::Editing { draft, .. } => Some(draft),
            EditSlot::Idle => None,
        }
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    // ── Loading ─────────────────────────────────────────────────────

    /// Fetch this page's records, replacing the set wholesale on
    /// success. On failure the previous set stays and the user is
    /// notified. The loading flag clears on both paths.
    pub fn load<A, S>(&mut self, source: &A, sink: &mut S)
    where
        A: RecordSource<R>,
        S: NotificationSink,
    {
        self.loading = true;
        let result = source.fetch_records();
        self.loading = false;

        match result {
            Ok(records) => {
                self.records = records;
                if let Some(category_filter) = &mut self.category_filter {
                    *category_filter = CategoryFilter::from_records(&self.records);
                }
                self.expanded.clear();
                if let Some(first) = filter::distinct_categories(&self.records).into_iter().next() {
                    self.expanded.push(first);
                }
            }
            Err(_) => {
                sink.notify(Notification::destructive(
                    format!("Error loading {}", self.labels.plural),
                    format!("Failed to load {}. Please try again.", self.labels.plural),
                ));
            }
        }
    }

    // ── Derived views ───────────────────────────────────────────────

    /// Records passing the search term and, where present, the category
    /// selection. Pure; preserves fetch order.
    pub fn filtered(&self) -> Vec<&R> {
        self.records
            .iter()
            .filter(|r| filter::matches_search(*r, &self.search))
            .filter(|r| {
                self.category_filter
                    .as_ref()
                    .map_or(true, |f| f.passes(*r))
            })
            .collect()
    }

    /// Filtered view partitioned for accordion rendering.
    pub fn grouped(&self) -> Vec<(String, Vec<&R>)> {
        filter::group_by_category(&self.filtered())
    }

    /// Filtered view in sorted order (tableaux grid).
    pub fn sorted(&self, key: SortKey, direction: SortDirection) -> Vec<&R> {
        filter::sort_records(&self.filtered(), key, direction)
    }

    // ── Search and category controls ────────────────────────────────

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn toggle_category(&mut self, category: &str) {
        if let Some(category_filter) = &mut self.category_filter {
            category_filter.toggle(category);
        }
    }

    pub fn select_all_categories(&mut self) {
        if let Some(category_filter) = &mut self.category_filter {
            category_filter.select_all();
        }
    }

    pub fn clear_all_categories(&mut self) {
        if let Some(category_filter) = &mut self.category_filter {
            category_filter.clear_all();
        }
    }

    /// Deselecting a category does NOT collapse its open group; the two
    /// states are deliberately independent.
    pub fn toggle_expanded(&mut self, category: &str) {
        match self.expanded.iter().position(|c| c == category) {
            Some(index) => {
                self.expanded.remove(index);
            }
            None => self.expanded.push(category.to_string()),
        }
    }

    pub fn is_expanded(&self, category: &str) -> bool {
        self.expanded.iter().any(|c| c == category)
    }

    // ── Edit slot lifecycle ─────────────────────────────────────────

    /// Open the edit slot on a clone of an existing record.
    /// A no-op while another edit is active.
    pub fn begin_edit(&mut self, record: &R) {
        if self.edit.is_active() {
            return;
        }
        self.edit = EditSlot::Editing {
            original: Some(record.clone()),
            draft: record.clone(),
        };
    }

    /// Open the edit slot on a default-valued record with a freshly
    /// minted id. A no-op while another edit is active.
    pub fn begin_create(&mut self) {
        if self.edit.is_active() {
            return;
        }
        let draft = R::fresh(mint_record_id(&self.records));
        self.edit = EditSlot::Editing {
            original: None,
            draft,
        };
    }

    /// Discard the working copy. No accessor call.
    pub fn cancel_edit(&mut self) {
        self.edit = EditSlot::Idle;
    }

    /// Persist the working copy. Add-vs-update is decided by whether the
    /// draft id is already present. The slot clears on every settlement;
    /// a refused or failed write loses the edit (no retry is offered) and
    /// leaves the record set untouched.
    pub fn commit_edit<A, S>(&mut self, source: &A, sink: &mut S)
    where
        A: RecordSource<R>,
        S: NotificationSink,
    {
        let EditSlot::Editing { draft, .. } = std::mem::replace(&mut self.edit, EditSlot::Idle)
        else {
            return;
        };

        let exists = self.records.iter().any(|r| r.id() == draft.id());

        self.loading = true;
        let result = source.update_record(UpdatePayload::Record(&draft));
        self.loading = false;

        match result {
            Ok(true) => {
                let verb = if exists { "updated" } else { "added" };
                sink.notify(Notification::info(
                    format!("{} {}", capitalize(self.labels.singular), verb),
                    format!("{} has been {}.", draft.name(), verb),
                ));
                self.records = if exists {
                    // Replace every occurrence of the id; duplicate ids
                    // are tolerated, not deduplicated.
                    self.records
                        .iter()
                        .map(|r| if r.id() == draft.id() { draft.clone() } else { r.clone() })
                        .collect()
                } else {
                    let mut next = self.records.clone();
                    next.push(draft);
                    next
                };
            }
            Ok(false) | Err(_) => {
                let verb = if exists { "update" } else { "add" };
                sink.notify(Notification::destructive(
                    format!("Error {} {}", if exists { "updating" } else { "adding" }, self.labels.singular),
                    format!("Failed to {} the {}. Please try again.", verb, self.labels.singular),
                ));
            }
        }
    }

    // ── Two-step delete ─────────────────────────────────────────────

    /// First step: record which id awaits confirmation. The shell shows
    /// its confirmation UI off this.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_string());
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step: send the `{id, deleted: true}` tombstone and drop
    /// the record on acceptance. A no-op without a pending request.
    pub fn confirm_delete<A, S>(&mut self, source: &A, sink: &mut S)
    where
        A: RecordSource<R>,
        S: NotificationSink,
    {
        let Some(id) = self.pending_delete.take() else {
            return;
        };

        self.loading = true;
        let result = source.update_record(UpdatePayload::Tombstone { id: &id });
        self.loading = false;

        match result {
            Ok(true) => {
                self.records = self
                    .records
                    .iter()
                    .filter(|r| r.id() != id)
                    .cloned()
                    .collect();
                sink.notify(Notification::info(
                    format!("{} deleted", capitalize(self.labels.singular)),
                    format!("The {} has been deleted.", self.labels.singular),
                ));
            }
            Ok(false) | Err(_) => {
                sink.notify(Notification::destructive(
                    format!("Error deleting {}", self.labels.singular),
                    format!("Failed to delete the {}. Please try again.", self.labels.singular),
                ));
            }
        }
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

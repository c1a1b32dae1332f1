// Picker state machine - query, results, selection, and transient UI state
//
// All widget state lives here and is mutated only through these handler
// methods; the event loop translates terminal events into calls and never
// touches fields directly.

use crate::api::Character;

use super::dropdown::{DropdownPhase, ToggleOutcome};
use super::selection::SelectionList;

/// User-facing message for any search failure. Network errors, bad statuses
/// and malformed payloads all collapse into this one case; the renderer
/// appends the query after it.
pub const NO_RESULTS_MESSAGE: &str = "No results found for";

/// How many selection chips are rendered; older selections stay in the set
/// but are not shown.
pub const MAX_VISIBLE_CHIPS: usize = 2;

/// Handle for a search the event loop must dispatch.
///
/// The generation is echoed back with the completion so stale responses can
/// be discarded (latest-request-wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: u64,
    pub query: String,
}

/// State of the multi-select autocomplete widget.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    query: String,
    results: Vec<Character>,
    selection: SelectionList,
    loading: bool,
    error: Option<String>,
    highlighted: Option<usize>,
    open: bool,
    scroll_top: usize,
    generation: u64,
}

impl PickerState {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Character] {
        &self.results
    }

    pub fn selected(&self) -> &[Character] {
        self.selection.items()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn is_selected(&self, id: u64) -> bool {
        self.selection.contains(id)
    }

    /// The chips to render: the most recent selections, newest first.
    pub fn visible_chips(&self) -> &[Character] {
        let items = self.selection.items();
        &items[..items.len().min(MAX_VISIBLE_CHIPS)]
    }

    pub fn dropdown_phase(&self) -> DropdownPhase {
        if !self.open {
            DropdownPhase::Closed
        } else if self.query.trim().is_empty() {
            DropdownPhase::OpenEmpty
        } else if self.loading {
            DropdownPhase::Loading
        } else if self.error.is_some() {
            DropdownPhase::Error
        } else {
            DropdownPhase::Results
        }
    }

    // ── Search controller ────────────────────────────────────────────────

    /// Handle a query edit.
    ///
    /// A non-empty query opens the dropdown and yields a ticket the caller
    /// must dispatch as a search; every keystroke issues a new request (no
    /// debounce). An empty query clears the result set without touching the
    /// network. Returns None when no request is needed.
    pub fn set_query(&mut self, query: &str) -> Option<SearchTicket> {
        if query == self.query {
            return None;
        }
        self.query = query.to_string();
        self.highlighted = None;
        self.scroll_top = 0;
        self.open = !self.query.trim().is_empty();

        if self.query.is_empty() {
            self.results.clear();
            self.loading = false;
            self.error = None;
            // Invalidate any outstanding request; its completion must not
            // repopulate a cleared result set.
            self.generation += 1;
            return None;
        }

        self.loading = true;
        self.error = None;
        self.generation += 1;
        Some(SearchTicket {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply a search completion.
    ///
    /// Completions carrying a generation other than the latest issued one
    /// are discarded outright, success or failure alike; the response for
    /// an abandoned query must never overwrite newer results.
    pub fn apply_search_result(&mut self, generation: u64, outcome: Result<Vec<Character>, String>) {
        if generation != self.generation {
            tracing::debug!(
                "Discarding stale search completion (generation {}, current {})",
                generation,
                self.generation
            );
            return;
        }

        self.loading = false;
        self.scroll_top = 0;
        match outcome {
            Ok(results) => {
                self.results = results;
                self.error = None;
            }
            Err(_) => {
                self.results.clear();
                self.error = Some(NO_RESULTS_MESSAGE.to_string());
            }
        }

        // Keep the highlight invariant when the new set is shorter
        self.highlighted = self.highlighted.filter(|&index| index < self.results.len());
    }

    // ── Selection ────────────────────────────────────────────────────────

    /// Toggle selection of the result at `index` (mouse click on a row).
    pub fn toggle_at(&mut self, index: usize) {
        if let Some(character) = self.results.get(index).cloned() {
            self.selection.toggle(character);
        }
    }

    /// Toggle selection of the highlighted result (Enter).
    pub fn toggle_highlighted(&mut self) {
        if let Some(index) = self.highlighted {
            self.toggle_at(index);
        }
    }

    /// Remove the highlighted result from the selected set if present
    /// (Backspace/Delete while navigating the list).
    pub fn remove_highlighted(&mut self) {
        if let Some(character) = self.highlighted.and_then(|i| self.results.get(i)) {
            let id = character.id;
            self.selection.remove(id);
        }
    }

    /// Remove a selection by id (chip dismiss control).
    pub fn remove_selected(&mut self, id: u64) {
        self.selection.remove(id);
    }

    // ── Keyboard navigation ──────────────────────────────────────────────

    /// ArrowDown: move the highlight down one row, clamped to the last
    /// result (no wraparound). From the nothing-highlighted state this
    /// lands on row 0.
    pub fn highlight_next(&mut self, viewport_rows: usize) {
        if self.results.is_empty() {
            return;
        }
        let last = self.results.len() - 1;
        let next = match self.highlighted {
            None => 0,
            Some(index) => (index + 1).min(last),
        };
        self.highlighted = Some(next);
        self.page_down_if_hidden(viewport_rows);
    }

    /// ArrowUp: move the highlight up one row, clamped to row 0. From the
    /// nothing-highlighted state this also lands on row 0.
    pub fn highlight_previous(&mut self, viewport_rows: usize) {
        if self.results.is_empty() {
            return;
        }
        let next = match self.highlighted {
            None => 0,
            Some(index) => index.saturating_sub(1),
        };
        self.highlighted = Some(next);
        self.page_up_if_hidden(viewport_rows);
    }

    /// Mouse wheel: move the scroll window without touching the highlight.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.results.len().saturating_sub(1) as isize;
        let next = self.scroll_top as isize + delta;
        self.scroll_top = next.clamp(0, max) as usize;
    }

    // Page-jump scrolling: when the highlight leaves the visible window the
    // offset moves by a full viewport in the travel direction, not by one
    // row.

    fn page_down_if_hidden(&mut self, viewport_rows: usize) {
        let Some(row) = self.highlighted else { return };
        if viewport_rows == 0 {
            return;
        }
        if row >= self.scroll_top + viewport_rows {
            let max_top = self.results.len().saturating_sub(viewport_rows);
            self.scroll_top = (self.scroll_top + viewport_rows).min(max_top);
        }
    }

    fn page_up_if_hidden(&mut self, viewport_rows: usize) {
        let Some(row) = self.highlighted else { return };
        if viewport_rows == 0 {
            return;
        }
        if row < self.scroll_top {
            self.scroll_top = self.scroll_top.saturating_sub(viewport_rows);
        }
    }

    // ── Dropdown visibility ──────────────────────────────────────────────

    /// Activate the toggle control (chevron click). With an empty query and
    /// a closed dropdown this only asks for input focus; otherwise it flips
    /// the open flag.
    pub fn toggle_dropdown(&mut self) -> ToggleOutcome {
        if !self.open && self.query.trim().is_empty() {
            return ToggleOutcome::FocusInput;
        }
        self.open = !self.open;
        if self.open {
            ToggleOutcome::Opened
        } else {
            ToggleOutcome::Closed
        }
    }

    /// Close the dropdown (Esc, or a pointer-down outside both the input
    /// and the list). Query, results and selection are left untouched.
    pub fn close_dropdown(&mut self) {
        self.open = false;
    }
}

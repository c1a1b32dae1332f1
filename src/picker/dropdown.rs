// Dropdown visibility states and toggle-control outcomes

/// Render phase of the results dropdown.
///
/// Derived from the picker state on every frame; the dropdown itself keeps
/// no state beyond the open flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropdownPhase {
    /// Not rendered at all.
    Closed,
    /// Open with nothing to show (query cleared while open; transient).
    OpenEmpty,
    /// A search is outstanding.
    Loading,
    /// The last search failed.
    Error,
    /// Showing the current result set.
    Results,
}

/// What activating the dropdown toggle control did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Closed with an empty query: the input keeps focus, nothing opens.
    FocusInput,
    Opened,
    Closed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::picker::PickerState;

    #[test]
    fn test_initial_phase_is_closed() {
        let state = PickerState::new();
        assert_eq!(state.dropdown_phase(), DropdownPhase::Closed);
    }

    #[test]
    fn test_typing_opens_and_clearing_closes() {
        let mut state = PickerState::new();
        state.set_query("rick");
        assert_ne!(state.dropdown_phase(), DropdownPhase::Closed);

        state.set_query("");
        assert_eq!(state.dropdown_phase(), DropdownPhase::Closed);
    }

    #[test]
    fn test_loading_phase_while_search_outstanding() {
        let mut state = PickerState::new();
        state.set_query("rick");
        assert_eq!(state.dropdown_phase(), DropdownPhase::Loading);
    }

    #[test]
    fn test_error_phase_after_failed_search() {
        let mut state = PickerState::new();
        let ticket = state.set_query("zzz").unwrap();
        state.apply_search_result(ticket.generation, Err("connection refused".to_string()));
        assert_eq!(state.dropdown_phase(), DropdownPhase::Error);
    }

    #[test]
    fn test_toggle_with_empty_query_only_focuses_input() {
        let mut state = PickerState::new();
        assert_eq!(state.toggle_dropdown(), ToggleOutcome::FocusInput);
        assert_eq!(state.dropdown_phase(), DropdownPhase::Closed);
    }

    #[test]
    fn test_toggle_flips_open_state_with_nonempty_query() {
        let mut state = PickerState::new();
        state.set_query("rick");

        assert_eq!(state.toggle_dropdown(), ToggleOutcome::Closed);
        assert_eq!(state.dropdown_phase(), DropdownPhase::Closed);

        assert_eq!(state.toggle_dropdown(), ToggleOutcome::Opened);
        assert_ne!(state.dropdown_phase(), DropdownPhase::Closed);
    }
}

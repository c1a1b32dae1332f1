// Picker core - the widget's interaction state machine
//
// Framework-free: no terminal or network types in this module tree. The
// event loop owns a PickerState and drives it through handler methods; the
// TUI layer only reads it.

mod dropdown;
mod highlight;
mod selection;
mod state;

pub use dropdown::{DropdownPhase, ToggleOutcome};
pub use highlight::match_span;
pub use selection::SelectionList;
pub use state::{PickerState, SearchTicket, MAX_VISIBLE_CHIPS, NO_RESULTS_MESSAGE};

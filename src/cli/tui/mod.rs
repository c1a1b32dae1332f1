// Terminal lifecycle and frame rendering
//
// The widget runs in an alternate screen with raw mode and mouse capture
// enabled. Mouse capture is the global pointer-down listener of the widget;
// it is acquired in setup_terminal and must always be released again in
// restore_terminal, including on the error path, or the user's terminal is
// left broken.

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use tui_textarea::TextArea;

use crate::picker::{DropdownPhase, PickerState};

mod results_list;
mod search_box;

pub use results_list::MAX_DROPDOWN_ROWS;

/// Widest the widget column gets on large terminals.
const COLUMN_WIDTH: u16 = 60;

// ─── Terminal lifecycle ──────────────────────────────────────────────────────

pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).context("Failed to create terminal")
}

pub fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to restore cursor")?;
    Ok(())
}

// ─── Frame layout ────────────────────────────────────────────────────────────

/// Mouse hit-test targets captured from the last rendered frame.
///
/// Zero-sized rects never contain a point, so regions that were not drawn
/// this frame (closed dropdown, no chips) need no extra flags.
#[derive(Debug, Clone, Default)]
pub struct FrameLayout {
    /// The whole bordered input box.
    pub input_area: Rect,
    /// The chevron cell inside the input box.
    pub toggle_cell: Rect,
    /// The whole bordered dropdown, borders included.
    pub list_area: Rect,
    /// The rows region inside the dropdown (below loading/error lines).
    pub result_rows: Rect,
    /// Dismiss cell per visible chip, keyed by character id.
    pub chip_dismiss_cells: Vec<(u64, Rect)>,
}

impl FrameLayout {
    /// Rows visible in the result list; the keyboard navigator's page size.
    pub fn viewport_rows(&self) -> usize {
        self.result_rows.height as usize
    }

    /// Id of the chip whose dismiss control sits under `position`.
    pub fn chip_dismiss_at(&self, position: Position) -> Option<u64> {
        self.chip_dismiss_cells
            .iter()
            .find(|(_, cell)| cell.contains(position))
            .map(|(id, _)| *id)
    }

    /// Absolute result index under `position`, honoring the scroll offset.
    /// The caller still bounds-checks against the live result count.
    pub fn result_index_at(&self, position: Position, scroll_top: usize) -> Option<usize> {
        if !self.result_rows.contains(position) {
            return None;
        }
        Some(scroll_top + (position.y - self.result_rows.y) as usize)
    }

    /// True when `position` is outside both the input box and the dropdown.
    pub fn is_outside_widget(&self, position: Position) -> bool {
        !self.input_area.contains(position) && !self.list_area.contains(position)
    }
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Draw the whole frame and report this frame's mouse targets.
pub fn render(frame: &mut Frame, state: &PickerState, input: &TextArea) -> FrameLayout {
    let area = frame.area();
    let column = centered_column(area, COLUMN_WIDTH);

    // Title row
    if column.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Rick and Morty Character Selector",
                Style::default().fg(Color::Gray),
            ))
            .alignment(Alignment::Center),
            Rect::new(column.x, column.y, column.width, 1),
        );
    }

    // Input box
    let input_area = Rect::new(
        column.x,
        column.y.saturating_add(1),
        column.width,
        3.min(column.height.saturating_sub(1)),
    );
    let search_layout = search_box::render_search_box(frame, input_area, state, input);

    let mut layout = FrameLayout {
        input_area,
        toggle_cell: search_layout.toggle_cell,
        chip_dismiss_cells: search_layout.chip_dismiss_cells,
        ..FrameLayout::default()
    };

    // Dropdown, directly below the input box
    if state.dropdown_phase() != DropdownPhase::Closed {
        let top = input_area.bottom();
        let available = column.bottom().saturating_sub(top + 1); // keep the hint row free
        let height = MAX_DROPDOWN_ROWS.min(available);
        if height > 2 {
            let list_area = Rect::new(column.x, top, column.width, height);
            layout.list_area = list_area;
            layout.result_rows = results_list::render_results_dropdown(frame, list_area, state);
        }
    }

    // Key hint on the bottom row
    if area.height > 0 {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "↑↓ to navigate  •  Enter to select  •  Esc to close  •  Ctrl+C to quit",
                Style::default().fg(Color::DarkGray),
            )),
            Rect::new(area.x, area.bottom() - 1, area.width, 1),
        );
    }

    layout
}

fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

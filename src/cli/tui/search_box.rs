// Search box widget - selection chips, query input, dropdown toggle
//
// Renders the bordered input row: chips for the most recent selections on
// the left, the query textarea in the middle, and the open/close chevron at
// the right edge. Reports the cells that react to mouse clicks.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use crate::picker::PickerState;

/// Cells reserved at the right edge of the input row for the chevron.
const TOGGLE_RESERVE: u16 = 2;

/// Mouse targets produced while rendering the search box.
pub struct SearchBoxLayout {
    /// The 1x1 cell holding the chevron.
    pub toggle_cell: Rect,
    /// One dismiss cell per visible chip, keyed by character id.
    pub chip_dismiss_cells: Vec<(u64, Rect)>,
}

pub fn render_search_box(
    frame: &mut Frame,
    area: Rect,
    state: &PickerState,
    input: &TextArea,
) -> SearchBoxLayout {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return SearchBoxLayout {
            toggle_cell: Rect::default(),
            chip_dismiss_cells: Vec::new(),
        };
    }

    // Chips: newest selection leftmost, capped upstream to two entries.
    let chip_budget = inner.width.saturating_sub(TOGGLE_RESERVE);
    let mut chip_spans: Vec<Span> = Vec::new();
    let mut chip_dismiss_cells = Vec::new();
    let mut x = inner.x;

    for character in state.visible_chips() {
        let label = Span::styled(
            format!(" {} ", character.name),
            Style::default().bg(Color::DarkGray).fg(Color::White),
        );
        let dismiss = Span::styled("✕", Style::default().bg(Color::DarkGray).fg(Color::Gray));
        let chip_width = (label.width() + dismiss.width() + 1) as u16;

        // Never let chips spill into the input or the chevron
        if x + chip_width > inner.x + chip_budget {
            break;
        }

        let dismiss_x = x + label.width() as u16;
        chip_dismiss_cells.push((character.id, Rect::new(dismiss_x, inner.y, 1, 1)));

        chip_spans.push(label);
        chip_spans.push(dismiss);
        chip_spans.push(Span::raw(" "));
        x += chip_width;
    }

    let chips_width = x - inner.x;
    if chips_width > 0 {
        let chips_area = Rect::new(inner.x, inner.y, chips_width, 1);
        frame.render_widget(Paragraph::new(Line::from(chip_spans)), chips_area);
    }

    // Query input fills the space between chips and chevron
    let input_width = inner.width.saturating_sub(chips_width + TOGGLE_RESERVE);
    if input_width > 0 {
        let input_area = Rect::new(inner.x + chips_width, inner.y, input_width, 1);
        frame.render_widget(input, input_area);
    }

    // Chevron: the dropdown toggle control
    let chevron = if state.is_open() { "▴" } else { "▾" };
    let toggle_cell = Rect::new(inner.right().saturating_sub(1), inner.y, 1, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(chevron, Style::default().fg(Color::DarkGray))),
        toggle_cell,
    );

    SearchBoxLayout {
        toggle_cell,
        chip_dismiss_cells,
    }
}

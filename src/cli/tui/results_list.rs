// Results dropdown - loading line, error line, and result rows
//
// Result rows carry a checkbox marker, the name with the matching span in
// bold, and a dim episode count. The highlighted row gets the ❯ indicator.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::api::Character;
use crate::picker::{match_span, PickerState};

/// Maximum dropdown height in rows, borders included.
pub const MAX_DROPDOWN_ROWS: u16 = 14;

/// Render the dropdown into `area` and return the sub-rect that holds the
/// result rows (used for click-to-row mapping and as the scroll viewport).
pub fn render_results_dropdown(frame: &mut Frame, area: Rect, state: &PickerState) -> Rect {
    let title = if state.results().is_empty() {
        " Characters ".to_string()
    } else {
        format!(" Characters ({}) ", state.results().len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            title,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut y = inner.y;

    // Loading and error lines sit above whatever rows exist; they do not
    // replace the list.
    if state.loading() && y < inner.bottom() {
        frame.render_widget(
            Paragraph::new(Span::styled("Loading...", Style::default().fg(Color::Cyan))),
            Rect::new(inner.x, y, inner.width, 1),
        );
        y += 1;
    }

    if let Some(error) = state.error() {
        if y < inner.bottom() {
            let line = Line::from(vec![
                Span::styled(error.to_string(), Style::default().fg(Color::Red)),
                Span::raw(" "),
                Span::styled(
                    state.query().to_string(),
                    Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
                ),
            ]);
            frame.render_widget(Paragraph::new(line), Rect::new(inner.x, y, inner.width, 1));
            y += 1;
        }
    }

    let rows = Rect::new(inner.x, y, inner.width, inner.bottom().saturating_sub(y));
    let viewport = rows.height as usize;

    for (index, character) in state
        .results()
        .iter()
        .enumerate()
        .skip(state.scroll_top())
        .take(viewport)
    {
        let row_y = rows.y + (index - state.scroll_top()) as u16;
        let highlighted = state.highlighted() == Some(index);
        let row = result_row(character, state, highlighted);
        frame.render_widget(Paragraph::new(row), Rect::new(rows.x, row_y, rows.width, 1));
    }

    rows
}

fn result_row<'a>(character: &'a Character, state: &PickerState, highlighted: bool) -> Line<'a> {
    let mut spans = Vec::new();

    // Highlight indicator
    if highlighted {
        spans.push(Span::styled("❯ ", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::raw("  "));
    }

    // Checkbox marker for selected-set membership
    if state.is_selected(character.id) {
        spans.push(Span::styled("[x] ", Style::default().fg(Color::Green)));
    } else {
        spans.push(Span::styled("[ ] ", Style::default().fg(Color::Gray)));
    }

    // Name, with the matching span emphasized and casing preserved
    let base = if highlighted {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };
    let emphasis = base.add_modifier(Modifier::BOLD);
    spans.extend(highlighted_name(&character.name, state.query(), base, emphasis));

    // Episode count
    spans.push(Span::styled(
        format!("  {} episodes", character.episode_count()),
        Style::default().fg(Color::DarkGray),
    ));

    Line::from(spans)
}

/// Split a name into plain/emphasized/plain spans around the query match.
fn highlighted_name<'a>(
    name: &'a str,
    query: &str,
    base: Style,
    emphasis: Style,
) -> Vec<Span<'a>> {
    match match_span(name, query) {
        Some(range) => vec![
            Span::styled(&name[..range.start], base),
            Span::styled(&name[range.clone()], emphasis),
            Span::styled(&name[range.end..], base),
        ],
        None => vec![Span::styled(name, base)],
    }
}

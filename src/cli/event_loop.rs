// Picker event loop - wires terminal input and search completions into state
//
// Single owner model: this loop holds the PickerState and is the only thing
// that mutates it. Keyboard and mouse events are polled with a short timeout
// (non-blocking for the async runtime's purposes); search requests run as
// spawned tasks that report back over an unbounded channel, tagged with the
// request generation.

use anyhow::{Context, Result};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::CrosstermBackend, layout::Position, style::{Modifier, Style}, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tui_textarea::TextArea;

use crate::api::CharacterClient;
use crate::picker::{PickerState, SearchTicket};

use super::events::AppEvent;
use super::tui::{self, FrameLayout};

/// How long one poll waits for terminal input before the loop services the
/// search channel again.
const POLL_INTERVAL_MS: u64 = 50;

/// Set up the terminal, run the picker until the user quits, and always
/// restore the terminal afterwards, error path included.
pub async fn run(client: CharacterClient) -> Result<()> {
    let mut terminal = tui::setup_terminal()?;
    let result = App::new(client).run(&mut terminal).await;
    let restored = tui::restore_terminal(&mut terminal);
    result.and(restored)
}

struct App {
    state: PickerState,
    client: CharacterClient,
    input: TextArea<'static>,
    layout: FrameLayout,
    event_tx: mpsc::UnboundedSender<AppEvent>,
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    should_quit: bool,
}

impl App {
    fn new(client: CharacterClient) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            state: PickerState::new(),
            client,
            input: create_query_input(),
            layout: FrameLayout::default(),
            event_tx,
            event_rx,
            should_quit: false,
        }
    }

    async fn run(
        mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        while !self.should_quit {
            terminal
                .draw(|frame| {
                    self.layout = tui::render(frame, &self.state, &self.input);
                })
                .context("Failed to draw frame")?;

            self.drain_search_events();

            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))
                .context("Failed to poll terminal events")?
            {
                match event::read().context("Failed to read terminal event")? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {} // Resize is handled by the next draw
                }
            }
        }
        Ok(())
    }

    /// Apply every search completion that has arrived since the last frame.
    fn drain_search_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                AppEvent::SearchCompleted {
                    generation,
                    results,
                } => self.state.apply_search_result(generation, Ok(results)),
                AppEvent::SearchFailed { generation, error } => {
                    self.state.apply_search_result(generation, Err(error))
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            (KeyCode::Esc, _) => self.state.close_dropdown(),
            (KeyCode::Down, _) => self.state.highlight_next(self.layout.viewport_rows()),
            (KeyCode::Up, _) => self.state.highlight_previous(self.layout.viewport_rows()),
            (KeyCode::Enter, _) => self.state.toggle_highlighted(),
            // Backspace/Delete act on the selection while a row is
            // highlighted; otherwise they edit the query like any other key.
            (KeyCode::Backspace | KeyCode::Delete, _) if self.state.highlighted().is_some() => {
                self.state.remove_highlighted();
            }
            _ => {
                if self.input.input(Event::Key(key)) {
                    self.sync_query();
                }
            }
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.layout.toggle_cell.contains(position) {
                    // FocusInput outcome needs no action here: the input
                    // always owns keyboard focus in the TUI.
                    let _ = self.state.toggle_dropdown();
                } else if let Some(id) = self.layout.chip_dismiss_at(position) {
                    self.state.remove_selected(id);
                } else if let Some(index) =
                    self.layout.result_index_at(position, self.state.scroll_top())
                {
                    self.state.toggle_at(index);
                } else if self.layout.is_outside_widget(position) {
                    self.state.close_dropdown();
                }
            }
            MouseEventKind::ScrollDown => self.state.scroll_by(1),
            MouseEventKind::ScrollUp => self.state.scroll_by(-1),
            _ => {}
        }
    }

    /// Push the textarea's current content into the state machine and
    /// dispatch a search if the edit asked for one.
    fn sync_query(&mut self) {
        let query = self
            .input
            .lines()
            .first()
            .cloned()
            .unwrap_or_default();
        if let Some(ticket) = self.state.set_query(&query) {
            self.spawn_search(ticket);
        }
    }

    fn spawn_search(&self, ticket: SearchTicket) {
        let client = self.client.clone();
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            match client.search(&ticket.query).await {
                Ok(results) => {
                    let _ = event_tx.send(AppEvent::SearchCompleted {
                        generation: ticket.generation,
                        results,
                    });
                }
                Err(e) => {
                    tracing::warn!("Character search for {:?} failed: {:#}", ticket.query, e);
                    let _ = event_tx.send(AppEvent::SearchFailed {
                        generation: ticket.generation,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

/// Single-line query input in a clean style; Enter never reaches it, so it
/// stays one line.
fn create_query_input() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Type to search characters...");

    let clean_style = Style::default();
    textarea.set_style(clean_style);
    textarea.set_cursor_line_style(clean_style);
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_style(clean_style);

    textarea
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_input_starts_empty() {
        let input = create_query_input();
        assert_eq!(input.lines(), &["".to_string()]);
    }

    #[test]
    fn test_query_input_accepts_characters() {
        let mut input = create_query_input();
        for c in "rick".chars() {
            input.input(Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)));
        }
        assert_eq!(input.lines().first().map(String::as_str), Some("rick"));
    }
}

use crate::interactive::constants::SUGGESTIONS_MODAL_PERCENT;
use crate::interactive::domain::models::SuggestionPhase;
use crate::interactive::ui::components::book_list::BookList;
use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// The suggestions modal. An empty visible surface is the loading
/// condition; a completed-but-empty fetch renders its own message.
pub struct SuggestionList {
    phase: SuggestionPhase,
    list: BookList,
}

impl SuggestionList {
    pub fn new() -> Self {
        Self {
            phase: SuggestionPhase::Loading,
            list: BookList::new("Suggested for you", "No suggestions"),
        }
    }

    pub fn set_phase(&mut self, phase: &SuggestionPhase, selected_index: usize) {
        if self.phase != *phase {
            self.list.set_books(phase.items().to_vec());
            self.phase = phase.clone();
        }
        self.list.set_selected_index(selected_index);
    }
}

impl Component for SuggestionList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(
            SUGGESTIONS_MODAL_PERCENT.0,
            SUGGESTIONS_MODAL_PERCENT.1,
            area,
        );
        f.render_widget(Clear, popup);

        match &self.phase {
            SuggestionPhase::Loading => {
                let loading = Paragraph::new("Fetching suggestions...")
                    .block(
                        Block::default()
                            .title(" Suggested for you ")
                            .borders(Borders::ALL),
                    )
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(loading, popup);
            }
            SuggestionPhase::Empty => {
                let empty = Paragraph::new("No suggestions for you yet. Search a few books first!")
                    .block(
                        Block::default()
                            .title(" Suggested for you ")
                            .borders(Borders::ALL),
                    )
                    .style(Style::default().fg(Color::DarkGray));
                f.render_widget(empty, popup);
            }
            SuggestionPhase::Populated(_) => {
                self.list.render(f, popup);
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc => Some(Message::CloseSuggestions),
            KeyCode::Enter => {
                // Nothing to choose while loading or empty.
                self.list.selected_book().map(|_| Message::ChooseSuggestion)
            }
            _ => self
                .list
                .handle_nav_key(key)
                .map(Message::SelectSuggestion),
        }
    }
}

impl Default for SuggestionList {
    fn default() -> Self {
        Self::new()
    }
}

use crate::api::{Book, FacetFilter};
use crate::interactive::constants::SEARCH_MODAL_PERCENT;
use crate::interactive::domain::models::SearchMode;
use crate::interactive::ui::components::book_list::BookList;
use crate::interactive::ui::components::filter_form::FilterForm;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Focus {
    Input,
    Results,
}

/// The search modal: mode tabs, the semantic input or faceted form, and the
/// result list. Enter submits from the input and picks from the results;
/// Down/Up move focus between the two panes.
pub struct SearchModal {
    mode: SearchMode,
    query_input: TextInput,
    filter_form: FilterForm,
    results: BookList,
    is_searching: bool,
    has_results: bool,
    focus: Focus,
}

impl SearchModal {
    pub fn new() -> Self {
        Self {
            mode: SearchMode::Semantic,
            query_input: TextInput::new(),
            filter_form: FilterForm::new(),
            results: BookList::new("Results", "No results"),
            is_searching: false,
            has_results: false,
            focus: Focus::Input,
        }
    }

    pub fn set_mode(&mut self, mode: SearchMode) {
        if self.mode != mode {
            self.mode = mode;
            self.focus = Focus::Input;
        }
    }

    pub fn set_query(&mut self, query: &str) {
        if self.query_input.text() != query {
            self.query_input.set_text(query.to_string());
        }
    }

    pub fn set_filter(&mut self, filter: &FacetFilter) {
        self.filter_form.set_values(filter);
    }

    pub fn set_results(&mut self, results: Vec<Book>, selected_index: usize) {
        self.results.set_books(results);
        self.results.set_selected_index(selected_index);
        if self.results.is_empty() {
            self.focus = Focus::Input;
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_has_results(&mut self, has_results: bool) {
        self.has_results = has_results;
    }

    fn input_height(&self) -> u16 {
        match self.mode {
            SearchMode::Semantic => 3,
            // One row per facet field plus padding.
            SearchMode::Faceted => 7,
        }
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let tab = |mode: SearchMode| {
            let style = if self.mode == mode {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", mode.label()), style)
        };

        let line = Line::from(vec![
            tab(SearchMode::Semantic),
            Span::raw("|"),
            tab(SearchMode::Faceted),
            Span::styled("  (Ctrl+F switches mode)", Style::default().fg(Color::DarkGray)),
        ]);
        f.render_widget(
            Paragraph::new(line).block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    fn render_input(&mut self, f: &mut Frame, area: Rect) {
        match self.mode {
            SearchMode::Semantic => {
                let spans = if self.focus == Focus::Input {
                    self.query_input.cursor_spans()
                } else {
                    vec![Span::raw(self.query_input.text().to_string())]
                };
                let input = Paragraph::new(Line::from(spans))
                    .block(Block::default().title("Query").borders(Borders::ALL))
                    .style(Style::default().fg(Color::Yellow));
                f.render_widget(input, area);
            }
            SearchMode::Faceted => {
                let block = Block::default().title("Filters").borders(Borders::ALL);
                let inner = block.inner(area);
                f.render_widget(block, area);
                self.filter_form.render(f, inner);
            }
        }
    }

    fn render_results(&mut self, f: &mut Frame, area: Rect) {
        // At most one of {searching, results, nothing} is the current
        // display condition.
        if self.is_searching {
            let searching = Paragraph::new("Searching...")
                .block(Block::default().title("Results").borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(searching, area);
        } else if self.has_results {
            self.results.render(f, area);
        } else {
            let idle = Paragraph::new("Submit a search to see results")
                .block(Block::default().title("Results").borders(Borders::ALL))
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true });
            f.render_widget(idle, area);
        }
    }
}

impl Component for SearchModal {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(SEARCH_MODAL_PERCENT.0, SEARCH_MODAL_PERCENT.1, area);
        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Search the catalog ")
            .borders(Borders::ALL);
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),                  // Mode tabs
                Constraint::Length(self.input_height()), // Query input / filter form
                Constraint::Min(0),                     // Results
                Constraint::Length(1),                  // Status
            ])
            .split(inner);

        self.render_tabs(f, chunks[0]);
        self.render_input(f, chunks[1]);
        self.render_results(f, chunks[2]);

        let status = Paragraph::new(
            "Enter: Search | Ctrl+F: Mode | Tab: Next field | Up/Down: Results | Esc: Close",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(ratatui::layout::Alignment::Center);
        f.render_widget(status, chunks[3]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc => return Some(Message::CloseSearch),
            KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Some(Message::SwitchMode(self.mode.toggled()));
            }
            KeyCode::Enter => {
                return Some(match self.focus {
                    Focus::Input => Message::Submit,
                    Focus::Results => Message::ChooseResult,
                });
            }
            KeyCode::Down if self.focus == Focus::Input => {
                if !self.results.is_empty() {
                    self.focus = Focus::Results;
                    return Some(Message::SelectResult(self.results.selected_index()));
                }
                return None;
            }
            KeyCode::Up if self.focus == Focus::Results => {
                if self.results.move_up() {
                    return Some(Message::SelectResult(self.results.selected_index()));
                }
                self.focus = Focus::Input;
                return None;
            }
            KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Home | KeyCode::End
                if self.focus == Focus::Results =>
            {
                return self.results.handle_nav_key(key).map(Message::SelectResult);
            }
            KeyCode::Tab if self.mode == SearchMode::Faceted => {
                self.filter_form.focus_next();
                return None;
            }
            KeyCode::BackTab if self.mode == SearchMode::Faceted => {
                self.filter_form.focus_prev();
                return None;
            }
            _ => {}
        }

        // Anything else is text entry; typing pulls focus back to the input.
        self.focus = Focus::Input;
        match self.mode {
            SearchMode::Semantic => {
                if self.query_input.handle_key(key) {
                    Some(Message::QueryChanged(self.query_input.text().to_string()))
                } else {
                    None
                }
            }
            SearchMode::Faceted => self.filter_form.handle_key(key),
        }
    }
}

impl Default for SearchModal {
    fn default() -> Self {
        Self::new()
    }
}

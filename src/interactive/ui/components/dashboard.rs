use crate::api::Book;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::components::book_list::BookList;
use crate::interactive::ui::events::Message;
use chrono::Timelike;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// The base surface: greeting, the read-only search affordance, and the
/// popular-titles panel. The search box here only opens the search session;
/// it accepts no input itself.
pub struct Dashboard {
    email: String,
    popular: BookList,
    is_loading: bool,
}

impl Dashboard {
    pub fn new(email: &str) -> Self {
        Self {
            email: email.to_string(),
            popular: BookList::new("Popular titles", "No popular titles yet"),
            is_loading: false,
        }
    }

    pub fn set_popular(&mut self, books: Vec<Book>, selected_index: usize) {
        self.popular.set_books(books);
        self.popular.set_selected_index(selected_index);
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    fn greeting(&self) -> String {
        let hour = chrono::Local::now().hour();
        let time_of_day = if hour < 12 {
            "morning"
        } else if hour < 18 {
            "afternoon"
        } else {
            "evening"
        };
        format!("Good {time_of_day}, {}!", self.email)
    }
}

impl Component for Dashboard {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Header
                Constraint::Min(0),    // Popular titles
                Constraint::Length(1), // Status
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(
                self.greeting(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Search books...  (press / to search, g for suggestions)",
                Style::default().fg(Color::DarkGray),
            )),
        ])
        .block(
            Block::default()
                .title(" Library Dashboard ")
                .borders(Borders::ALL),
        );
        f.render_widget(header, chunks[0]);

        if self.is_loading && self.popular.is_empty() {
            let loading = Paragraph::new("Loading popular titles...")
                .block(
                    Block::default()
                        .title("Popular titles")
                        .borders(Borders::ALL),
                )
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(loading, chunks[1]);
        } else {
            self.popular.render(f, chunks[1]);
        }

        let status = Paragraph::new(
            "/: Search | g: Suggestions | Up/Down: Browse | Enter: Details | ?: Help | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
        f.render_widget(status, chunks[2]);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => Some(Message::OpenSearch),
            KeyCode::Char('g') => Some(Message::RequestSuggestions),
            KeyCode::Char('q') => Some(Message::Quit),
            KeyCode::Char('?') => Some(Message::ShowHelp),
            KeyCode::Enter => Some(Message::ChoosePopular),
            _ => self.popular.handle_nav_key(key).map(Message::SelectPopular),
        }
    }
}

use crate::api::Book;
use crate::interactive::constants::DETAIL_MODAL_PERCENT;
use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// The book-detail modal. Read-only; closing it clears the selection.
pub struct BookDetail {
    book: Option<Book>,
    scroll_offset: usize,
}

impl BookDetail {
    pub fn new() -> Self {
        Self {
            book: None,
            scroll_offset: 0,
        }
    }

    pub fn set_book(&mut self, book: Option<Book>) {
        let changed = match (&self.book, &book) {
            (Some(current), Some(next)) => current.id != next.id,
            (None, None) => false,
            _ => true,
        };
        if changed {
            self.scroll_offset = 0;
        }
        self.book = book;
    }

    fn field_line(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("{label:>12}: "),
                Style::default().fg(Color::DarkGray),
            ),
            Span::raw(value),
        ])
    }
}

impl Component for BookDetail {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(book) = &self.book else {
            return;
        };

        let popup = centered_rect(DETAIL_MODAL_PERCENT.0, DETAIL_MODAL_PERCENT.1, area);
        f.render_widget(Clear, popup);

        let mut lines = vec![
            Line::from(Span::styled(
                book.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Self::field_line("Author", book.author_line()),
            Self::field_line("Genre", book.genre.clone()),
            Self::field_line("ISBN", book.isbn.clone()),
            Self::field_line("Publisher", book.publisher.clone()),
            Self::field_line("Published", book.date.clone()),
        ];
        if book.edition > 0 {
            lines.push(Self::field_line("Edition", book.edition.to_string()));
        }
        lines.push(Self::field_line("Score", format!("{:.2}", book.score)));
        lines.push(Self::field_line(
            "Searched",
            format!("{} times", book.search_times),
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(book.summary.clone()));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Up/Down: Scroll | Esc: Close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title(" Book ").borders(Borders::ALL))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset as u16, 0));
        f.render_widget(paragraph, popup);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.scroll_offset += 1;
                None
            }
            KeyCode::PageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(10);
                None
            }
            KeyCode::PageDown => {
                self.scroll_offset += 10;
                None
            }
            KeyCode::Backspace | KeyCode::Esc => Some(Message::CloseDetail),
            _ => None,
        }
    }
}

impl Default for BookDetail {
    fn default() -> Self {
        Self::new()
    }
}

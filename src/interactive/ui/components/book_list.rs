use crate::api::Book;
use crate::interactive::constants::PAGE_SIZE;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem as TuiListItem, Paragraph},
};

/// A scrollable list of books. Not a [`super::Component`]: the owning
/// surface maps navigation into its own selection messages.
pub struct BookList {
    title: String,
    empty_message: String,
    books: Vec<Book>,
    selected_index: usize,
    scroll_offset: usize,
}

impl BookList {
    pub fn new(title: impl Into<String>, empty_message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            empty_message: empty_message.into(),
            books: Vec::new(),
            selected_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn set_books(&mut self, books: Vec<Book>) {
        if self.selected_index >= books.len() {
            self.selected_index = 0;
            self.scroll_offset = 0;
        }
        self.books = books;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.books.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.books.get(self.selected_index)
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Maps a navigation key to the new selection, or `None` when the key
    /// is not navigation or the selection did not move.
    pub fn handle_nav_key(&mut self, key: KeyEvent) -> Option<usize> {
        let moved = match key.code {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::PageUp => self.move_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.move_by(PAGE_SIZE as isize),
            KeyCode::Home => self.move_to(0),
            KeyCode::End => self.move_to(self.books.len().saturating_sub(1)),
            _ => false,
        };
        moved.then_some(self.selected_index)
    }

    pub fn move_up(&mut self) -> bool {
        self.move_by(-1)
    }

    pub fn move_down(&mut self) -> bool {
        self.move_by(1)
    }

    fn move_by(&mut self, delta: isize) -> bool {
        if self.books.is_empty() {
            return false;
        }
        let max = self.books.len() - 1;
        let target = self
            .selected_index
            .saturating_add_signed(delta)
            .min(max);
        self.move_to(target)
    }

    fn move_to(&mut self, index: usize) -> bool {
        if index != self.selected_index && index < self.books.len() {
            self.selected_index = index;
            true
        } else {
            false
        }
    }

    fn adjust_scroll(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index - visible + 1;
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        if self.books.is_empty() {
            let empty = Paragraph::new(self.empty_message.clone())
                .block(
                    Block::default()
                        .title(self.title.clone())
                        .borders(Borders::ALL),
                )
                .style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty, area);
            return;
        }

        let visible = area.height.saturating_sub(2) as usize;
        self.adjust_scroll(visible);
        let end = (self.scroll_offset + visible).min(self.books.len());

        let rows: Vec<TuiListItem> = (self.scroll_offset..end)
            .map(|i| {
                let style = if i == self.selected_index {
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                TuiListItem::new(book_line(&self.books[i], area.width)).style(style)
            })
            .collect();

        let title = format!(
            "{} ({}/{})",
            self.title,
            self.selected_index + 1,
            self.books.len()
        );
        let list = List::new(rows).block(Block::default().title(title).borders(Borders::ALL));
        f.render_widget(list, area);
    }
}

fn book_line(book: &Book, width: u16) -> Line<'static> {
    let mut spans = vec![Span::styled(
        book.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];

    if !book.author.is_empty() {
        spans.push(Span::styled(
            format!(" by {}", book.author_line()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if !book.genre.is_empty() {
        spans.push(Span::styled(
            format!("  {}", book.genre),
            Style::default().fg(Color::Cyan),
        ));
    }
    // Narrow panes skip the score column.
    if width > 50 {
        spans.push(Span::styled(
            format!("  {:.2}", book.score),
            Style::default().fg(Color::Yellow),
        ));
    }

    Line::from(spans)
}

use crate::interactive::ui::components::{Component, centered_rect};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn help_text() -> Vec<Line<'static>> {
        let section = |title: &'static str| {
            Line::from(vec![Span::styled(
                title,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )])
        };

        vec![
            Line::from(vec![Span::styled(
                "Library Catalog Search",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            section("Dashboard:"),
            Line::from("  /           - Open the search modal"),
            Line::from("  g           - Open suggestions"),
            Line::from("  Up/Down     - Browse popular titles"),
            Line::from("  Enter       - View book details"),
            Line::from("  q           - Quit"),
            Line::from("  ?           - Show this help"),
            Line::from(""),
            section("Search modal:"),
            Line::from("  Ctrl+F      - Switch between semantic and faceted mode"),
            Line::from("  Enter       - Submit the search / open selected result"),
            Line::from("  Tab         - Next filter field (faceted mode)"),
            Line::from("  Down/Up     - Move between input and results"),
            Line::from("  Esc         - Close (query and filters are kept)"),
            Line::from(""),
            section("Suggestions / detail:"),
            Line::from("  Up/Down     - Navigate / scroll"),
            Line::from("  Enter       - Open selected suggestion"),
            Line::from("  Esc         - Close"),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let popup = centered_rect(70, 80, area);
        f.render_widget(Clear, popup);

        let help = Paragraph::new(Self::help_text())
            .block(Block::default().title(" Help ").borders(Borders::ALL));
        f.render_widget(help, popup);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Message::CloseHelp),
            _ => None,
        }
    }
}

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

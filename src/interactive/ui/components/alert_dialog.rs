use crate::interactive::constants::ALERT_WIDTH_PERCENT;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Blocking error alert drawn above every other surface. The session stays
/// interactive underneath; the alert just swallows input until dismissed.
pub struct AlertDialog {
    message: String,
}

impl AlertDialog {
    pub fn new() -> Self {
        Self {
            message: String::new(),
        }
    }

    pub fn set_message(&mut self, message: &str) {
        if self.message != message {
            self.message = message.to_string();
        }
    }
}

impl Component for AlertDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let width = (area.width * ALERT_WIDTH_PERCENT / 100).max(20);
        let height = (self.message.lines().count() as u16 + 4).min(area.height.saturating_sub(4));
        let popup = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        f.render_widget(Clear, popup);

        let block = Block::default()
            .title(" Error ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red));
        let inner = block.inner(popup);
        f.render_widget(block, popup);

        let body = Paragraph::new(self.message.clone())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: false });
        f.render_widget(body, inner);

        let hint = Line::from(vec![
            Span::styled("Press ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                "Esc",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to dismiss", Style::default().fg(Color::DarkGray)),
        ]);
        let hint_area = Rect {
            y: popup.y + popup.height.saturating_sub(2),
            height: 1,
            ..inner
        };
        f.render_widget(Paragraph::new(hint).alignment(Alignment::Center), hint_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Message::DismissAlert),
            _ => None,
        }
    }
}

impl Default for AlertDialog {
    fn default() -> Self {
        Self::new()
    }
}

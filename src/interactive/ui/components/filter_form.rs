use crate::api::FacetFilter;
use crate::interactive::domain::models::FacetField;
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// The faceted-search form: five text fields with Tab/Shift+Tab focus
/// cycling. Each edit reports the full new field value; submission always
/// sends the whole record.
pub struct FilterForm {
    inputs: [TextInput; 5],
    focused: usize,
}

impl FilterForm {
    pub fn new() -> Self {
        Self {
            inputs: Default::default(),
            focused: 0,
        }
    }

    pub fn focused_field(&self) -> FacetField {
        FacetField::ALL[self.focused]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % FacetField::ALL.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + FacetField::ALL.len() - 1) % FacetField::ALL.len();
    }

    /// Syncs field contents from state without disturbing the cursor of
    /// fields that are already up to date.
    pub fn set_values(&mut self, filter: &FacetFilter) {
        let values = [
            &filter.author,
            &filter.title,
            &filter.genre,
            &filter.isbn,
            &filter.publisher,
        ];
        for (input, value) in self.inputs.iter_mut().zip(values) {
            if input.text() != value.as_str() {
                input.set_text(value.clone());
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        let focused_field = self.focused_field();
        let input = &mut self.inputs[self.focused];
        if input.handle_key(key) {
            Some(Message::FilterChanged(
                focused_field,
                input.text().to_string(),
            ))
        } else {
            None
        }
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = FacetField::ALL
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let focused = i == self.focused;
                let label_style = if focused {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                let mut spans = vec![Span::styled(format!("{:>10}: ", field.label()), label_style)];
                if focused {
                    spans.extend(self.inputs[i].cursor_spans());
                } else {
                    spans.push(Span::raw(self.inputs[i].text().to_string()));
                }
                Line::from(spans)
            })
            .collect();

        f.render_widget(Paragraph::new(lines), area);
    }
}

impl Default for FilterForm {
    fn default() -> Self {
        Self::new()
    }
}

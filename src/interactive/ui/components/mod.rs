pub mod alert_dialog;
pub mod book_detail;
pub mod book_list;
pub mod dashboard;
pub mod filter_form;
pub mod help_dialog;
pub mod search_modal;
pub mod suggestion_list;
pub mod text_input;

#[cfg(test)]
mod filter_form_test;
#[cfg(test)]
mod search_modal_test;
#[cfg(test)]
mod text_input_test;

use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Centered popup area taking the given percentages of the frame.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

use super::filter_form::FilterForm;
use crate::api::FacetFilter;
use crate::interactive::domain::models::FacetField;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn focus_cycles_through_all_fields_and_wraps() {
    let mut form = FilterForm::new();
    assert_eq!(form.focused_field(), FacetField::Author);

    for expected in [
        FacetField::Title,
        FacetField::Genre,
        FacetField::Isbn,
        FacetField::Publisher,
        FacetField::Author,
    ] {
        form.focus_next();
        assert_eq!(form.focused_field(), expected);
    }

    form.focus_prev();
    assert_eq!(form.focused_field(), FacetField::Publisher);
}

#[test]
fn typing_reports_the_focused_field() {
    let mut form = FilterForm::new();

    let message = form.handle_key(key(KeyCode::Char('O')));
    match message {
        Some(Message::FilterChanged(FacetField::Author, value)) => assert_eq!(value, "O"),
        other => panic!("expected an author edit, got {other:?}"),
    }

    form.focus_next();
    let message = form.handle_key(key(KeyCode::Char('1')));
    match message {
        Some(Message::FilterChanged(FacetField::Title, value)) => assert_eq!(value, "1"),
        other => panic!("expected a title edit, got {other:?}"),
    }
}

#[test]
fn cursor_movement_emits_nothing() {
    let mut form = FilterForm::new();
    form.handle_key(key(KeyCode::Char('x')));

    assert!(form.handle_key(key(KeyCode::Left)).is_none());
    assert!(form.handle_key(key(KeyCode::Home)).is_none());
}

#[test]
fn set_values_syncs_fields_from_state() {
    let mut form = FilterForm::new();
    let filter = FacetFilter {
        author: "Orwell".to_string(),
        genre: "Dystopia".to_string(),
        ..FacetFilter::default()
    };

    form.set_values(&filter);
    form.focus_next(); // Title
    let message = form.handle_key(key(KeyCode::Char('1')));

    match message {
        Some(Message::FilterChanged(FacetField::Title, value)) => assert_eq!(value, "1"),
        other => panic!("expected a title edit, got {other:?}"),
    }
}

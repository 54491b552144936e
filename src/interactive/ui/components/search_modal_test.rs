use super::Component;
use super::search_modal::SearchModal;
use crate::api::Book;
use crate::interactive::domain::models::{FacetField, SearchMode};
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn results(n: usize) -> Vec<Book> {
    (0..n)
        .map(|i| Book {
            id: format!("b{i}"),
            title: format!("Book {i}"),
            ..Book::default()
        })
        .collect()
}

#[test]
fn enter_submits_from_the_input() {
    let mut modal = SearchModal::new();

    assert!(matches!(
        modal.handle_key(key(KeyCode::Enter)),
        Some(Message::Submit)
    ));
}

#[test]
fn esc_closes_the_modal() {
    let mut modal = SearchModal::new();

    assert!(matches!(
        modal.handle_key(key(KeyCode::Esc)),
        Some(Message::CloseSearch)
    ));
}

#[test]
fn ctrl_f_toggles_the_mode() {
    let mut modal = SearchModal::new();

    match modal.handle_key(ctrl('f')) {
        Some(Message::SwitchMode(SearchMode::Faceted)) => {}
        other => panic!("expected a switch to faceted, got {other:?}"),
    }

    modal.set_mode(SearchMode::Faceted);
    match modal.handle_key(ctrl('f')) {
        Some(Message::SwitchMode(SearchMode::Semantic)) => {}
        other => panic!("expected a switch back to semantic, got {other:?}"),
    }
}

#[test]
fn typing_in_semantic_mode_edits_the_query() {
    let mut modal = SearchModal::new();

    match modal.handle_key(key(KeyCode::Char('1'))) {
        Some(Message::QueryChanged(query)) => assert_eq!(query, "1"),
        other => panic!("expected a query edit, got {other:?}"),
    }
}

#[test]
fn typing_in_faceted_mode_edits_the_focused_filter() {
    let mut modal = SearchModal::new();
    modal.set_mode(SearchMode::Faceted);

    // Tab moves to the next field without emitting anything.
    assert!(modal.handle_key(key(KeyCode::Tab)).is_none());

    match modal.handle_key(key(KeyCode::Char('1'))) {
        Some(Message::FilterChanged(FacetField::Title, value)) => assert_eq!(value, "1"),
        other => panic!("expected a title edit, got {other:?}"),
    }
}

#[test]
fn down_moves_focus_into_results_and_enter_chooses() {
    let mut modal = SearchModal::new();
    modal.set_results(results(2), 0);
    modal.set_has_results(true);

    // Down enters the result pane.
    assert!(matches!(
        modal.handle_key(key(KeyCode::Down)),
        Some(Message::SelectResult(0))
    ));
    // Next Down moves the selection.
    assert!(matches!(
        modal.handle_key(key(KeyCode::Down)),
        Some(Message::SelectResult(1))
    ));
    // Enter now picks the selected result.
    assert!(matches!(
        modal.handle_key(key(KeyCode::Enter)),
        Some(Message::ChooseResult)
    ));
}

#[test]
fn down_with_no_results_stays_in_the_input() {
    let mut modal = SearchModal::new();

    assert!(modal.handle_key(key(KeyCode::Down)).is_none());
    assert!(matches!(
        modal.handle_key(key(KeyCode::Enter)),
        Some(Message::Submit)
    ));
}

#[test]
fn typing_returns_focus_to_the_input() {
    let mut modal = SearchModal::new();
    modal.set_results(results(2), 0);
    modal.set_has_results(true);

    modal.handle_key(key(KeyCode::Down));
    modal.handle_key(key(KeyCode::Char('x')));

    // Enter submits again instead of choosing.
    assert!(matches!(
        modal.handle_key(key(KeyCode::Enter)),
        Some(Message::Submit)
    ));
}

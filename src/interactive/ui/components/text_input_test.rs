use super::text_input::TextInput;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(input: &mut TextInput, text: &str) {
    for c in text.chars() {
        input.handle_key(key(KeyCode::Char(c)));
    }
}

#[test]
fn typing_appends_at_cursor() {
    let mut input = TextInput::new();
    type_str(&mut input, "1984");

    assert_eq!(input.text(), "1984");
    assert_eq!(input.cursor_position(), 4);
}

#[test]
fn insert_in_the_middle() {
    let mut input = TextInput::new();
    type_str(&mut input, "14");
    input.handle_key(key(KeyCode::Left));
    input.handle_key(key(KeyCode::Char('9')));
    input.handle_key(key(KeyCode::Char('8')));

    assert_eq!(input.text(), "1984");
}

#[test]
fn backspace_removes_before_cursor() {
    let mut input = TextInput::new();
    type_str(&mut input, "1984x");

    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.text(), "1984");

    // Nothing to delete at the start.
    input.handle_key(key(KeyCode::Home));
    assert!(!input.handle_key(key(KeyCode::Backspace)));
}

#[test]
fn delete_removes_under_cursor() {
    let mut input = TextInput::new();
    type_str(&mut input, "1x984");
    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Right));

    assert!(input.handle_key(key(KeyCode::Delete)));
    assert_eq!(input.text(), "1984");
    assert_eq!(input.cursor_position(), 1);
}

#[test]
fn ctrl_w_deletes_previous_word() {
    let mut input = TextInput::new();
    type_str(&mut input, "george orwell");

    assert!(input.handle_key(ctrl('w')));
    assert_eq!(input.text(), "george ");
}

#[test]
fn ctrl_u_and_ctrl_k_delete_to_line_edges() {
    let mut input = TextInput::new();
    type_str(&mut input, "animal farm");
    input.handle_key(ctrl('a'));
    for _ in 0..6 {
        input.handle_key(key(KeyCode::Right));
    }

    assert!(input.handle_key(ctrl('k')));
    assert_eq!(input.text(), "animal");

    assert!(input.handle_key(ctrl('u')));
    assert_eq!(input.text(), "");
}

#[test]
fn multibyte_editing_uses_character_positions() {
    let mut input = TextInput::new();
    type_str(&mut input, "日本語");
    assert_eq!(input.cursor_position(), 3);

    input.handle_key(key(KeyCode::Left));
    assert!(input.handle_key(key(KeyCode::Backspace)));
    assert_eq!(input.text(), "日語");
    assert_eq!(input.cursor_position(), 1);
}

#[test]
fn cursor_stays_within_bounds() {
    let mut input = TextInput::new();
    type_str(&mut input, "ab");

    input.handle_key(key(KeyCode::Right));
    assert_eq!(input.cursor_position(), 2);

    input.handle_key(key(KeyCode::Home));
    input.handle_key(key(KeyCode::Left));
    assert_eq!(input.cursor_position(), 0);
}

#[test]
fn set_text_moves_cursor_to_end() {
    let mut input = TextInput::new();
    input.set_text("orwell".to_string());

    assert_eq!(input.text(), "orwell");
    assert_eq!(input.cursor_position(), 6);
}

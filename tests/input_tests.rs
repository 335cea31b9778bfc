use cardquill::editor::mode::EditorMode;
use cardquill::editor::state::EditorState;
use cardquill::input::keys::{map_key_event, InputEvent};
use cardquill::input::InputHandler;
use cardquill::store::CardStore;
use termion::event::{Event, Key};

fn press(handler: &mut InputHandler, state: &mut EditorState, keys: &[Key]) -> bool {
    let mut quit = false;
    for key in keys {
        quit = handler.handle_event(Event::Key(*key), state).unwrap();
    }
    quit
}

fn typed(text: &str) -> Vec<Key> {
    text.chars().map(Key::Char).collect()
}

#[test]
fn test_review_key() {
    let event = Event::Key(Key::Char('r'));
    assert_eq!(
        map_key_event(event, &EditorMode::Normal),
        InputEvent::ToggleReviewMode
    );
}

#[test]
fn test_paste_keys() {
    assert_eq!(
        map_key_event(Event::Key(Key::Ctrl('v')), &EditorMode::Insert),
        InputEvent::Paste
    );
    assert_eq!(
        map_key_event(Event::Key(Key::Char('p')), &EditorMode::Normal),
        InputEvent::Paste
    );
}

#[test]
fn test_author_two_cards_then_review() {
    let mut handler = InputHandler::new();
    let mut state = EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap());

    // First card: type question, Tab to answer, type answer, Esc, save
    press(&mut handler, &mut state, &[Key::Char('i')]);
    press(&mut handler, &mut state, &typed("2 + 2?"));
    press(&mut handler, &mut state, &[Key::Char('\t')]);
    press(&mut handler, &mut state, &typed("4"));
    press(&mut handler, &mut state, &[Key::Esc, Key::Char('s')]);

    // Second card
    press(&mut handler, &mut state, &[Key::Char('n'), Key::Char('\t'), Key::Char('i')]);
    press(&mut handler, &mut state, &typed("3 + 3?"));
    press(&mut handler, &mut state, &[Key::Char('\t')]);
    press(&mut handler, &mut state, &typed("6"));
    press(&mut handler, &mut state, &[Key::Esc, Key::Ctrl('s')]);

    assert_eq!(state.store().count().unwrap(), 2);
    assert_eq!(state.store().get(2).unwrap().question, "3 + 3?");

    // Review: answers hidden until toggled
    press(&mut handler, &mut state, &[Key::Char('r'), Key::Char('g')]);
    assert_eq!(state.question().text(), "2 + 2?");
    assert!(state.answer().is_empty());

    press(&mut handler, &mut state, &[Key::Char('a')]);
    assert_eq!(state.answer().text(), "4");

    press(&mut handler, &mut state, &[Key::Right]);
    assert_eq!(state.question().text(), "3 + 3?");
    assert!(state.answer().is_empty());

    assert!(press(&mut handler, &mut state, &[Key::Char('q')]));
}

#[test]
fn test_command_line_navigation() {
    let mut handler = InputHandler::new();
    let store = CardStore::open_in_memory().unwrap();
    store.insert("first", "1").unwrap();
    store.insert("second", "2").unwrap();
    let mut state = EditorState::new_with_default_theme(store);

    press(&mut handler, &mut state, &[Key::Char(':')]);
    press(&mut handler, &mut state, &typed("last\n"));
    assert_eq!(*state.mode(), EditorMode::Normal);
    assert_eq!(state.question().text(), "second");

    press(&mut handler, &mut state, &[Key::Char(':')]);
    press(&mut handler, &mut state, &typed("prev\n"));
    assert_eq!(state.question().text(), "first");
    assert_eq!(state.answer().text(), "1");
}

#[test]
fn test_command_backspace_leaves_command_mode() {
    let mut handler = InputHandler::new();
    let mut state = EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap());

    press(&mut handler, &mut state, &[Key::Char(':'), Key::Char('x'), Key::Backspace]);
    assert_eq!(*state.mode(), EditorMode::Normal);
    assert_eq!(state.command_buffer(), "");
}

#[test]
fn test_quit_command() {
    let mut handler = InputHandler::new();
    let mut state = EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap());

    press(&mut handler, &mut state, &[Key::Char(':')]);
    assert!(press(&mut handler, &mut state, &typed("q\n")));
}

use cardquill::editor::commands::{dispatch, Command};
use cardquill::editor::cursor::Motion;
use cardquill::editor::pane::PaneFocus;
use cardquill::editor::state::{EditorState, MessageLevel};
use cardquill::file::png::PNG_SIGNATURE;
use cardquill::store::CardStore;
use std::fs;
use tempfile::TempDir;

fn memory_state() -> EditorState {
    EditorState::new_with_default_theme(CardStore::open_in_memory().unwrap())
}

#[test]
fn test_save_always_inserts_a_new_card() {
    let mut state = memory_state();
    state.question_mut().insert_str("original question");
    state.answer_mut().insert_str("original answer");
    dispatch(&mut state, Command::SaveCard).unwrap();
    assert_eq!(state.message().unwrap().text, "Test saved successfully.");

    // Load it back, edit and save again
    dispatch(&mut state, Command::Navigate(Motion::First)).unwrap();
    state.answer_mut().insert_str(" (edited)");
    dispatch(&mut state, Command::SaveCard).unwrap();

    let store = state.store();
    assert_eq!(store.count().unwrap(), 2);
    assert_eq!(store.get(1).unwrap().answer, "original answer");
    assert_eq!(store.get(2).unwrap().answer, "original answer (edited)");
}

#[test]
fn test_new_database_switches_and_resets_cursor() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fresh.db");

    let mut state = memory_state();
    state.store().insert("old", "card").unwrap();
    dispatch(&mut state, Command::Navigate(Motion::First)).unwrap();

    dispatch(&mut state, Command::NewDatabase(path.clone())).unwrap();
    assert!(path.exists());
    assert_eq!(state.current_card(), None);
    assert_eq!(state.store().count().unwrap(), 0);
    assert_eq!(state.title(), path.display().to_string());
    assert_eq!(state.message().unwrap().text, "New database created.");
}

#[test]
fn test_open_database_reports_record_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("deck.db");
    {
        let store = CardStore::create_or_open(&path).unwrap();
        store.insert("a", "1").unwrap();
        store.insert("b", "2").unwrap();
        store.insert("c", "3").unwrap();
    }

    let mut state = memory_state();
    let command = Command::parse(&format!("open {}", path.display()))
        .unwrap()
        .unwrap();
    dispatch(&mut state, command).unwrap();

    let message = state.message().unwrap();
    assert_eq!(message.level, MessageLevel::Info);
    assert_eq!(message.text, "Database contains 3 records. Database opened.");

    dispatch(&mut state, Command::Navigate(Motion::Last)).unwrap();
    assert_eq!(state.question().text(), "c");
}

#[test]
fn test_load_missing_database_keeps_current_store() {
    let dir = TempDir::new().unwrap();
    let mut state = memory_state();
    state.store().insert("still here", "").unwrap();

    dispatch(&mut state, Command::LoadDatabase(dir.path().join("nope.db"))).unwrap();

    let message = state.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.starts_with("Could not open database"));
    assert_eq!(state.store().count().unwrap(), 1);
    assert_eq!(state.title(), "[memory]");
}

#[test]
fn test_load_database_without_cards_table_reports_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("foreign.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute("CREATE TABLE notes (body TEXT)", []).unwrap();
    }

    let mut state = memory_state();
    dispatch(&mut state, Command::LoadDatabase(path)).unwrap();
    assert_eq!(state.message().unwrap().text, "Database loaded.");

    let quit = dispatch(&mut state, Command::Navigate(Motion::First)).unwrap();
    assert!(!quit);
    assert_eq!(state.message().unwrap().level, MessageLevel::Error);
    assert_eq!(state.current_card(), None);
}

#[test]
fn test_paste_image_writes_file_and_embeds_tag() {
    let dir = TempDir::new().unwrap();
    let mut state = memory_state();
    state.set_image_dir(dir.path().to_path_buf());
    state.set_focus(PaneFocus::Question);
    state.question_mut().insert_str("Look: ");

    dispatch(
        &mut state,
        Command::PasteImage {
            width: 2,
            height: 1,
            rgba: vec![255, 0, 0, 255, 0, 0, 255, 255],
        },
    )
    .unwrap();

    let image = fs::read(dir.path().join("pasted_image.png")).unwrap();
    assert_eq!(&image[..8], &PNG_SIGNATURE);
    assert_eq!(
        state.question().text(),
        "Look: <img src=\"pasted_image.png\" />"
    );

    // Saving keeps the reference in the stored markup
    dispatch(&mut state, Command::SaveCard).unwrap();
    assert!(state
        .store()
        .get(1)
        .unwrap()
        .question
        .contains("pasted_image.png"));
}

#[test]
fn test_paste_image_with_bad_data_reports_error() {
    let dir = TempDir::new().unwrap();
    let mut state = memory_state();
    state.set_image_dir(dir.path().to_path_buf());

    dispatch(
        &mut state,
        Command::PasteImage {
            width: 4,
            height: 4,
            rgba: vec![0; 3],
        },
    )
    .unwrap();

    assert_eq!(state.message().unwrap().level, MessageLevel::Error);
    assert!(state.question().is_empty());
    assert!(!dir.path().join("pasted_image.png").exists());
}

#[test]
fn test_custom_pasted_image_name() {
    let dir = TempDir::new().unwrap();
    let mut state = memory_state();
    state.set_image_dir(dir.path().to_path_buf());
    state.set_pasted_image_name("clip.png".to_string());

    dispatch(
        &mut state,
        Command::PasteImage {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 0],
        },
    )
    .unwrap();

    assert!(dir.path().join("clip.png").exists());
    assert_eq!(state.question().text(), "<img src=\"clip.png\" />");
}

#[test]
fn test_switching_database_clears_previous_card() {
    let dir = TempDir::new().unwrap();
    let fresh = dir.path().join("fresh.db");
    let existing = dir.path().join("existing.db");
    CardStore::create_or_open(&existing).unwrap();

    let mut state = memory_state();
    state.store().insert("old q", "old a").unwrap();
    dispatch(&mut state, Command::Navigate(Motion::First)).unwrap();
    assert_eq!(state.toggle_answer_label(), "Hide Answer");

    dispatch(&mut state, Command::NewDatabase(fresh.clone())).unwrap();
    assert_eq!(state.current_card(), None);
    assert!(state.question().is_empty());
    assert!(state.answer().is_empty());
    assert_eq!(state.toggle_answer_label(), "Show Answer");

    // Saving right after the switch must not carry the old card over
    dispatch(&mut state, Command::SaveCard).unwrap();
    let saved = state.store().get(1).unwrap();
    assert_eq!(saved.question, "");
    assert_eq!(saved.answer, "");

    state.question_mut().insert_str("typed");
    dispatch(&mut state, Command::LoadDatabase(existing)).unwrap();
    assert!(state.question().is_empty());
    assert_eq!(state.current_card(), None);
    assert_eq!(state.toggle_answer_label(), "Show Answer");
}

#[test]
fn test_unknown_theme_lists_available_themes() {
    let mut state = memory_state();
    dispatch(&mut state, Command::SetTheme("solarized".to_string())).unwrap();

    let message = state.message().unwrap();
    assert_eq!(message.level, MessageLevel::Error);
    assert!(message.text.starts_with("Unknown theme: solarized"));
    assert!(message.text.contains("default-dark"));
    assert!(message.text.contains("nord"));
    assert_eq!(state.take_pending_theme(), None);
}

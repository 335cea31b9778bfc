use cardquill::editor::commands::{dispatch, Command};
use cardquill::editor::cursor::{AnswerVisibility, Motion, Position};
use cardquill::editor::state::EditorState;
use cardquill::store::CardStore;

fn state_with(cards: &[(&str, &str)]) -> EditorState {
    let store = CardStore::open_in_memory().unwrap();
    for (q, a) in cards {
        store.insert(q, a).unwrap();
    }
    EditorState::new_with_default_theme(store)
}

fn go(state: &mut EditorState, motion: Motion) {
    dispatch(state, Command::Navigate(motion)).unwrap();
}

#[test]
fn test_empty_store_first_stays_on_no_card() {
    let mut state = state_with(&[]);
    go(&mut state, Motion::First);
    assert_eq!(state.cursor().position(), Position::NoCard);
    go(&mut state, Motion::Last);
    assert_eq!(state.cursor().position(), Position::NoCard);
}

#[test]
fn test_two_card_walkthrough() {
    let mut state = state_with(&[]);
    go(&mut state, Motion::First);
    assert_eq!(state.current_card(), None);

    state.store().insert("A", "a").unwrap();
    state.store().insert("B", "b").unwrap();

    go(&mut state, Motion::First);
    assert_eq!(state.current_card(), Some(1));
    go(&mut state, Motion::Next);
    assert_eq!(state.current_card(), Some(2));
    go(&mut state, Motion::Next);
    assert_eq!(state.current_card(), Some(2));
    assert_eq!(state.question().text(), "B");
}

#[test]
fn test_first_then_next_reaches_last() {
    let cards: Vec<(String, String)> = (0..6)
        .map(|i| (format!("q{}", i), format!("a{}", i)))
        .collect();
    let refs: Vec<(&str, &str)> = cards.iter().map(|(q, a)| (q.as_str(), a.as_str())).collect();
    let mut state = state_with(&refs);

    go(&mut state, Motion::First);
    for _ in 0..cards.len() - 1 {
        go(&mut state, Motion::Next);
    }
    let walked = state.current_card();

    go(&mut state, Motion::Last);
    assert_eq!(walked, state.current_card());
    assert_eq!(state.question().text(), "q5");
}

#[test]
fn test_prev_walks_back_to_first() {
    let mut state = state_with(&[("1", ""), ("2", ""), ("3", "")]);
    go(&mut state, Motion::Last);
    go(&mut state, Motion::Prev);
    go(&mut state, Motion::Prev);
    go(&mut state, Motion::Prev);
    assert_eq!(state.current_card(), Some(1));
    assert_eq!(state.question().text(), "1");
}

#[test]
fn test_review_mode_hides_until_toggled() {
    let mut state = state_with(&[("capital of France?", "Paris")]);
    dispatch(&mut state, Command::SetReviewMode(true)).unwrap();

    go(&mut state, Motion::First);
    assert_eq!(state.question().text(), "capital of France?");
    assert!(state.answer().is_empty());
    assert_eq!(state.answer_visibility(), AnswerVisibility::Hidden);

    dispatch(&mut state, Command::ToggleAnswer).unwrap();
    assert_eq!(state.answer().text(), "Paris");
    assert_eq!(state.message().unwrap().text, "Answer displayed.");

    dispatch(&mut state, Command::ToggleAnswer).unwrap();
    assert!(state.answer().is_empty());
    assert_eq!(state.message().unwrap().text, "Answer hidden.");
}

#[test]
fn test_toggle_shows_stored_answer_not_edited_pane() {
    let mut state = state_with(&[("q", "stored")]);
    go(&mut state, Motion::First);
    state.answer_mut().insert_str(" typed");

    dispatch(&mut state, Command::ToggleAnswer).unwrap();
    dispatch(&mut state, Command::ToggleAnswer).unwrap();
    assert_eq!(state.answer().text(), "stored");
}

#[test]
fn test_review_mode_applies_to_next_load_only() {
    let mut state = state_with(&[("q1", "a1"), ("q2", "a2")]);
    go(&mut state, Motion::First);
    assert_eq!(state.answer().text(), "a1");

    dispatch(&mut state, Command::ToggleReviewMode).unwrap();
    assert!(state.review_mode());
    // the loaded card keeps its answer on screen
    assert_eq!(state.answer().text(), "a1");

    go(&mut state, Motion::Next);
    assert!(state.answer().is_empty());
}

#[test]
fn test_review_mode_does_not_touch_store() {
    let mut state = state_with(&[("q1", "a1"), ("q2", "a2")]);
    let before: Vec<_> = (1..=2).map(|id| state.store().get(id).unwrap()).collect();

    dispatch(&mut state, Command::SetReviewMode(true)).unwrap();
    go(&mut state, Motion::First);
    dispatch(&mut state, Command::ToggleAnswer).unwrap();
    dispatch(&mut state, Command::SetReviewMode(false)).unwrap();
    go(&mut state, Motion::Next);

    let after: Vec<_> = (1..=2).map(|id| state.store().get(id).unwrap()).collect();
    assert_eq!(before, after);
    assert_eq!(state.store().count().unwrap(), 2);
}

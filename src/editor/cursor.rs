//! Navigation cursor over the stored cards.
//!
//! The cursor tracks which card is loaded (if any) and whether its answer is
//! currently on screen. Movement asks the [`CardStore`] for the target id and
//! only moves when one exists; a miss leaves the cursor where it was.
//!
//! # Example
//!
//! ```
//! use cardquill::editor::cursor::{Motion, NavigationCursor, Position};
//! use cardquill::editor::pane::TextPane;
//! use cardquill::store::CardStore;
//!
//! let store = CardStore::open_in_memory().unwrap();
//! let mut question = TextPane::new();
//! let mut answer = TextPane::new();
//! let mut cursor = NavigationCursor::new();
//!
//! // Nothing stored yet: first() stays on no card
//! cursor.navigate(&store, Motion::First, &mut question, &mut answer).unwrap();
//! assert_eq!(cursor.position(), Position::NoCard);
//!
//! store.insert("A?", "a").unwrap();
//! store.insert("B?", "b").unwrap();
//! cursor.navigate(&store, Motion::First, &mut question, &mut answer).unwrap();
//! cursor.navigate(&store, Motion::Next, &mut question, &mut answer).unwrap();
//! cursor.navigate(&store, Motion::Next, &mut question, &mut answer).unwrap();
//! assert_eq!(cursor.position(), Position::Card(2));
//! ```

use log::debug;

use super::pane::EditorSurface;
use crate::error::Result;
use crate::store::{CardId, CardStore};

/// Which card is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    NoCard,
    Card(CardId),
}

impl Position {
    pub fn id(self) -> Option<CardId> {
        match self {
            Position::NoCard => None,
            Position::Card(id) => Some(id),
        }
    }
}

/// Whether the answer pane currently shows the stored answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerVisibility {
    #[default]
    Hidden,
    Shown,
}

/// How answers are presented when a card is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Answers are shown together with the question.
    #[default]
    Full,
    /// Answers stay hidden until explicitly toggled.
    Review,
}

/// Direction of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    First,
    Prev,
    Next,
    Last,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationCursor {
    position: Position,
    visibility: AnswerVisibility,
    view_mode: ViewMode,
}

impl NavigationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn current_id(&self) -> Option<CardId> {
        self.position.id()
    }

    pub fn visibility(&self) -> AnswerVisibility {
        self.visibility
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn is_review(&self) -> bool {
        self.view_mode == ViewMode::Review
    }

    /// Changes how later loads present the answer. The loaded card and the
    /// store are left untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    /// Forgets the loaded card, e.g. after switching database files.
    pub fn reset(&mut self) {
        self.position = Position::NoCard;
        self.visibility = AnswerVisibility::Hidden;
    }

    /// Resolves the id a motion would land on without moving.
    ///
    /// `Prev` and `Next` need a loaded card to be relative to.
    pub fn target(&self, store: &CardStore, motion: Motion) -> Result<Option<CardId>> {
        match (motion, self.position) {
            (Motion::First, _) => store.min_id(),
            (Motion::Last, _) => store.max_id(),
            (Motion::Next, Position::Card(id)) => store.next_id_after(id),
            (Motion::Prev, Position::Card(id)) => store.prev_id_before(id),
            (_, Position::NoCard) => Ok(None),
        }
    }

    /// Moves in the given direction and loads the card into the panes.
    ///
    /// Returns the id of the newly loaded card, or `None` when there was
    /// nothing to move to (the cursor and panes are left unchanged).
    pub fn navigate<Q, A>(
        &mut self,
        store: &CardStore,
        motion: Motion,
        question: &mut Q,
        answer: &mut A,
    ) -> Result<Option<CardId>>
    where
        Q: EditorSurface + ?Sized,
        A: EditorSurface + ?Sized,
    {
        let Some(id) = self.target(store, motion)? else {
            debug!("{:?} from {:?}: no card", motion, self.position);
            return Ok(None);
        };

        match self.load(store, id, question, answer) {
            Ok(()) => Ok(Some(id)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Loads card `id` into the panes and makes it current.
    ///
    /// In review mode the answer pane is cleared; otherwise it receives the
    /// stored answer.
    pub fn load<Q, A>(
        &mut self,
        store: &CardStore,
        id: CardId,
        question: &mut Q,
        answer: &mut A,
    ) -> Result<()>
    where
        Q: EditorSurface + ?Sized,
        A: EditorSurface + ?Sized,
    {
        let card = store.get(id)?;
        question.set_rich_text(&card.question);
        match self.view_mode {
            ViewMode::Review => {
                answer.clear();
                self.visibility = AnswerVisibility::Hidden;
            }
            ViewMode::Full => {
                answer.set_rich_text(&card.answer);
                self.visibility = AnswerVisibility::Shown;
            }
        }
        self.position = Position::Card(id);
        Ok(())
    }

    /// Flips answer visibility.
    ///
    /// Showing re-reads the answer from the store for the loaded card;
    /// hiding just clears the pane. With no card loaded the flag still flips
    /// but nothing is fetched.
    pub fn toggle_answer<A>(
        &mut self,
        store: &CardStore,
        answer: &mut A,
    ) -> Result<AnswerVisibility>
    where
        A: EditorSurface + ?Sized,
    {
        self.visibility = match self.visibility {
            AnswerVisibility::Shown => {
                answer.clear();
                AnswerVisibility::Hidden
            }
            AnswerVisibility::Hidden => {
                if let Position::Card(id) = self.position {
                    answer.set_rich_text(&store.answer(id)?);
                }
                AnswerVisibility::Shown
            }
        };
        Ok(self.visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::pane::TextPane;

    fn seeded(n: usize) -> CardStore {
        let store = CardStore::open_in_memory().unwrap();
        for i in 1..=n {
            store
                .insert(&format!("question {}", i), &format!("answer {}", i))
                .unwrap();
        }
        store
    }

    #[test]
    fn test_prev_and_next_without_card_are_noops() {
        let store = seeded(3);
        let mut cursor = NavigationCursor::new();
        let (mut q, mut a) = (TextPane::new(), TextPane::new());

        assert_eq!(cursor.navigate(&store, Motion::Next, &mut q, &mut a).unwrap(), None);
        assert_eq!(cursor.navigate(&store, Motion::Prev, &mut q, &mut a).unwrap(), None);
        assert_eq!(cursor.position(), Position::NoCard);
        assert!(q.is_empty());
    }

    #[test]
    fn test_full_mode_load_shows_answer() {
        let store = seeded(2);
        let mut cursor = NavigationCursor::new();
        let (mut q, mut a) = (TextPane::new(), TextPane::new());

        cursor.navigate(&store, Motion::Last, &mut q, &mut a).unwrap();
        assert_eq!(cursor.position(), Position::Card(2));
        assert_eq!(q.text(), "question 2");
        assert_eq!(a.text(), "answer 2");
        assert_eq!(cursor.visibility(), AnswerVisibility::Shown);
    }

    #[test]
    fn test_review_mode_load_hides_answer() {
        let store = seeded(2);
        let mut cursor = NavigationCursor::new();
        cursor.set_view_mode(ViewMode::Review);
        let (mut q, mut a) = (TextPane::new(), TextPane::new());
        a.set_rich_text("left over");

        cursor.navigate(&store, Motion::First, &mut q, &mut a).unwrap();
        assert_eq!(q.text(), "question 1");
        assert!(a.is_empty());
        assert_eq!(cursor.visibility(), AnswerVisibility::Hidden);
    }

    #[test]
    fn test_toggle_answer_refetches_and_clears() {
        let store = seeded(1);
        let mut cursor = NavigationCursor::new();
        cursor.set_view_mode(ViewMode::Review);
        let (mut q, mut a) = (TextPane::new(), TextPane::new());
        cursor.navigate(&store, Motion::First, &mut q, &mut a).unwrap();

        assert_eq!(cursor.toggle_answer(&store, &mut a).unwrap(), AnswerVisibility::Shown);
        assert_eq!(a.text(), "answer 1");

        assert_eq!(cursor.toggle_answer(&store, &mut a).unwrap(), AnswerVisibility::Hidden);
        assert!(a.is_empty());
    }

    #[test]
    fn test_toggle_answer_without_card_flips_flag_only() {
        let store = seeded(1);
        let mut cursor = NavigationCursor::new();
        let mut a = TextPane::new();

        assert_eq!(cursor.toggle_answer(&store, &mut a).unwrap(), AnswerVisibility::Shown);
        assert!(a.is_empty());
    }

    #[test]
    fn test_reset_forgets_card() {
        let store = seeded(1);
        let mut cursor = NavigationCursor::new();
        let (mut q, mut a) = (TextPane::new(), TextPane::new());
        cursor.navigate(&store, Motion::First, &mut q, &mut a).unwrap();
        cursor.reset();
        assert_eq!(cursor.current_id(), None);
    }
}

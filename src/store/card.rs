//! The card record.

/// Identity of a stored card, assigned by the store on insert.
pub type CardId = i64;

/// One question/answer record.
///
/// Both sides hold markup text and may embed `<img src="..." />`
/// references to image files saved next to the database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub question: String,
    pub answer: String,
}

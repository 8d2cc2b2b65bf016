use crate::model::letter::Letter;

pub const EMPTY_LETTERS: &str = "No letters yet — write one above.";

/// Maps a position in the newest-first list back to the storage index
/// (oldest first). `None` when `display_index` is out of range.
pub fn storage_index(len: usize, display_index: usize) -> Option<usize> {
    if display_index < len {
        Some(len - 1 - display_index)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterCard<'a> {
    /// Position in the displayed list; deletion is addressed by it.
    pub display_index: usize,
    pub title: &'a str,
    pub body: &'a str,
    pub created: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LettersView<'a> {
    Empty { message: &'static str },
    Cards(Vec<LetterCard<'a>>),
}

impl<'a> LettersView<'a> {
    /// Cards newest first.
    pub fn project(letters: &'a [Letter]) -> Self {
        if letters.is_empty() {
            return LettersView::Empty {
                message: EMPTY_LETTERS,
            };
        }
        LettersView::Cards(
            letters
                .iter()
                .rev()
                .enumerate()
                .map(|(display_index, letter)| LetterCard {
                    display_index,
                    title: &letter.title,
                    body: &letter.body,
                    created: letter.created,
                })
                .collect(),
        )
    }
}

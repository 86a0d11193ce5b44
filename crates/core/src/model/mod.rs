mod entry;
mod session;
mod vocabulary;

pub use entry::{Difficulty, EntryError, VocabularyEntry, normalize_answer};
pub use session::{Feedback, Outcome, SessionState};
pub use vocabulary::{Vocabulary, VocabularyError};

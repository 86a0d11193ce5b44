/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    /// 1-based position of the current word.
    pub position: usize,
    pub total: usize,
    pub answered: u32,
    pub is_complete: bool,
}

impl SessionProgress {
    /// True when the current word is the last one in the list.
    #[must_use]
    pub fn is_last_word(&self) -> bool {
        self.position >= self.total
    }
}

/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn new(total: usize, answered: usize) -> Self {
        Self {
            total,
            answered,
            remaining: total.saturating_sub(answered),
            is_complete: answered >= total,
        }
    }
}

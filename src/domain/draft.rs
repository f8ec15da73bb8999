//! In-progress form input

/// Title and description typed into the form but not yet submitted.
/// Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.description.is_empty()
    }
}

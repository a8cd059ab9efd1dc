//! Output actions of the input engine

/// What the consumer should do with its committed text after an activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do (state change only)
    None,
    /// Append text to the committed text
    Commit(String),
    /// Delete one unit before the cursor
    DeleteBackward,
    /// Clear the committed text entirely
    ClearAll,
}

impl Action {
    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    /// The committed text, when the action carries one
    pub fn committed_text(&self) -> Option<&str> {
        match self {
            Action::Commit(text) => Some(text),
            _ => None,
        }
    }
}

/// Errors surfaced to the player. Kept deliberately coarse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

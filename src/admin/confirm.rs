//! Yes/no gate in front of destructive admin actions.

pub const DELETE_ITEM_PROMPT: &str = "Are you sure you want to delete this item?";

pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

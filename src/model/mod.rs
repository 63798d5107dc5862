pub mod board;
pub mod card;

/// Entities looked up by their display name.
pub trait Named {
    fn name(&self) -> &str;
}

//! Modal user prompts and the messages shown through them.

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields!";
pub const FOOD_ADDED: &str = "Food added successfully!";
pub const FOOD_UPDATED: &str = "Food updated successfully!";
pub const FOOD_DELETED: &str = "Food deleted successfully!";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this food?";

/// Blocking prompts provided by the host.
pub trait Prompt {
    /// Show a message and wait for acknowledgement.
    fn alert(&mut self, message: &str);

    /// Ask a yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> bool;
}

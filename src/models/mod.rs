pub mod identity;
pub mod todo_entry;
pub mod work_entry;

pub use identity::Identity;
pub use todo_entry::TodoEntry;
pub use work_entry::WorkEntry;

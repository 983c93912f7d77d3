pub mod calendar;
pub mod config;
pub mod confirm;
pub mod dashboard;
pub mod log;
pub mod overview;
pub mod pagination;
pub mod range;
pub mod todo;
pub mod work;

pub use confirm::{Confirmer, DeleteOutcome, TerminalConfirm};
pub use dashboard::Dashboard;
pub use range::DateRange;
pub use todo::TodoManager;
pub use work::WorkManager;

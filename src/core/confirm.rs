use crate::ui::messages::warning;
use std::io::{self, BufRead, Write};

/// Asks the user to approve an irreversible action.
pub trait Confirmer {
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

/// Closures work as confirmers; handy for scripted flows and tests.
impl<F> Confirmer for F
where
    F: FnMut(&str, &str) -> bool,
{
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self(title, message)
    }
}

/// Yes/no prompt on the terminal. Anything but `y`/`yes` cancels.
pub struct TerminalConfirm;

impl Confirmer for TerminalConfirm {
    fn confirm(&mut self, title: &str, message: &str) -> bool {
        warning(format!("{title}: {message}"));
        print!("Confirm [y/N]: ");
        let _ = io::stdout().flush();

        let mut s = String::new();
        if io::stdin().lock().read_line(&mut s).is_ok() {
            matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

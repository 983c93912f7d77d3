use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for dailywork
/// Personal work log and todo tracker backed by SQLite
#[derive(Parser)]
#[command(
    name = "dailywork",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal daily work log with todos, calendar view and PDF/XLSX reports",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Create an account and sign in
    Signup {
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long = "confirm", help = "Repeat the password")]
        confirm: String,
    },

    /// Sign in with an existing account
    Login {
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Add, edit, delete or list work entries
    Work {
        #[command(subcommand)]
        action: WorkAction,
    },

    /// Add, edit, toggle, delete or list todos
    Todo {
        #[command(subcommand)]
        action: TodoAction,
    },

    /// Show works and todos of one day (default: today)
    Day {
        /// Date (YYYY-MM-DD)
        date: Option<String>,
    },

    /// Counters: works this month, pending todos, totals
    Overview,

    /// Export the work history as a report
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, value_name = "DIR", help = "Output directory (default: export_dir)")]
        dir: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing report without asking")]
        force: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkAction {
    /// Log the work of a day (one entry per date)
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        description: String,
    },

    /// Change date and description of an entry
    Edit {
        /// Entry id or a unique prefix of it
        id: String,
        date: String,
        description: String,
    },

    /// Delete an entry (asks for confirmation)
    Del {
        id: String,
    },

    /// Work history, newest first, 8 per page
    List {
        #[command(flatten)]
        range: RangeArgs,

        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

#[derive(Subcommand)]
pub enum TodoAction {
    /// Add a reminder
    Add {
        /// Date (YYYY-MM-DD)
        date: String,
        /// Time (HH:MM)
        time: String,
        reason: String,
    },

    /// Change date, time and reason of a todo
    Edit {
        id: String,
        date: String,
        time: String,
        reason: String,
    },

    /// Flip a todo between pending and completed
    Toggle {
        id: String,
    },

    /// Delete a todo (asks for confirmation)
    Del {
        id: String,
    },

    /// Pending first, then completed; 8 per page
    List {
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
}

/// Date window shared by `work list` and `export`.
/// Without any flag: first day of the current month up to today.
#[derive(Args, Debug, Clone, Default)]
pub struct RangeArgs {
    #[arg(long, value_name = "YYYY-MM-DD", conflicts_with_all = ["period", "all"])]
    pub from: Option<String>,

    #[arg(long, value_name = "YYYY-MM-DD", conflicts_with_all = ["period", "all"])]
    pub to: Option<String>,

    #[arg(
        long,
        short,
        conflicts_with = "all",
        help = "Year, month, day or a custom range (YYYY[-MM[-DD]][:YYYY[-MM[-DD]]])"
    )]
    pub period: Option<String>,

    #[arg(long, help = "Everything up to today")]
    pub all: bool,
}

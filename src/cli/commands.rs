use crate::model::{Priority, TaskRef};
use crate::selection::SortKey;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "studyplan")]
#[command(
    author,
    version,
    about = "A personal study planner: track assignments, see what's next, get reminded"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .studyplan.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the JSON data file (overrides config)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long, global = true, env = "STUDYPLAN_TODAY")]
    pub today: Option<NaiveDate>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a planner in the current directory
    Init {
        /// Your name, used in greetings and reminder emails
        #[arg(long)]
        name: Option<String>,

        /// Zone used to decide what "today" is: local, utc or an offset like -05:00
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Set your name
    Name {
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add an assignment
    #[command(visible_alias = "a")]
    Add {
        /// Assignment or test name
        name: String,

        /// Priority level
        #[arg(short, long, value_enum, default_value = "low")]
        priority: PriorityArg,

        /// Due date (YYYY-MM-DD). Defaults to today
        #[arg(short, long, conflicts_with = "in_days")]
        due: Option<NaiveDate>,

        /// Due this many days from today (negative for overdue)
        #[arg(long = "in", allow_negative_numbers = true)]
        in_days: Option<i64>,

        /// Email for a reminder the day before it is due
        #[arg(short, long)]
        email: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List assignments
    #[command(visible_alias = "ls")]
    List {
        /// Sort order
        #[arg(short, long, value_enum, default_value = "insertion")]
        sort: SortArg,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one assignment
    Show {
        /// Task number (3) or id (#7)
        task: TaskRef,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change an assignment
    Edit {
        /// Task number (3) or id (#7)
        task: TaskRef,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New priority
        #[arg(short, long, value_enum)]
        priority: Option<PriorityArg>,

        /// New due date (YYYY-MM-DD)
        #[arg(short, long)]
        due: Option<NaiveDate>,

        /// New reminder email (use empty string to clear)
        #[arg(short, long)]
        email: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove an assignment
    #[command(visible_alias = "rm")]
    Remove {
        /// Task number (3) or id (#7)
        task: TaskRef,

        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark an assignment as studied
    Done {
        /// Task number (3) or id (#7)
        task: TaskRef,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Recommend what to study next
    Next {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show counts and progress
    Summary {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print calendar events as JSON
    Calendar,

    /// Remove every assignment
    Clear {
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Email reminders for assignments due tomorrow
    Remind {
        /// Show what would be sent without sending
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortArg {
    /// Order added
    Insertion,
    /// Highest priority first
    Priority,
    /// Earliest due date first
    Due,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Insertion => SortKey::Insertion,
            SortArg::Priority => SortKey::PriorityDesc,
            SortArg::Due => SortKey::DueDateAsc,
        }
    }
}

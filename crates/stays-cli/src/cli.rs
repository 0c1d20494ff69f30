//! Clap derive structures for the `stays` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// stays -- hotel search and booking from the command line
#[derive(Debug, Parser)]
#[command(
    name = "stays",
    version,
    about = "Search hotels, manage bookings, and administer inventory",
    long_about = "A CLI for the Stays hotel booking service.\n\n\
        Travelers can search inventory, price and create bookings, and\n\
        cancel them. Administrators get full booking and inventory control.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Service profile to use
    #[arg(long, short = 'p', env = "STAYS_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Booking service base URL (overrides profile)
    #[arg(long, short = 's', env = "STAYS_SERVICE", global = true)]
    pub service: Option<String>,

    /// Account email (overrides profile)
    #[arg(long, env = "STAYS_EMAIL", global = true)]
    pub email: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "STAYS_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "STAYS_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds
    #[arg(long, env = "STAYS_TIMEOUT", default_value = "10", global = true)]
    pub timeout: u64,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search hotel inventory
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Inspect hotels
    #[command(alias = "h")]
    Hotels(HotelsArgs),

    /// Create and manage your bookings
    #[command(alias = "b")]
    Bookings(BookingsArgs),

    /// Administrator operations
    Admin(AdminArgs),

    /// Log in and validate the session cookie
    Login,

    /// End the current session
    Logout,

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SEARCH
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A hotel matches when ANY supplied field matches (inclusive search).
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Exact hotel name
    #[arg(long)]
    pub name: Option<String>,

    /// Exact city
    #[arg(long)]
    pub city: Option<String>,

    /// Exact country
    #[arg(long)]
    pub country: Option<String>,

    /// Star rating (numeric, e.g. "4")
    #[arg(long)]
    pub stars: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HOTELS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HotelsArgs {
    #[command(subcommand)]
    pub command: HotelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum HotelsCommand {
    /// Show a hotel's full details
    Show {
        /// Hotel ID
        id: String,
    },

    /// Price a prospective stay without booking it
    Quote {
        /// Hotel ID
        id: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long, required = true)]
        check_in: chrono::NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long, required = true)]
        check_out: chrono::NaiveDate,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  BOOKINGS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// Book a hotel for a date range
    Book {
        /// Hotel ID
        hotel: String,

        /// Check-in date (YYYY-MM-DD)
        #[arg(long, required = true)]
        check_in: chrono::NaiveDate,

        /// Check-out date (YYYY-MM-DD)
        #[arg(long, required = true)]
        check_out: chrono::NaiveDate,

        /// Number of adults
        #[arg(long, default_value = "1")]
        adults: u8,

        /// Number of children
        #[arg(long, default_value = "0")]
        children: u8,
    },

    /// List your bookings
    #[command(alias = "ls")]
    List,

    /// Cancel one of your bookings
    Cancel {
        /// Booking ID or reference prefix
        booking: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  ADMIN
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Manage hotel inventory
    Hotels(AdminHotelsArgs),

    /// Manage all bookings
    Bookings(AdminBookingsArgs),
}

#[derive(Debug, Args)]
pub struct AdminHotelsArgs {
    #[command(subcommand)]
    pub command: AdminHotelsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminHotelsCommand {
    /// List all hotels
    #[command(alias = "ls")]
    List,

    /// Add a hotel from a JSON file
    Add {
        /// JSON file with the hotel record
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Update a hotel from a JSON file
    Update {
        /// Hotel ID or exact name
        hotel: String,

        /// JSON file with the full hotel record
        #[arg(long, short = 'F', required = true)]
        from_file: PathBuf,
    },

    /// Delete a hotel
    Delete {
        /// Hotel ID or exact name
        hotel: String,
    },
}

#[derive(Debug, Args)]
pub struct AdminBookingsArgs {
    #[command(subcommand)]
    pub command: AdminBookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AdminBookingsCommand {
    /// List all bookings with their hotel names
    #[command(alias = "ls")]
    List,

    /// Override a booking's status
    SetStatus {
        /// Booking ID or reference prefix
        booking: String,

        /// New status
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Delete a booking record
    Delete {
        /// Booking ID or reference prefix
        booking: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StatusArg {
    Pending,
    Confirmed,
    Cancelled,
}

impl From<StatusArg> for stays_core::BookingStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Pending => Self::Pending,
            StatusArg::Confirmed => Self::Confirmed,
            StatusArg::Cancelled => Self::Cancelled,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },

    /// Store a password in the system keyring
    SetPassword {
        /// Profile name
        #[arg(long)]
        profile: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}

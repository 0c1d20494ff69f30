//! Command dispatch: bridges CLI args -> core operations -> output formatting.

pub mod admin;
pub mod bookings;
pub mod config_cmd;
pub mod hotels;
pub mod search;
pub mod session;
pub mod util;

use stays_core::Storefront;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a storefront-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    storefront: &Storefront,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Search(args) => search::handle(storefront, args, global).await,
        Command::Hotels(args) => hotels::handle(storefront, args, global).await,
        Command::Bookings(args) => bookings::handle(storefront, args, global).await,
        Command::Login => session::login(storefront, global).await,
        Command::Logout => session::logout(storefront, global).await,
        // Config, Completions, and Admin are handled before dispatch
        Command::Config(_) | Command::Completions(_) | Command::Admin(_) => unreachable!(),
    }
}

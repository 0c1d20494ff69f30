//! Administrator command handlers.
//!
//! Admin commands log in with the configured credentials, validate the
//! admin session, and operate on local snapshots that the console
//! refreshes after every mutation.

use tabled::Tabled;

use stays_core::{
    AdminConsole, AuthCredentials, BookingOverview, CoreError, HotelDraft, ServiceConfig,
};

use crate::cli::{
    AdminArgs, AdminBookingsArgs, AdminBookingsCommand, AdminCommand, AdminHotelsArgs,
    AdminHotelsCommand, GlobalOpts,
};
use crate::error::CliError;
use crate::output;

use super::search::HotelRow;
use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct OverviewRow {
    #[tabled(rename = "Ref")]
    reference: String,
    #[tabled(rename = "Hotel")]
    hotel: String,
    #[tabled(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Check-out")]
    check_out: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&BookingOverview> for OverviewRow {
    fn from(row: &BookingOverview) -> Self {
        Self {
            reference: row.booking.id.short().to_owned(),
            hotel: row.hotel_name.clone(),
            check_in: row.booking.check_in.to_string(),
            check_out: row.booking.check_out.to_string(),
            total: format!("{:.2}", row.booking.total_cost),
            status: row.booking.status.to_string(),
        }
    }
}

// ── Console setup ───────────────────────────────────────────────────

/// Build an admin console: log in on a fresh cookie jar, then validate
/// the admin session before any operation runs.
async fn connect(config: ServiceConfig) -> Result<AdminConsole, CliError> {
    let AuthCredentials::Credentials {
        ref email,
        ref password,
    } = config.auth
    else {
        return Err(CliError::NoCredentials {
            profile: "current".into(),
        });
    };

    let client = stays_api::ApiClient::new(config.base_url.as_str(), &config.transport())
        .map_err(CoreError::from)?;
    client.login(email, password).await.map_err(CoreError::from)?;

    let console = AdminConsole::with_client(client);
    console.verify_session().await?;
    Ok(console)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    config: ServiceConfig,
    args: AdminArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let mut console = connect(config).await?;
    console.refresh().await?;

    match args.command {
        AdminCommand::Hotels(args) => handle_hotels(&mut console, args, global).await,
        AdminCommand::Bookings(args) => handle_bookings(&mut console, args, global).await,
    }
}

async fn handle_hotels(
    console: &mut AdminConsole,
    args: AdminHotelsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let printer = output::Printer::new(global);
    match args.command {
        AdminHotelsCommand::List => {
            printer.list(console.hotels(), |h| HotelRow::from(h), |h| h.id.to_string());
            Ok(())
        }

        AdminHotelsCommand::Add { from_file } => {
            let draft: HotelDraft = util::read_json(&from_file)?;
            let id = console.create_hotel(&draft).await?;
            printer.status(&format!("Hotel created: {id}"));
            Ok(())
        }

        AdminHotelsCommand::Update { hotel, from_file } => {
            let draft: HotelDraft = util::read_json(&from_file)?;
            let id = console.find_hotel(&hotel)?.id.clone();
            console.update_hotel(&id, &draft).await?;
            printer.status(&format!("Hotel updated: {id}"));
            Ok(())
        }

        AdminHotelsCommand::Delete { hotel } => {
            let pending = console.request_delete_hotel(&hotel)?;
            if !util::confirm(
                &format!("Delete {}? Bookings will keep a dangling reference.", pending.describe()),
                global,
            )? {
                return Ok(());
            }
            console.execute_delete(pending).await?;
            printer.status("Hotel deleted");
            Ok(())
        }
    }
}

async fn handle_bookings(
    console: &mut AdminConsole,
    args: AdminBookingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let printer = output::Printer::new(global);
    match args.command {
        AdminBookingsCommand::List => {
            let rows = console.overview();
            printer.list(&rows, |r| OverviewRow::from(r), |r| r.booking.id.to_string());
            Ok(())
        }

        AdminBookingsCommand::SetStatus { booking, status } => {
            let id = console.find_booking(&booking)?.id.clone();
            console.set_status(&id, status.into()).await?;
            printer.status(&format!(
                "Booking {} set to {}",
                id.short(),
                stays_core::BookingStatus::from(status)
            ));
            Ok(())
        }

        AdminBookingsCommand::Delete { booking } => {
            let pending = console.request_delete_booking(&booking)?;
            if !util::confirm(
                &format!("Delete {}? This removes the record entirely.", pending.describe()),
                global,
            )? {
                return Ok(());
            }
            console.execute_delete(pending).await?;
            printer.status("Booking deleted");
            Ok(())
        }
    }
}

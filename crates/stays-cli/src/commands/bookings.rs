//! Traveler booking handlers.

use tabled::Tabled;

use stays_core::lifecycle::BookingRequest;
use stays_core::{Booking, EntityId, Storefront};

use crate::cli::{BookingsArgs, BookingsCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BookingRow {
    #[tabled(rename = "Ref")]
    reference: String,
    #[tabled(rename = "Hotel")]
    hotel: String,
    #[tabled(rename = "Check-in")]
    check_in: String,
    #[tabled(rename = "Check-out")]
    check_out: String,
    #[tabled(rename = "Guests")]
    guests: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl From<&Booking> for BookingRow {
    fn from(b: &Booking) -> Self {
        Self {
            reference: b.id.short().to_owned(),
            hotel: b.hotel_id.to_string(),
            check_in: b.check_in.to_string(),
            check_out: b.check_out.to_string(),
            guests: format!("{}+{}", b.adult_count, b.child_count),
            total: format!("{:.2}", b.total_cost),
            status: b.status.to_string(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    storefront: &Storefront,
    args: BookingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    // Every booking operation needs an authenticated session.
    storefront.login().await?;

    let printer = output::Printer::new(global);
    match args.command {
        BookingsCommand::Book {
            hotel,
            check_in,
            check_out,
            adults,
            children,
        } => {
            let request = BookingRequest {
                hotel_id: EntityId::from(hotel),
                check_in,
                check_out,
                adult_count: adults,
                child_count: children,
            };
            let booking = storefront.book(&request).await?;
            printer.status(&format!(
                "Booked. Reference {} / total {:.2}",
                booking.id.short(),
                booking.total_cost
            ));
            Ok(())
        }

        BookingsCommand::List => {
            let bookings = storefront.my_bookings().await?;
            printer.list(&bookings, |b| BookingRow::from(b), |b| b.id.to_string());
            Ok(())
        }

        BookingsCommand::Cancel { booking } => {
            let target = storefront.find_booking(&booking).await?;
            if !util::confirm(
                &format!(
                    "Cancel booking {} ({} to {})?",
                    target.id.short(),
                    target.check_in,
                    target.check_out
                ),
                global,
            )? {
                return Ok(());
            }
            let cancelled = storefront.cancel(&target).await?;
            printer.status(&format!("Booking {} cancelled", cancelled.id.short()));
            Ok(())
        }
    }
}

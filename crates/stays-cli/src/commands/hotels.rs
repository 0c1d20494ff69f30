//! Hotel detail and quoting handlers.

use stays_core::lifecycle::BookingRequest;
use stays_core::{EntityId, Hotel, Storefront, pricing};

use crate::cli::{GlobalOpts, HotelsArgs, HotelsCommand};
use crate::error::CliError;
use crate::output;

pub async fn handle(
    storefront: &Storefront,
    args: HotelsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HotelsCommand::Show { id } => {
            let hotel = storefront.hotel(&EntityId::from(id)).await?;
            output::Printer::new(global).single(&hotel, detail, |h| h.id.to_string());
            Ok(())
        }

        HotelsCommand::Quote {
            id,
            check_in,
            check_out,
        } => {
            let request = BookingRequest {
                hotel_id: EntityId::from(id),
                check_in,
                check_out,
                adult_count: 1,
                child_count: 0,
            };
            let total = storefront.quote(&request).await?;
            let nights = pricing::nights_between(check_in, check_out);
            if !global.quiet {
                println!("{nights} night(s), total {total:.2}");
            }
            Ok(())
        }
    }
}

fn detail(h: &Hotel) -> String {
    let facilities: Vec<String> = h.facilities.iter().map(ToString::to_string).collect();
    format!(
        "{} ({})\n\
         {}, {}\n\
         Type:       {}\n\
         Stars:      {}\n\
         Per night:  {:.2}\n\
         Capacity:   {} adults, {} children\n\
         Facilities: {}\n\n\
         {}",
        h.name,
        h.id,
        h.city,
        h.country,
        h.hotel_type,
        h.star_rating,
        h.price_per_night,
        h.adult_count,
        h.child_count,
        if facilities.is_empty() {
            "none listed".to_owned()
        } else {
            facilities.join(", ")
        },
        h.description,
    )
}

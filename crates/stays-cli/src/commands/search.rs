//! Inventory search handler.

use tabled::Tabled;

use stays_core::{Hotel, SearchCriteria, Storefront};

use crate::cli::{GlobalOpts, SearchArgs};
use crate::error::CliError;
use crate::output;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
pub(crate) struct HotelRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Country")]
    country: String,
    #[tabled(rename = "Stars")]
    stars: String,
    #[tabled(rename = "Per Night")]
    price: String,
}

impl From<&Hotel> for HotelRow {
    fn from(h: &Hotel) -> Self {
        Self {
            id: h.id.to_string(),
            name: h.name.clone(),
            city: h.city.clone(),
            country: h.country.clone(),
            stars: "\u{2605}".repeat(usize::from(h.star_rating)),
            price: format!("{:.2}", h.price_per_night),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    storefront: &Storefront,
    args: SearchArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let criteria = SearchCriteria {
        name: args.name,
        city: args.city,
        country: args.country,
        star_rating: args.stars,
    };

    let hotels = storefront.search(&criteria).await?;
    output::Printer::new(global).list(&hotels, |h| HotelRow::from(h), |h| h.id.to_string());
    Ok(())
}

// ── Inventory search engine ──
//
// Stateless filter over a listing collection. The matching policy is a
// logical OR across the supplied criteria fields: a listing matching on
// any one supplied field is included even if it fails the others. This
// favors recall over precision and is visible product behavior, not an
// accident -- do not tighten it to a conjunction.

use crate::model::{Hotel, SearchCriteria};

/// True when the listing satisfies at least one supplied criteria field.
///
/// Name, city, and country use exact equality. Star rating is compared
/// loosely: the free-text field is parsed as a number and matched
/// against the listing's rating, mirroring the storefront's coercive
/// comparison.
pub fn matches(hotel: &Hotel, criteria: &SearchCriteria) -> bool {
    if criteria.is_empty() {
        return true;
    }

    criteria.name().is_some_and(|n| hotel.name == n)
        || criteria.city().is_some_and(|c| hotel.city == c)
        || criteria.country().is_some_and(|c| hotel.country == c)
        || criteria
            .star_rating()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .is_some_and(|wanted| (f64::from(hotel.star_rating) - wanted).abs() < f64::EPSILON)
}

/// Filter a listing collection against criteria, preserving order.
///
/// Pure function of its inputs: no memory of previous results, a fresh
/// sequence on every call. Empty criteria return the input unchanged.
pub fn filter_listings(listings: Vec<Hotel>, criteria: &SearchCriteria) -> Vec<Hotel> {
    if criteria.is_empty() {
        return listings;
    }
    listings
        .into_iter()
        .filter(|hotel| matches(hotel, criteria))
        .collect()
}

// ── Domain model ──
//
// Canonical representations of the booking domain. The wire DTOs in
// stays-api are converted into these types at the crate boundary;
// consumers (CLI) only ever see this module.

pub mod booking;
pub mod entity_id;
pub mod hotel;
pub mod search;

pub use booking::{Booking, BookingStatus};
pub use entity_id::EntityId;
pub use hotel::{Facility, Hotel};
pub use search::SearchCriteria;

// stays-core: Decision logic between stays-api and consumers (CLI).
//
// The four engines live here: inventory search, cost calculation, the
// booking lifecycle rules, and the admin aggregation over independently
// fetched hotel and booking collections.

pub mod admin;
pub mod config;
pub mod convert;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod pricing;
pub mod search;
pub mod session;
pub mod storefront;

// ── Primary re-exports ──────────────────────────────────────────────
pub use admin::{AdminConsole, BookingOverview, HotelDraft, PendingDelete, UNKNOWN_HOTEL};
pub use config::{AuthCredentials, ServiceConfig};
pub use error::CoreError;
pub use lifecycle::BookingRequest;
pub use session::{SessionCache, SessionState};
pub use storefront::Storefront;

// Re-export model types at the crate root for ergonomics.
pub use model::{Booking, BookingStatus, EntityId, Facility, Hotel, SearchCriteria};

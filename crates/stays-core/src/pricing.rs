// ── Cost calculator ──
//
// Pure, deterministic derivation of a reservation's total from a date
// range and a nightly rate. Any sub-day remainder rounds up to a full
// night charged; non-positive ranges clamp to zero cost. The lifecycle
// layer rejects such ranges before billing ever happens.

use chrono::{DateTime, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 1000 * 3600 * 24;

/// Number of charged nights between two instants: ceiling of the
/// millisecond delta over one day. Negative when check-out precedes
/// check-in.
pub fn nights_between_instants(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> i64 {
    let delta_ms = (check_out - check_in).num_milliseconds();
    // Ceiling division. rem_euclid is non-negative for negative deltas,
    // so a partial day always rounds toward the next full night.
    delta_ms.div_euclid(MILLIS_PER_DAY) + i64::from(delta_ms.rem_euclid(MILLIS_PER_DAY) > 0)
}

/// Number of charged nights between two calendar dates.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Total cost for a stay: nights x nightly rate, clamped to zero for
/// non-positive ranges.
pub fn total_cost(check_in: NaiveDate, check_out: NaiveDate, nightly_rate: f64) -> f64 {
    cost_for_nights(nights_between(check_in, check_out), nightly_rate)
}

/// Instant-granularity variant of [`total_cost`].
pub fn total_cost_between_instants(
    check_in: DateTime<Utc>,
    check_out: DateTime<Utc>,
    nightly_rate: f64,
) -> f64 {
    cost_for_nights(nights_between_instants(check_in, check_out), nightly_rate)
}

fn cost_for_nights(nights: i64, nightly_rate: f64) -> f64 {
    if nights <= 0 {
        0.0
    } else {
        // Night counts are small; the f64 conversion is exact in practice.
        #[allow(clippy::cast_precision_loss)]
        {
            nights as f64 * nightly_rate
        }
    }
}

//! Uniform random timestamp sampling.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Sample a timestamp uniformly from the closed day interval
/// `[start, end]`, with uniform seconds-of-day jitter.
///
/// The day is drawn uniformly over the whole days of the interval, then up
/// to 86400 seconds of jitter are added (upper bound inclusive, so the last
/// day can spill one second into the following midnight). Callers must pass
/// `start <= end`.
pub fn sample_datetime<R: Rng>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDateTime {
    let span_days = (end - start).num_days();
    let day = start + Duration::days(rng.gen_range(0..=span_days));
    let jitter = rng.gen_range(0..=86_400i64);
    day.and_hms_opt(0, 0, 0).unwrap() + Duration::seconds(jitter)
}

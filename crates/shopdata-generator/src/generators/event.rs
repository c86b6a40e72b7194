//! Behavioral event generator.

use crate::generator::GeneratorError;
use crate::generators::timestamp::sample_datetime;
use chrono::NaiveDate;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use shopdata_core::{Channel, Device, Event, EventType};

/// Session tokens are drawn from `s1..=s150000`; collisions across events
/// are intended, sessions are shared by multiple events.
const SESSION_ID_SPACE: u64 = 150_000;

/// Generate `count` events with dense ids `1..=count`.
///
/// Customer and product ids are drawn uniformly from their dense ranges;
/// the event type follows the fixed weighted distribution
/// (view 0.55, click 0.30, add_to_cart 0.10, purchase 0.05).
pub fn generate_events<R: Rng>(
    rng: &mut R,
    customer_count: u64,
    product_count: u64,
    count: u64,
) -> Result<Vec<Event>, GeneratorError> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let event_type_idx = WeightedIndex::new(EventType::WEIGHTS)?;

    (1..=count)
        .map(|event_id| {
            Ok(Event {
                event_id,
                customer_id: rng.gen_range(1..=customer_count),
                product_id: rng.gen_range(1..=product_count),
                event_type: EventType::ALL[event_type_idx.sample(rng)],
                event_date: sample_datetime(rng, start, end),
                device: Device::ALL[rng.gen_range(0..Device::ALL.len())],
                channel: Channel::ALL[rng.gen_range(0..Channel::ALL.len())],
                session_id: format!("s{}", rng.gen_range(1..=SESSION_ID_SPACE)),
            })
        })
        .collect()
}

//! Event-stream to per-customer metric fold.

use chrono::NaiveDateTime;
use shopdata_core::{round2, CustomerMetric, Event, EventType};
use std::collections::HashMap;
use tracing::debug;

/// The event window spans 24 months; frequency_score is events per month.
const FREQUENCY_BUCKETS: f64 = 24.0;

/// Running per-customer counters while folding the event stream.
#[derive(Debug, Default, Clone)]
struct Accumulator {
    views: u64,
    clicks: u64,
    add_to_cart: u64,
    purchases: u64,
    last_activity: Option<NaiveDateTime>,
}

impl Accumulator {
    fn record(&mut self, event: &Event) {
        match event.event_type {
            EventType::View => self.views += 1,
            EventType::Click => self.clicks += 1,
            EventType::AddToCart => self.add_to_cart += 1,
            EventType::Purchase => self.purchases += 1,
        }

        if self.last_activity.is_none() || Some(event.event_date) > self.last_activity {
            self.last_activity = Some(event.event_date);
        }
    }
}

/// Fold the event collection into one metric record per customer id in
/// `1..=customer_count`, in ascending id order.
///
/// Customers without events get all-zero counters and no last activity
/// date. The fold is total over its input and idempotent: the same events
/// always produce the same metrics.
pub fn aggregate_customer_metrics(events: &[Event], customer_count: u64) -> Vec<CustomerMetric> {
    let mut stats: HashMap<u64, Accumulator> = HashMap::new();

    for event in events {
        stats.entry(event.customer_id).or_default().record(event);
    }
    debug!(
        "aggregated {} events over {} active customers",
        events.len(),
        stats.len()
    );

    (1..=customer_count)
        .map(|customer_id| {
            let acc = stats.remove(&customer_id).unwrap_or_default();
            let total_events = acc.views + acc.clicks + acc.add_to_cart + acc.purchases;
            CustomerMetric {
                customer_id,
                total_views: acc.views,
                total_clicks: acc.clicks,
                total_add_to_cart: acc.add_to_cart,
                total_purchases: acc.purchases,
                total_events,
                frequency_score: round2(total_events as f64 / FREQUENCY_BUCKETS),
                last_activity_date: acc.last_activity,
            }
        })
        .collect()
}

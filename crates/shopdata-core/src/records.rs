//! Record types for the five output collections.
//!
//! Field declaration order matches serialization order, so each JSONL line
//! carries the fields in a stable, predictable sequence.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cities a customer can be registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    Tunis,
    Sfax,
    Sousse,
    Bizerte,
    Nabeul,
    Ariana,
    Gabes,
}

impl City {
    /// All cities, in sampling order.
    pub const ALL: [City; 7] = [
        City::Tunis,
        City::Sfax,
        City::Sousse,
        City::Bizerte,
        City::Nabeul,
        City::Ariana,
        City::Gabes,
    ];
}

/// Product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Beauty,
    Sports,
    Books,
    Food,
}

impl Category {
    /// All categories, in sampling order.
    pub const ALL: [Category; 7] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Beauty,
        Category::Sports,
        Category::Books,
        Category::Food,
    ];

    /// Inclusive price bounds for products in this category.
    pub fn price_bounds(&self) -> (f64, f64) {
        match self {
            Category::Electronics => (200.0, 5000.0),
            Category::Fashion => (20.0, 500.0),
            Category::Home => (30.0, 1200.0),
            Category::Beauty => (10.0, 300.0),
            Category::Sports => (15.0, 800.0),
            Category::Books => (5.0, 120.0),
            Category::Food => (2.0, 80.0),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Beauty => "Beauty",
            Category::Sports => "Sports",
            Category::Books => "Books",
            Category::Food => "Food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Behavioral event kinds, ordered from most to least frequent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    View,
    Click,
    AddToCart,
    Purchase,
}

impl EventType {
    /// All event types, aligned index-for-index with [`EventType::WEIGHTS`].
    pub const ALL: [EventType; 4] = [
        EventType::View,
        EventType::Click,
        EventType::AddToCart,
        EventType::Purchase,
    ];

    /// Selection probabilities for the weighted categorical draw.
    pub const WEIGHTS: [f64; 4] = [0.55, 0.30, 0.10, 0.05];
}

/// Device an event originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    Mobile,
    Desktop,
    Tablet,
}

impl Device {
    pub const ALL: [Device; 3] = [Device::Mobile, Device::Desktop, Device::Tablet];
}

/// Acquisition channel an event was attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Google,
    Facebook,
    Instagram,
    Direct,
    Email,
}

impl Channel {
    pub const ALL: [Channel; 5] = [
        Channel::Google,
        Channel::Facebook,
        Channel::Instagram,
        Channel::Direct,
        Channel::Email,
    ];
}

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Dense id in `1..=customer_count`.
    pub customer_id: u64,
    pub age: u32,
    pub city: City,
    pub signup_date: NaiveDateTime,
}

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Dense id in `1..=product_count`.
    pub product_id: u64,
    pub category: Category,
    /// Category-bounded price, two decimal places.
    pub price: f64,
    pub name: String,
}

/// A completed sale.
///
/// `amount` is an independently sampled unit price times quantity; it is
/// deliberately not derived from the referenced product's catalog price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    pub sale_id: u64,
    /// Foreign key into the customer id range.
    pub customer_id: u64,
    /// Foreign key into the product id range.
    pub product_id: u64,
    pub quantity: u32,
    pub amount: f64,
    pub sale_date: NaiveDateTime,
}

/// A single behavioral event, the atomic unit consumed by aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub event_id: u64,
    /// Foreign key into the customer id range.
    pub customer_id: u64,
    /// Foreign key into the product id range.
    pub product_id: u64,
    pub event_type: EventType,
    pub event_date: NaiveDateTime,
    pub device: Device,
    pub channel: Channel,
    /// Session token; collisions across events are expected, sessions are
    /// shared by multiple events.
    pub session_id: String,
}

/// Per-customer summary derived from the full event collection.
///
/// Exactly one record exists for every customer id, including customers
/// with no events at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerMetric {
    pub customer_id: u64,
    pub total_views: u64,
    pub total_clicks: u64,
    pub total_add_to_cart: u64,
    pub total_purchases: u64,
    /// Always the sum of the four counters above.
    pub total_events: u64,
    /// `total_events / 24`, rounded to two decimals (events per month over
    /// the two-year window).
    pub frequency_score: f64,
    /// Latest event timestamp, or `None` for customers without events.
    pub last_activity_date: Option<NaiveDateTime>,
}

//! Customer record generator.

use crate::generators::timestamp::sample_datetime;
use chrono::NaiveDate;
use rand::Rng;
use shopdata_core::{City, Customer};

/// Signup dates fall in this window.
const SIGNUP_START: (i32, u32, u32) = (2022, 1, 1);
const SIGNUP_END: (i32, u32, u32) = (2024, 12, 31);

/// Generate `count` customers with dense ids `1..=count`.
///
/// Age is uniform over `[18, 65]`, city uniform over the fixed city set and
/// signup date uniform over 2022-2024.
pub fn generate_customers<R: Rng>(rng: &mut R, count: u64) -> Vec<Customer> {
    let start = NaiveDate::from_ymd_opt(SIGNUP_START.0, SIGNUP_START.1, SIGNUP_START.2).unwrap();
    let end = NaiveDate::from_ymd_opt(SIGNUP_END.0, SIGNUP_END.1, SIGNUP_END.2).unwrap();

    (1..=count)
        .map(|customer_id| Customer {
            customer_id,
            age: rng.gen_range(18..=65),
            city: City::ALL[rng.gen_range(0..City::ALL.len())],
            signup_date: sample_datetime(rng, start, end),
        })
        .collect()
}

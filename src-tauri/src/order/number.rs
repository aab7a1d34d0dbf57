use chrono::{NaiveDate, Utc};
use rand::Rng;

const SUFFIX_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const SUFFIX_LEN: usize = 6;

/// A fresh order number for today (UTC), e.g. `RD-20251018-7K2QXA`.
pub fn new_order_number() -> String {
    order_number_for(Utc::now().date_naive(), &mut rand::rng())
}

pub fn order_number_for(date: NaiveDate, rng: &mut impl Rng) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| SUFFIX_CHARS[rng.random_range(0..SUFFIX_CHARS.len())] as char)
        .collect();
    format!("RD-{}-{}", date.format("%Y%m%d"), suffix)
}

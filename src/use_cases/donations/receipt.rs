use argon2::password_hash::rand_core::{OsRng, RngCore};
use chrono::{DateTime, Utc};

pub fn receipt_prefix(year: i32) -> String {
    format!("RCP-{}-", year)
}

/// `RCP-{YYYY}-{NNNNNN}`, where the suffix is the 1-based position within the year.
pub fn format_receipt_number(year: i32, sequence: u64) -> String {
    format!("{}{:06}", receipt_prefix(year), sequence)
}

/// `TXN-{unix millis}-{16 hex chars}`.
pub fn generate_transaction_id(now: DateTime<Utc>) -> String {
    let mut random = [0u8; 8];
    OsRng.fill_bytes(&mut random);
    format!("TXN-{}-{}", now.timestamp_millis(), hex::encode_upper(random))
}

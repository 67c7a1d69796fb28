//! PNR (record locator) generation.

use rand::Rng;

use ridehub_core::result::AppResult;
use ridehub_entity::BookingStore;

const PNR_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const PNR_LEN: usize = 10;

/// Generate a random 10-character alphanumeric PNR.
pub fn generate_pnr() -> String {
    let mut rng = rand::rng();
    (0..PNR_LEN)
        .map(|_| PNR_CHARS[rng.random_range(0..PNR_CHARS.len())] as char)
        .collect()
}

/// Generate a PNR not already present in the booking store.
pub async fn generate_unique_pnr(store: &dyn BookingStore) -> AppResult<String> {
    let mut pnr = generate_pnr();
    while store.pnr_exists(&pnr).await? {
        pnr = generate_pnr();
    }
    Ok(pnr)
}

use super::record::HandRecord;
use super::store::Store;
use anyhow::Context;

/// Bulk JSON dump of every stored hand, dates as RFC 3339 text.
pub fn export_hands(store: &Store) -> anyhow::Result<String> {
    serde_json::to_string_pretty(store.hands()).context("exporting hands")
}

/// The inverse of [`export_hands`]: parse and save every record in the
/// dump. Records keep their ids, so re-importing an export overwrites in
/// place rather than duplicating.
pub fn import_hands(store: &mut Store, json: &str) -> anyhow::Result<usize> {
    let hands = serde_json::from_str::<Vec<HandRecord>>(json).context("parsing hand import")?;
    let count = hands.len();
    for hand in hands {
        store.save_hand(hand)?;
    }
    log::info!("imported {} hands", count);
    Ok(count)
}

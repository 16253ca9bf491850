use super::error::RecordEntryError;
use super::{FoodRecord, keys};
use crate::config::FoodConfig;
use crate::env::{ConfigOracle, ItemOracle};
use crate::error::FoodError;
use crate::state::{ActiveFood, ResourceId};
use crate::tracker::FoodTracker;

/// Encodes `tracker` into a fresh record.
///
/// Entries whose item is no longer registered are skipped and logged.
pub fn encode<I>(tracker: &FoodTracker, items: &I) -> FoodRecord
where
    I: ItemOracle + ?Sized,
{
    let mut record = FoodRecord::new();
    encode_into(tracker, items, &mut record);
    record
}

/// Encodes `tracker` into an existing record, overwriting a previous save.
///
/// Slot keys past the written count and drink keys without an active drink
/// are removed so a shrinking tracker leaves nothing stale behind.
pub fn encode_into<I>(tracker: &FoodTracker, items: &I, record: &mut FoodRecord)
where
    I: ItemOracle + ?Sized,
{
    record.put_int(keys::MAX_SLOTS, tracker.max_slots() as i32);

    let mut written = 0;
    for entry in tracker.slots() {
        if !items.is_registered(&entry.item) {
            report(RecordEntryError::Unregistered {
                key: keys::id(written),
                item: entry.item.to_string(),
            });
            continue;
        }
        record.put_string(keys::id(written), entry.item.to_string());
        record.put_int(keys::ticks(written), ticks_to_int(entry.ticks_remaining));
        written += 1;
    }
    let stale: Vec<String> = record
        .keys()
        .filter(|key| keys::slot_index(key).is_some_and(|index| index >= written))
        .map(str::to_owned)
        .collect();
    for key in &stale {
        record.remove(key);
    }
    record.put_int(keys::COUNT, written as i32);

    match tracker.drink() {
        Some(drink) if items.is_registered(&drink.item) => {
            record.put_string(keys::DRINK_ID, drink.item.to_string());
            record.put_int(keys::DRINK_TICKS, ticks_to_int(drink.ticks_remaining));
        }
        drink => {
            if let Some(drink) = drink {
                report(RecordEntryError::Unregistered {
                    key: keys::DRINK_ID.to_owned(),
                    item: drink.item.to_string(),
                });
            }
            record.remove(keys::DRINK_ID);
            record.remove(keys::DRINK_TICKS);
        }
    }
}

/// Rebuilds a tracker from a record.
///
/// A stored `MaxSlots` overrides `config`. Entries that fail to resolve are
/// skipped with a warning; the call itself never fails.
pub fn decode<C, I>(record: &FoodRecord, config: &C, items: &I) -> FoodTracker
where
    C: ConfigOracle + ?Sized,
    I: ItemOracle + ?Sized,
{
    let mut tracker = if record.contains_int(keys::MAX_SLOTS) {
        let stored = record.get_int(keys::MAX_SLOTS);
        let clamped = FoodConfig::clamp_slots(i64::from(stored));
        if i64::from(stored) != clamped as i64 {
            report(RecordEntryError::MaxSlotsOutOfRange { stored, clamped });
        }
        FoodTracker::with_max_slots(clamped)
    } else {
        FoodTracker::new(config)
    };

    // Every real entry needs its own key, so the key count bounds the scan.
    let stored = record.get_int(keys::COUNT);
    let count = usize::try_from(stored).unwrap_or(0);
    if count > record.len() {
        report(RecordEntryError::CountExceedsKeys {
            stored,
            keys: record.len(),
        });
    }
    for index in 0..count.min(record.len()) {
        let id_key = keys::id(index);
        let ticks_key = keys::ticks(index);
        let entry = match decode_entry(record, &id_key, &ticks_key, items) {
            Ok(entry) => entry,
            Err(error) => {
                report(error);
                continue;
            }
        };
        if !tracker.restore_slot(entry) {
            report(RecordEntryError::OverCapacity {
                key: id_key,
                max_slots: tracker.max_slots(),
            });
        }
    }

    if record.contains_string(keys::DRINK_ID) {
        match decode_entry(record, keys::DRINK_ID, keys::DRINK_TICKS, items) {
            Ok(drink) => tracker.restore_drink(drink),
            Err(error) => report(error),
        }
    }

    tracker.finish_restore();
    tracker
}

fn decode_entry<I>(
    record: &FoodRecord,
    id_key: &str,
    ticks_key: &str,
    items: &I,
) -> Result<ActiveFood, RecordEntryError>
where
    I: ItemOracle + ?Sized,
{
    let raw = record.get_string(id_key);
    if raw.is_empty() {
        return Err(RecordEntryError::EmptyId {
            key: id_key.to_owned(),
        });
    }
    let item: ResourceId = raw.parse().map_err(|source| RecordEntryError::InvalidId {
        key: id_key.to_owned(),
        raw: raw.to_owned(),
        source,
    })?;
    if !items.is_registered(&item) {
        return Err(RecordEntryError::Unregistered {
            key: id_key.to_owned(),
            item: item.to_string(),
        });
    }

    let ticks = record.get_int(ticks_key);
    if ticks < 0 {
        report(RecordEntryError::NegativeTicks {
            key: ticks_key.to_owned(),
            ticks,
        });
    }
    Ok(ActiveFood::new(item, ticks.max(0) as u32))
}

fn ticks_to_int(ticks: u32) -> i32 {
    i32::try_from(ticks).unwrap_or(i32::MAX)
}

fn report(error: RecordEntryError) {
    tracing::warn!(
        code = error.error_code(),
        severity = error.severity().as_str(),
        "{error}"
    );
}

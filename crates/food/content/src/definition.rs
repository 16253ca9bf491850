//! Parser for pipe-delimited food definition strings.
//!
//! ```text
//! itemId|durationTicks|hearts|regenPerTick[|effectId:durationFraction:amplifier]*
//! ```
//!
//! A malformed entry is dropped; a malformed or unknown effect is dropped
//! while its food is kept. Nothing here aborts a whole list.

use std::num::{ParseFloatError, ParseIntError};

use food_core::{
    EffectOracle, EffectSpec, ErrorSeverity, FoodDefinition, FoodError, FoodOracle,
    FoodTableSnapshot, ResourceId, ResourceIdError,
};

const FIELD_SEPARATOR: char = '|';
const EFFECT_SEPARATOR: char = ':';
const REQUIRED_FIELDS: usize = 4;

/// Reasons a definition string (or one of its effect parts) is dropped.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum FoodEntryError {
    #[error("expected at least 4 '|'-separated fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid item id {raw:?}: {source}")]
    InvalidItem {
        raw: String,
        #[source]
        source: ResourceIdError,
    },

    #[error("invalid duration {raw:?}: {source}")]
    InvalidDuration {
        raw: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid {field} {raw:?}: {source}")]
    InvalidNumber {
        field: &'static str,
        raw: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field} {raw:?} is not finite")]
    NonFinite { field: &'static str, raw: String },

    #[error("invalid effect {raw:?}, expected effectId:durationFraction:amplifier")]
    InvalidEffect { raw: String },

    #[error("unknown effect {effect_id}")]
    UnknownEffect { effect_id: ResourceId },
}

impl FoodError for FoodEntryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidEffect { .. } | Self::UnknownEffect { .. } => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooFewFields { .. } => "FOOD_ENTRY_TOO_FEW_FIELDS",
            Self::InvalidItem { .. } => "FOOD_ENTRY_INVALID_ITEM",
            Self::InvalidDuration { .. } => "FOOD_ENTRY_INVALID_DURATION",
            Self::InvalidNumber { .. } => "FOOD_ENTRY_INVALID_NUMBER",
            Self::NonFinite { .. } => "FOOD_ENTRY_NON_FINITE",
            Self::InvalidEffect { .. } => "FOOD_ENTRY_INVALID_EFFECT",
            Self::UnknownEffect { .. } => "FOOD_ENTRY_UNKNOWN_EFFECT",
        }
    }
}

/// Parses one definition string.
///
/// Effect parts that fail are logged and skipped; the returned definition
/// keeps the rest.
pub fn parse_food_entry<E>(entry: &str, effects: &E) -> Result<FoodDefinition, FoodEntryError>
where
    E: EffectOracle + ?Sized,
{
    let fields: Vec<&str> = entry.split(FIELD_SEPARATOR).map(str::trim).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(FoodEntryError::TooFewFields {
            found: fields.len(),
        });
    }

    let item: ResourceId = fields[0]
        .parse()
        .map_err(|source| FoodEntryError::InvalidItem {
            raw: fields[0].to_owned(),
            source,
        })?;
    let duration_ticks: i64 =
        fields[1]
            .parse()
            .map_err(|source| FoodEntryError::InvalidDuration {
                raw: fields[1].to_owned(),
                source,
            })?;
    let hearts = parse_number("hearts", fields[2])?;
    let regen = parse_number("regen", fields[3])?;

    let extra_effects = fields[REQUIRED_FIELDS..]
        .iter()
        .filter(|part| !part.is_empty())
        .filter_map(|part| match parse_effect(part, effects) {
            Ok(spec) => Some(spec),
            Err(error) => {
                tracing::warn!(
                    code = error.error_code(),
                    %item,
                    "dropping effect from food entry: {error}"
                );
                None
            }
        })
        .collect();

    Ok(FoodDefinition::new(
        item,
        duration_ticks,
        hearts,
        regen,
        extra_effects,
    ))
}

/// Parses a list of definition strings into a table.
///
/// Bad entries are logged and skipped. A later entry for the same item
/// replaces an earlier one.
pub fn parse_food_entries<I, S, E>(entries: I, effects: &E) -> FoodTableSnapshot
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    E: EffectOracle + ?Sized,
{
    let mut table = FoodTableSnapshot::new();
    for entry in entries {
        let entry = entry.as_ref();
        match parse_food_entry(entry, effects) {
            Ok(definition) => {
                if let Some(previous) = table.insert(definition) {
                    tracing::warn!(item = %previous.item(), "duplicate food entry, keeping the later one");
                }
            }
            Err(error) => {
                tracing::warn!(
                    code = error.error_code(),
                    severity = error.severity().as_str(),
                    entry,
                    "skipping food entry: {error}"
                );
            }
        }
    }
    tracing::info!("parsed {} food entries", table.len());
    table
}

/// `effectId:durationFraction:amplifier`, split from the right so the id
/// may carry its own namespace.
fn parse_effect<E>(part: &str, effects: &E) -> Result<EffectSpec, FoodEntryError>
where
    E: EffectOracle + ?Sized,
{
    let invalid = || FoodEntryError::InvalidEffect {
        raw: part.to_owned(),
    };

    let mut pieces = part.rsplitn(3, EFFECT_SEPARATOR);
    let (Some(amplifier), Some(fraction), Some(effect_id)) =
        (pieces.next(), pieces.next(), pieces.next())
    else {
        return Err(invalid());
    };

    let effect_id: ResourceId = effect_id.trim().parse().map_err(|_| invalid())?;
    let fraction: f32 = fraction.trim().parse().map_err(|_| invalid())?;
    let amplifier: i64 = amplifier.trim().parse().map_err(|_| invalid())?;
    if !fraction.is_finite() {
        return Err(invalid());
    }

    let handle = effects
        .resolve(&effect_id)
        .ok_or_else(|| FoodEntryError::UnknownEffect {
            effect_id: effect_id.clone(),
        })?;
    Ok(EffectSpec::new(effect_id, handle, fraction, amplifier))
}

fn parse_number(field: &'static str, raw: &str) -> Result<f32, FoodEntryError> {
    let value: f32 = raw.parse().map_err(|source| FoodEntryError::InvalidNumber {
        field,
        raw: raw.to_owned(),
        source,
    })?;
    if !value.is_finite() {
        return Err(FoodEntryError::NonFinite {
            field,
            raw: raw.to_owned(),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use food_core::{EffectHandle, EffectRegistrySnapshot};

    use super::*;
    use crate::DEFAULT_FOOD_PROPERTIES;

    fn id(s: &str) -> ResourceId {
        s.parse().unwrap()
    }

    fn effects() -> EffectRegistrySnapshot {
        EffectRegistrySnapshot::new()
            .with(id("regeneration"), EffectHandle(10))
            .with(id("absorption"), EffectHandle(22))
            .with(id("resistance"), EffectHandle(11))
            .with(id("fire_resistance"), EffectHandle(12))
    }

    #[test]
    fn parses_basic_entry() {
        let def = parse_food_entry(" minecraft:cooked_beef | 1800 | 8.0 | 0.025 ", &effects()).unwrap();

        assert_eq!(def.item(), &id("cooked_beef"));
        assert_eq!(def.duration_ticks(), 1800);
        assert_eq!(def.health_bonus(), 8.0);
        assert_eq!(def.regen_per_tick(), 0.025);
        assert!(def.extra_effects().is_empty());
    }

    #[test]
    fn parses_namespaced_effects() {
        let def = parse_food_entry(
            "minecraft:golden_apple|2400|4.0|0.05|minecraft:regeneration:1.0:1|absorption:0.5:0",
            &effects(),
        )
        .unwrap();

        let specs = def.extra_effects();
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].effect_id, id("regeneration"));
        assert_eq!(specs[0].handle, EffectHandle(10));
        assert_eq!(specs[0].amplifier, 1);
        assert_eq!(specs[1].effect_id, id("absorption"));
        assert_eq!(specs[1].duration_fraction, 0.5);
    }

    #[test]
    fn bad_effects_are_dropped_but_food_kept() {
        let def = parse_food_entry(
            "minecraft:golden_apple|2400|4|0.05|minecraft:levitation:1.0:0|regeneration:x:1|nonsense|absorption:1.0:0",
            &effects(),
        )
        .unwrap();

        let ids: Vec<_> = def.extra_effects().iter().map(|s| s.effect_id.clone()).collect();
        assert_eq!(ids, vec![id("absorption")]);
    }

    #[test]
    fn rejects_malformed_entries() {
        let effects = effects();
        assert_eq!(
            parse_food_entry("minecraft:apple|600|4", &effects),
            Err(FoodEntryError::TooFewFields { found: 3 })
        );
        assert!(matches!(
            parse_food_entry("Minecraft:Apple|600|4|0.005", &effects),
            Err(FoodEntryError::InvalidItem { .. })
        ));
        assert!(matches!(
            parse_food_entry("minecraft:apple|ten|4|0.005", &effects),
            Err(FoodEntryError::InvalidDuration { .. })
        ));
        assert!(matches!(
            parse_food_entry("minecraft:apple|600|four|0.005", &effects),
            Err(FoodEntryError::InvalidNumber { field: "hearts", .. })
        ));
        assert!(matches!(
            parse_food_entry("minecraft:apple|600|4|inf", &effects),
            Err(FoodEntryError::NonFinite { field: "regen", .. })
        ));
    }

    #[test]
    fn list_skips_bad_entries_and_keeps_last_duplicate() {
        let table = parse_food_entries(
            [
                "minecraft:apple|600|4|0.005",
                "garbage",
                "minecraft:apple|900|5|0.01",
                "minecraft:bread|1200|5|0.005",
            ],
            &effects(),
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.definition(&id("apple")).unwrap().duration_ticks(), 900);
    }

    #[test]
    fn default_list_parses_completely() {
        let table = parse_food_entries(DEFAULT_FOOD_PROPERTIES, &effects());

        assert_eq!(table.len(), DEFAULT_FOOD_PROPERTIES.len());
        let golden = table.definition(&id("enchanted_golden_apple")).unwrap();
        assert_eq!(golden.extra_effects().len(), 4);
    }
}

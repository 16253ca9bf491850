use crate::ResourceId;

/// Host item registry as seen by the tracker.
pub trait ItemOracle: Send + Sync {
    /// True if the identifier names a real, currently registered item
    /// (never the registry's empty/air placeholder).
    fn is_registered(&self, item: &ResourceId) -> bool;

    /// Animation played while the item is consumed.
    fn use_animation(&self, item: &ResourceId) -> UseAnim;

    /// True if the item carries a nutrition component or is one of the
    /// host's special edible cases (e.g. cake).
    ///
    /// Drinks are food-like regardless; see [`ItemOracle::is_food_like`].
    fn has_nutrition(&self, item: &ResourceId) -> bool;

    /// Items the tracker may consider at all: nutrition carriers and drinks.
    fn is_food_like(&self, item: &ResourceId) -> bool {
        self.has_nutrition(item) || self.use_animation(item).is_drink()
    }
}

/// Consumption animation of an item.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum UseAnim {
    #[default]
    None,
    Eat,
    Drink,
    Block,
    Bow,
    Spear,
    Crossbow,
    Spyglass,
    TootHorn,
    Brush,
}

impl UseAnim {
    pub const fn is_drink(self) -> bool {
        matches!(self, Self::Drink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_anim_parses_case_insensitively() {
        assert_eq!("drink".parse::<UseAnim>(), Ok(UseAnim::Drink));
        assert_eq!("EAT".parse::<UseAnim>(), Ok(UseAnim::Eat));
        assert_eq!("toot_horn".parse::<UseAnim>(), Ok(UseAnim::TootHorn));
        assert!("slurp".parse::<UseAnim>().is_err());
        assert_eq!(UseAnim::Drink.to_string(), "drink");
    }
}

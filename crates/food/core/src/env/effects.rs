use crate::ResourceId;

/// Resolves status-effect identifiers to host handles.
///
/// Only consulted while a definition table is being built; trackers never
/// resolve effects at runtime.
pub trait EffectOracle: Send + Sync {
    fn resolve(&self, effect_id: &ResourceId) -> Option<EffectHandle>;
}

/// Opaque reference to a status effect registered in the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectHandle(pub u32);

//! Move records

use super::elemental::Type;

/// Move details as fetched from the reference data.
///
/// Power, accuracy, and PP are absent for moves where the concept does not
/// apply (status moves, one-hit KO moves). The effect text may carry a
/// `$effect_chance` placeholder for `effect_chance` to fill at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub name: String,
    pub kind: Option<Type>,
    pub damage_class: String,
    pub power: Option<u32>,
    pub accuracy: Option<u32>,
    pub pp: Option<u32>,
    pub effect: Option<String>,
    pub effect_chance: Option<u32>,
}

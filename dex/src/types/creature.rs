//! Creature records and base stats

use serde::Serialize;

use super::elemental::Type;

/// Base stat block (fixed per species, never mutated)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

/// A creature as fetched from the reference data.
///
/// Immutable once constructed; identified by lower-cased name or numeric id.
/// Serializable so the hosting layer can expose direct lookups as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Creature {
    pub name: String,
    pub id: u32,
    /// Elemental types in slot order (1 or 2)
    pub types: Vec<Type>,
    pub abilities: Vec<String>,
    pub stats: BaseStats,
    pub sprite: Option<String>,
    /// Height in decimetres, as reported by the reference data
    pub height: u32,
    /// Weight in hectograms, as reported by the reference data
    pub weight: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creature_serializes_with_lowercase_types() {
        let creature = Creature {
            name: "pikachu".to_string(),
            id: 25,
            types: vec![Type::Electric],
            abilities: vec!["static".to_string()],
            stats: BaseStats { hp: 35, atk: 55, def: 40, spa: 50, spd: 50, spe: 90 },
            sprite: None,
            height: 4,
            weight: 60,
        };

        let json = serde_json::to_value(&creature).unwrap();
        assert_eq!(json["name"], "pikachu");
        assert_eq!(json["id"], 25);
        assert_eq!(json["types"][0], "electric");
        assert_eq!(json["stats"]["spe"], 90);
    }
}

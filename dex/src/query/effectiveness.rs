//! Damage-multiplier aggregation across a creature's own types

use std::cmp::Ordering;

use crate::types::{Type, TypeRecord};

/// Attacking types partitioned by their aggregate multiplier against a
/// defender: weaknesses (>1, descending), resistances (0<m<1, ascending),
/// immunities (0, unordered).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Effectiveness {
    pub weaknesses: Vec<(Type, f32)>,
    pub resistances: Vec<(Type, f32)>,
    pub immunities: Vec<Type>,
}

/// Aggregate damage multipliers for a creature with the given type records
/// (one per own type, so 1 or 2 in practice).
///
/// Every attacking type starts at ×1; each own type's relations multiply in
/// (×2 double, ×0.5 half, ×0 none). Multipliers compose multiplicatively
/// across the own types, which reproduces dual-type interactions: a shared
/// double-damage entry yields ×4.
pub fn effectiveness(own_types: &[TypeRecord]) -> Effectiveness {
    let mut multipliers = [1.0f32; Type::ALL.len()];

    for record in own_types {
        for attacker in &record.double_damage_from {
            multipliers[*attacker as usize] *= 2.0;
        }
        for attacker in &record.half_damage_from {
            multipliers[*attacker as usize] *= 0.5;
        }
        for attacker in &record.no_damage_from {
            multipliers[*attacker as usize] *= 0.0;
        }
    }

    let mut result = Effectiveness::default();
    for attacker in Type::ALL {
        let multiplier = multipliers[attacker as usize];
        if multiplier == 0.0 {
            result.immunities.push(attacker);
        } else if multiplier > 1.0 {
            result.weaknesses.push((attacker, multiplier));
        } else if multiplier < 1.0 {
            result.resistances.push((attacker, multiplier));
        }
    }

    result
        .weaknesses
        .sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    result
        .resistances
        .sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        name: Type,
        double: &[Type],
        half: &[Type],
        none: &[Type],
    ) -> TypeRecord {
        TypeRecord {
            name,
            double_damage_from: double.to_vec(),
            half_damage_from: half.to_vec(),
            no_damage_from: none.to_vec(),
        }
    }

    // Relations below mirror the published damage chart for the types involved.

    fn ghost() -> TypeRecord {
        record(
            Type::Ghost,
            &[Type::Ghost, Type::Dark],
            &[Type::Poison, Type::Bug],
            &[Type::Normal, Type::Fighting],
        )
    }

    fn ground() -> TypeRecord {
        record(
            Type::Ground,
            &[Type::Water, Type::Grass, Type::Ice],
            &[Type::Poison, Type::Rock],
            &[Type::Electric],
        )
    }

    fn water() -> TypeRecord {
        record(
            Type::Water,
            &[Type::Electric, Type::Grass],
            &[Type::Fire, Type::Water, Type::Ice, Type::Steel],
            &[],
        )
    }

    fn flying() -> TypeRecord {
        record(
            Type::Flying,
            &[Type::Electric, Type::Ice, Type::Rock],
            &[Type::Grass, Type::Fighting, Type::Bug],
            &[Type::Ground],
        )
    }

    #[test]
    fn test_partitions_cover_all_types_exactly_once() {
        for own in [vec![ghost()], vec![ground()], vec![water(), flying()]] {
            let eff = effectiveness(&own);

            let mut seen: Vec<Type> = eff.weaknesses.iter().map(|(t, _)| *t).collect();
            seen.extend(eff.resistances.iter().map(|(t, _)| *t));
            seen.extend(eff.immunities.iter().copied());

            // Neutral (×1) types are the remainder; the partitions themselves
            // must be disjoint and inside the 18-type universe.
            let mut deduped = seen.clone();
            deduped.sort_by_key(|t| *t as u8);
            deduped.dedup();
            assert_eq!(seen.len(), deduped.len(), "partitions overlap");
            assert!(seen.len() <= Type::ALL.len());
            for t in &seen {
                assert!(Type::ALL.contains(t));
            }
        }
    }

    #[test]
    fn test_neutral_types_complete_the_universe() {
        let eff = effectiveness(&[ground()]);
        let partitioned = eff.weaknesses.len() + eff.resistances.len() + eff.immunities.len();
        // 3 weak + 2 resist + 1 immune for pure Ground; the other 12 are neutral
        assert_eq!(partitioned, 6);
        assert_eq!(Type::ALL.len() - partitioned, 12);
    }

    #[test]
    fn test_single_type_multipliers() {
        let eff = effectiveness(&[ghost()]);

        assert!(eff.weaknesses.contains(&(Type::Ghost, 2.0)));
        assert!(eff.weaknesses.contains(&(Type::Dark, 2.0)));
        assert!(eff.resistances.contains(&(Type::Poison, 0.5)));
        assert!(eff.immunities.contains(&Type::Normal));
        assert!(eff.immunities.contains(&Type::Fighting));
    }

    #[test]
    fn test_dual_type_shared_weakness_composes_to_4x() {
        // Water and Flying are both weak to Electric
        let eff = effectiveness(&[water(), flying()]);

        assert!(eff.weaknesses.contains(&(Type::Electric, 4.0)));
        // and the 4x entry sorts ahead of plain 2x entries
        assert_eq!(eff.weaknesses.first(), Some(&(Type::Electric, 4.0)));
    }

    #[test]
    fn test_dual_type_weakness_cancelled_by_resistance() {
        // Flying is weak to Ice, Water resists it: 2 * 0.5 = neutral
        let eff = effectiveness(&[water(), flying()]);

        assert!(!eff.weaknesses.iter().any(|(t, _)| *t == Type::Ice));
        assert!(!eff.resistances.iter().any(|(t, _)| *t == Type::Ice));
    }

    #[test]
    fn test_immunity_wins_over_weakness() {
        // Ground is immune to Electric even when paired with Water (weak to it)
        let eff = effectiveness(&[water(), ground()]);

        assert!(eff.immunities.contains(&Type::Electric));
        assert!(!eff.weaknesses.iter().any(|(t, _)| *t == Type::Electric));
    }

    #[test]
    fn test_quarter_resistance_sorts_first() {
        // Bug is halved by both own types, Grass by only one
        let a = record(Type::Fire, &[], &[Type::Bug], &[]);
        let b = record(Type::Flying, &[], &[Type::Bug, Type::Grass], &[]);
        let eff = effectiveness(&[a, b]);

        assert_eq!(eff.resistances.first(), Some(&(Type::Bug, 0.25)));
        assert!(eff.resistances.contains(&(Type::Grass, 0.5)));
    }

    #[test]
    fn test_no_own_types_is_all_neutral() {
        let eff = effectiveness(&[]);
        assert!(eff.weaknesses.is_empty());
        assert!(eff.resistances.is_empty());
        assert!(eff.immunities.is_empty());
    }
}

//! Wire payloads for the reference-data service and their conversions into
//! domain records.
//!
//! The remote JSON is mirrored just closely enough to pull out what the
//! records need; everything else is ignored. Relation or slot entries naming
//! a type tag outside the closed 18-type set are dropped during conversion.

use serde::Deserialize;

use rotom_dex::{BaseStats, Creature, EvolutionNode, Move, Species, Type, TypeRecord};

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ResourceRef {
    url: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreaturePayload {
    name: String,
    id: u32,
    height: u32,
    weight: u32,
    types: Vec<TypeSlot>,
    abilities: Vec<AbilitySlot>,
    stats: Vec<StatSlot>,
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    slot: u32,
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct AbilitySlot {
    ability: NamedResource,
}

#[derive(Debug, Deserialize)]
struct StatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
}

impl CreaturePayload {
    pub(crate) fn into_record(mut self) -> Creature {
        self.types.sort_by_key(|entry| entry.slot);

        let mut stats = BaseStats::default();
        for entry in &self.stats {
            match entry.stat.name.as_str() {
                "hp" => stats.hp = entry.base_stat,
                "attack" => stats.atk = entry.base_stat,
                "defense" => stats.def = entry.base_stat,
                "special-attack" => stats.spa = entry.base_stat,
                "special-defense" => stats.spd = entry.base_stat,
                "speed" => stats.spe = entry.base_stat,
                _ => {}
            }
        }

        Creature {
            name: self.name,
            id: self.id,
            types: self
                .types
                .iter()
                .filter_map(|entry| Type::from_name(&entry.kind.name))
                .collect(),
            abilities: self
                .abilities
                .into_iter()
                .map(|entry| entry.ability.name)
                .collect(),
            stats,
            sprite: self.sprites.front_default,
            height: self.height,
            weight: self.weight,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpeciesPayload {
    name: String,
    evolution_chain: ResourceRef,
}

impl SpeciesPayload {
    pub(crate) fn into_record(self) -> Species {
        Species {
            name: self.name,
            evolution_chain_url: self.evolution_chain.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TypePayload {
    name: String,
    damage_relations: DamageRelations,
}

#[derive(Debug, Deserialize)]
struct DamageRelations {
    double_damage_from: Vec<NamedResource>,
    half_damage_from: Vec<NamedResource>,
    no_damage_from: Vec<NamedResource>,
}

impl TypePayload {
    /// None when the fetched type itself is outside the known 18-type set.
    pub(crate) fn into_record(self) -> Option<TypeRecord> {
        let name = Type::from_name(&self.name)?;
        Some(TypeRecord {
            name,
            double_damage_from: known_types(self.damage_relations.double_damage_from),
            half_damage_from: known_types(self.damage_relations.half_damage_from),
            no_damage_from: known_types(self.damage_relations.no_damage_from),
        })
    }
}

fn known_types(entries: Vec<NamedResource>) -> Vec<Type> {
    entries
        .iter()
        .filter_map(|entry| Type::from_name(&entry.name))
        .collect()
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChainPayload {
    chain: ChainLink,
}

#[derive(Debug, Deserialize)]
struct ChainLink {
    species: NamedResource,
    evolves_to: Vec<ChainLink>,
}

impl ChainPayload {
    pub(crate) fn into_record(self) -> EvolutionNode {
        self.chain.into_node()
    }
}

impl ChainLink {
    fn into_node(self) -> EvolutionNode {
        EvolutionNode {
            species: self.species.name,
            evolves_to: self
                .evolves_to
                .into_iter()
                .map(ChainLink::into_node)
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovePayload {
    name: String,
    #[serde(default)]
    power: Option<u32>,
    #[serde(default)]
    accuracy: Option<u32>,
    #[serde(default)]
    pp: Option<u32>,
    #[serde(default)]
    effect_chance: Option<u32>,
    #[serde(rename = "type")]
    kind: NamedResource,
    damage_class: NamedResource,
    #[serde(default)]
    effect_entries: Vec<EffectEntry>,
}

#[derive(Debug, Deserialize)]
struct EffectEntry {
    short_effect: String,
    language: NamedResource,
}

impl MovePayload {
    pub(crate) fn into_record(self) -> Move {
        let effect = self
            .effect_entries
            .into_iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.short_effect);

        Move {
            name: self.name,
            kind: Type::from_name(&self.kind.name),
            damage_class: self.damage_class.name,
            power: self.power,
            accuracy: self.accuracy,
            pp: self.pp,
            effect,
            effect_chance: self.effect_chance,
        }
    }
}

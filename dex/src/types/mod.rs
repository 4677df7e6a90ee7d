//! Normalized record types shared across the workspace

mod creature;
mod elemental;
mod moves;
mod species;

pub use creature::{BaseStats, Creature};
pub use elemental::{Type, TypeRecord};
pub use moves::Move;
pub use species::{EvolutionNode, Species};

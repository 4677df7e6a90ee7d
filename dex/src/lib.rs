//! Creature domain types and derived-fact computation.
//!
//! This crate holds the normalized records the rest of the workspace works
//! with, plus the two pure computation engines built on top of them.
//!
//! # Overview
//!
//! `rotom-dex` sits between `rotom-client` (remote data) and `rotom-bot`
//! (rendering and orchestration):
//!
//! ```text
//! rotom-client (remote JSON → records)
//!        │
//!        ▼
//! rotom-dex (domain types + computation) ← THIS CRATE
//!        │
//!        └─> rotom-bot (rendering, per-intent orchestration)
//! ```
//!
//! # Main Types
//!
//! ## Records
//! - [`Type`] - the closed set of 18 elemental types
//! - [`TypeRecord`] - one type's damage relations, as fetched
//! - [`Creature`] - identity, types, abilities, base stats
//! - [`Species`] - species identity plus its evolution-chain reference
//! - [`EvolutionNode`] - one node of a branching evolution tree
//! - [`Move`] - move details (power, accuracy, PP, effect text)
//!
//! ## Computation
//! - [`query::effectiveness`] - aggregate damage multipliers across a
//!   creature's own types
//! - [`query::lineages`] - flatten an evolution tree into root-to-leaf paths

pub mod query;
pub mod types;

pub use types::{BaseStats, Creature, EvolutionNode, Move, Species, Type, TypeRecord};
